use crate::error::Result;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Lists candidate files under a root directory.
pub struct FileEnumerator {
    root: PathBuf,
}

impl FileEnumerator {
    pub fn new(root: impl Into<PathBuf>) -> Self { Self { root: root.into() } }

    pub fn root(&self) -> &Path { &self.root }

    /// Every non-directory entry under the root in lexical order, the root
    /// itself included when it is a file. The first traversal error aborts
    /// the whole walk.
    pub fn enumerate(&self) -> Result<Vec<PathBuf>> {
        let mut paths = Vec::new();
        let walker = WalkDir::new(&self.root).follow_links(false).sort_by_file_name();
        for item in walker {
            let entry = item?;
            if !entry.file_type().is_dir() {
                paths.push(entry.into_path());
            }
        }
        Ok(paths)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ErrorCode, SearchError};
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn walks_recursively_in_lexical_order() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir_all(tmp.path().join("b/nested")).unwrap();
        fs::create_dir_all(tmp.path().join("a")).unwrap();
        fs::write(tmp.path().join("z.txt"), "z").unwrap();
        fs::write(tmp.path().join("a/one.txt"), "1").unwrap();
        fs::write(tmp.path().join("b/nested/two.txt"), "2").unwrap();

        let files = FileEnumerator::new(tmp.path()).enumerate().unwrap();
        let rel: Vec<_> = files.iter().map(|p| p.strip_prefix(tmp.path()).unwrap().to_path_buf()).collect();
        assert_eq!(
            rel,
            vec![PathBuf::from("a/one.txt"), PathBuf::from("b/nested/two.txt"), PathBuf::from("z.txt")]
        );
    }

    #[test]
    fn file_root_yields_itself() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("only.txt");
        fs::write(&file, "x").unwrap();
        assert_eq!(FileEnumerator::new(&file).enumerate().unwrap(), vec![file]);
    }

    #[test]
    fn missing_root_is_a_traversal_error() {
        let tmp = TempDir::new().unwrap();
        let err = FileEnumerator::new(tmp.path().join("nope")).enumerate().unwrap_err();
        assert!(matches!(err, SearchError::Traversal { code: ErrorCode::WalkFailed, .. }));
        assert!(err.is_fatal());
    }
}
