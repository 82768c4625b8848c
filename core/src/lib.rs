pub mod config;
pub mod detection;
pub mod enumerate;
pub mod error;
pub mod logger;
pub mod r#match;
pub mod render;
pub mod report;
pub mod scan;

use config::SearchConfig;
use detection::Detector;
use enumerate::FileEnumerator;
use error::{ErrorCode, Result, SearchError};
use logger::Logger;
use r#match::Query;
use rayon::prelude::*;
use report::Report;
use scan::MatchRecord;

use std::path::{Path, PathBuf};

/// Outcome of probing and scanning one candidate path.
enum FileOutcome {
    Skipped,
    Scanned(Vec<MatchRecord>),
    Failed(SearchError),
}

pub struct FuzzySearch {
    config: SearchConfig,
    logger: Logger,
}

impl FuzzySearch {
    pub fn new(config: SearchConfig, logger: Logger) -> Self { Self { config, logger } }

    pub fn config(&self) -> &SearchConfig { &self.config }

    /// Walks the root, scans every text file, and groups the hits.
    ///
    /// # Errors
    ///
    /// Fails on invalid configuration or when the walk itself fails. A file
    /// that cannot be read is logged and skipped.
    pub fn run(&self) -> Result<Report> {
        self.config.validate()?;
        let candidates = self.enumerate()?;
        let outcomes = self.scan_all(&candidates)?;

        let mut records = Vec::new();
        let (mut scanned, mut skipped, mut failed) = (0usize, 0usize, 0usize);
        for (path, outcome) in candidates.iter().zip(outcomes) {
            match outcome {
                FileOutcome::Skipped => {
                    skipped += 1;
                    self.logger.info("detect", "skip_non_text", &path.display().to_string());
                }
                FileOutcome::Scanned(hits) => {
                    scanned += 1;
                    records.extend(hits);
                }
                FileOutcome::Failed(err) => {
                    failed += 1;
                    self.logger.error("scan", "read_failed", &err.to_string());
                }
            }
        }

        let report = Report::from_records(records);
        self.logger.info(
            "search",
            "summary",
            &format!(
                "scanned={scanned}, skipped={skipped}, failed={failed}, files_matched={}, matches={}",
                report.groups().len(),
                report.record_count()
            ),
        );
        Ok(report)
    }

    fn enumerate(&self) -> Result<Vec<PathBuf>> {
        let enumerator = FileEnumerator::new(self.config.root.clone());
        self.logger.info("walk", "start", &format!("root={}", enumerator.root().display()));
        let files = enumerator.enumerate()?;
        self.logger.info("walk", "done", &format!("candidates={}", files.len()));
        Ok(files)
    }

    /// One outcome per candidate, in candidate order. With more than one job
    /// the files are spread over a bounded pool; the ordered collect keeps
    /// the result identical to a sequential run.
    fn scan_all(&self, candidates: &[PathBuf]) -> Result<Vec<FileOutcome>> {
        let detector = Detector::new();
        let query = &self.config.query;
        if self.config.jobs <= 1 {
            return Ok(candidates.iter().map(|p| process_file(&detector, p, query)).collect());
        }
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.config.jobs)
            .build()
            .map_err(|e| SearchError::Config {
                code: ErrorCode::InvalidConfig,
                field: "jobs".to_string(),
                value: self.config.jobs.to_string(),
                reason: e.to_string(),
            })?;
        Ok(pool.install(|| candidates.par_iter().map(|p| process_file(&detector, p, query)).collect()))
    }
}

fn process_file(detector: &Detector, path: &Path, query: &Query) -> FileOutcome {
    if !detector.is_text(path) {
        return FileOutcome::Skipped;
    }
    match scan::scan_file(path, query) {
        Ok(records) => FileOutcome::Scanned(records),
        Err(err) => FileOutcome::Failed(err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[cfg(unix)]
    #[test]
    fn dangling_text_link_fails_to_open() {
        let tmp = TempDir::new().unwrap();
        let link = tmp.path().join("b.txt");
        std::os::unix::fs::symlink(tmp.path().join("nowhere.txt"), &link).unwrap();

        match process_file(&Detector::new(), &link, &Query::new("cat")) {
            FileOutcome::Failed(err) => {
                assert_eq!(err.code(), &ErrorCode::FileOpenFailed);
                assert!(!err.is_fatal());
            }
            _ => panic!("expected an open failure for {}", link.display()),
        }
    }

    #[test]
    fn binary_file_is_skipped() {
        let tmp = TempDir::new().unwrap();
        let blob = tmp.path().join("blob.dat");
        fs::write(&blob, b"\x00cat\x00").unwrap();
        assert!(matches!(process_file(&Detector::new(), &blob, &Query::new("cat")), FileOutcome::Skipped));
    }
}
