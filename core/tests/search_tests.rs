use fuzzy_core::config::{Highlight, SearchConfig};
use fuzzy_core::error::{ErrorCode, SearchError};
use fuzzy_core::logger::Logger;
use fuzzy_core::render::{render_text, Theme};
use fuzzy_core::report::Report;
use fuzzy_core::FuzzySearch;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn write(root: &Path, rel: &str, contents: &[u8]) -> PathBuf {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, contents).unwrap();
    path
}

fn search(root: &Path, query: &str, jobs: usize) -> Result<Report, SearchError> {
    let mut config = SearchConfig::new(query, root);
    config.jobs = jobs;
    FuzzySearch::new(config, Logger::new(1)).run()
}

fn sample_tree() -> TempDir {
    let tmp = TempDir::new().unwrap();
    write(tmp.path(), "animals.txt", b"the cat sat\nno match here\nI have a cot and a cow\n");
    write(tmp.path(), "docs/notes.md", b"catalog entry\r\nunrelated\r\n");
    write(tmp.path(), "docs/deep/more.txt", b"bat\n");
    write(tmp.path(), "image.bin", b"\x00\x01cat\x02");
    write(tmp.path(), "empty.dat", b"");
    tmp
}

#[test]
fn finds_exact_and_fuzzy_hits_across_the_tree() {
    let tmp = sample_tree();
    let report = search(tmp.path(), "cat", 1).unwrap();

    let groups = report.groups();
    let files: Vec<_> = groups.iter().map(|g| g.path.strip_prefix(tmp.path()).unwrap().to_path_buf()).collect();
    assert_eq!(
        files,
        vec![PathBuf::from("animals.txt"), PathBuf::from("docs/deep/more.txt"), PathBuf::from("docs/notes.md")]
    );

    let animals = &groups[0].records;
    assert_eq!(animals.iter().map(|r| (r.line_number, r.distance)).collect::<Vec<_>>(), vec![(1, 0), (3, 1)]);

    assert_eq!(groups[1].records[0].line, "bat");
    assert_eq!(groups[1].records[0].distance, 1);

    assert_eq!(groups[2].records.len(), 1);
    assert_eq!(groups[2].records[0].line, "catalog entry");
}

#[test]
fn binary_and_empty_files_are_skipped() {
    let tmp = sample_tree();
    let report = search(tmp.path(), "cat", 1).unwrap();
    assert!(report.groups().iter().all(|g| !g.path.ends_with("image.bin") && !g.path.ends_with("empty.dat")));
}

#[test]
fn empty_query_reports_every_line_of_every_text_file() {
    let tmp = sample_tree();
    let report = search(tmp.path(), "", 1).unwrap();
    assert_eq!(report.record_count(), 3 + 2 + 1);
}

#[test]
fn nothing_found_is_no_matches() {
    let tmp = sample_tree();
    let report = search(tmp.path(), "zebra", 1).unwrap();
    assert_eq!(report, Report::NoMatches);
    let out = render_text(&report, &fuzzy_core::r#match::Query::new("zebra"), &Theme::PLAIN, Highlight::AllOccurrences);
    assert_eq!(out, "No matches found.\n");
}

#[test]
fn worker_pool_matches_sequential_run() {
    let tmp = sample_tree();
    for i in 0..20 {
        write(tmp.path(), &format!("bulk/file{i:02}.txt"), format!("line {i}\ncat {i}\ncot\n").as_bytes());
    }
    let sequential = search(tmp.path(), "cat", 1).unwrap();
    let pooled = search(tmp.path(), "cat", 4).unwrap();
    assert_eq!(sequential, pooled);
}

#[test]
fn missing_root_is_fatal() {
    let tmp = TempDir::new().unwrap();
    let err = search(&tmp.path().join("gone"), "cat", 1).unwrap_err();
    assert!(matches!(err, SearchError::Traversal { code: ErrorCode::WalkFailed, .. }));
}

#[test]
fn invalid_jobs_is_rejected_before_walking() {
    let tmp = sample_tree();
    let err = search(tmp.path(), "cat", 0).unwrap_err();
    assert_eq!(err.code(), &ErrorCode::InvalidConfig);
}

#[cfg(unix)]
#[test]
fn file_that_cannot_be_opened_does_not_stop_the_run() {
    let tmp = TempDir::new().unwrap();
    let good = write(tmp.path(), "a.txt", b"the cat\n");
    let dangling = tmp.path().join("b.txt");
    std::os::unix::fs::symlink(tmp.path().join("nowhere.txt"), &dangling).unwrap();
    write(tmp.path(), "c.txt", b"a cot\n");

    let report = search(tmp.path(), "cat", 1).unwrap();
    let files: Vec<_> = report.groups().iter().map(|g| g.path.clone()).collect();
    assert_eq!(files, vec![good, tmp.path().join("c.txt")]);
    assert_eq!(report.record_count(), 2);
}

#[test]
fn single_file_root_is_searched() {
    let tmp = sample_tree();
    let report = search(&tmp.path().join("animals.txt"), "cow", 1).unwrap();
    assert_eq!(report.groups().len(), 1);
    assert_eq!(report.groups()[0].records[0].line_number, 3);
}

#[test]
fn latin1_file_matches_on_raw_bytes() {
    let tmp = TempDir::new().unwrap();
    write(tmp.path(), "menu.txt", b"un caf\xe9 noir\nthe\n");
    let report = search(tmp.path(), "cafe", 1).unwrap();
    assert_eq!(report.record_count(), 1);
    let record = &report.groups()[0].records[0];
    assert_eq!(record.distance, 1);
    assert_eq!(record.raw, b"un caf\xe9 noir");
}
