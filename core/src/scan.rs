use crate::error::{ErrorCode, Result, SearchError};
use crate::r#match::{is_exact_match, match_line, MatchKind, Query};
use serde::Serialize;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

/// One matching line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchRecord {
    pub path: PathBuf,
    /// 1-based
    pub line_number: usize,
    /// Display text, lossily decoded from `raw`.
    pub line: String,
    /// The line exactly as read, terminator stripped. Matching and
    /// highlighting work on these bytes.
    #[serde(skip)]
    pub raw: Vec<u8>,
    /// Zero for exact hits.
    pub distance: usize,
}

impl MatchRecord {
    pub fn new(path: impl Into<PathBuf>, line_number: usize, raw: Vec<u8>, distance: usize) -> Self {
        let line = String::from_utf8_lossy(&raw).into_owned();
        Self { path: path.into(), line_number, line, raw, distance }
    }

    /// Exact vs fuzzy is recomputed from the line, not inferred from `distance`.
    pub fn kind(&self, query: &Query) -> MatchKind {
        if is_exact_match(&self.raw, query) { MatchKind::Exact } else { MatchKind::Fuzzy }
    }
}

/// Opens `path` and scans it. The handle is dropped on every return path.
pub fn scan_file(path: &Path, query: &Query) -> Result<Vec<MatchRecord>> {
    let file = File::open(path).map_err(|e| SearchError::File {
        code: ErrorCode::FileOpenFailed,
        message: e.to_string(),
        path: path.to_path_buf(),
    })?;
    scan_reader(path, BufReader::new(file), query)
}

/// Scans every line of `reader`, recording hits against `path`.
pub fn scan_reader<R: BufRead>(path: &Path, mut reader: R, query: &Query) -> Result<Vec<MatchRecord>> {
    let mut records = Vec::new();
    let mut buf = Vec::new();
    let mut line_number = 0usize;

    loop {
        buf.clear();
        let read = reader.read_until(b'\n', &mut buf).map_err(|e| SearchError::File {
            code: ErrorCode::FileReadFailed,
            message: format!("line {}: {e}", line_number + 1),
            path: path.to_path_buf(),
        })?;
        if read == 0 {
            break;
        }
        line_number += 1;

        let line = strip_terminator(&buf);
        if let Some(distance) = match_line(line, query).distance() {
            records.push(MatchRecord::new(path, line_number, line.to_vec(), distance));
        }
    }

    Ok(records)
}

/// Drops a trailing `\n`, then one trailing `\r`.
fn strip_terminator(bytes: &[u8]) -> &[u8] {
    let bytes = bytes.strip_suffix(b"\n").unwrap_or(bytes);
    bytes.strip_suffix(b"\r").unwrap_or(bytes)
}
