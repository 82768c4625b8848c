use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, SearchError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorCode {
    // --- Traversal ---
    WalkFailed,

    // --- File I/O ---
    FileOpenFailed,
    FileReadFailed,

    // --- Configuration ---
    InvalidConfig,

    // --- Output ---
    RenderFailed,
}

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("Error walking the path {path:?}: {message}")]
    Traversal { code: ErrorCode, message: String, path: PathBuf },

    #[error("Error reading file {path:?}: {message}")]
    File { code: ErrorCode, message: String, path: PathBuf },

    #[error("Invalid configuration: {field} = {value} ({reason})")]
    Config { code: ErrorCode, field: String, value: String, reason: String },

    #[error("Render Error: {message}")]
    Render { code: ErrorCode, message: String },
}

impl SearchError {
    pub fn code(&self) -> &ErrorCode {
        match self {
            SearchError::Traversal { code, .. }
            | SearchError::File { code, .. }
            | SearchError::Config { code, .. }
            | SearchError::Render { code, .. } => code,
        }
    }

    /// Only per-file failures are survivable; everything else ends the run.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, SearchError::File { .. })
    }
}

impl From<walkdir::Error> for SearchError {
    fn from(e: walkdir::Error) -> Self {
        let path = e.path().map(|p| p.to_path_buf()).unwrap_or_else(|| PathBuf::from("<unknown>"));
        SearchError::Traversal { code: ErrorCode::WalkFailed, message: e.to_string(), path }
    }
}

impl From<serde_json::Error> for SearchError {
    fn from(e: serde_json::Error) -> Self {
        SearchError::Render { code: ErrorCode::RenderFailed, message: e.to_string() }
    }
}
