use crate::error::{ErrorCode, Result, SearchError};
use crate::r#match::Query;
use std::path::PathBuf;

/// How fuzzy hits are highlighted when rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Highlight {
    /// Every occurrence of the matched word's text in the line.
    #[default]
    AllOccurrences,
    /// Only the word occurrence that triggered the match.
    MatchedOccurrence,
}

#[derive(Debug, Clone)]
pub struct SearchConfig {
    pub query: Query,
    pub root: PathBuf,
    pub jobs: usize,
    pub highlight: Highlight,
    pub verbose: bool,
}

impl SearchConfig {
    pub fn new(query: impl Into<String>, root: impl Into<PathBuf>) -> Self {
        Self {
            query: Query::new(query),
            root: root.into(),
            jobs: 1,
            highlight: Highlight::default(),
            verbose: false,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if !(1..=MAX_JOBS).contains(&self.jobs) {
            return Err(SearchError::Config {
                code: ErrorCode::InvalidConfig,
                field: "jobs".to_string(),
                value: self.jobs.to_string(),
                reason: format!("must be between 1 and {MAX_JOBS}"),
            });
        }
        Ok(())
    }
}

pub const MAX_JOBS: usize = 256;
pub const SNIFF_LEN: usize = 512;
pub const TEXT_EXT_PATTERN: &str = r"(?i)\.(txt|text|md|markdown|rst|adoc|csv|tsv|log|css|htm|html|xml|js|mjs|ics|vcf|vtt|sgml|c|h|cc|cpp|hpp|java|py|rb|pl|sh|go|rs|toml|ya?ml|ini|cfg|conf|sql|tex)$";
pub const BINARY_SIGNATURES: &[&[u8]] = &[b"%PDF-", b"%!PS-Adobe-", b"GIF87a", b"GIF89a"];
