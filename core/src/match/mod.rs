mod match_distance;
mod match_exact;
mod match_fuzzy;

pub use match_distance::distance;
pub use match_exact::{is_exact_match, occurrences};
pub use match_fuzzy::{find_fuzzy_word, word_spans};

/// The search term for one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    term: String,
}

impl Query {
    pub fn new(term: impl Into<String>) -> Self {
        Self { term: term.into() }
    }

    pub fn as_str(&self) -> &str {
        &self.term
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.term.as_bytes()
    }

    pub fn len(&self) -> usize {
        self.term.len()
    }

    pub fn is_empty(&self) -> bool {
        self.term.is_empty()
    }

    /// Maximum edit distance a word may have and still count as a fuzzy hit.
    /// Scales with the byte length of the term, truncating.
    pub fn threshold(&self) -> usize {
        self.term.len() / 2
    }
}

/// Outcome of matching one line against a [`Query`]. Lines are raw bytes and
/// need not be valid UTF-8.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchDecision<'a> {
    NoMatch,
    Exact,
    /// `offset` is the byte position of `word` inside the line.
    Fuzzy { word: &'a [u8], offset: usize, distance: usize },
}

impl MatchDecision<'_> {
    pub fn is_match(&self) -> bool {
        !matches!(self, MatchDecision::NoMatch)
    }

    /// Distance reported for the line: zero for exact hits.
    pub fn distance(&self) -> Option<usize> {
        match self {
            MatchDecision::NoMatch => None,
            MatchDecision::Exact => Some(0),
            MatchDecision::Fuzzy { distance, .. } => Some(*distance),
        }
    }
}

/// Match kind as recomputed from the line text, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchKind {
    Exact,
    Fuzzy,
}

/// Layered decision for a single line:
/// 1) Exact substring, which always wins
/// 2) First whitespace-delimited word within the query's threshold
pub fn match_line<'a>(line: &'a [u8], query: &Query) -> MatchDecision<'a> {
    if is_exact_match(line, query) {
        return MatchDecision::Exact;
    }
    match find_fuzzy_word(line, query) {
        Some((offset, word, distance)) => MatchDecision::Fuzzy { word, offset, distance },
        None => MatchDecision::NoMatch,
    }
}
