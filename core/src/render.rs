use crate::config::Highlight;
use crate::error::Result;
use crate::r#match::{match_line, occurrences, MatchDecision, MatchKind, Query};
use crate::report::Report;
use serde::Serialize;
use std::fmt::Write as _;
use std::path::Path;

pub const NO_MATCHES: &str = "No matches found.";

/// Escape sequences wrapped around each part of the text output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub file: &'static str,
    pub line: &'static str,
    pub matched: &'static str,
    pub reset: &'static str,
}

impl Theme {
    /// Bold red file names, green line numbers, yellow matches.
    pub const ANSI: Theme = Theme {
        file: "\x1b[1m\x1b[31m",
        line: "\x1b[32m",
        matched: "\x1b[33m",
        reset: "\x1b[0m",
    };

    pub const PLAIN: Theme = Theme { file: "", line: "", matched: "", reset: "" };

    fn push_wrapped(&self, out: &mut Vec<u8>, text: &[u8]) {
        out.extend_from_slice(self.matched.as_bytes());
        out.extend_from_slice(text);
        out.extend_from_slice(self.reset.as_bytes());
    }
}

/// Renders the report for a terminal. Each file gets a header line, one
/// indented line per hit, and a trailing blank line.
pub fn render_text(report: &Report, query: &Query, theme: &Theme, highlight: Highlight) -> String {
    let groups = match report {
        Report::NoMatches => return format!("{NO_MATCHES}\n"),
        Report::Matches(groups) => groups,
    };
    let mut out = String::new();
    for group in groups {
        let _ = writeln!(out, "{}{}{}", theme.file, group.path.display(), theme.reset);
        for record in &group.records {
            let line = highlight_line(&record.raw, query, theme, highlight);
            let _ = writeln!(out, "  {}{}{}: {}", theme.line, record.line_number, theme.reset, line);
        }
        out.push('\n');
    }
    out
}

/// Wraps the matched text of `line` in the theme's match markers.
///
/// The decision is recomputed from the line rather than taken from a stored
/// distance. Exact hits mark every occurrence of the query. Fuzzy hits mark
/// every occurrence of the first qualifying word's text with
/// [`Highlight::AllOccurrences`], which can also mark repeats of that word
/// that were never compared; [`Highlight::MatchedOccurrence`] marks only the
/// word that matched. The work happens on raw bytes; the result is decoded
/// lossily for display.
pub fn highlight_line(line: &[u8], query: &Query, theme: &Theme, highlight: Highlight) -> String {
    let marked = match match_line(line, query) {
        MatchDecision::NoMatch => line.to_vec(),
        MatchDecision::Exact => replace_all(line, query.as_bytes(), theme),
        MatchDecision::Fuzzy { word, offset, .. } => match highlight {
            Highlight::AllOccurrences => replace_all(line, word, theme),
            Highlight::MatchedOccurrence => {
                let mut out = line[..offset].to_vec();
                theme.push_wrapped(&mut out, word);
                out.extend_from_slice(&line[offset + word.len()..]);
                out
            }
        },
    };
    String::from_utf8_lossy(&marked).into_owned()
}

fn replace_all(line: &[u8], needle: &[u8], theme: &Theme) -> Vec<u8> {
    if needle.is_empty() {
        return mark_boundaries(line, theme);
    }
    let mut out = Vec::with_capacity(line.len());
    let mut last = 0usize;
    for at in occurrences(line, needle) {
        out.extend_from_slice(&line[last..at]);
        theme.push_wrapped(&mut out, needle);
        last = at + needle.len();
    }
    out.extend_from_slice(&line[last..]);
    out
}

// Empty needle: an empty marker pair before every character and one at the
// end. Each invalid byte counts as a character of its own.
fn mark_boundaries(line: &[u8], theme: &Theme) -> Vec<u8> {
    let mut out = Vec::with_capacity(line.len());
    for chunk in line.utf8_chunks() {
        for ch in chunk.valid().chars() {
            theme.push_wrapped(&mut out, b"");
            out.extend_from_slice(ch.encode_utf8(&mut [0u8; 4]).as_bytes());
        }
        for &b in chunk.invalid() {
            theme.push_wrapped(&mut out, b"");
            out.push(b);
        }
    }
    theme.push_wrapped(&mut out, b"");
    out
}

#[derive(Serialize)]
struct JsonReport<'a> {
    matches: Vec<JsonGroup<'a>>,
}

#[derive(Serialize)]
struct JsonGroup<'a> {
    path: &'a Path,
    records: Vec<JsonRecord<'a>>,
}

#[derive(Serialize)]
struct JsonRecord<'a> {
    line_number: usize,
    line: &'a str,
    distance: usize,
    kind: MatchKind,
}

/// Structured output. An empty `matches` array stands for "no matches".
/// `query` is needed to recompute each record's kind.
pub fn render_json(report: &Report, query: &Query) -> Result<String> {
    let matches = report
        .groups()
        .iter()
        .map(|group| JsonGroup {
            path: &group.path,
            records: group
                .records
                .iter()
                .map(|r| JsonRecord { line_number: r.line_number, line: &r.line, distance: r.distance, kind: r.kind(query) })
                .collect(),
        })
        .collect();
    Ok(serde_json::to_string_pretty(&JsonReport { matches })?)
}
