use crate::config::{BINARY_SIGNATURES, SNIFF_LEN, TEXT_EXT_PATTERN};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fs::File;
use std::io::Read;
use std::path::Path;

static TEXT_EXT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(TEXT_EXT_PATTERN).unwrap());

/// Decides whether a file is worth scanning as text.
pub struct Detector;

impl Detector {
    pub fn new() -> Self { Self }

    /// Known text extension first, then a sniff of the leading bytes.
    /// Files that cannot be opened or read are treated as not text.
    pub fn is_text(&self, path: &Path) -> bool {
        if TEXT_EXT_RE.is_match(&path.to_string_lossy()) {
            return true;
        }
        match sniff(path) {
            Ok(head) => looks_textual(&head),
            Err(_) => false,
        }
    }
}

impl Default for Detector {
    fn default() -> Self { Self::new() }
}

fn sniff(path: &Path) -> std::io::Result<Vec<u8>> {
    let mut head = Vec::with_capacity(SNIFF_LEN);
    File::open(path)?.take(SNIFF_LEN as u64).read_to_end(&mut head)?;
    Ok(head)
}

/// Content check on the first bytes of a file. Empty content is not text.
pub fn looks_textual(head: &[u8]) -> bool {
    if head.is_empty() {
        return false;
    }
    if head.starts_with(&[0xFE, 0xFF]) || head.starts_with(&[0xFF, 0xFE]) || head.starts_with(&[0xEF, 0xBB, 0xBF]) {
        return true;
    }
    if BINARY_SIGNATURES.iter().any(|sig| head.starts_with(sig)) {
        return false;
    }
    !head.iter().any(|&b| is_binary_byte(b))
}

// Control bytes that never show up in text. Tab, newlines, form feed and ESC are allowed.
fn is_binary_byte(b: u8) -> bool {
    matches!(b, 0x00..=0x08 | 0x0B | 0x0E..=0x1A | 0x1C..=0x1F)
}
