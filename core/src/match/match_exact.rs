use super::Query;

/// Fast path: the query bytes appear verbatim somewhere in the line.
/// An empty query is contained in every line.
pub fn is_exact_match(line: &[u8], query: &Query) -> bool {
    let needle = query.as_bytes();
    needle.is_empty() || line.windows(needle.len()).any(|w| w == needle)
}

/// Start offsets of the non-overlapping occurrences of `needle`, scanning
/// left to right. An empty needle has no occurrences.
pub fn occurrences(haystack: &[u8], needle: &[u8]) -> Vec<usize> {
    let mut hits = Vec::new();
    if needle.is_empty() {
        return hits;
    }
    let mut i = 0usize;
    while i + needle.len() <= haystack.len() {
        if &haystack[i..i + needle.len()] == needle {
            hits.push(i);
            i += needle.len();
        } else {
            i += 1;
        }
    }
    hits
}
