use super::{distance, Query};

/// Whitespace-delimited words of `line` with their byte offsets.
/// Runs of whitespace collapse, leading and trailing whitespace is dropped.
/// Bytes that are not valid UTF-8 never count as whitespace.
pub fn word_spans(line: &[u8]) -> Vec<(usize, &[u8])> {
    let mut spans = Vec::new();
    let mut start: Option<usize> = None;
    let mut pos = 0usize;

    for chunk in line.utf8_chunks() {
        for (i, ch) in chunk.valid().char_indices() {
            let at = pos + i;
            if ch.is_whitespace() {
                if let Some(s) = start.take() {
                    spans.push((s, &line[s..at]));
                }
            } else if start.is_none() {
                start = Some(at);
            }
        }
        pos += chunk.valid().len();
        if !chunk.invalid().is_empty() && start.is_none() {
            start = Some(pos);
        }
        pos += chunk.invalid().len();
    }

    if let Some(s) = start {
        spans.push((s, &line[s..]));
    }
    spans
}

/// First word (left to right) whose edit distance to the query is within
/// the query's threshold, as `(offset, word, distance)`.
pub fn find_fuzzy_word<'a>(line: &'a [u8], query: &Query) -> Option<(usize, &'a [u8], usize)> {
    let threshold = query.threshold();
    word_spans(line).into_iter().find_map(|(offset, word)| {
        let d = distance(word, query.as_bytes());
        (d <= threshold).then_some((offset, word, d))
    })
}
