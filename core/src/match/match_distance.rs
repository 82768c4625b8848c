/// Levenshtein distance between `a` and `b`, counted over raw bytes.
///
/// Multi-byte UTF-8 characters are compared byte by byte, so a single
/// differing non-ASCII character can cost more than one edit. No case
/// folding or normalization is applied, and neither side has to be UTF-8.
pub fn distance(a: impl AsRef<[u8]>, b: impl AsRef<[u8]>) -> usize {
    let a = a.as_ref();
    let b = b.as_ref();
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    // table[i][j] = distance between a[..i] and b[..j]
    let mut table = vec![vec![0usize; b.len() + 1]; a.len() + 1];
    for (i, row) in table.iter_mut().enumerate() {
        row[0] = i;
    }
    for (j, cell) in table[0].iter_mut().enumerate() {
        *cell = j;
    }

    for i in 1..=a.len() {
        for j in 1..=b.len() {
            let cost = usize::from(a[i - 1] != b[j - 1]);
            table[i][j] = (table[i - 1][j] + 1)
                .min(table[i][j - 1] + 1)
                .min(table[i - 1][j - 1] + cost);
        }
    }

    table[a.len()][b.len()]
}
