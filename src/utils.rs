//! Small helpers for text normalization and log formatting.

/// Collapse whitespace in extracted element text.
///
/// HTML text nodes arrive with the source document's indentation and line
/// breaks intact. This trims the ends and collapses interior runs of
/// whitespace to single spaces, yielding a clean one-line title.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(normalize_ws("  Elden   Ring\n  Review "), "Elden Ring Review");
/// ```
pub fn normalize_ws(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Truncate a string for logging purposes.
///
/// Long strings are truncated to at most `max` bytes (backing off to the
/// nearest character boundary) with an ellipsis and byte count appended.
pub fn truncate_for_log(s: &str, max: usize) -> String {
    if s.len() <= max {
        return s.to_string();
    }
    let mut cut = max;
    while !s.is_char_boundary(cut) {
        cut -= 1;
    }
    format!("{}…(+{} bytes)", &s[..cut], s.len() - cut)
}
