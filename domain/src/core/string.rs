//! String utilities for the domain layer.

/// Truncate a string to `max_chars` characters, appending `...` when cut.
///
/// Counts Unicode scalar values rather than bytes, so multibyte text is never
/// split inside a character. A string of exactly `max_chars` characters is
/// returned unchanged.
pub fn truncate_chars(s: &str, max_chars: usize) -> String {
    match s.char_indices().nth(max_chars) {
        Some((end, _)) => format!("{}...", &s[..end]),
        None => s.to_string(),
    }
}

/// Truncate a string to approximately `max_bytes` without splitting a UTF-8
/// character boundary.
///
/// Returns a sub-slice of the original string. Used for log previews.
pub fn truncate_str(s: &str, max_bytes: usize) -> &str {
    if s.len() <= max_bytes {
        return s;
    }
    let mut end = max_bytes;
    while end > 0 && !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}
