//! Shared utility functions

/// Safely truncate a string to at most `max_bytes` while respecting UTF-8 boundaries.
///
/// If the string is already shorter than `max_bytes`, returns it unchanged.
/// Otherwise, finds the last valid UTF-8 character boundary at or before `max_bytes`
/// and returns a slice up to that point.
pub fn truncate_utf8_safe(s: &str, max_bytes: usize) -> &str {
    if s.len() <= max_bytes {
        return s;
    }
    let mut end = max_bytes;
    while end > 0 && !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}

/// Single-line preview of `s` for logs and status text
///
/// Whitespace runs (newlines included) collapse to one space. Text longer
/// than `max_bytes` is cut on a character boundary and gets an ellipsis.
pub fn one_line_preview(s: &str, max_bytes: usize) -> String {
    let collapsed = s.split_whitespace().collect::<Vec<_>>().join(" ");
    let truncated = truncate_utf8_safe(&collapsed, max_bytes);
    if truncated.len() < collapsed.len() {
        format!("{}…", truncated.trim_end())
    } else {
        collapsed
    }
}
