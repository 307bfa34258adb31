//! Shared utility helpers.

/// Convert a byte offset into a 1-based line number.
pub fn line_at_offset(text: &str, offset: usize) -> usize {
    let end = offset.min(text.len());
    text.as_bytes()[..end].iter().filter(|&&b| b == b'\n').count() + 1
}
