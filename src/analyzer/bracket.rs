//! Parenthesis matching and literal masking.
//!
//! Matching is purely structural: every `(` and `)` counts, wherever it
//! appears. Callers that must ignore parentheses inside quoted literals or
//! comments run the text through [`mask_literals`] first and match against
//! the masked copy, which keeps byte offsets identical to the original.

use crate::error::SqlScanError;

/// Find the index of the `)` matching the `(` at `open_index`.
///
/// Returns `UnmatchedParenthesis` when `open_index` is not an opening
/// parenthesis or when the text ends before the group closes.
pub fn matching_close(text: &str, open_index: usize) -> Result<usize, SqlScanError> {
    let bytes = text.as_bytes();
    if bytes.get(open_index) != Some(&b'(') {
        return Err(SqlScanError::UnmatchedParenthesis { open_index });
    }

    let mut depth = 1usize;
    for (i, &b) in bytes.iter().enumerate().skip(open_index + 1) {
        match b {
            b'(' => depth += 1,
            b')' => {
                depth -= 1;
                if depth == 0 {
                    return Ok(i);
                }
            }
            _ => {}
        }
    }

    Err(SqlScanError::UnmatchedParenthesis { open_index })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MaskState {
    Code,
    /// Inside a literal opened by the held quote character
    Literal(char),
    LineComment,
    BlockComment,
}

/// Replace the contents of quoted literals, and whole comments, with spaces.
///
/// Quote characters themselves are kept. Single quotes, double quotes and
/// backticks are recognized; a doubled quote inside a literal toggles out and
/// straight back in, so it needs no special case. Comments (`--`, `#` and
/// `/* */`) are blanked including their delimiters, so quotes and
/// parentheses inside them never count. An unterminated literal or comment
/// is masked to the end of the text. Every masked character becomes as many
/// spaces as it has UTF-8 bytes, and line breaks are kept.
pub fn mask_literals(text: &str) -> String {
    let mut masked = String::with_capacity(text.len());
    let mut state = MaskState::Code;
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        let next = chars.peek().copied();

        state = match state {
            MaskState::Code => match c {
                '\'' | '"' | '`' => {
                    masked.push(c);
                    MaskState::Literal(c)
                }
                '-' if next == Some('-') => {
                    chars.next();
                    masked.push_str("  ");
                    MaskState::LineComment
                }
                '/' if next == Some('*') => {
                    chars.next();
                    masked.push_str("  ");
                    MaskState::BlockComment
                }
                '#' => {
                    masked.push(' ');
                    MaskState::LineComment
                }
                _ => {
                    masked.push(c);
                    MaskState::Code
                }
            },
            MaskState::Literal(quote) if c == quote => {
                masked.push(c);
                MaskState::Code
            }
            MaskState::Literal(quote) => {
                blank(&mut masked, c);
                MaskState::Literal(quote)
            }
            MaskState::LineComment if c == '\n' => {
                masked.push(c);
                MaskState::Code
            }
            MaskState::LineComment => {
                blank(&mut masked, c);
                MaskState::LineComment
            }
            MaskState::BlockComment if c == '*' && next == Some('/') => {
                chars.next();
                masked.push_str("  ");
                MaskState::Code
            }
            MaskState::BlockComment => {
                blank(&mut masked, c);
                MaskState::BlockComment
            }
        };
    }

    masked
}

fn blank(masked: &mut String, c: char) {
    if c == '\n' {
        masked.push(c);
    } else {
        for _ in 0..c.len_utf8() {
            masked.push(' ');
        }
    }
}
