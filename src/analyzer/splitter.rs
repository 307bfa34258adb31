//! Statement splitting for multi-statement scripts
//!
//! A script is split on every `;` that is outside quoted literals and
//! comments. The scanner keeps a single state value so literal and comment
//! tracking can never disagree with each other.

use std::ops::Range;

use crate::error::SqlScanError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    Normal,
    /// Inside a `'...'` literal; holds the offset of the opening quote
    InLiteral(usize),
    InLineComment,
    InBlockComment,
}

/// Compute the byte range of every statement in `script`.
///
/// There is always one more range than there are top-level semicolons, and
/// ranges never include the separating `;`. Fails only when a single-quoted
/// literal is still open at the end of the script.
pub fn statement_bounds(script: &str) -> Result<Vec<Range<usize>>, SqlScanError> {
    let bytes = script.as_bytes();
    let mut bounds = Vec::with_capacity(bytes.iter().filter(|&&b| b == b';').count() + 1);
    let mut state = ScanState::Normal;
    let mut start = 0;
    let mut i = 0;

    while i < bytes.len() {
        let b = bytes[i];
        let next = bytes.get(i + 1).copied();

        state = match state {
            ScanState::Normal => match b {
                b'\'' => ScanState::InLiteral(i),
                b'-' if next == Some(b'-') => {
                    i += 1;
                    ScanState::InLineComment
                }
                b'/' if next == Some(b'*') => {
                    i += 1;
                    ScanState::InBlockComment
                }
                b';' => {
                    bounds.push(start..i);
                    start = i + 1;
                    ScanState::Normal
                }
                _ => ScanState::Normal,
            },
            ScanState::InLiteral(open) => match b {
                b'\'' => ScanState::Normal,
                _ => ScanState::InLiteral(open),
            },
            ScanState::InLineComment => match b {
                b'\n' => ScanState::Normal,
                _ => ScanState::InLineComment,
            },
            ScanState::InBlockComment => match b {
                b'*' if next == Some(b'/') => {
                    i += 1;
                    ScanState::Normal
                }
                _ => ScanState::InBlockComment,
            },
        };
        i += 1;
    }

    if let ScanState::InLiteral(offset) = state {
        return Err(SqlScanError::UnterminatedLiteral { offset });
    }

    bounds.push(start..bytes.len());
    Ok(bounds)
}

/// Split a script into its statements, preserving order and empty statements.
///
/// Statements borrow from `script` and keep their surrounding whitespace and
/// comments untouched.
pub fn split_statements(script: &str) -> Result<Vec<&str>, SqlScanError> {
    Ok(statement_bounds(script)?
        .into_iter()
        .map(|range| &script[range])
        .collect())
}
