//! Error types for rust-sqlscan

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while analyzing SQL text
#[derive(Error, Debug)]
pub enum SqlScanError {
    #[error("Unterminated quoted literal starting at offset {offset}")]
    UnterminatedLiteral { offset: usize },

    #[error("Unmatched parenthesis at offset {open_index}")]
    UnmatchedParenthesis { open_index: usize },

    #[error("Parenthesis nesting exceeds the limit of {limit}")]
    NestingTooDeep { limit: usize },

    #[error("Not a CREATE TABLE statement")]
    NotACreateTable,

    #[error("CREATE TABLE statement is missing a table name")]
    MissingTableName,

    #[error("Failed to read SQL script: {path}")]
    ScriptReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("No SQL scripts found for input: {pattern}")]
    NoScriptsFound { pattern: String },

    #[error("Invalid input pattern {pattern}: {message}")]
    InvalidPattern { pattern: String, message: String },
}
