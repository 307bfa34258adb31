//! Statement classification

use std::sync::LazyLock;

use regex::Regex;

static SCHEMA_CHANGE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(?:create|drop|alter)\s+table\b").unwrap());

/// Whether running `statement` changes table structure, meaning any cached
/// schema information should be refreshed afterwards.
pub fn is_schema_altering(statement: &str) -> bool {
    SCHEMA_CHANGE_RE.is_match(statement)
}
