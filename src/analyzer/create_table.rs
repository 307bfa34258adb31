//! CREATE TABLE decomposition
//!
//! Recognizes
//!
//! ```sql
//! CREATE [TEMPORARY] TABLE [IF NOT EXISTS] name [LIKE parent] (definition, ...)
//! ```
//!
//! and returns the table name with the raw text of each column or constraint
//! definition. Definitions are split on top-level commas only, so precision
//! arguments like `decimal(10,2)` and literals like `enum('a,b')` stay whole.

use std::sync::LazyLock;

use regex::Regex;

use super::bracket::{mask_literals, matching_close};
use super::identifier_utils::normalize_qualified_name;
use crate::error::SqlScanError;

static CREATE_TABLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^create\s+(?:temporary\s+)?table\b").unwrap());

static IF_NOT_EXISTS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^\s*if\s+not\s+exists\b").unwrap());

static LIKE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)^\s*like\b").unwrap());

/// A possibly qualified, possibly quoted table name
static TABLE_NAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"^\s*((?:`[^`]*`|"[^"]*"|\[[^\]]*\]|[\w$]+)(?:\s*\.\s*(?:`[^`]*`|"[^"]*"|\[[^\]]*\]|[\w$]+))*)"#,
    )
    .unwrap()
});

static LEADING_COMMENT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:\s+|--[^\n]*(?:\n|$)|#[^\n]*(?:\n|$)|/\*(?s:.*?)\*/)*").unwrap());

/// Result of parsing a CREATE TABLE statement
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTable {
    /// Table name with quote delimiters removed (`db.tbl` when qualified)
    pub table_name: String,
    /// Parent table of a `LIKE parent` clause
    pub like_table: Option<String>,
    /// Trimmed text of each column/constraint definition, in order
    pub column_definitions: Vec<String>,
}

/// Parse a CREATE TABLE statement.
///
/// Leading whitespace and comments are skipped. A statement without a
/// column list (`CREATE TABLE t LIKE p`, `CREATE TABLE t AS SELECT ...`)
/// yields an empty definition list.
pub fn parse_create_table(statement: &str) -> Result<CreateTable, SqlScanError> {
    let body = skip_leading_comments(statement);
    let prefix = CREATE_TABLE_RE
        .find(body)
        .ok_or(SqlScanError::NotACreateTable)?;
    let mut rest = &body[prefix.end()..];

    if let Some(m) = IF_NOT_EXISTS_RE.find(rest) {
        rest = &rest[m.end()..];
    }

    let (table_name, after_name) = take_table_name(rest).ok_or(SqlScanError::MissingTableName)?;
    rest = after_name;

    let mut like_table = None;
    if let Some(m) = LIKE_RE.find(rest) {
        if let Some((parent, after_parent)) = take_table_name(&rest[m.end()..]) {
            like_table = Some(parent);
            rest = after_parent;
        }
    }

    let rest = rest.trim_start();
    let column_definitions = if rest.starts_with('(') {
        let close = matching_close(&mask_literals(rest), 0)?;
        split_top_level_commas(&rest[1..close])
    } else {
        Vec::new()
    };

    Ok(CreateTable {
        table_name,
        like_table,
        column_definitions,
    })
}

fn take_table_name(text: &str) -> Option<(String, &str)> {
    let caps = TABLE_NAME_RE.captures(text)?;
    let name = caps.get(1)?;
    Some((normalize_qualified_name(name.as_str()), &text[name.end()..]))
}

fn skip_leading_comments(text: &str) -> &str {
    match LEADING_COMMENT_RE.find(text) {
        Some(m) => &text[m.end()..],
        None => text,
    }
}

/// Split on commas outside parentheses and quoted literals, trimming each
/// part and dropping empty ones.
fn split_top_level_commas(body: &str) -> Vec<String> {
    let masked = mask_literals(body);
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;

    for (i, b) in masked.bytes().enumerate() {
        match b {
            b'(' => depth += 1,
            b')' => depth = depth.saturating_sub(1),
            b',' if depth == 0 => {
                parts.push(&body[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    parts.push(&body[start..]);

    parts
        .into_iter()
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .collect()
}
