//! Column definition decomposition
//!
//! A definition such as
//!
//! ```sql
//! `bar` int(11) unsigned NOT NULL DEFAULT '0' AUTO_INCREMENT
//! ```
//!
//! is read by a fixed sequence of field matchers, each consuming from the
//! front of whatever the previous one left:
//!
//! | field        | example                 |
//! |--------------|-------------------------|
//! | name         | `bar`                   |
//! | data type    | `int(11) unsigned`      |
//! | nullability  | `NOT NULL`              |
//! | default      | `DEFAULT '0'`           |
//! | trailing     | `AUTO_INCREMENT`        |
//!
//! A field that does not match at its position is left empty and consumes
//! nothing, so fields never overlap.

use std::sync::LazyLock;

use regex::Regex;

use super::bracket::{mask_literals, matching_close};

static NAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^\s*(?:`([^`]*)`|"([^"]*)"|\[([^\]]*)\]|([^\s(),`"\[]+))"#).unwrap()
});

static TYPE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\s*([A-Za-z_]\w*)").unwrap());

static TYPE_MODIFIER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s+([A-Za-z_]\w*)\b").unwrap());

static NULLABILITY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^\s*(not\s+null|null)\b").unwrap());

static DEFAULT_KEYWORD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^\s*(default)\b").unwrap());

static DEFAULT_VALUE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"^\s*(?:[bBxXnN]?'(?:[^'\\]|\\.|'')*'|"(?:[^"\\]|\\.|"")*"|[+-]?[\w.]+(?:\s*\([^)]*\))?)"#,
    )
    .unwrap()
});

static TABLE_CONSTRAINT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^\s*(?:constraint|primary\s+key|foreign\s+key|unique|key|index|fulltext|spatial|check)\b",
    )
    .unwrap()
});

/// Words that end the data type field.
///
/// `NULL`, `NOT` and `DEFAULT` start the following fields; the rest are
/// column attributes that belong to the trailing field.
const TYPE_BOUNDARY_WORDS: &[&str] = &[
    "null",
    "not",
    "default",
    "auto_increment",
    "autoincrement",
    "primary",
    "unique",
    "key",
    "comment",
    "references",
    "check",
    "constraint",
    "generated",
    "as",
    "on",
];

/// The fields of one column definition. Every field is verbatim source text
/// (except `name`, which loses its quote delimiters) and empty when absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnDefinition {
    pub name: String,
    pub data_type: String,
    pub nullability: String,
    pub default_clause: String,
    pub trailing: String,
}

/// Decompose a column definition into its fields.
pub fn parse_column_definition(definition: &str) -> ColumnDefinition {
    let (name, rest) = match_name(definition);
    let (data_type, rest) = match_type(rest);
    let (nullability, rest) = match_nullability(rest);
    let (default_clause, rest) = match_default(rest);

    ColumnDefinition {
        name,
        data_type,
        nullability,
        default_clause,
        trailing: rest.trim().to_string(),
    }
}

/// Whether a definition from a CREATE TABLE body is a table-level
/// constraint or index rather than a column.
pub fn is_table_constraint(definition: &str) -> bool {
    TABLE_CONSTRAINT_RE.is_match(definition)
}

fn match_name(input: &str) -> (String, &str) {
    let Some(caps) = NAME_RE.captures(input) else {
        return (String::new(), input);
    };
    let name = (1..=4)
        .find_map(|i| caps.get(i))
        .map(|m| m.as_str().to_string())
        .unwrap_or_default();
    let end = caps.get(0).map_or(0, |m| m.end());
    (name, &input[end..])
}

fn match_type(input: &str) -> (String, &str) {
    let Some(base) = TYPE_RE.captures(input).and_then(|c| c.get(1)) else {
        return (String::new(), input);
    };
    if is_type_boundary(base.as_str()) {
        return (String::new(), input);
    }

    let start = base.start();
    let mut end = skip_argument_list(input, base.end());
    while let Some(caps) = TYPE_MODIFIER_RE.captures(&input[end..]) {
        let word = caps.get(1).map_or("", |m| m.as_str());
        if is_type_boundary(word) {
            break;
        }
        end = skip_argument_list(input, end + caps.get(0).map_or(0, |m| m.end()));
    }

    (input[start..end].to_string(), &input[end..])
}

/// If a parenthesized argument list such as `(10,2)` or `('a','b)')` follows
/// `at`, return the offset just past it; otherwise return `at`.
fn skip_argument_list(input: &str, at: usize) -> usize {
    let rest = &input[at..];
    let trimmed = rest.trim_start();
    if !trimmed.starts_with('(') {
        return at;
    }
    let open = rest.len() - trimmed.len();
    matching_close(&mask_literals(rest), open).map_or(at, |close| at + close + 1)
}

fn is_type_boundary(word: &str) -> bool {
    let leading = word
        .split(|c: char| !(c.is_alphanumeric() || c == '_'))
        .next()
        .unwrap_or(word);
    TYPE_BOUNDARY_WORDS
        .iter()
        .any(|b| b.eq_ignore_ascii_case(leading))
}

fn match_nullability(input: &str) -> (String, &str) {
    match NULLABILITY_RE.captures(input).and_then(|c| c.get(1)) {
        Some(m) => (m.as_str().to_string(), &input[m.end()..]),
        None => (String::new(), input),
    }
}

fn match_default(input: &str) -> (String, &str) {
    let Some(keyword) = DEFAULT_KEYWORD_RE.captures(input).and_then(|c| c.get(1)) else {
        return (String::new(), input);
    };
    let start = keyword.start();
    let after_keyword = &input[keyword.end()..];

    let value_len = if after_keyword.trim_start().starts_with('(') {
        let open = after_keyword.len() - after_keyword.trim_start().len();
        matching_close(&mask_literals(after_keyword), open)
            .map(|close| close + 1)
            .unwrap_or(0)
    } else {
        DEFAULT_VALUE_RE
            .find(after_keyword)
            .map_or(0, |m| m.end())
    };

    let end = keyword.end() + value_len;
    (input[start..end].to_string(), &input[end..])
}
