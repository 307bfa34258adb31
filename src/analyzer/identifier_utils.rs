//! Identifier normalization for MySQL/SQLite style quoting.
//!
//! Identifiers may be bare or wrapped in backticks, double quotes or square
//! brackets. These helpers return the bare name.

/// Strips backticks, double quotes and brackets from an identifier.
///
/// ```ignore
/// assert_eq!(normalize_identifier("`foo`"), "foo");
/// assert_eq!(normalize_identifier("\"foo\""), "foo");
/// assert_eq!(normalize_identifier("[foo]"), "foo");
/// ```
pub fn normalize_identifier(ident: &str) -> String {
    let trimmed = ident.trim();
    let unquoted = match (trimmed.chars().next(), trimmed.chars().last()) {
        (Some('`'), Some('`')) | (Some('"'), Some('"')) | (Some('['), Some(']'))
            if trimmed.len() >= 2 =>
        {
            &trimmed[1..trimmed.len() - 1]
        }
        _ => trimmed,
    };
    unquoted.to_string()
}

/// Normalizes every part of a dotted name, e.g. `` `db`.`tbl` `` -> `db.tbl`.
///
/// Dots inside quoted parts are kept.
pub fn normalize_qualified_name(name: &str) -> String {
    split_name_parts(name.trim())
        .into_iter()
        .map(normalize_identifier)
        .collect::<Vec<_>>()
        .join(".")
}

/// Split a dotted name on dots that are outside quote delimiters.
fn split_name_parts(name: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut closing: Option<char> = None;
    let mut start = 0;

    for (i, c) in name.char_indices() {
        match closing {
            Some(q) if c == q => closing = None,
            Some(_) => {}
            None => match c {
                '`' | '"' => closing = Some(c),
                '[' => closing = Some(']'),
                '.' => {
                    parts.push(&name[start..i]);
                    start = i + 1;
                }
                _ => {}
            },
        }
    }
    parts.push(&name[start..]);
    parts
}
