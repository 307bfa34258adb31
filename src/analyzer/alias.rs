//! Table alias resolution across a whole (possibly nested) query.

use std::collections::BTreeMap;

use super::config::{AnalyzerConfig, JoinVocabulary};
use super::flatten::flatten_query_with_limit;
use super::from_clause::{find_from_clauses, tokenize_from_clause, FromTokenKind};
use super::identifier_utils::{normalize_identifier, normalize_qualified_name};
use crate::error::SqlScanError;

/// Alias -> table name
pub type AliasMap = BTreeMap<String, String>;

/// Resolve aliases with the default configuration.
pub fn resolve_aliases(query: &str) -> Result<AliasMap, SqlScanError> {
    resolve_aliases_with(query, &AnalyzerConfig::default())
}

/// Build the alias map for every FROM clause reachable in `query`.
///
/// Subqueries are flattened first, so aliases bound inside a derived table
/// are found in its own fragment. Every top-level FROM of a fragment is
/// scanned, which covers each branch of a `UNION`. The alias given to a
/// derived table itself is never recorded. When the same alias appears more
/// than once, the one seen last wins.
pub fn resolve_aliases_with(
    query: &str,
    config: &AnalyzerConfig,
) -> Result<AliasMap, SqlScanError> {
    let mut aliases = AliasMap::new();
    for fragment in flatten_query_with_limit(query, config.max_depth)? {
        aliases.extend(fragment_aliases(&fragment, &config.join_keywords));
    }
    Ok(aliases)
}

fn fragment_aliases(fragment: &str, vocabulary: &JoinVocabulary) -> Vec<(String, String)> {
    find_from_clauses(fragment)
        .into_iter()
        .flat_map(|clause| tokenize_from_clause(clause, vocabulary))
        .filter(|token| token.kind == FromTokenKind::Table)
        .filter_map(|token| table_alias(&token.text))
        .map(|(table, alias)| (alias, table))
        .collect()
}

/// Split a Table token of the form `table alias` or `table AS alias` into
/// `(table, alias)`, with quote delimiters removed.
///
/// A lone table name, a derived table, or anything longer yields `None`.
pub fn table_alias(text: &str) -> Option<(String, String)> {
    if text.contains('(') {
        return None;
    }

    let words: Vec<&str> = text.split_whitespace().collect();
    let (table, alias) = match words.as_slice() {
        [table, alias] => (*table, *alias),
        [table, keyword, alias] if keyword.eq_ignore_ascii_case("as") => (*table, *alias),
        _ => return None,
    };

    Some((normalize_qualified_name(table), normalize_identifier(alias)))
}
