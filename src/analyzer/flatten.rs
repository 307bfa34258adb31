//! Subquery flattening
//!
//! Every top-level parenthesized group of a query is cut out and replaced by
//! `()`, and each group's inner text is flattened in turn:
//!
//! ```text
//! select a from (select b from (select c from t)) where 1
//!   -> select a from () where 1
//!   -> select b from ()
//!   -> select c from t
//! ```
//!
//! Parentheses inside quoted literals do not form groups. Traversal uses an
//! explicit work stack bounded by a nesting limit, so adversarial input fails
//! with `NestingTooDeep` instead of exhausting the call stack.

use super::bracket::{mask_literals, matching_close};
use super::config::DEFAULT_MAX_DEPTH;
use crate::error::SqlScanError;

/// Replace each top-level group with `()` and return the rewritten query with
/// the inner text of every group, in source order.
pub fn extract_top_level_groups(query: &str) -> Result<(String, Vec<&str>), SqlScanError> {
    let masked = mask_literals(query);
    let mut replaced = String::with_capacity(query.len());
    let mut groups = Vec::new();
    let mut copied_to = 0;

    while let Some(relative) = masked[copied_to..].find('(') {
        let open = copied_to + relative;
        let close = matching_close(&masked, open)?;
        replaced.push_str(&query[copied_to..open]);
        replaced.push_str("()");
        groups.push(&query[open + 1..close]);
        copied_to = close + 1;
    }
    replaced.push_str(&query[copied_to..]);

    Ok((replaced, groups))
}

/// Flatten a query using the default nesting limit.
pub fn flatten_query(query: &str) -> Result<Vec<String>, SqlScanError> {
    flatten_query_with_limit(query, DEFAULT_MAX_DEPTH)
}

/// Flatten a query into independently parsable fragments.
///
/// The first element is the query itself with its groups replaced; the rest
/// follow in depth-first, left-to-right order. A query without parentheses
/// comes back unchanged as the only element.
pub fn flatten_query_with_limit(
    query: &str,
    max_depth: usize,
) -> Result<Vec<String>, SqlScanError> {
    let mut flattened = Vec::new();
    let mut pending: Vec<(String, usize)> = vec![(query.to_string(), 0)];

    while let Some((text, depth)) = pending.pop() {
        if depth > max_depth {
            return Err(SqlScanError::NestingTooDeep { limit: max_depth });
        }

        let (replaced, groups) = extract_top_level_groups(&text)?;
        flattened.push(replaced);
        pending.extend(
            groups
                .into_iter()
                .rev()
                .map(|group| (group.to_string(), depth + 1)),
        );
    }

    Ok(flattened)
}
