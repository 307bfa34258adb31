//! Tests for bracket matching and subquery flattening

use pretty_assertions::assert_eq;
use rust_sqlscan::analyzer::{
    extract_top_level_groups, flatten_query, flatten_query_with_limit, mask_literals,
    matching_close,
};
use rust_sqlscan::SqlScanError;

// ============================================================================
// Bracket Matching Tests
// ============================================================================

#[test]
fn test_matching_close_nested() {
    let text = "x (a (b) (c (d))) y";
    assert_eq!(matching_close(text, 2).unwrap(), 16);
    assert_eq!(matching_close(text, 5).unwrap(), 7);
    assert_eq!(matching_close(text, 9).unwrap(), 15);
}

#[test]
fn test_matching_close_unmatched() {
    assert!(matches!(
        matching_close("((a)", 0),
        Err(SqlScanError::UnmatchedParenthesis { open_index: 0 })
    ));
}

#[test]
fn test_matching_close_requires_open_paren() {
    assert!(matching_close("abc", 1).is_err());
    assert!(matching_close("abc", 10).is_err());
}

#[test]
fn test_masked_text_skips_quoted_parens() {
    let text = "f(')', \"(\", `)`) z";
    let masked = mask_literals(text);
    assert_eq!(masked.len(), text.len());
    assert_eq!(matching_close(&masked, 1).unwrap(), 15);
}

// ============================================================================
// Flattening Tests
// ============================================================================

#[test]
fn test_flatten_in_list_and_function_calls() {
    assert_eq!(
        flatten_query("select count(*) from t where id in (select id from u)").unwrap(),
        vec![
            "select count() from t where id in ()",
            "*",
            "select id from u",
        ]
    );
}

#[test]
fn test_extract_top_level_groups_keeps_inner_text() {
    let (replaced, groups) =
        extract_top_level_groups("select * from (select (1)) a join (b) on 1").unwrap();
    assert_eq!(replaced, "select * from () a join () on 1");
    assert_eq!(groups, vec!["select (1)", "b"]);
}

#[test]
fn test_flatten_respects_custom_limit() {
    let query = "select (select (select 1))";
    assert_eq!(flatten_query_with_limit(query, 2).unwrap().len(), 3);
    assert!(matches!(
        flatten_query_with_limit(query, 1),
        Err(SqlScanError::NestingTooDeep { limit: 1 })
    ));
}

#[test]
fn test_flatten_with_apostrophe_in_comment() {
    assert_eq!(
        flatten_query("select * from t -- don't\n where id in (select id from u z)").unwrap(),
        vec!["select * from t -- don't\n where id in ()", "select id from u z"]
    );
}

#[test]
fn test_flatten_stray_close_paren_is_kept() {
    assert_eq!(flatten_query("select 1)").unwrap(), vec!["select 1)"]);
}
