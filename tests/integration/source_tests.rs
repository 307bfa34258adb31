//! Tests for input discovery and decoding

use rust_sqlscan::source::{discover_scripts, read_script};
use rust_sqlscan::SqlScanError;

use crate::common::{path_string, TestContext};

#[test]
fn test_mixed_inputs_are_merged() {
    let ctx = TestContext::new();
    let file = ctx.write_script("one.sql", "select 1;");
    ctx.write_script("dir/two.sql", "select 2;");
    ctx.write_script("dir/deeper/three.Sql", "select 3;");

    let scripts = discover_scripts(&[
        ctx.input("dir"),
        path_string(&file),
        ctx.input("*.sql"),
    ])
    .unwrap();

    assert_eq!(scripts.len(), 3);
    assert!(scripts.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_empty_glob_is_an_error() {
    let ctx = TestContext::new();
    let err = discover_scripts(&[ctx.input("*.sql")]).unwrap_err();
    assert!(matches!(err, SqlScanError::NoScriptsFound { .. }));
}

#[test]
fn test_invalid_glob_pattern() {
    let err = discover_scripts(&["[unclosed".to_string()]).unwrap_err();
    assert!(matches!(err, SqlScanError::InvalidPattern { .. }));
}

#[test]
fn test_read_latin1_dump() {
    let ctx = TestContext::new();
    let path = ctx.write_script("latin.sql", b"insert into t values ('caf\xE9');".as_slice());
    assert_eq!(
        read_script(&path).unwrap(),
        "insert into t values ('café');"
    );
}
