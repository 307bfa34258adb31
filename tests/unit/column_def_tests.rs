//! Tests for column definition decomposition

use pretty_assertions::assert_eq;
use rust_sqlscan::analyzer::{parse_column_definition, parse_create_table, ColumnDefinition};

fn column(
    name: &str,
    data_type: &str,
    nullability: &str,
    default: &str,
    trailing: &str,
) -> ColumnDefinition {
    ColumnDefinition {
        name: name.to_string(),
        data_type: data_type.to_string(),
        nullability: nullability.to_string(),
        default_clause: default.to_string(),
        trailing: trailing.to_string(),
    }
}

#[test]
fn test_definitions_from_create_table() {
    let table = parse_create_table(
        "CREATE TABLE `t` (`foo` int(11) NOT NULL, `bar` text, `baz` varchar(100) DEFAULT NULL)",
    )
    .unwrap();
    let columns: Vec<ColumnDefinition> = table
        .column_definitions
        .iter()
        .map(|d| parse_column_definition(d))
        .collect();

    assert_eq!(
        columns,
        vec![
            column("foo", "int(11)", "NOT NULL", "", ""),
            column("bar", "text", "", "", ""),
            column("baz", "varchar(100)", "", "DEFAULT NULL", ""),
        ]
    );
}

#[test]
fn test_enum_type_with_default() {
    assert_eq!(
        parse_column_definition("`status` enum('a','b') NOT NULL DEFAULT 'a'"),
        column("status", "enum('a','b')", "NOT NULL", "DEFAULT 'a'", "")
    );
}

#[test]
fn test_enum_value_with_close_paren() {
    assert_eq!(
        parse_column_definition("`kind` enum('a,b','c)') NOT NULL"),
        column("kind", "enum('a,b','c)')", "NOT NULL", "", "")
    );
}

#[test]
fn test_decimal_precision() {
    assert_eq!(
        parse_column_definition("price decimal(10,2) unsigned DEFAULT 0.00"),
        column("price", "decimal(10,2) unsigned", "", "DEFAULT 0.00", "")
    );
}

#[test]
fn test_generated_column() {
    assert_eq!(
        parse_column_definition("total int GENERATED ALWAYS AS (a + b) STORED"),
        column("total", "int", "", "", "GENERATED ALWAYS AS (a + b) STORED")
    );
}

#[test]
fn test_bracket_quoted_name() {
    assert_eq!(
        parse_column_definition("[Order Id] INT NULL"),
        column("Order Id", "INT", "NULL", "", "")
    );
}

#[test]
fn test_name_only() {
    assert_eq!(parse_column_definition("a"), column("a", "", "", "", ""));
}
