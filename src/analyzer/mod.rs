//! SQL text analysis
//!
//! Grammar-free structural analysis of SQL scripts: splitting a script into
//! statements, matching and flattening parenthesized groups, classifying FROM
//! clauses, resolving table aliases, and decomposing CREATE TABLE statements.
//! Every operation is a pure function of its input text.

mod alias;
mod bracket;
mod classify;
mod column_def;
mod config;
mod create_table;
mod flatten;
mod from_clause;
mod identifier_utils;
mod splitter;
mod token_cursor;

pub use alias::{resolve_aliases, resolve_aliases_with, table_alias, AliasMap};
pub use bracket::{mask_literals, matching_close};
pub use classify::is_schema_altering;
pub use column_def::{is_table_constraint, parse_column_definition, ColumnDefinition};
pub use config::{AnalyzerConfig, JoinVocabulary, DEFAULT_MAX_DEPTH};
pub use create_table::{parse_create_table, CreateTable};
pub use flatten::{extract_top_level_groups, flatten_query, flatten_query_with_limit};
pub use from_clause::{
    find_from_clause, find_from_clauses, tokenize_from_clause, FromToken, FromTokenKind,
};
pub use identifier_utils::{normalize_identifier, normalize_qualified_name};
pub use splitter::{split_statements, statement_bounds};
