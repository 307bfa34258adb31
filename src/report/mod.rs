//! Per-script analysis reports
//!
//! Runs the whole analyzer over a script and collects, per statement, what an
//! editor needs: where the statement starts, whether it changes the schema,
//! which aliases it binds, and the decomposed table for CREATE TABLE.

mod printer;

use std::path::PathBuf;

use crate::analyzer::{
    is_schema_altering, is_table_constraint, parse_column_definition, parse_create_table,
    resolve_aliases_with, statement_bounds, AliasMap, AnalyzerConfig, ColumnDefinition,
};
use crate::error::SqlScanError;
use crate::util::line_at_offset;

pub use printer::print_report;

/// Analysis of one script
#[derive(Debug, Clone)]
pub struct ScriptAnalysis {
    /// Source file, `None` for stdin
    pub path: Option<PathBuf>,
    pub statements: Vec<StatementAnalysis>,
}

/// Analysis of one non-blank statement
#[derive(Debug, Clone)]
pub struct StatementAnalysis {
    /// 1-based position among all statements of the script, blank ones included
    pub index: usize,
    /// 1-based line where the statement text begins
    pub start_line: usize,
    /// Statement text with surrounding whitespace removed
    pub text: String,
    pub schema_altering: bool,
    pub aliases: AliasMap,
    pub table: Option<TableDefinition>,
    /// Why part of the analysis failed for this statement
    pub error: Option<String>,
}

/// A decomposed CREATE TABLE statement
#[derive(Debug, Clone)]
pub struct TableDefinition {
    pub name: String,
    pub like_table: Option<String>,
    pub columns: Vec<ColumnDefinition>,
    /// Table-level constraints and indexes, verbatim
    pub constraints: Vec<String>,
}

/// Analyze every statement of `script`.
///
/// Fails only when the script cannot be split (an unterminated literal).
/// Problems inside a single statement are recorded on that statement.
pub fn analyze_script(
    script: &str,
    config: &AnalyzerConfig,
) -> Result<Vec<StatementAnalysis>, SqlScanError> {
    let bounds = statement_bounds(script)?;
    let mut statements = Vec::with_capacity(bounds.len());

    for (i, range) in bounds.into_iter().enumerate() {
        let raw = &script[range.clone()];
        let text = raw.trim();
        if text.is_empty() {
            continue;
        }
        let leading = raw.len() - raw.trim_start().len();
        statements.push(analyze_statement(
            i + 1,
            line_at_offset(script, range.start + leading),
            text,
            config,
        ));
    }

    Ok(statements)
}

fn analyze_statement(
    index: usize,
    start_line: usize,
    text: &str,
    config: &AnalyzerConfig,
) -> StatementAnalysis {
    let mut errors = Vec::new();

    let aliases = resolve_aliases_with(text, config).unwrap_or_else(|e| {
        errors.push(e.to_string());
        AliasMap::new()
    });

    let table = match parse_create_table(text) {
        Ok(parsed) => {
            let (constraints, columns): (Vec<String>, Vec<String>) = parsed
                .column_definitions
                .into_iter()
                .partition(|d| is_table_constraint(d));
            Some(TableDefinition {
                name: parsed.table_name,
                like_table: parsed.like_table,
                columns: columns
                    .iter()
                    .map(|c| parse_column_definition(c))
                    .collect(),
                constraints,
            })
        }
        Err(SqlScanError::NotACreateTable) => None,
        Err(e) => {
            errors.push(e.to_string());
            None
        }
    };

    StatementAnalysis {
        index,
        start_line,
        text: text.to_string(),
        schema_altering: is_schema_altering(text),
        aliases,
        table,
        error: if errors.is_empty() {
            None
        } else {
            Some(errors.join("; "))
        },
    }
}
