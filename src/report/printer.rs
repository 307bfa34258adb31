//! Human-readable analysis report printer

use super::{ScriptAnalysis, StatementAnalysis};

/// Longest statement excerpt shown before truncating
const EXCERPT_LIMIT: usize = 60;

/// Print the analysis report for every script to stdout.
pub fn print_report(scripts: &[ScriptAnalysis]) {
    println!("=== SQL Script Analysis ===");
    println!();

    for script in scripts {
        match &script.path {
            Some(path) => println!("--- {} ---", path.display()),
            None => println!("--- <stdin> ---"),
        }

        if script.statements.is_empty() {
            println!("  (no statements)");
        }
        for statement in &script.statements {
            print_statement(statement);
        }
        println!();
    }

    let statements: usize = scripts.iter().map(|s| s.statements.len()).sum();
    let failures: usize = scripts
        .iter()
        .flat_map(|s| &s.statements)
        .filter(|s| s.error.is_some())
        .count();
    println!(
        "Summary: {} scripts, {} statements, {} with errors",
        scripts.len(),
        statements,
        failures
    );
}

fn print_statement(statement: &StatementAnalysis) {
    println!(
        "[{}] line {}: {}",
        statement.index,
        statement.start_line,
        excerpt(&statement.text)
    );

    if statement.schema_altering {
        println!("  schema change");
    }

    if !statement.aliases.is_empty() {
        let pairs: Vec<String> = statement
            .aliases
            .iter()
            .map(|(alias, table)| format!("{} -> {}", alias, table))
            .collect();
        println!("  aliases: {}", pairs.join(", "));
    }

    if let Some(table) = &statement.table {
        match &table.like_table {
            Some(parent) => println!("  table {} (like {})", table.name, parent),
            None => println!("  table {}", table.name),
        }
        for column in &table.columns {
            let mut parts = vec![column.name.as_str(), column.data_type.as_str()];
            parts.extend(
                [
                    column.nullability.as_str(),
                    column.default_clause.as_str(),
                    column.trailing.as_str(),
                ]
                .into_iter()
                .filter(|p| !p.is_empty()),
            );
            println!("    column {}", parts.join(" | "));
        }
        for constraint in &table.constraints {
            println!("    constraint {}", constraint);
        }
    }

    if let Some(error) = &statement.error {
        println!("  error: {}", error);
    }
}

/// First line of the statement, shortened to `EXCERPT_LIMIT` characters.
fn excerpt(text: &str) -> String {
    let first_line = text.lines().next().unwrap_or("");
    let mut short: String = first_line.chars().take(EXCERPT_LIMIT).collect();
    if short.len() < text.len() {
        short.push_str("...");
    }
    short
}
