use std::io::Read;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};

use rust_sqlscan::analyzer::{
    flatten_query_with_limit, parse_column_definition, parse_create_table, resolve_aliases_with,
    split_statements, AnalyzerConfig, JoinVocabulary, DEFAULT_MAX_DEPTH,
};
use rust_sqlscan::{analyze_files, analyze_text, report, source, AnalyzeOptions};

#[derive(Parser)]
#[command(name = "rust-sqlscan")]
#[command(author, version, about = "Structural analysis of SQL scripts without a grammar")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Analyzer settings shared by the subcommands that resolve aliases
#[derive(Args)]
struct AnalyzerArgs {
    /// Maximum subquery nesting depth
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// Additional join keyword phrase, e.g. "left semi join" (repeatable)
    #[arg(long = "join-keyword")]
    join_keywords: Vec<String>,
}

impl AnalyzerArgs {
    fn to_config(&self) -> AnalyzerConfig {
        let join_keywords = self
            .join_keywords
            .iter()
            .fold(JoinVocabulary::default(), |vocab, phrase| {
                vocab.with_phrase(phrase)
            });
        AnalyzerConfig {
            max_depth: self.max_depth,
            join_keywords,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Split a script into statements
    Split {
        /// Script file (reads stdin when omitted)
        #[arg(short, long)]
        input: Option<PathBuf>,
    },

    /// Flatten a query into its nested subqueries
    Flatten {
        /// Query file (reads stdin when omitted)
        #[arg(short, long)]
        input: Option<PathBuf>,

        #[command(flatten)]
        analyzer: AnalyzerArgs,
    },

    /// Print the alias -> table map of a query
    Aliases {
        /// Query file (reads stdin when omitted)
        #[arg(short, long)]
        input: Option<PathBuf>,

        #[command(flatten)]
        analyzer: AnalyzerArgs,
    },

    /// Decompose a CREATE TABLE statement
    CreateTable {
        /// Statement file (reads stdin when omitted)
        #[arg(short, long)]
        input: Option<PathBuf>,
    },

    /// Analyze scripts statement by statement
    Analyze {
        /// Script files, directories or glob patterns (reads stdin when omitted)
        inputs: Vec<String>,

        #[command(flatten)]
        analyzer: AnalyzerArgs,

        /// Enable verbose output
        #[arg(short, long)]
        verbose: bool,
    },
}

fn read_input(input: Option<PathBuf>) -> Result<String> {
    match input {
        Some(path) => Ok(source::read_script(&path)?),
        None => {
            let mut text = String::new();
            std::io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Split { input } => {
            let text = read_input(input)?;
            for (i, statement) in split_statements(&text)?.iter().enumerate() {
                println!("[{}] {}", i + 1, statement.trim());
            }
        }
        Commands::Flatten { input, analyzer } => {
            let text = read_input(input)?;
            let config = analyzer.to_config();
            for (i, fragment) in flatten_query_with_limit(&text, config.max_depth)?
                .iter()
                .enumerate()
            {
                println!("[{}] {}", i + 1, fragment.trim());
            }
        }
        Commands::Aliases { input, analyzer } => {
            let text = read_input(input)?;
            for (alias, table) in resolve_aliases_with(&text, &analyzer.to_config())? {
                println!("{} -> {}", alias, table);
            }
        }
        Commands::CreateTable { input } => {
            let text = read_input(input)?;
            let table = parse_create_table(&text)?;
            println!("table: {}", table.table_name);
            if let Some(parent) = &table.like_table {
                println!("like: {}", parent);
            }
            for definition in &table.column_definitions {
                let column = parse_column_definition(definition);
                println!(
                    "  name={:?} type={:?} null={:?} default={:?} trailing={:?}",
                    column.name,
                    column.data_type,
                    column.nullability,
                    column.default_clause,
                    column.trailing
                );
            }
        }
        Commands::Analyze {
            inputs,
            analyzer,
            verbose,
        } => {
            let config = analyzer.to_config();
            let scripts = if inputs.is_empty() {
                vec![analyze_text(&read_input(None)?, &config)?]
            } else {
                analyze_files(&AnalyzeOptions {
                    inputs,
                    config,
                    verbose,
                })?
            };
            report::print_report(&scripts);
        }
    }

    Ok(())
}
