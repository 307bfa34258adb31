//! rust-sqlscan: grammar-free structural analysis of SQL scripts
//!
//! This library splits multi-statement scripts, flattens nested subqueries,
//! tokenizes FROM clauses, resolves table aliases and decomposes CREATE TABLE
//! statements, tolerating the malformed SQL people actually type.

pub mod analyzer;
pub mod error;
pub mod report;
pub mod source;
pub mod util;

use anyhow::{Context, Result};
use rayon::prelude::*;

pub use analyzer::AnalyzerConfig;
pub use error::SqlScanError;
pub use report::{analyze_script, ScriptAnalysis};

/// Minimum number of scripts to benefit from parallel analysis.
/// Below this threshold, sequential processing is faster due to rayon overhead.
const PARALLEL_THRESHOLD: usize = 8;

/// Options for analyzing script files
#[derive(Debug, Clone, Default)]
pub struct AnalyzeOptions {
    /// Files, directories or glob patterns
    pub inputs: Vec<String>,
    /// Analyzer settings
    pub config: AnalyzerConfig,
    /// Enable verbose output
    pub verbose: bool,
}

/// Analyze every script named by the options
pub fn analyze_files(options: &AnalyzeOptions) -> Result<Vec<ScriptAnalysis>> {
    // Step 1: Resolve inputs to script files
    let scripts = source::discover_scripts(&options.inputs)?;

    if options.verbose {
        eprintln!("Analyzing {} scripts", scripts.len());
    }

    // Step 2: Analyze each script
    let analyze_one = |path: &std::path::PathBuf| -> Result<ScriptAnalysis> {
        let text = source::read_script(path)?;
        let statements = analyze_script(&text, &options.config)
            .with_context(|| format!("Failed to analyze {}", path.display()))?;
        if options.verbose {
            eprintln!(
                "Split {} into {} statements",
                path.display(),
                statements.len()
            );
        }
        Ok(ScriptAnalysis {
            path: Some(path.clone()),
            statements,
        })
    };

    let results: Vec<Result<ScriptAnalysis>> = if scripts.len() >= PARALLEL_THRESHOLD {
        scripts.par_iter().map(analyze_one).collect()
    } else {
        scripts.iter().map(analyze_one).collect()
    };

    // Combine results, propagating the first error if any
    results.into_iter().collect()
}

/// Analyze script text that did not come from a file (e.g. stdin)
pub fn analyze_text(text: &str, config: &AnalyzerConfig) -> Result<ScriptAnalysis> {
    Ok(ScriptAnalysis {
        path: None,
        statements: analyze_script(text, config)?,
    })
}
