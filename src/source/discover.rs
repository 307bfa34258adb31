//! Script discovery from command-line inputs

use std::path::{Path, PathBuf};

use crate::error::SqlScanError;

/// Expand inputs into a sorted, de-duplicated list of script files.
///
/// Each input is one of:
/// - a glob pattern (contains `*`, `?` or `[`), expanded and filtered to files
/// - a directory, walked recursively for `.sql` files
/// - a file path, taken as is regardless of extension
///
/// An input that resolves to no files is an error.
pub fn discover_scripts(inputs: &[String]) -> Result<Vec<PathBuf>, SqlScanError> {
    let mut scripts = Vec::new();

    for input in inputs {
        let found = if is_glob_pattern(input) {
            expand_glob(input)?
        } else {
            let path = Path::new(input);
            if path.is_dir() {
                walk_directory(path)
            } else if path.is_file() {
                vec![path.to_path_buf()]
            } else {
                Vec::new()
            }
        };

        if found.is_empty() {
            return Err(SqlScanError::NoScriptsFound {
                pattern: input.clone(),
            });
        }
        scripts.extend(found);
    }

    scripts.sort();
    scripts.dedup();
    Ok(scripts)
}

fn is_glob_pattern(input: &str) -> bool {
    input.contains(['*', '?', '['])
}

fn expand_glob(pattern: &str) -> Result<Vec<PathBuf>, SqlScanError> {
    let paths = glob::glob(pattern).map_err(|e| SqlScanError::InvalidPattern {
        pattern: pattern.to_string(),
        message: e.to_string(),
    })?;

    Ok(paths
        .filter_map(|p| p.ok())
        .filter(|p| p.is_file())
        .collect())
}

fn walk_directory(dir: &Path) -> Vec<PathBuf> {
    walkdir::WalkDir::new(dir)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| e.into_path())
        .filter(|p| {
            p.extension()
                .map_or(false, |ext| ext.eq_ignore_ascii_case("sql"))
        })
        .collect()
}
