//! Common test utilities for rust-sqlscan tests

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use rust_sqlscan::{analyze_files, AnalyzeOptions, ScriptAnalysis};

/// Test context with temporary directory for isolated test execution
pub struct TestContext {
    /// Kept to prevent temp directory cleanup until TestContext is dropped
    _temp_dir: TempDir,
    pub root: PathBuf,
}

impl TestContext {
    /// Create an empty context
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let root = temp_dir.path().to_path_buf();
        Self {
            _temp_dir: temp_dir,
            root,
        }
    }

    /// Write `content` to `relative` under the context root, creating parent directories
    pub fn write_script(&self, relative: &str, content: impl AsRef<[u8]>) -> PathBuf {
        let path = self.root.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create script directory");
        }
        fs::write(&path, content).expect("Failed to write script");
        path
    }

    /// Input string for a path under the context root
    pub fn input(&self, relative: &str) -> String {
        path_string(&self.root.join(relative))
    }

    /// Analyze the given inputs with default settings, panicking on failure
    pub fn analyze(&self, inputs: &[String]) -> Vec<ScriptAnalysis> {
        let options = AnalyzeOptions {
            inputs: inputs.to_vec(),
            ..Default::default()
        };
        analyze_files(&options).unwrap_or_else(|e| panic!("Analysis failed: {:?}", e))
    }
}

pub fn path_string(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}
