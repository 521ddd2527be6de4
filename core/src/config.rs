//! Run configuration.
//!
//! All locations the tool touches are carried in a [`ReportConfig`] that the
//! entry point builds and hands down; nothing below it looks at the process
//! location or environment.

use crate::error::{ReportError, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_CRITERION_DIR: &str = "target/criterion";
pub const DEFAULT_OUTPUT_PATH: &str = "benches/README.md";
pub const DEFAULT_TITLE: &str = "Benchmarks";
pub const DEFAULT_DESCRIPTION: &str = "All benchmarks run on a 2017 Macbook Pro with a 3.1 GHz Intel Core i7\n\
processor and 16 GB 2133 MHz LPDDR3 RAM.";

/// Conventional name of the optional configuration file.
pub const CONFIG_FILE_NAME: &str = "bench-readme.toml";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReportConfig {
    /// Root of the Criterion output tree that is searched for `new` directories.
    pub criterion_dir: PathBuf,
    /// Markdown file that receives the summary table.
    pub output_path: PathBuf,
    pub title: String,
    /// Free text placed between the title and the table, usually a hardware note.
    pub description: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            criterion_dir: PathBuf::from(DEFAULT_CRITERION_DIR),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            title: DEFAULT_TITLE.to_string(),
            description: DEFAULT_DESCRIPTION.to_string(),
        }
    }
}

impl ReportConfig {
    /// Default layout rooted at a project directory instead of the working directory.
    pub fn with_root(root: impl AsRef<Path>) -> Self {
        Self::default().rebased(root.as_ref())
    }

    /// Parse a TOML document. Missing keys keep their defaults.
    pub fn from_toml_str(text: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// Load a configuration file.
    ///
    /// Relative paths, including the defaults for keys the file leaves out,
    /// are resolved against the directory that holds the file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| ReportError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let config = Self::from_toml_str(&text).map_err(|e| ReportError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let base = path.parent().unwrap_or_else(|| Path::new(""));
        tracing::debug!(config = %path.display(), base = %base.display(), "loaded configuration");
        Ok(config.rebased(base))
    }

    pub fn with_criterion_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.criterion_dir = dir.into();
        self
    }

    pub fn with_output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = path.into();
        self
    }

    fn rebased(mut self, base: &Path) -> Self {
        if self.criterion_dir.is_relative() {
            self.criterion_dir = base.join(&self.criterion_dir);
        }
        if self.output_path.is_relative() {
            self.output_path = base.join(&self.output_path);
        }
        self
    }
}
