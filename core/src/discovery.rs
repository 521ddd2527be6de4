//! Locating Criterion result files.

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Directory name Criterion uses for the most recent measurement of a benchmark.
pub const LATEST_DIR: &str = "new";
pub const METADATA_FILE: &str = "benchmark.json";
pub const ESTIMATES_FILE: &str = "estimates.json";

/// The pair of files Criterion writes for one benchmark run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchmarkFiles {
    pub metadata: PathBuf,
    pub estimates: PathBuf,
}

impl BenchmarkFiles {
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            metadata: dir.join(METADATA_FILE),
            estimates: dir.join(ESTIMATES_FILE),
        }
    }
}

/// Walks a Criterion output tree and yields one [`BenchmarkFiles`] per `new` directory.
///
/// The files themselves are not checked here; a missing one surfaces when it is read.
#[derive(Debug, Clone)]
pub struct Discovery {
    root: PathBuf,
}

impl Discovery {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Start a fresh walk. Each call restarts from the root.
    ///
    /// A missing or unreadable root produces an empty sequence. Entries are
    /// visited in file name order so that the same tree always yields the
    /// same sequence.
    pub fn iter(&self) -> impl Iterator<Item = BenchmarkFiles> + use<> {
        let root = self.root.clone();
        WalkDir::new(&self.root)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter()
            .filter_map(move |entry| match entry {
                Ok(entry) => Some(entry),
                Err(err) => {
                    if err.depth() == 0 {
                        tracing::debug!(root = %root.display(), error = %err, "criterion root not readable");
                    } else {
                        tracing::warn!(error = %err, "skipping unreadable entry");
                    }
                    None
                }
            })
            .filter(|entry| entry.file_type().is_dir() && entry.file_name() == LATEST_DIR)
            .map(|entry| BenchmarkFiles::in_dir(entry.path()))
    }
}
