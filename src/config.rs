//! Indexer configuration and fixed names.

use std::path::{Path, PathBuf};

/// Scan root used when neither `--root` nor `SVG_INDEX_ROOT` is given.
pub const DEFAULT_ROOT: &str = "assets/svg";

/// File name of the generated index, written inside the scan root.
pub const INDEX_FILE_NAME: &str = "index.json";

/// Environment variable overriding the scan root.
pub const ROOT_ENV: &str = "SVG_INDEX_ROOT";

/// Environment variable naming a cassette file to record filesystem calls into.
pub const RECORD_ENV: &str = "SVG_INDEX_RECORD";

/// What to do with a freshly built index.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputMode {
    /// Overwrite `index.json` in the scan root.
    #[default]
    Write,
    /// Print the JSON to stdout and touch nothing.
    DryRun,
    /// Compare against the existing `index.json` and fail when it differs.
    Check,
}

/// Configuration shared by the tree and flat indexers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexConfig {
    /// Directory to scan.
    pub root: PathBuf,
    /// Output handling.
    pub mode: OutputMode,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self::new(DEFAULT_ROOT)
    }
}

impl IndexConfig {
    /// Creates a write-mode config for the given root.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            mode: OutputMode::Write,
        }
    }

    /// Returns the config with a different output mode.
    #[must_use]
    pub fn with_mode(mut self, mode: OutputMode) -> Self {
        self.mode = mode;
        self
    }

    /// Scan root.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Location of `index.json` inside the root.
    #[must_use]
    pub fn index_path(&self) -> PathBuf {
        self.root.join(INDEX_FILE_NAME)
    }
}
