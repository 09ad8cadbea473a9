//! Serialization and emission of a built index.

use std::path::PathBuf;

use serde::Serialize;
use tracing::{debug, info};

use super::{IndexError, IndexResult};
use crate::config::{IndexConfig, OutputMode};
use crate::ports::FileSystem;

/// Where a rendered index ended up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Emitted {
    /// Written to `index.json` at this path.
    Written(PathBuf),
    /// Not written; the rendered JSON is handed back for printing.
    Printed(String),
    /// The existing file at this path already matches.
    UpToDate(PathBuf),
}

/// A built index together with what happened to its JSON.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Indexed<T> {
    /// The index that was built.
    pub index: T,
    /// Outcome of emitting it.
    pub emitted: Emitted,
}

/// Renders an index as 2-space indented JSON without a trailing newline.
///
/// # Errors
///
/// Returns [`IndexError::Serialize`] if serialization fails.
pub fn render<T: Serialize>(value: &T) -> IndexResult<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Renders `index` and handles it according to `config.mode`.
///
/// # Errors
///
/// Fails when the write fails, or in check mode when the file on disk differs.
pub fn emit<T: Serialize>(
    fs: &dyn FileSystem,
    config: &IndexConfig,
    index: T,
) -> IndexResult<Indexed<T>> {
    let json = render(&index)?;
    let path = config.index_path();

    let emitted = match config.mode {
        OutputMode::Write => {
            fs.write(&path, &json).map_err(|source| IndexError::Write {
                path: path.clone(),
                source,
            })?;
            info!(path = %path.display(), bytes = json.len(), "index written");
            Emitted::Written(path)
        }
        OutputMode::DryRun => Emitted::Printed(json),
        OutputMode::Check => {
            let current = match fs.read_to_string(&path) {
                Ok(current) => Some(current),
                Err(err) => {
                    debug!(path = %path.display(), error = %err, "existing index unreadable");
                    None
                }
            };
            if current.as_deref() != Some(json.as_str()) {
                return Err(IndexError::Stale { path });
            }
            Emitted::UpToDate(path)
        }
    };

    Ok(Indexed { index, emitted })
}
