//! Filesystem port for directory listing and file I/O.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Error type returned by every port method.
pub type PortError = Box<dyn std::error::Error + Send + Sync>;

/// What a path resolves to after following symlinks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    /// A directory.
    Dir,
    /// A regular file.
    File,
    /// Anything else (sockets, fifos, devices).
    Other,
}

/// Provides filesystem access for scanning directories and writing the index.
///
/// Abstracting the filesystem allows deterministic replay and testing
/// without touching the real disk.
pub trait FileSystem: Send + Sync {
    /// Lists the entry names of a directory, in no particular order.
    ///
    /// # Errors
    ///
    /// Returns an error if the path is not a directory or cannot be read.
    fn list_dir(&self, path: &Path) -> Result<Vec<String>, PortError>;

    /// Resolves what kind of entry lives at `path`, following symlinks.
    ///
    /// # Errors
    ///
    /// Returns an error if the path cannot be stat'ed (missing, dangling link, permissions).
    fn kind(&self, path: &Path) -> Result<EntryKind, PortError>;

    /// Creates a directory and all missing parents. Succeeds if it already exists.
    ///
    /// # Errors
    ///
    /// Returns an error if any component cannot be created.
    fn create_dir_all(&self, path: &Path) -> Result<(), PortError>;

    /// Returns `true` if the path exists on the filesystem.
    ///
    /// # Errors
    ///
    /// Returns an error if existence cannot be determined (e.g. permission denied on a parent).
    fn exists(&self, path: &Path) -> Result<bool, PortError>;

    /// Reads the entire contents of a file as a UTF-8 string.
    ///
    /// # Errors
    ///
    /// Returns an error if the file does not exist or is not valid UTF-8.
    fn read_to_string(&self, path: &Path) -> Result<String, PortError>;

    /// Writes the given contents to a file, creating or overwriting it.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails (permissions, disk full, etc.).
    fn write(&self, path: &Path, contents: &str) -> Result<(), PortError>;
}
