//! Live filesystem adapter using `std::fs`.

use std::path::Path;

use tracing::warn;

use crate::ports::filesystem::{EntryKind, FileSystem, PortError};

/// Live filesystem adapter backed by real disk I/O.
#[derive(Debug, Clone, Copy, Default)]
pub struct LiveFileSystem;

impl FileSystem for LiveFileSystem {
    fn list_dir(&self, path: &Path) -> Result<Vec<String>, PortError> {
        let mut entries = Vec::new();
        for entry in std::fs::read_dir(path)? {
            let entry = entry?;
            match entry.file_name().into_string() {
                Ok(name) => entries.push(name),
                Err(raw) => warn!(dir = %path.display(), name = ?raw, "skipping non-UTF-8 entry"),
            }
        }
        Ok(entries)
    }

    fn kind(&self, path: &Path) -> Result<EntryKind, PortError> {
        let file_type = std::fs::metadata(path)?.file_type();
        Ok(if file_type.is_dir() {
            EntryKind::Dir
        } else if file_type.is_file() {
            EntryKind::File
        } else {
            EntryKind::Other
        })
    }

    fn create_dir_all(&self, path: &Path) -> Result<(), PortError> {
        Ok(std::fs::create_dir_all(path)?)
    }

    fn exists(&self, path: &Path) -> Result<bool, PortError> {
        Ok(path.try_exists()?)
    }

    fn read_to_string(&self, path: &Path) -> Result<String, PortError> {
        Ok(std::fs::read_to_string(path)?)
    }

    fn write(&self, path: &Path, contents: &str) -> Result<(), PortError> {
        Ok(std::fs::write(path, contents)?)
    }
}
