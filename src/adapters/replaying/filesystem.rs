//! Replaying adapter for the `FileSystem` port.

use std::path::Path;
use std::sync::Mutex;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::cassette::format::{decode_result, path_input, write_input, FS_PORT};
use crate::cassette::replayer::CassetteReplayer;
use crate::ports::filesystem::{EntryKind, FileSystem, PortError};

/// Replays recorded filesystem operations from a cassette.
///
/// Each call must ask for the same path (and, for writes, the same contents
/// when the cassette has them) as the recorded call it is answered by.
pub struct ReplayingFileSystem {
    replayer: Mutex<CassetteReplayer>,
}

impl ReplayingFileSystem {
    /// Creates a new replaying filesystem from a cassette replayer.
    #[must_use]
    pub fn new(replayer: CassetteReplayer) -> Self {
        Self {
            replayer: Mutex::new(replayer),
        }
    }

    fn replay<T: DeserializeOwned>(&self, method: &str, input: &Value) -> Result<T, PortError> {
        let interaction = self
            .replayer
            .lock()
            .map_err(|_| "cassette replayer lock poisoned")?
            .next_interaction(FS_PORT, method, input)?;
        decode_result(&interaction.output, method)
    }
}

impl FileSystem for ReplayingFileSystem {
    fn list_dir(&self, path: &Path) -> Result<Vec<String>, PortError> {
        self.replay("list_dir", &path_input(path))
    }

    fn kind(&self, path: &Path) -> Result<EntryKind, PortError> {
        self.replay("kind", &path_input(path))
    }

    fn create_dir_all(&self, path: &Path) -> Result<(), PortError> {
        self.replay("create_dir_all", &path_input(path))
    }

    fn exists(&self, path: &Path) -> Result<bool, PortError> {
        self.replay("exists", &path_input(path))
    }

    fn read_to_string(&self, path: &Path) -> Result<String, PortError> {
        self.replay("read_to_string", &path_input(path))
    }

    fn write(&self, path: &Path, contents: &str) -> Result<(), PortError> {
        self.replay("write", &write_input(path, contents))
    }
}
