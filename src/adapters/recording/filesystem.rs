//! Recording adapter for the `FileSystem` port.

use std::path::Path;
use std::sync::{Arc, Mutex};

use serde::Serialize;
use serde_json::Value;
use tracing::warn;

use crate::cassette::format::{encode_result, path_input, write_input, FS_PORT};
use crate::cassette::recorder::CassetteRecorder;
use crate::ports::{EntryKind, FileSystem, PortError};

/// Records filesystem interactions while delegating to an inner implementation.
pub struct RecordingFileSystem {
    inner: Box<dyn FileSystem>,
    recorder: Arc<Mutex<CassetteRecorder>>,
}

impl RecordingFileSystem {
    /// Creates a new recording filesystem wrapping the given implementation.
    pub fn new(inner: Box<dyn FileSystem>, recorder: Arc<Mutex<CassetteRecorder>>) -> Self {
        Self { inner, recorder }
    }

    /// Appends one call to the cassette and hands the result back unchanged.
    fn record<T: Serialize>(
        &self,
        method: &str,
        input: Value,
        result: Result<T, PortError>,
    ) -> Result<T, PortError> {
        let output = encode_result(&result);
        match self.recorder.lock() {
            Ok(mut recorder) => recorder.record(FS_PORT, method, input, output),
            Err(_) => warn!(method, "cassette recorder lock poisoned, call not recorded"),
        }
        result
    }
}

impl FileSystem for RecordingFileSystem {
    fn list_dir(&self, path: &Path) -> Result<Vec<String>, PortError> {
        self.record("list_dir", path_input(path), self.inner.list_dir(path))
    }

    fn kind(&self, path: &Path) -> Result<EntryKind, PortError> {
        self.record("kind", path_input(path), self.inner.kind(path))
    }

    fn create_dir_all(&self, path: &Path) -> Result<(), PortError> {
        self.record("create_dir_all", path_input(path), self.inner.create_dir_all(path))
    }

    fn exists(&self, path: &Path) -> Result<bool, PortError> {
        self.record("exists", path_input(path), self.inner.exists(path))
    }

    fn read_to_string(&self, path: &Path) -> Result<String, PortError> {
        self.record("read_to_string", path_input(path), self.inner.read_to_string(path))
    }

    fn write(&self, path: &Path, contents: &str) -> Result<(), PortError> {
        self.record("write", write_input(path, contents), self.inner.write(path, contents))
    }
}
