//! Service context bundling the port trait objects.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::adapters::live::LiveFileSystem;
use crate::adapters::recording::RecordingFileSystem;
use crate::adapters::replaying::ReplayingFileSystem;
use crate::cassette::format::Cassette;
use crate::cassette::recorder::CassetteRecorder;
use crate::cassette::replayer::CassetteReplayer;
use crate::ports::filesystem::FileSystem;

/// Bundles the port trait objects into a single context.
///
/// Constructors wire up different adapter implementations (live, recording, replaying).
pub struct ServiceContext {
    /// Filesystem for directory scans and index I/O.
    pub fs: Box<dyn FileSystem>,
    /// Recorder shared with the recording adapter; written out by [`ServiceContext::finish`].
    recorder: Option<Arc<Mutex<CassetteRecorder>>>,
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext").field("recording", &self.recorder.is_some()).finish()
    }
}

impl ServiceContext {
    /// Creates a live context backed by the real filesystem.
    #[must_use]
    pub fn live() -> Self {
        Self {
            fs: Box::new(LiveFileSystem),
            recorder: None,
        }
    }

    /// Creates a recording context that captures every filesystem call.
    ///
    /// Uses the live adapter for actual work. The cassette is written to
    /// `path` when [`ServiceContext::finish`] is called.
    #[must_use]
    pub fn recording(path: &Path, root: &Path) -> Self {
        let recorder = Arc::new(Mutex::new(CassetteRecorder::new(
            path,
            "svg-index-session",
            root.display().to_string(),
        )));
        Self {
            fs: Box::new(RecordingFileSystem::new(Box::new(LiveFileSystem), Arc::clone(&recorder))),
            recorder: Some(recorder),
        }
    }

    /// Creates a replaying context from a cassette file.
    ///
    /// # Errors
    ///
    /// Returns an error if the cassette file cannot be read or parsed.
    pub fn replaying(path: &Path) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read cassette file {}: {e}", path.display()))?;
        let cassette: Cassette = serde_yaml::from_str(&content)
            .map_err(|e| format!("Failed to parse cassette file {}: {e}", path.display()))?;
        Ok(Self::from_cassette(&cassette))
    }

    /// Creates a replaying context from an already loaded cassette.
    #[must_use]
    pub fn from_cassette(cassette: &Cassette) -> Self {
        Self {
            fs: Box::new(ReplayingFileSystem::new(CassetteReplayer::new(cassette))),
            recorder: None,
        }
    }

    /// Returns `true` if this context records its interactions.
    #[must_use]
    pub fn is_recording(&self) -> bool {
        self.recorder.is_some()
    }

    /// Tears the context down, writing the cassette when recording.
    ///
    /// Returns the cassette path for recording contexts, `None` otherwise.
    ///
    /// # Errors
    ///
    /// Returns an error if the cassette cannot be written.
    pub fn finish(self) -> Result<Option<PathBuf>, String> {
        let Self { fs, recorder } = self;
        // The recording adapter holds the other Arc; release it first.
        drop(fs);

        let Some(recorder) = recorder else {
            return Ok(None);
        };
        let recorder = Arc::try_unwrap(recorder)
            .map_err(|_| "cassette recorder is still shared".to_string())?
            .into_inner()
            .map_err(|_| "cassette recorder lock poisoned".to_string())?;
        let path = recorder.finish().map_err(|e| format!("Failed to write cassette: {e}"))?;
        Ok(Some(path))
    }
}
