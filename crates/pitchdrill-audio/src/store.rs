//! Read-only lookup from notes to their single-note source recordings.

use std::path::{Path, PathBuf};

use pitchdrill_theory::NoteId;

use crate::error::{AudioError, AudioResult};

/// Maps a note to the path of its source recording.
///
/// The store is a plain directory of WAV files named by the note's
/// filesystem-safe name (`Csharp4.wav`). It is never written to by this
/// crate; population is an operational concern.
#[derive(Debug, Clone)]
pub struct AudioAssetStore {
    root: PathBuf,
}

impl AudioAssetStore {
    /// Creates a store rooted at the given directory.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The store's root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path where the note's source recording is expected.
    pub fn source_path(&self, note: NoteId) -> PathBuf {
        self.root.join(format!("{}.wav", note.safe_name()))
    }

    /// Whether a source recording exists for the note.
    pub fn contains(&self, note: NoteId) -> bool {
        self.source_path(note).is_file()
    }

    /// Resolves the note's source path, failing when the recording is absent.
    pub fn require(&self, note: NoteId) -> AudioResult<PathBuf> {
        let path = self.source_path(note);
        if path.is_file() {
            Ok(path)
        } else {
            Err(AudioError::missing_source(note.name()))
        }
    }
}
