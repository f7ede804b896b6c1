//! Error types for the audio layer.

use thiserror::Error;

/// Result type for audio operations.
pub type AudioResult<T> = Result<T, AudioError>;

/// Errors that can occur while resolving or synthesizing artifacts.
#[derive(Debug, Error)]
pub enum AudioError {
    /// A required single-note source recording is absent from the store.
    #[error("missing source recording for note {note}")]
    MissingSource {
        /// Canonical name of the absent note.
        note: String,
    },

    /// Composite synthesis or the artifact write failed.
    #[error("synthesis failed: {message}")]
    Synthesis {
        /// Error message.
        message: String,
    },

    /// I/O error from the underlying storage.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl AudioError {
    /// Creates a missing-source error for a note.
    pub fn missing_source(note: impl Into<String>) -> Self {
        Self::MissingSource { note: note.into() }
    }

    /// Creates a synthesis error.
    pub fn synthesis(message: impl Into<String>) -> Self {
        Self::Synthesis {
            message: message.into(),
        }
    }

    /// Returns the stable error code for structured reporting.
    pub fn code(&self) -> &'static str {
        match self {
            AudioError::MissingSource { .. } => "AUDIO_001",
            AudioError::Synthesis { .. } => "AUDIO_002",
            AudioError::Io(_) => "AUDIO_003",
        }
    }
}
