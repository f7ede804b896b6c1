//! Error taxonomy for question generation and grading.

use pitchdrill_audio::AudioError;
use thiserror::Error;

/// Result type for drill operations.
pub type DrillResult<T> = Result<T, DrillError>;

/// Errors surfaced to the caller of the drill core.
///
/// Every variant is reported structurally (code + message); none is fatal
/// to the process, each request being independent.
#[derive(Debug, Error)]
pub enum DrillError {
    /// The caller referenced something outside the static catalogues.
    #[error("invalid constraint: {message}")]
    InvalidConstraint {
        /// What was rejected.
        message: String,
    },

    /// The enumerated legal instance space is empty.
    #[error("no valid instances for the given constraints")]
    NoValidInstances,

    /// A required single-note recording is absent from the asset store.
    #[error("missing source recording for note {note}")]
    MissingSource {
        /// Canonical name of the absent note.
        note: String,
    },

    /// Composite-clip synthesis or persistence failed.
    #[error("synthesis failed: {message}")]
    SynthesisFailed {
        /// Error message.
        message: String,
    },
}

impl DrillError {
    /// Creates an invalid-constraint error.
    pub fn invalid_constraint(message: impl Into<String>) -> Self {
        Self::InvalidConstraint {
            message: message.into(),
        }
    }

    /// Stable error code for structured reporting.
    pub fn code(&self) -> &'static str {
        match self {
            DrillError::InvalidConstraint { .. } => "DRILL_001",
            DrillError::NoValidInstances => "DRILL_002",
            DrillError::MissingSource { .. } => "DRILL_003",
            DrillError::SynthesisFailed { .. } => "DRILL_004",
        }
    }

    /// Whether retrying the identical request can succeed.
    ///
    /// Synthesis is idempotent, so a failed write is safe to retry; the
    /// other variants require the caller to change the request or fix the
    /// asset library.
    pub fn retryable(&self) -> bool {
        matches!(self, DrillError::SynthesisFailed { .. })
    }
}

impl From<AudioError> for DrillError {
    fn from(err: AudioError) -> Self {
        match err {
            AudioError::MissingSource { note } => DrillError::MissingSource { note },
            AudioError::Synthesis { message } => DrillError::SynthesisFailed { message },
            AudioError::Io(e) => DrillError::SynthesisFailed {
                message: e.to_string(),
            },
        }
    }
}
