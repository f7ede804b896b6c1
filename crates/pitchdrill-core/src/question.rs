//! Question payload types returned to callers.

use serde::Serialize;

use crate::constraints::Family;

/// What a referenced clip is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AudioRole {
    /// The stimulus to identify.
    Question,
    /// Reference: the key's root note.
    Root,
    /// Reference: the full scale walk.
    Scale,
}

/// A role-tagged reference to a playable clip.
#[derive(Debug, Clone, Serialize)]
pub struct AudioRef {
    pub role: AudioRole,
    /// Path resolvable by the caller's playback layer.
    pub path: String,
}

impl AudioRef {
    pub fn new(role: AudioRole, path: impl Into<String>) -> Self {
        Self {
            role,
            path: path.into(),
        }
    }
}

/// The assembled question returned by [`crate::service::QuestionService`].
///
/// No server-side state outlives this payload; the caller echoes
/// `correct_value` back when grading.
#[derive(Debug, Clone, Serialize)]
pub struct QuestionResponse {
    pub family: Family,
    /// One or more clips, the stimulus first.
    pub audio: Vec<AudioRef>,
    /// Display labels, one per option, question order.
    pub options: Vec<String>,
    /// Canonical values aligned with `options`.
    pub option_values: Vec<String>,
    /// Canonical correct answer.
    pub correct_value: String,
    /// Display label of the correct answer.
    pub correct_display: String,
    /// Fine-grained attribution label for the history sink.
    pub sub_item: String,
    /// Seed that replays this question.
    pub seed: u32,
    /// Scale-degree questions: resolved scale display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale_name: Option<String>,
    /// Chord questions: the key root.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    /// Chord questions: the sampled roman numeral.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub numeral: Option<String>,
    /// Chord questions: the chord root note.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub root_note: Option<String>,
}
