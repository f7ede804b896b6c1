//! Answer grading and display-label resolution.

use pitchdrill_theory::{chord_by_name, interval_by_name};
use serde::Serialize;

/// Outcome of grading one submission.
#[derive(Debug, Clone, Serialize)]
pub struct GradeOutcome {
    pub is_correct: bool,
    /// Display label of the submitted value.
    pub submitted_display: String,
    /// Display label of the correct value.
    pub correct_display: String,
}

/// Grades a submission against the echoed correct value.
///
/// Equality is exact string match on the canonical identifier, never on
/// display labels.
pub fn grade(submitted: &str, correct: &str) -> GradeOutcome {
    GradeOutcome {
        is_correct: submitted == correct,
        submitted_display: display_label(submitted),
        correct_display: display_label(correct),
    }
}

/// Resolves a canonical identifier to its display label.
///
/// Searches the interval then the chord catalogue; identifiers without a
/// catalogue label (scale degrees) are rendered verbatim.
pub fn display_label(value: &str) -> String {
    interval_by_name(value)
        .map(|i| i.display.to_string())
        .or_else(|| chord_by_name(value).map(|c| c.display.to_string()))
        .unwrap_or_else(|| value.to_string())
}
