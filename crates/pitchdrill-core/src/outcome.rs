//! Outcome attribution for the external history sink.
//!
//! The core never aggregates statistics; it only emits enough for the
//! surrounding application to attribute a result to the fine-grained
//! sub-item that was tested.

use serde::Serialize;

use crate::constraints::Family;

/// One graded answer, ready for attribution.
#[derive(Debug, Clone, Serialize)]
pub struct OutcomeRecord {
    pub family: Family,
    /// The specific interval/degree/chord-type tested.
    pub sub_item: String,
    pub correct_value: String,
    pub submitted_value: String,
    pub is_correct: bool,
}

/// Receiver for graded outcomes, owned by the surrounding application.
pub trait OutcomeSink {
    /// Records one outcome. Must not fail the grading request.
    fn record(&mut self, outcome: &OutcomeRecord);
}

/// Sink that discards everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullOutcomeSink;

impl OutcomeSink for NullOutcomeSink {
    fn record(&mut self, _outcome: &OutcomeRecord) {}
}

/// In-memory sink, mainly for tests.
#[derive(Debug, Default)]
pub struct MemoryOutcomeSink {
    pub records: Vec<OutcomeRecord>,
}

impl OutcomeSink for MemoryOutcomeSink {
    fn record(&mut self, outcome: &OutcomeRecord) {
        self.records.push(outcome.clone());
    }
}
