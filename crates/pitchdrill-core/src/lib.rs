//! Pitchdrill Core - Question Sampling, Distractors and Grading
//!
//! The drill core turns a request descriptor into one well-formed question:
//! an audible stimulus plus a multiple-choice answer set with exactly one
//! correct option, and grades the submitted answer afterwards.
//!
//! # Determinism
//!
//! Sampling is uniform over the enumerated legal instance space and flows
//! through a seeded PCG32 generator, so any question can be replayed from
//! its seed. Audio artifacts come from the content-addressed cache in
//! `pitchdrill-audio` and are byte-identical per key.
//!
//! # Module Structure
//!
//! - [`constraints`]: request descriptors and catalogue validation
//! - [`sampler`]: uniform sampling per exercise family
//! - [`distractor`]: 4-option answer-set assembly
//! - [`service`]: orchestration and payload assembly
//! - [`grading`]: canonical-identifier grading with display labels
//! - [`outcome`]: attribution records for the external history sink
//! - [`rng`]: seeded RNG with BLAKE3 stream derivation
//!
//! # Example
//!
//! ```ignore
//! use pitchdrill_audio::{ArtifactCache, AudioAssetStore};
//! use pitchdrill_core::{QuestionRequest, QuestionService, IntervalConstraints};
//!
//! let store = AudioAssetStore::new("assets/notes");
//! let service = QuestionService::new(ArtifactCache::new(store, "assets/cache"));
//! let request = QuestionRequest::Interval(IntervalConstraints::default());
//! let question = service.generate(&request, 42)?;
//! println!("{}", serde_json::to_string(&question)?);
//! ```

pub mod constraints;
pub mod distractor;
pub mod error;
pub mod grading;
pub mod outcome;
pub mod question;
pub mod rng;
pub mod sampler;
pub mod service;

// Re-export the request/response surface at the crate root
pub use constraints::{
    ChordQualityConstraints, Family, IntervalConstraints, QuestionRequest, ScaleDegreeConstraints,
};
pub use error::{DrillError, DrillResult};
pub use grading::{display_label, grade, GradeOutcome};
pub use outcome::{MemoryOutcomeSink, NullOutcomeSink, OutcomeRecord, OutcomeSink};
pub use question::{AudioRef, AudioRole, QuestionResponse};
pub use service::{GradeRequest, QuestionService, CHORD_MS, INTERVAL_NOTE_MS, SCALE_NOTE_MS};
