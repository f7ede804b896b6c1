//! Pitchdrill Theory - Note Space and Static Catalogues
//!
//! This crate describes the addressable pitches and the music theory tables
//! the drill generator draws from:
//!
//! - [`note`]: pitch addressing (12 pitch classes x octaves 2..=6)
//! - [`interval`]: the interval catalogue and playback direction
//! - [`scale`]: scale patterns with degree labels
//! - [`chord`]: chord qualities and the diatonic roman-numeral table
//!
//! Everything here is pure data with lookup helpers. The tables are
//! compiled into the binary; there is no startup initialization and no
//! mutation at runtime.

pub mod chord;
pub mod interval;
pub mod note;
pub mod scale;

// Re-export the types used throughout the workspace
pub use chord::{
    chord_by_name, numeral_by_name, ChordType, RomanNumeralEntry, CHORDS, DEFAULT_NUMERALS,
    MAJOR_KEY_NUMERALS,
};
pub use interval::{
    answer_intervals, interval_by_name, interval_for_semitones, Direction, IntervalType, INTERVALS,
};
pub use note::{pitch_class_index, NoteId, NOTE_COUNT, OCTAVE_MAX, OCTAVE_MIN, PITCH_CLASSES};
pub use scale::{scale_by_name, ScaleType, SCALES};
