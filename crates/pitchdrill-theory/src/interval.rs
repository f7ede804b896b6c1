//! Interval catalogue and playback direction.

use serde::{Deserialize, Serialize};

/// A named semitone distance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntervalType {
    /// Canonical identifier used in requests, answers and grading.
    pub name: &'static str,
    /// Human-facing label.
    pub display: &'static str,
    /// Semitone distance, 0..=12.
    pub semitones: u8,
}

/// The full interval catalogue, exactly one entry per semitone distance.
///
/// `unison` is addressable for display lookups but is never a valid
/// question answer.
pub const INTERVALS: [IntervalType; 13] = [
    IntervalType { name: "unison", display: "Unison", semitones: 0 },
    IntervalType { name: "minor_second", display: "Minor Second", semitones: 1 },
    IntervalType { name: "major_second", display: "Major Second", semitones: 2 },
    IntervalType { name: "minor_third", display: "Minor Third", semitones: 3 },
    IntervalType { name: "major_third", display: "Major Third", semitones: 4 },
    IntervalType { name: "perfect_fourth", display: "Perfect Fourth", semitones: 5 },
    IntervalType { name: "tritone", display: "Tritone", semitones: 6 },
    IntervalType { name: "perfect_fifth", display: "Perfect Fifth", semitones: 7 },
    IntervalType { name: "minor_sixth", display: "Minor Sixth", semitones: 8 },
    IntervalType { name: "major_sixth", display: "Major Sixth", semitones: 9 },
    IntervalType { name: "minor_seventh", display: "Minor Seventh", semitones: 10 },
    IntervalType { name: "major_seventh", display: "Major Seventh", semitones: 11 },
    IntervalType { name: "octave", display: "Octave", semitones: 12 },
];

/// Looks up an interval by its canonical name.
pub fn interval_by_name(name: &str) -> Option<&'static IntervalType> {
    INTERVALS.iter().find(|i| i.name == name)
}

/// Looks up the interval for a semitone distance.
pub fn interval_for_semitones(semitones: u8) -> Option<&'static IntervalType> {
    INTERVALS.iter().find(|i| i.semitones == semitones)
}

/// Iterates over the intervals that are valid question answers (no unison).
pub fn answer_intervals() -> impl Iterator<Item = &'static IntervalType> {
    INTERVALS.iter().filter(|i| i.semitones != 0)
}

/// Playback direction of the second note relative to the first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    /// Canonical identifier.
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
        }
    }

    /// Parses a canonical identifier.
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "up" => Some(Direction::Up),
            "down" => Some(Direction::Down),
            _ => None,
        }
    }

    /// Signed semitone multiplier for interval arithmetic.
    pub fn sign(self) -> i32 {
        match self {
            Direction::Up => 1,
            Direction::Down => -1,
        }
    }
}
