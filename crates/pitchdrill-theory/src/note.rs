//! Pitch addressing for the drill note space.
//!
//! The note space is 12 chromatic pitch classes (sharps preferred) across
//! octaves 2..=6, giving 60 addressable notes ordered by a linear semitone
//! index. All interval arithmetic and range checks happen on that index.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Chromatic pitch class spellings, sharps preferred.
pub const PITCH_CLASSES: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

/// Lowest supported octave.
pub const OCTAVE_MIN: i32 = 2;

/// Highest supported octave.
pub const OCTAVE_MAX: i32 = 6;

/// Total number of addressable notes (12 pitch classes x 5 octaves).
pub const NOTE_COUNT: usize = 12 * (OCTAVE_MAX - OCTAVE_MIN + 1) as usize;

/// Semitone offsets for note letters (C=0, D=2, E=4, F=5, G=7, A=9, B=11).
const SEMITONE_MAP: [(char, i32); 7] = [
    ('C', 0),
    ('D', 2),
    ('E', 4),
    ('F', 5),
    ('G', 7),
    ('A', 9),
    ('B', 11),
];

/// An addressable pitch: pitch class + octave.
///
/// Stored as the linear semitone index within the supported range, so
/// ordering and interval arithmetic are plain integer operations.
///
/// # Examples
/// ```
/// use pitchdrill_theory::note::NoteId;
///
/// let c4 = NoteId::parse("C4").unwrap();
/// let e4 = c4.transpose(4).unwrap();
/// assert_eq!(e4.name(), "E4");
/// assert_eq!(e4.index() - c4.index(), 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct NoteId(u8);

impl NoteId {
    /// Creates a note from a pitch-class index (0..12) and octave.
    ///
    /// Returns `None` when the octave lies outside the supported range.
    pub fn new(pitch_class: usize, octave: i32) -> Option<Self> {
        if pitch_class >= 12 || !(OCTAVE_MIN..=OCTAVE_MAX).contains(&octave) {
            return None;
        }
        Some(Self(((octave - OCTAVE_MIN) * 12 + pitch_class as i32) as u8))
    }

    /// Creates a note from its linear semitone index (0..NOTE_COUNT).
    pub fn from_index(index: usize) -> Option<Self> {
        if index < NOTE_COUNT {
            Some(Self(index as u8))
        } else {
            None
        }
    }

    /// Linear semitone index within the note space.
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// Pitch-class index (0 = C .. 11 = B).
    pub fn pitch_class(self) -> usize {
        self.0 as usize % 12
    }

    /// Octave number.
    pub fn octave(self) -> i32 {
        self.0 as i32 / 12 + OCTAVE_MIN
    }

    /// Canonical name, e.g. `"C#4"`.
    pub fn name(self) -> String {
        format!("{}{}", PITCH_CLASSES[self.pitch_class()], self.octave())
    }

    /// Filesystem-safe name with `#` spelled out, e.g. `"Csharp4"`.
    pub fn safe_name(self) -> String {
        self.name().replace('#', "sharp")
    }

    /// Moves by a signed number of semitones, `None` when out of range.
    pub fn transpose(self, semitones: i32) -> Option<Self> {
        let idx = self.0 as i32 + semitones;
        if (0..NOTE_COUNT as i32).contains(&idx) {
            Some(Self(idx as u8))
        } else {
            None
        }
    }

    /// Parses a note name such as `"C4"`, `"A#3"` or `"Bb5"`.
    ///
    /// Flats are accepted on input and resolved to the sharp spelling.
    /// Returns `None` for malformed names or out-of-range octaves.
    pub fn parse(name: &str) -> Option<Self> {
        let name = name.trim();
        let mut chars = name.chars();
        let letter = chars.next()?.to_ascii_uppercase();
        let semitone = SEMITONE_MAP
            .iter()
            .find(|(c, _)| *c == letter)
            .map(|(_, s)| *s)?;

        let rest: Vec<char> = chars.collect();
        let (semitone, octave_start) = match rest.first().copied() {
            Some('#') => (semitone + 1, 1),
            Some('b') if rest.len() > 1 => (semitone - 1, 1),
            _ => (semitone, 0),
        };

        let octave_str: String = rest[octave_start..].iter().collect();
        let octave: i32 = octave_str.parse().ok()?;

        // Cb and B# wrap across the octave boundary
        let (semitone, octave) = match semitone {
            -1 => (11, octave - 1),
            12 => (0, octave + 1),
            s => (s, octave),
        };

        Self::new(semitone as usize, octave)
    }

    /// Iterates over every note in the space, in index order.
    pub fn all() -> impl Iterator<Item = NoteId> {
        (0..NOTE_COUNT).map(|i| NoteId(i as u8))
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl TryFrom<String> for NoteId {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        NoteId::parse(&value).ok_or_else(|| format!("invalid note name: {value}"))
    }
}

impl From<NoteId> for String {
    fn from(note: NoteId) -> Self {
        note.name()
    }
}

/// Returns the pitch-class index for a key name (`"C"`, `"F#"`, ...).
pub fn pitch_class_index(key: &str) -> Option<usize> {
    PITCH_CLASSES.iter().position(|&p| p == key)
}
