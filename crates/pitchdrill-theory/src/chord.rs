//! Chord-quality catalogue and the diatonic roman-numeral table.

/// A chord quality: stacked semitone offsets from the root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChordType {
    /// Canonical identifier used in requests, answers and grading.
    pub name: &'static str,
    /// Human-facing label.
    pub display: &'static str,
    /// Offsets from the root, first always 0; may exceed 12 for extensions.
    pub pattern: &'static [u8],
}

/// The chord-quality catalogue.
pub const CHORDS: [ChordType; 10] = [
    ChordType { name: "major", display: "Major", pattern: &[0, 4, 7] },
    ChordType { name: "minor", display: "Minor", pattern: &[0, 3, 7] },
    ChordType { name: "diminished", display: "Diminished", pattern: &[0, 3, 6] },
    ChordType { name: "augmented", display: "Augmented", pattern: &[0, 4, 8] },
    ChordType { name: "sus2", display: "Suspended 2nd", pattern: &[0, 2, 7] },
    ChordType { name: "sus4", display: "Suspended 4th", pattern: &[0, 5, 7] },
    ChordType { name: "major7th", display: "Major 7th", pattern: &[0, 4, 7, 11] },
    ChordType { name: "minor7th", display: "Minor 7th", pattern: &[0, 3, 7, 10] },
    ChordType { name: "dominant7th", display: "Dominant 7th", pattern: &[0, 4, 7, 10] },
    ChordType { name: "diminished7th", display: "Diminished 7th", pattern: &[0, 3, 6, 9] },
];

/// A diatonic chord of the major key: numeral, scale-degree offset, quality.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RomanNumeralEntry {
    /// Numeral label, case encodes quality (I, ii, vii°, ...).
    pub numeral: &'static str,
    /// Semitone offset of the chord root within the key, 0..12.
    pub degree_offset: u8,
    /// Canonical name of the chord quality built on that degree.
    pub chord: &'static str,
}

/// Diatonic harmonization of the major scale.
pub const MAJOR_KEY_NUMERALS: [RomanNumeralEntry; 7] = [
    RomanNumeralEntry { numeral: "I", degree_offset: 0, chord: "major" },
    RomanNumeralEntry { numeral: "ii", degree_offset: 2, chord: "minor" },
    RomanNumeralEntry { numeral: "iii", degree_offset: 4, chord: "minor" },
    RomanNumeralEntry { numeral: "IV", degree_offset: 5, chord: "major" },
    RomanNumeralEntry { numeral: "V", degree_offset: 7, chord: "major" },
    RomanNumeralEntry { numeral: "vi", degree_offset: 9, chord: "minor" },
    RomanNumeralEntry { numeral: "vii\u{00b0}", degree_offset: 11, chord: "diminished" },
];

/// Numerals offered by default when a request does not narrow the set.
pub const DEFAULT_NUMERALS: [&str; 6] = ["I", "ii", "iii", "IV", "V", "vi"];

/// Looks up a chord quality by its canonical name.
pub fn chord_by_name(name: &str) -> Option<&'static ChordType> {
    CHORDS.iter().find(|c| c.name == name)
}

/// Looks up a diatonic entry by its numeral label.
pub fn numeral_by_name(numeral: &str) -> Option<&'static RomanNumeralEntry> {
    MAJOR_KEY_NUMERALS.iter().find(|n| n.numeral == numeral)
}
