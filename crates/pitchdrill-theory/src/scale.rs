//! Scale catalogue: offset patterns with degree labels.

/// An ascending scale shape relative to its root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScaleType {
    /// Canonical identifier used in requests.
    pub name: &'static str,
    /// Human-facing label.
    pub display: &'static str,
    /// Semitone offsets from the root, strictly increasing, first 0, all < 12.
    pub pattern: &'static [u8],
    /// One degree label per offset, accidentals for non-major degrees.
    pub degrees: &'static [&'static str],
}

/// The scale catalogue.
///
/// `minor`, `natural_minor` and `aeolian` share one offset pattern but stay
/// distinct entries: each is a separately selectable drill setting.
pub const SCALES: [ScaleType; 9] = [
    ScaleType {
        name: "major",
        display: "Major",
        pattern: &[0, 2, 4, 5, 7, 9, 11],
        degrees: &["1", "2", "3", "4", "5", "6", "7"],
    },
    ScaleType {
        name: "minor",
        display: "Minor",
        pattern: &[0, 2, 3, 5, 7, 8, 10],
        degrees: &["1", "2", "b3", "4", "5", "b6", "b7"],
    },
    ScaleType {
        name: "natural_minor",
        display: "Natural Minor",
        pattern: &[0, 2, 3, 5, 7, 8, 10],
        degrees: &["1", "2", "b3", "4", "5", "b6", "b7"],
    },
    ScaleType {
        name: "aeolian",
        display: "Aeolian",
        pattern: &[0, 2, 3, 5, 7, 8, 10],
        degrees: &["1", "2", "b3", "4", "5", "b6", "b7"],
    },
    ScaleType {
        name: "pentatonic_major",
        display: "Major Pentatonic",
        pattern: &[0, 2, 4, 7, 9],
        degrees: &["1", "2", "3", "5", "6"],
    },
    ScaleType {
        name: "pentatonic_minor",
        display: "Minor Pentatonic",
        pattern: &[0, 3, 5, 7, 10],
        degrees: &["1", "b3", "4", "5", "b7"],
    },
    ScaleType {
        name: "dorian",
        display: "Dorian",
        pattern: &[0, 2, 3, 5, 7, 9, 10],
        degrees: &["1", "2", "b3", "4", "5", "6", "b7"],
    },
    ScaleType {
        name: "mixolydian",
        display: "Mixolydian",
        pattern: &[0, 2, 4, 5, 7, 9, 10],
        degrees: &["1", "2", "3", "4", "5", "6", "b7"],
    },
    ScaleType {
        name: "blues",
        display: "Blues",
        pattern: &[0, 3, 5, 6, 7, 10],
        degrees: &["1", "b3", "4", "b5", "5", "b7"],
    },
];

/// Looks up a scale by its canonical name.
pub fn scale_by_name(name: &str) -> Option<&'static ScaleType> {
    SCALES.iter().find(|s| s.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_invariants() {
        for scale in &SCALES {
            assert_eq!(scale.pattern[0], 0, "{}: pattern must start at 0", scale.name);
            assert_eq!(
                scale.pattern.len(),
                scale.degrees.len(),
                "{}: pattern/degrees cardinality mismatch",
                scale.name
            );
            for pair in scale.pattern.windows(2) {
                assert!(pair[0] < pair[1], "{}: pattern must strictly increase", scale.name);
            }
            assert!(
                scale.pattern.iter().all(|&o| o < 12),
                "{}: offsets must stay below the octave",
                scale.name
            );
        }
    }

    #[test]
    fn test_duplicate_minor_entries_stay_distinct() {
        let minor = scale_by_name("minor").unwrap();
        let natural = scale_by_name("natural_minor").unwrap();
        let aeolian = scale_by_name("aeolian").unwrap();
        assert_eq!(minor.pattern, natural.pattern);
        assert_eq!(minor.pattern, aeolian.pattern);
        assert_ne!(minor.name, natural.name);
        assert_ne!(natural.display, aeolian.display);
    }

    #[test]
    fn test_lookup() {
        assert!(scale_by_name("blues").is_some());
        assert!(scale_by_name("harmonic_minor").is_none());
    }
}
