//! Uniform sampling over the legal instance space of each family.
//!
//! Interval questions enumerate the entire legal space and draw one element
//! uniformly; an empty space is a decidable `NoValidInstances` instead of an
//! unbounded retry loop. Scale and chord questions build their instance
//! from a single uniform draw over the constrained choices.

use pitchdrill_theory::{
    chord_by_name, ChordType, Direction, IntervalType, NoteId, RomanNumeralEntry, ScaleType,
};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::constraints::{
    ChordQualityConstraints, IntervalConstraints, ResolvedChordQualityConstraints,
    ResolvedIntervalConstraints, ResolvedScaleDegreeConstraints, ScaleDegreeConstraints,
};
use crate::error::{DrillError, DrillResult};

/// Fixed octave for chord roots.
pub const CHORD_REFERENCE_OCTAVE: i32 = 4;

/// Marker appended to degree labels from the second octave of a walk.
pub const HIGH_OCTAVE_MARKER: &str = "(8va)";

/// A sampled interval question.
#[derive(Debug, Clone, Copy)]
pub struct IntervalInstance {
    /// First note played.
    pub first: NoteId,
    /// Second note played.
    pub second: NoteId,
    /// The interval between them.
    pub interval: &'static IntervalType,
    /// Direction of the second note relative to the first.
    pub direction: Direction,
}

/// Samples an interval question uniformly from the legal space.
pub fn sample_interval(
    constraints: &IntervalConstraints,
    rng: &mut impl Rng,
) -> DrillResult<IntervalInstance> {
    let resolved = constraints.resolve()?;
    sample_interval_resolved(&resolved, rng)
}

/// Samples from already-validated interval constraints.
pub fn sample_interval_resolved(
    resolved: &ResolvedIntervalConstraints,
    rng: &mut impl Rng,
) -> DrillResult<IntervalInstance> {
    let space = enumerate_intervals(resolved);
    space.choose(rng).copied().ok_or(DrillError::NoValidInstances)
}

/// Enumerates the entire legal interval instance space.
///
/// Unison never yields an instance even when the constraint list names it.
pub fn enumerate_intervals(resolved: &ResolvedIntervalConstraints) -> Vec<IntervalInstance> {
    let mut space = Vec::new();
    for first in NoteId::all() {
        for &direction in &resolved.directions {
            for &interval in &resolved.intervals {
                if interval.semitones == 0 {
                    continue;
                }
                let offset = direction.sign() * interval.semitones as i32;
                if let Some(second) = first.transpose(offset) {
                    space.push(IntervalInstance {
                        first,
                        second,
                        interval,
                        direction,
                    });
                }
            }
        }
    }
    space
}

/// One note of a scale walk with its degree label.
#[derive(Debug, Clone)]
pub struct ScaleNote {
    pub note: NoteId,
    /// Degree label, marker-suffixed for the second octave.
    pub degree_label: String,
    /// Whether the note came from the second pass of the walk.
    pub high_octave: bool,
}

/// A sampled scale-degree question.
#[derive(Debug, Clone)]
pub struct ScaleDegreeInstance {
    pub scale: &'static ScaleType,
    pub key: String,
    /// Key pitch-class index.
    pub key_pc: usize,
    pub octave: i32,
    pub octave_range: u8,
    /// The walked scale notes in order.
    pub notes: Vec<ScaleNote>,
    /// Index of the questioned note within `notes`.
    pub question_index: usize,
}

impl ScaleDegreeInstance {
    /// The questioned note.
    pub fn question_note(&self) -> &ScaleNote {
        &self.notes[self.question_index]
    }

    /// Every degree label of the walk, in order. This is the option list.
    pub fn degree_labels(&self) -> Vec<String> {
        self.notes.iter().map(|n| n.degree_label.clone()).collect()
    }

    /// Display name, e.g. `"C Major (one octave)"`.
    pub fn display_name(&self) -> String {
        let range = if self.octave_range == 2 {
            "two octaves"
        } else {
            "one octave"
        };
        format!("{} {} ({})", self.key, self.scale.display, range)
    }
}

/// Walks a scale pattern over one or two octaves.
///
/// A computed note that misses the addressable range is probed one octave
/// down then one octave up before being skipped.
pub fn walk_scale(scale: &'static ScaleType, key_pc: usize, octave: i32, octave_range: u8) -> Vec<ScaleNote> {
    let mut notes = Vec::new();
    for octave_offset in 0..octave_range as i32 {
        for (degree_idx, &semitone_offset) in scale.pattern.iter().enumerate() {
            let total = octave_offset * 12 + semitone_offset as i32;
            let pc = (key_pc as i32 + total) % 12;
            let target_octave = octave + (key_pc as i32 + total) / 12;

            let note = [target_octave, target_octave - 1, target_octave + 1]
                .into_iter()
                .find_map(|oct| NoteId::new(pc as usize, oct));
            let Some(note) = note else { continue };

            let high_octave = octave_offset > 0;
            let degree_label = if high_octave {
                format!("{}{}", scale.degrees[degree_idx], HIGH_OCTAVE_MARKER)
            } else {
                scale.degrees[degree_idx].to_string()
            };
            notes.push(ScaleNote {
                note,
                degree_label,
                high_octave,
            });
        }
    }
    notes
}

/// Samples a scale-degree question.
pub fn sample_scale_degree(
    constraints: &ScaleDegreeConstraints,
    rng: &mut impl Rng,
) -> DrillResult<ScaleDegreeInstance> {
    let resolved = constraints.resolve()?;
    sample_scale_degree_resolved(&resolved, rng)
}

/// Samples from already-validated scale-degree constraints.
pub fn sample_scale_degree_resolved(
    resolved: &ResolvedScaleDegreeConstraints,
    rng: &mut impl Rng,
) -> DrillResult<ScaleDegreeInstance> {
    let notes = walk_scale(resolved.scale, resolved.key_pc, resolved.octave, resolved.octave_range);
    if notes.is_empty() {
        return Err(DrillError::NoValidInstances);
    }
    let question_index = rng.gen_range(0..notes.len());

    Ok(ScaleDegreeInstance {
        scale: resolved.scale,
        key: resolved.key.clone(),
        key_pc: resolved.key_pc,
        octave: resolved.octave,
        octave_range: resolved.octave_range,
        notes,
        question_index,
    })
}

/// A sampled chord-quality question.
#[derive(Debug, Clone)]
pub struct ChordInstance {
    pub key: String,
    pub numeral: &'static RomanNumeralEntry,
    pub chord: &'static ChordType,
    /// Chord root at the reference octave.
    pub root: NoteId,
    /// Every chord tone, root first.
    pub tones: Vec<NoteId>,
}

/// Samples a chord-quality question.
pub fn sample_chord(
    constraints: &ChordQualityConstraints,
    rng: &mut impl Rng,
) -> DrillResult<ChordInstance> {
    let resolved = constraints.resolve()?;
    sample_chord_resolved(&resolved, rng)
}

/// Samples from already-validated chord constraints.
pub fn sample_chord_resolved(
    resolved: &ResolvedChordQualityConstraints,
    rng: &mut impl Rng,
) -> DrillResult<ChordInstance> {
    let numeral = *resolved
        .numerals
        .choose(rng)
        .ok_or(DrillError::NoValidInstances)?;
    let chord = chord_by_name(numeral.chord).ok_or_else(|| {
        DrillError::invalid_constraint(format!("unknown chord type: {}", numeral.chord))
    })?;

    let root_pc = (resolved.key_pc + numeral.degree_offset as usize) % 12;
    let carry = (resolved.key_pc + numeral.degree_offset as usize) as i32 / 12;
    let root = NoteId::new(root_pc, CHORD_REFERENCE_OCTAVE + carry)
        .ok_or(DrillError::NoValidInstances)?;

    let tones = chord
        .pattern
        .iter()
        .map(|&offset| root.transpose(offset as i32))
        .collect::<Option<Vec<_>>>()
        .ok_or(DrillError::NoValidInstances)?;

    Ok(ChordInstance {
        key: resolved.key.clone(),
        numeral,
        chord,
        root,
        tones,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::create_rng;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_interval_space_respects_constraints() {
        let constraints = IntervalConstraints {
            intervals: Some(vec!["minor_second".into(), "major_second".into()]),
            directions: Some(vec!["up".into()]),
        };
        let mut rng = create_rng(11);
        for _ in 0..200 {
            let instance = sample_interval(&constraints, &mut rng).unwrap();
            let delta = instance.second.index() as i32 - instance.first.index() as i32;
            assert!(delta == 1 || delta == 2, "unexpected delta {delta}");
            assert_eq!(instance.direction, Direction::Up);
        }
    }

    #[test]
    fn test_interval_space_is_complete() {
        // one interval, one direction: every root that fits yields an instance
        let resolved = IntervalConstraints {
            intervals: Some(vec!["octave".into()]),
            directions: Some(vec!["up".into()]),
        }
        .resolve()
        .unwrap();
        let space = enumerate_intervals(&resolved);
        // 60 notes, the top octave's roots fall out of range
        assert_eq!(space.len(), 48);
    }

    #[test]
    fn test_interval_empty_space() {
        // explicit empty interval list: nothing to enumerate
        let constraints = IntervalConstraints {
            intervals: Some(vec![]),
            directions: None,
        };
        let mut rng = create_rng(3);
        assert!(matches!(
            sample_interval(&constraints, &mut rng).unwrap_err(),
            DrillError::NoValidInstances
        ));
    }

    #[test]
    fn test_unison_never_sampled() {
        let constraints = IntervalConstraints {
            intervals: Some(vec!["unison".into()]),
            directions: None,
        };
        let mut rng = create_rng(5);
        assert!(matches!(
            sample_interval(&constraints, &mut rng).unwrap_err(),
            DrillError::NoValidInstances
        ));
    }

    #[test]
    fn test_walk_c_major_octave_4() {
        let resolved = ScaleDegreeConstraints::default().resolve().unwrap();
        let notes = walk_scale(resolved.scale, resolved.key_pc, 4, 1);
        let names: Vec<String> = notes.iter().map(|n| n.note.name()).collect();
        assert_eq!(names, vec!["C4", "D4", "E4", "F4", "G4", "A4", "B4"]);
        let labels: Vec<&str> = notes.iter().map(|n| n.degree_label.as_str()).collect();
        assert_eq!(labels, vec!["1", "2", "3", "4", "5", "6", "7"]);
        // E4 is degree 3
        assert_eq!(notes[2].note.name(), "E4");
        assert_eq!(notes[2].degree_label, "3");
    }

    #[test]
    fn test_walk_two_octaves_marks_high_degrees() {
        let notes = walk_scale(
            pitchdrill_theory::scale_by_name("major").unwrap(),
            0,
            4,
            2,
        );
        assert_eq!(notes.len(), 14);
        assert!(!notes[0].high_octave);
        assert!(notes[7].high_octave);
        assert_eq!(notes[7].degree_label, format!("1{HIGH_OCTAVE_MARKER}"));
        assert_eq!(notes[7].note.name(), "C5");
    }

    #[test]
    fn test_walk_crosses_octave_boundary() {
        // A major at octave 4: C#5, D5, E5 land in the next octave
        let notes = walk_scale(
            pitchdrill_theory::scale_by_name("major").unwrap(),
            9,
            4,
            1,
        );
        let names: Vec<String> = notes.iter().map(|n| n.note.name()).collect();
        assert_eq!(names, vec!["A4", "B4", "C#5", "D5", "E5", "F#5", "G#5"]);
    }

    #[test]
    fn test_walk_probes_neighbor_octave_at_range_edge() {
        // B major at octave 6 runs off the top; notes resolve an octave down
        let notes = walk_scale(
            pitchdrill_theory::scale_by_name("major").unwrap(),
            11,
            6,
            1,
        );
        assert!(!notes.is_empty());
        for n in &notes {
            assert!(n.note.octave() <= 6);
        }
    }

    #[test]
    fn test_sample_scale_degree_is_uniform_over_walk() {
        let constraints = ScaleDegreeConstraints::default();
        let mut rng = create_rng(17);
        let mut seen = [false; 7];
        for _ in 0..500 {
            let instance = sample_scale_degree(&constraints, &mut rng).unwrap();
            seen[instance.question_index] = true;
        }
        assert!(seen.iter().all(|&s| s), "all degrees should be drawn: {seen:?}");
    }

    #[test]
    fn test_chord_v_in_c_is_g_major() {
        let constraints = ChordQualityConstraints {
            key: "C".into(),
            numerals: Some(vec!["V".into()]),
        };
        let mut rng = create_rng(23);
        let instance = sample_chord(&constraints, &mut rng).unwrap();
        assert_eq!(instance.chord.name, "major");
        assert_eq!(instance.root.name(), "G4");
        let tones: Vec<String> = instance.tones.iter().map(|t| t.name()).collect();
        assert_eq!(tones, vec!["G4", "B4", "D5"]);
    }

    #[test]
    fn test_chord_tone_offsets_match_pattern() {
        let constraints = ChordQualityConstraints {
            key: "F#".into(),
            numerals: None,
        };
        let mut rng = create_rng(29);
        for _ in 0..100 {
            let instance = sample_chord(&constraints, &mut rng).unwrap();
            assert_eq!(instance.tones.len(), instance.chord.pattern.len());
            for (tone, &offset) in instance.tones.iter().zip(instance.chord.pattern.iter()) {
                assert_eq!(
                    tone.index() - instance.root.index(),
                    offset as usize,
                    "offset mismatch in {}",
                    instance.chord.name
                );
            }
        }
    }

    #[test]
    fn test_chord_empty_numerals() {
        let constraints = ChordQualityConstraints {
            key: "C".into(),
            numerals: Some(vec![]),
        };
        let mut rng = create_rng(31);
        assert!(matches!(
            sample_chord(&constraints, &mut rng).unwrap_err(),
            DrillError::NoValidInstances
        ));
    }

    #[test]
    fn test_seeded_sampling_replays() {
        let constraints = IntervalConstraints::default();
        let a = sample_interval(&constraints, &mut create_rng(99)).unwrap();
        let b = sample_interval(&constraints, &mut create_rng(99)).unwrap();
        assert_eq!(a.first, b.first);
        assert_eq!(a.second, b.second);
        assert_eq!(a.interval.name, b.interval.name);
    }
}
