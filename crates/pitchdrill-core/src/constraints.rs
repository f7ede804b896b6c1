//! Request descriptors and their validation against the catalogues.
//!
//! Constraints arrive as loosely-typed JSON documents; `resolve` turns them
//! into typed forms, rejecting anything outside the static catalogues with
//! `InvalidConstraint` before any sampling happens.

use pitchdrill_theory::{
    answer_intervals, chord_by_name, interval_by_name, numeral_by_name, pitch_class_index,
    scale_by_name, ChordType, Direction, IntervalType, RomanNumeralEntry, ScaleType,
    DEFAULT_NUMERALS,
};
use serde::{Deserialize, Serialize};

use crate::error::{DrillError, DrillResult};

/// Exercise family tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Family {
    Interval,
    ScaleDegree,
    ChordQuality,
}

impl Family {
    /// Canonical identifier.
    pub fn as_str(self) -> &'static str {
        match self {
            Family::Interval => "interval",
            Family::ScaleDegree => "scale_degree",
            Family::ChordQuality => "chord_quality",
        }
    }
}

/// Constraints for the interval family.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct IntervalConstraints {
    /// Allowed interval names; `None` means all except unison.
    pub intervals: Option<Vec<String>>,
    /// Allowed directions; `None` means both.
    pub directions: Option<Vec<String>>,
}

/// Constraints for the scale-degree family.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScaleDegreeConstraints {
    /// Scale catalogue entry name.
    pub scale_type: String,
    /// Key root pitch class (`"C"`, `"F#"`, ...).
    pub key: String,
    /// Base octave of the walk.
    pub octave: i32,
    /// 1 or 2 octaves; anything else falls back to 1.
    pub octave_range: u8,
}

impl Default for ScaleDegreeConstraints {
    fn default() -> Self {
        Self {
            scale_type: "major".to_string(),
            key: "C".to_string(),
            octave: 4,
            octave_range: 1,
        }
    }
}

/// Constraints for the chord-quality family.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChordQualityConstraints {
    /// Key root pitch class.
    pub key: String,
    /// Allowed roman numerals; `None` means {I, ii, iii, IV, V, vi}.
    pub numerals: Option<Vec<String>>,
}

impl Default for ChordQualityConstraints {
    fn default() -> Self {
        Self {
            key: "C".to_string(),
            numerals: None,
        }
    }
}

/// A complete question request: family plus its constraints.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "family", rename_all = "snake_case")]
pub enum QuestionRequest {
    Interval(IntervalConstraints),
    ScaleDegree(ScaleDegreeConstraints),
    ChordQuality(ChordQualityConstraints),
}

impl QuestionRequest {
    /// The request's family tag.
    pub fn family(&self) -> Family {
        match self {
            QuestionRequest::Interval(_) => Family::Interval,
            QuestionRequest::ScaleDegree(_) => Family::ScaleDegree,
            QuestionRequest::ChordQuality(_) => Family::ChordQuality,
        }
    }
}

/// Interval constraints validated against the catalogues.
#[derive(Debug, Clone)]
pub struct ResolvedIntervalConstraints {
    /// Allowed interval types, catalogue order preserved.
    pub intervals: Vec<&'static IntervalType>,
    /// Allowed directions.
    pub directions: Vec<Direction>,
}

impl IntervalConstraints {
    /// Validates the constraint document.
    pub fn resolve(&self) -> DrillResult<ResolvedIntervalConstraints> {
        let intervals = match &self.intervals {
            None => answer_intervals().collect(),
            Some(names) => names
                .iter()
                .map(|name| {
                    interval_by_name(name).ok_or_else(|| {
                        DrillError::invalid_constraint(format!("unknown interval type: {name}"))
                    })
                })
                .collect::<DrillResult<Vec<_>>>()?,
        };

        let directions = match &self.directions {
            None => vec![Direction::Up, Direction::Down],
            Some(names) => names
                .iter()
                .map(|name| {
                    Direction::parse(name).ok_or_else(|| {
                        DrillError::invalid_constraint(format!("unknown direction: {name}"))
                    })
                })
                .collect::<DrillResult<Vec<_>>>()?,
        };

        Ok(ResolvedIntervalConstraints {
            intervals,
            directions,
        })
    }
}

/// Scale-degree constraints validated against the catalogues.
#[derive(Debug, Clone)]
pub struct ResolvedScaleDegreeConstraints {
    pub scale: &'static ScaleType,
    /// Key pitch-class index, 0..12.
    pub key_pc: usize,
    /// Key name as requested.
    pub key: String,
    pub octave: i32,
    /// Coerced to 1 when the request is outside {1, 2}.
    pub octave_range: u8,
}

impl ScaleDegreeConstraints {
    /// Validates the constraint document.
    pub fn resolve(&self) -> DrillResult<ResolvedScaleDegreeConstraints> {
        let scale = scale_by_name(&self.scale_type).ok_or_else(|| {
            DrillError::invalid_constraint(format!("unknown scale type: {}", self.scale_type))
        })?;
        let key_pc = pitch_class_index(&self.key)
            .ok_or_else(|| DrillError::invalid_constraint(format!("unknown key: {}", self.key)))?;
        if !(pitchdrill_theory::OCTAVE_MIN..=pitchdrill_theory::OCTAVE_MAX).contains(&self.octave) {
            return Err(DrillError::invalid_constraint(format!(
                "octave out of range: {}",
                self.octave
            )));
        }
        let octave_range = if self.octave_range == 2 { 2 } else { 1 };

        Ok(ResolvedScaleDegreeConstraints {
            scale,
            key_pc,
            key: self.key.clone(),
            octave: self.octave,
            octave_range,
        })
    }
}

/// Chord-quality constraints validated against the catalogues.
#[derive(Debug, Clone)]
pub struct ResolvedChordQualityConstraints {
    /// Key pitch-class index, 0..12.
    pub key_pc: usize,
    /// Key name as requested.
    pub key: String,
    /// Allowed diatonic entries, request order preserved.
    pub numerals: Vec<&'static RomanNumeralEntry>,
}

impl ResolvedChordQualityConstraints {
    /// Distinct chord qualities reachable from the allowed numerals,
    /// first-seen order. This is the allowed answer universe.
    pub fn chord_universe(&self) -> Vec<&'static ChordType> {
        let mut seen = Vec::new();
        for entry in &self.numerals {
            if let Some(chord) = chord_by_name(entry.chord) {
                if !seen.iter().any(|c: &&ChordType| c.name == chord.name) {
                    seen.push(chord);
                }
            }
        }
        seen
    }
}

impl ChordQualityConstraints {
    /// Validates the constraint document.
    pub fn resolve(&self) -> DrillResult<ResolvedChordQualityConstraints> {
        let key_pc = pitch_class_index(&self.key)
            .ok_or_else(|| DrillError::invalid_constraint(format!("unknown key: {}", self.key)))?;

        let names: Vec<&str> = match &self.numerals {
            None => DEFAULT_NUMERALS.to_vec(),
            Some(ns) => ns.iter().map(String::as_str).collect(),
        };
        let numerals = names
            .iter()
            .map(|name| {
                numeral_by_name(name).ok_or_else(|| {
                    DrillError::invalid_constraint(format!("unknown roman numeral: {name}"))
                })
            })
            .collect::<DrillResult<Vec<_>>>()?;

        Ok(ResolvedChordQualityConstraints {
            key_pc,
            key: self.key.clone(),
            numerals,
        })
    }
}
