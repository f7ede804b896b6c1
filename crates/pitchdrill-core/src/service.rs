//! Question assembly: sampler -> artifact cache -> distractors -> payload.

use pitchdrill_audio::{ArtifactCache, ArtifactKey};
use pitchdrill_theory::{answer_intervals, interval_by_name, NoteId, CHORDS};
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use crate::constraints::{
    ChordQualityConstraints, Family, IntervalConstraints, QuestionRequest, ScaleDegreeConstraints,
};
use crate::distractor::select_options;
use crate::error::{DrillError, DrillResult};
use crate::grading::{display_label, grade, GradeOutcome};
use crate::outcome::{OutcomeRecord, OutcomeSink};
use crate::question::{AudioRef, AudioRole, QuestionResponse};
use crate::rng::create_component_rng;
use crate::sampler::{
    sample_chord_resolved, sample_interval_resolved, sample_scale_degree_resolved, walk_scale,
};

/// Per-note duration of interval stimuli.
pub const INTERVAL_NOTE_MS: u32 = 1000;

/// Per-note duration of the reference scale clip.
pub const SCALE_NOTE_MS: u32 = 500;

/// Duration of a stacked chord stimulus.
pub const CHORD_MS: u32 = 1500;

/// A grading request: the caller echoes what `QuestionResponse` handed out.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GradeRequest {
    pub family: Family,
    /// Attribution label from the question payload.
    pub sub_item: String,
    pub submitted_value: String,
    pub correct_value: String,
}

/// Stateless question generator over a shared artifact cache.
///
/// Every call is an independent request-response operation; nothing about
/// a question is remembered between calls.
#[derive(Debug, Clone)]
pub struct QuestionService {
    cache: ArtifactCache,
}

impl QuestionService {
    /// Creates a service over the given cache.
    pub fn new(cache: ArtifactCache) -> Self {
        Self { cache }
    }

    /// The artifact cache backing this service.
    pub fn cache(&self) -> &ArtifactCache {
        &self.cache
    }

    /// Generates one question for the request, deterministically per seed.
    pub fn generate(&self, request: &QuestionRequest, seed: u32) -> DrillResult<QuestionResponse> {
        match request {
            QuestionRequest::Interval(c) => self.interval_question(c, seed),
            QuestionRequest::ScaleDegree(c) => self.scale_degree_question(c, seed),
            QuestionRequest::ChordQuality(c) => self.chord_quality_question(c, seed),
        }
    }

    /// Grades a submission and forwards the outcome for attribution.
    pub fn grade_answer(&self, request: &GradeRequest, sink: &mut dyn OutcomeSink) -> GradeOutcome {
        let outcome = grade(&request.submitted_value, &request.correct_value);
        sink.record(&OutcomeRecord {
            family: request.family,
            sub_item: request.sub_item.clone(),
            correct_value: request.correct_value.clone(),
            submitted_value: request.submitted_value.clone(),
            is_correct: outcome.is_correct,
        });
        outcome
    }

    fn interval_question(
        &self,
        constraints: &IntervalConstraints,
        seed: u32,
    ) -> DrillResult<QuestionResponse> {
        let resolved = constraints.resolve()?;
        let mut rng = create_component_rng(seed, Family::Interval.as_str());
        let instance = sample_interval_resolved(&resolved, &mut rng)?;

        let key = ArtifactKey::sequence(vec![instance.first, instance.second], INTERVAL_NOTE_MS);
        let path = self.cache.resolve(&key)?;

        let allowed: Vec<&str> = resolved.intervals.iter().map(|i| i.name).collect();
        let catalogue: Vec<&str> = answer_intervals().map(|i| i.name).collect();
        let option_values = select_options(instance.interval.name, &allowed, &catalogue, &mut rng);
        let options = option_values
            .iter()
            .map(|v| {
                interval_by_name(v)
                    .map(|i| i.display.to_string())
                    .unwrap_or_else(|| v.clone())
            })
            .collect();

        Ok(QuestionResponse {
            family: Family::Interval,
            audio: vec![AudioRef::new(AudioRole::Question, path.display().to_string())],
            options,
            option_values,
            correct_value: instance.interval.name.to_string(),
            correct_display: instance.interval.display.to_string(),
            sub_item: instance.interval.name.to_string(),
            seed,
            scale_name: None,
            key: None,
            numeral: None,
            root_note: None,
        })
    }

    fn scale_degree_question(
        &self,
        constraints: &ScaleDegreeConstraints,
        seed: u32,
    ) -> DrillResult<QuestionResponse> {
        let resolved = constraints.resolve()?;
        let mut rng = create_component_rng(seed, Family::ScaleDegree.as_str());
        let instance = sample_scale_degree_resolved(&resolved, &mut rng)?;
        let question = instance.question_note();

        // The stimulus and the root reference are plain source recordings.
        let question_path = self.cache.store().require(question.note)?;
        let root_note = NoteId::new(resolved.key_pc, resolved.octave)
            .ok_or(DrillError::NoValidInstances)?;
        let root_path = self.cache.store().require(root_note)?;

        // The reference walk always spans one octave, closed by the high root.
        let mut reference: Vec<NoteId> = walk_scale(resolved.scale, resolved.key_pc, resolved.octave, 1)
            .into_iter()
            .map(|n| n.note)
            .collect();
        if let Some(closing_root) = NoteId::new(resolved.key_pc, resolved.octave + 1) {
            reference.push(closing_root);
        }
        let scale_path = self
            .cache
            .resolve(&ArtifactKey::sequence(reference, SCALE_NOTE_MS))?;

        // Every degree of the walk is an option; the list keeps the scale's
        // cardinality instead of being cut to 4.
        let mut option_values = instance.degree_labels();
        option_values.shuffle(&mut rng);
        let options = option_values.clone();

        let correct = question.degree_label.clone();
        Ok(QuestionResponse {
            family: Family::ScaleDegree,
            audio: vec![
                AudioRef::new(AudioRole::Question, question_path.display().to_string()),
                AudioRef::new(AudioRole::Root, root_path.display().to_string()),
                AudioRef::new(AudioRole::Scale, scale_path.display().to_string()),
            ],
            options,
            option_values,
            correct_value: correct.clone(),
            correct_display: display_label(&correct),
            sub_item: correct,
            seed,
            scale_name: Some(instance.display_name()),
            key: None,
            numeral: None,
            root_note: None,
        })
    }

    fn chord_quality_question(
        &self,
        constraints: &ChordQualityConstraints,
        seed: u32,
    ) -> DrillResult<QuestionResponse> {
        let resolved = constraints.resolve()?;
        let mut rng = create_component_rng(seed, Family::ChordQuality.as_str());
        let instance = sample_chord_resolved(&resolved, &mut rng)?;

        let key = ArtifactKey::stacked(instance.tones.clone(), CHORD_MS);
        let path = self.cache.resolve(&key)?;

        let universe: Vec<&str> = resolved.chord_universe().iter().map(|c| c.name).collect();
        let catalogue: Vec<&str> = CHORDS.iter().map(|c| c.name).collect();
        let option_values = select_options(instance.chord.name, &universe, &catalogue, &mut rng);
        let options = option_values.iter().map(|v| display_label(v)).collect();

        Ok(QuestionResponse {
            family: Family::ChordQuality,
            audio: vec![AudioRef::new(AudioRole::Question, path.display().to_string())],
            options,
            option_values,
            correct_value: instance.chord.name.to_string(),
            correct_display: instance.chord.display.to_string(),
            sub_item: instance.chord.name.to_string(),
            seed,
            scale_name: None,
            key: Some(instance.key.clone()),
            numeral: Some(instance.numeral.numeral.to_string()),
            root_note: Some(instance.root.name()),
        })
    }
}
