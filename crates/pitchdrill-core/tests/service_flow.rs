//! End-to-end tests: request descriptor in, question payload out.

use pitchdrill_audio::{frames_for_ms, load_clip, write_wav_mono16, ArtifactCache, AudioAssetStore};
use pitchdrill_core::{
    ChordQualityConstraints, Family, GradeRequest, IntervalConstraints, MemoryOutcomeSink,
    QuestionRequest, QuestionService, ScaleDegreeConstraints, CHORD_MS, INTERVAL_NOTE_MS,
};
use pitchdrill_theory::NoteId;
use tempfile::TempDir;

const RATE: u32 = 8000;

/// A service over a store populated with a short recording for every note.
fn service_with_full_library() -> (TempDir, QuestionService) {
    let tmp = TempDir::new().unwrap();
    let notes_dir = tmp.path().join("notes");
    std::fs::create_dir_all(&notes_dir).unwrap();
    let store = AudioAssetStore::new(&notes_dir);

    let samples = vec![0.4; frames_for_ms(RATE, 100)];
    for note in NoteId::all() {
        write_wav_mono16(&store.source_path(note), RATE, &samples).unwrap();
    }

    let cache = ArtifactCache::new(store, tmp.path().join("cache"));
    (tmp, QuestionService::new(cache))
}

#[test]
fn interval_question_has_playable_stimulus_and_four_options() {
    let (_tmp, service) = service_with_full_library();
    let request = QuestionRequest::Interval(IntervalConstraints::default());

    let response = service.generate(&request, 42).unwrap();
    assert_eq!(response.family, Family::Interval);
    assert_eq!(response.options.len(), 4);
    assert_eq!(response.option_values.len(), 4);
    assert_eq!(
        response
            .option_values
            .iter()
            .filter(|v| **v == response.correct_value)
            .count(),
        1
    );

    // the stimulus is two fixed-length slices back to back
    assert_eq!(response.audio.len(), 1);
    let clip = load_clip(std::path::Path::new(&response.audio[0].path)).unwrap();
    assert_eq!(clip.frames(), 2 * frames_for_ms(RATE, INTERVAL_NOTE_MS));
}

#[test]
fn interval_question_replays_from_seed() {
    let (_tmp, service) = service_with_full_library();
    let request = QuestionRequest::Interval(IntervalConstraints::default());

    let a = service.generate(&request, 7).unwrap();
    let b = service.generate(&request, 7).unwrap();
    assert_eq!(a.correct_value, b.correct_value);
    assert_eq!(a.option_values, b.option_values);
    assert_eq!(a.audio[0].path, b.audio[0].path);
}

#[test]
fn interval_constraints_narrow_the_space() {
    let (_tmp, service) = service_with_full_library();
    let request = QuestionRequest::Interval(IntervalConstraints {
        intervals: Some(vec!["minor_second".into(), "major_second".into()]),
        directions: Some(vec!["up".into()]),
    });

    for seed in 0..50 {
        let response = service.generate(&request, seed).unwrap();
        assert!(
            response.correct_value == "minor_second" || response.correct_value == "major_second",
            "sampled {}",
            response.correct_value
        );
    }
}

#[test]
fn interval_artifact_is_cached_across_requests() {
    let (_tmp, service) = service_with_full_library();
    let request = QuestionRequest::Interval(IntervalConstraints {
        intervals: Some(vec!["perfect_fifth".into()]),
        directions: Some(vec!["up".into()]),
    });

    let first = service.generate(&request, 1).unwrap();
    let entries_after_first = service.cache().info().unwrap().entry_count;
    // same seed resolves the same artifact without growing the cache
    let second = service.generate(&request, 1).unwrap();
    assert_eq!(first.audio[0].path, second.audio[0].path);
    assert_eq!(service.cache().info().unwrap().entry_count, entries_after_first);
}

#[test]
fn scale_degree_question_c_major() {
    let (_tmp, service) = service_with_full_library();
    let request = QuestionRequest::ScaleDegree(ScaleDegreeConstraints::default());

    let response = service.generate(&request, 5).unwrap();
    assert_eq!(response.family, Family::ScaleDegree);
    assert_eq!(response.scale_name.as_deref(), Some("C Major (one octave)"));
    // all seven degrees offered
    assert_eq!(response.options.len(), 7);
    let mut sorted = response.option_values.clone();
    sorted.sort();
    let mut expected: Vec<String> = ["1", "2", "3", "4", "5", "6", "7"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    expected.sort();
    assert_eq!(sorted, expected);
    assert!(expected.contains(&response.correct_value));

    // question, root reference and scale reference clips
    assert_eq!(response.audio.len(), 3);
    // reference walk: 7 pattern notes + closing root, half a second each
    let scale_clip = load_clip(std::path::Path::new(&response.audio[2].path)).unwrap();
    assert_eq!(scale_clip.frames(), 8 * frames_for_ms(RATE, 500));
}

#[test]
fn scale_degree_two_octaves_marks_high_labels() {
    let (_tmp, service) = service_with_full_library();
    let request = QuestionRequest::ScaleDegree(ScaleDegreeConstraints {
        octave_range: 2,
        ..Default::default()
    });

    let response = service.generate(&request, 9).unwrap();
    assert_eq!(response.options.len(), 14);
    assert_eq!(
        response
            .option_values
            .iter()
            .filter(|v| v.ends_with("(8va)"))
            .count(),
        7
    );
    assert!(response
        .scale_name
        .as_deref()
        .unwrap()
        .contains("two octaves"));
}

#[test]
fn chord_question_v_of_c_is_major() {
    let (_tmp, service) = service_with_full_library();
    let request = QuestionRequest::ChordQuality(ChordQualityConstraints {
        key: "C".into(),
        numerals: Some(vec!["V".into()]),
    });

    let response = service.generate(&request, 3).unwrap();
    assert_eq!(response.family, Family::ChordQuality);
    assert_eq!(response.correct_value, "major");
    assert_eq!(response.numeral.as_deref(), Some("V"));
    assert_eq!(response.root_note.as_deref(), Some("G4"));
    assert_eq!(response.options.len(), 4);

    // stacked stimulus lasts exactly the chord duration
    let clip = load_clip(std::path::Path::new(&response.audio[0].path)).unwrap();
    assert_eq!(clip.frames(), frames_for_ms(RATE, CHORD_MS));
}

#[test]
fn missing_note_fails_with_named_source() {
    let tmp = TempDir::new().unwrap();
    let notes_dir = tmp.path().join("notes");
    std::fs::create_dir_all(&notes_dir).unwrap();
    let store = AudioAssetStore::new(&notes_dir);
    // library contains only C4; any interval needs a second note
    let samples = vec![0.4; 800];
    write_wav_mono16(&store.source_path(NoteId::parse("C4").unwrap()), RATE, &samples).unwrap();
    let service = QuestionService::new(ArtifactCache::new(store, tmp.path().join("cache")));

    let request = QuestionRequest::Interval(IntervalConstraints::default());
    let err = service.generate(&request, 2).unwrap_err();
    assert!(matches!(err, pitchdrill_core::DrillError::MissingSource { .. }));
}

#[test]
fn grading_round_trip_records_outcome() {
    let (_tmp, service) = service_with_full_library();
    let request = QuestionRequest::Interval(IntervalConstraints::default());
    let question = service.generate(&request, 12).unwrap();

    let mut sink = MemoryOutcomeSink::default();
    let outcome = service.grade_answer(
        &GradeRequest {
            family: question.family,
            sub_item: question.sub_item.clone(),
            submitted_value: question.correct_value.clone(),
            correct_value: question.correct_value.clone(),
        },
        &mut sink,
    );

    assert!(outcome.is_correct);
    assert_eq!(outcome.correct_display, question.correct_display);
    assert_eq!(sink.records.len(), 1);
    assert!(sink.records[0].is_correct);
    assert_eq!(sink.records[0].sub_item, question.sub_item);
}

#[test]
fn invalid_constraints_surface_structurally() {
    let (_tmp, service) = service_with_full_library();

    let bad_scale = QuestionRequest::ScaleDegree(ScaleDegreeConstraints {
        scale_type: "chromatic_superset".into(),
        ..Default::default()
    });
    let err = service.generate(&bad_scale, 1).unwrap_err();
    assert_eq!(err.code(), "DRILL_001");

    let bad_key = QuestionRequest::ChordQuality(ChordQualityConstraints {
        key: "X".into(),
        numerals: None,
    });
    let err = service.generate(&bad_key, 1).unwrap_err();
    assert_eq!(err.code(), "DRILL_001");
}
