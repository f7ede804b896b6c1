//! Pitchdrill CLI - generate and grade ear-training questions.
//!
//! Output is human-readable by default; `--json` switches every command to
//! a structured `{"status": ...}` document suitable for scripting.

mod cli_args;

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use pitchdrill_audio::{ArtifactCache, AudioAssetStore};
use pitchdrill_core::{
    grade, ChordQualityConstraints, DrillError, IntervalConstraints, QuestionRequest,
    QuestionResponse, QuestionService, ScaleDegreeConstraints,
};

use cli_args::{CacheAction, Cli, Commands, CommonArgs, QuestionFamily};

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{} {err:#}", "error:".red().bold());
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    match cli.command {
        Commands::Question { family } => {
            let (request, common) = build_request(family);
            question_command(&request, &common)
        }
        Commands::Grade {
            submitted,
            correct,
            json,
        } => grade_command(&submitted, &correct, json),
        Commands::Cache { action } => cache_command(action),
        Commands::Catalog { json } => catalog_command(json),
    }
}

/// Prints everything a drill settings screen can offer.
fn catalog_command(json: bool) -> Result<ExitCode> {
    use pitchdrill_theory::{CHORDS, INTERVALS, MAJOR_KEY_NUMERALS, PITCH_CLASSES, SCALES};

    if json {
        let value = serde_json::json!({
            "status": "ok",
            "intervals": INTERVALS.iter()
                .map(|i| serde_json::json!({
                    "name": i.name, "display": i.display, "semitones": i.semitones,
                }))
                .collect::<Vec<_>>(),
            "scales": SCALES.iter()
                .map(|s| serde_json::json!({
                    "name": s.name, "display": s.display,
                    "pattern": s.pattern, "degrees": s.degrees,
                }))
                .collect::<Vec<_>>(),
            "chords": CHORDS.iter()
                .map(|c| serde_json::json!({
                    "name": c.name, "display": c.display, "pattern": c.pattern,
                }))
                .collect::<Vec<_>>(),
            "numerals": MAJOR_KEY_NUMERALS.iter()
                .map(|n| serde_json::json!({
                    "numeral": n.numeral, "degree_offset": n.degree_offset, "chord": n.chord,
                }))
                .collect::<Vec<_>>(),
            "keys": PITCH_CLASSES,
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(ExitCode::SUCCESS);
    }

    println!("{}", "intervals:".bold());
    for interval in &INTERVALS {
        println!("  {:<16} {} ({} st)", interval.name, interval.display, interval.semitones);
    }
    println!("{}", "scales:".bold());
    for scale in &SCALES {
        println!("  {:<18} {}", scale.name, scale.display);
    }
    println!("{}", "chords:".bold());
    for chord in &CHORDS {
        println!("  {:<16} {}", chord.name, chord.display);
    }
    println!("{}", "numerals:".bold());
    for entry in &MAJOR_KEY_NUMERALS {
        println!("  {:<5} +{:<2} {}", entry.numeral, entry.degree_offset, entry.chord);
    }
    println!("{} {}", "keys:".bold(), PITCH_CLASSES.join(", "));
    Ok(ExitCode::SUCCESS)
}

/// Maps a question subcommand onto the core request descriptor.
fn build_request(family: QuestionFamily) -> (QuestionRequest, CommonArgs) {
    match family {
        QuestionFamily::Interval {
            intervals,
            directions,
            common,
        } => (
            QuestionRequest::Interval(IntervalConstraints {
                intervals,
                directions,
            }),
            common,
        ),
        QuestionFamily::ScaleDegree {
            scale,
            key,
            octave,
            range,
            common,
        } => (
            QuestionRequest::ScaleDegree(ScaleDegreeConstraints {
                scale_type: scale,
                key,
                octave,
                octave_range: range,
            }),
            common,
        ),
        QuestionFamily::ChordQuality {
            key,
            numerals,
            common,
        } => (
            QuestionRequest::ChordQuality(ChordQualityConstraints { key, numerals }),
            common,
        ),
    }
}

fn question_command(request: &QuestionRequest, common: &CommonArgs) -> Result<ExitCode> {
    let seed = common.seed.unwrap_or_else(rand::random);
    let store = AudioAssetStore::new(&common.notes_dir);
    let service = QuestionService::new(ArtifactCache::new(store, &common.cache_dir));

    match service.generate(request, seed) {
        Ok(response) => {
            if common.json {
                print_ok_json(&response)?;
            } else {
                print_question(&response);
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            report_drill_error(&err, common.json)?;
            Ok(ExitCode::FAILURE)
        }
    }
}

fn grade_command(submitted: &str, correct: &str, json: bool) -> Result<ExitCode> {
    let outcome = grade(submitted, correct);
    if json {
        let mut value = serde_json::to_value(&outcome)?;
        value["status"] = "ok".into();
        println!("{}", serde_json::to_string_pretty(&value)?);
    } else if outcome.is_correct {
        println!("{} {}", "correct:".green().bold(), outcome.correct_display);
    } else {
        println!(
            "{} you answered {}, the answer was {}",
            "incorrect:".red().bold(),
            outcome.submitted_display.yellow(),
            outcome.correct_display.green()
        );
    }
    Ok(ExitCode::SUCCESS)
}

fn cache_command(action: CacheAction) -> Result<ExitCode> {
    match action {
        CacheAction::Info { cache_dir, json } => {
            // the store is unused for inspection; point it at the cache dir
            let cache = ArtifactCache::new(AudioAssetStore::new(&cache_dir), &cache_dir);
            let info = cache.info()?;
            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&serde_json::json!({
                        "status": "ok",
                        "cache_dir": info.cache_dir.display().to_string(),
                        "entry_count": info.entry_count,
                        "total_size_bytes": info.total_size_bytes,
                    }))?
                );
            } else {
                println!("cache directory: {}", info.cache_dir.display());
                println!("entries:         {}", info.entry_count);
                println!("total size:      {} bytes", info.total_size_bytes);
            }
        }
        CacheAction::Clear { cache_dir, json } => {
            let cache = ArtifactCache::new(AudioAssetStore::new(&cache_dir), &cache_dir);
            let removed = cache.clear()?;
            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&serde_json::json!({
                        "status": "ok",
                        "removed": removed,
                    }))?
                );
            } else {
                println!("removed {} cached artifact(s)", removed);
            }
        }
    }
    Ok(ExitCode::SUCCESS)
}

fn print_ok_json(response: &QuestionResponse) -> Result<()> {
    let mut value = serde_json::to_value(response)?;
    value["status"] = "ok".into();
    println!("{}", serde_json::to_string_pretty(&value)?);
    Ok(())
}

fn print_question(response: &QuestionResponse) {
    println!("{} {:?}", "family:".bold(), response.family);
    if let Some(name) = &response.scale_name {
        println!("{} {}", "scale:".bold(), name);
    }
    if let (Some(key), Some(numeral)) = (&response.key, &response.numeral) {
        println!("{} {} in {}", "chord:".bold(), numeral, key);
    }
    for audio in &response.audio {
        println!("{} [{:?}] {}", "audio:".bold(), audio.role, audio.path);
    }
    println!("{}", "options:".bold());
    for (idx, option) in response.options.iter().enumerate() {
        println!("  {}. {}", idx + 1, option);
    }
    println!(
        "{} {} (echo back when grading)",
        "answer:".dimmed(),
        response.correct_value.dimmed()
    );
    println!("{} {}", "seed:".dimmed(), response.seed.to_string().dimmed());
}

/// Prints a drill error structurally, with the user-facing hint in human mode.
fn report_drill_error(err: &DrillError, json: bool) -> Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&serde_json::json!({
                "status": "error",
                "code": err.code(),
                "message": err.to_string(),
                "retryable": err.retryable(),
            }))?
        );
    } else {
        eprintln!("{} {}", "error:".red().bold(), err);
        let hint = match err {
            DrillError::InvalidConstraint { .. } => Some("please adjust your selection"),
            DrillError::NoValidInstances => Some("loosen the constraints and try again"),
            DrillError::SynthesisFailed { .. } => Some("transient failure, safe to retry"),
            DrillError::MissingSource { .. } => None,
        };
        if let Some(hint) = hint {
            eprintln!("{} {}", "hint:".yellow(), hint);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_interval_request() {
        let (request, _common) = build_request(QuestionFamily::Interval {
            intervals: Some(vec!["tritone".into()]),
            directions: None,
            common: CommonArgs {
                notes_dir: "n".into(),
                cache_dir: "c".into(),
                seed: Some(1),
                json: true,
            },
        });
        match request {
            QuestionRequest::Interval(c) => {
                assert_eq!(c.intervals.as_deref(), Some(&["tritone".to_string()][..]));
                assert!(c.directions.is_none());
            }
            _ => panic!("wrong family"),
        }
    }

    #[test]
    fn test_build_scale_request_maps_range() {
        let (request, _common) = build_request(QuestionFamily::ScaleDegree {
            scale: "dorian".into(),
            key: "D".into(),
            octave: 3,
            range: 2,
            common: CommonArgs {
                notes_dir: "n".into(),
                cache_dir: "c".into(),
                seed: None,
                json: false,
            },
        });
        match request {
            QuestionRequest::ScaleDegree(c) => {
                assert_eq!(c.scale_type, "dorian");
                assert_eq!(c.key, "D");
                assert_eq!(c.octave, 3);
                assert_eq!(c.octave_range, 2);
            }
            _ => panic!("wrong family"),
        }
    }
}
