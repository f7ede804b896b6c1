//! CLI argument definitions for the pitchdrill command-line interface.
//!
//! All `#[derive(Parser)]` and `#[derive(Subcommand)]` types live here,
//! keeping `main.rs` focused on dispatch logic.

use clap::{Args, Parser, Subcommand};

/// Pitchdrill - Ear-Training Question Generator
#[derive(Parser)]
#[command(name = "pitchdrill")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate one question for an exercise family
    Question {
        #[command(subcommand)]
        family: QuestionFamily,
    },

    /// Grade a submitted answer against the echoed correct value
    Grade {
        /// Canonical value the user picked
        #[arg(long)]
        submitted: String,

        /// Canonical correct value echoed from the question payload
        #[arg(long)]
        correct: String,

        /// Output machine-readable JSON
        #[arg(long)]
        json: bool,
    },

    /// Inspect or clear the derived artifact cache
    Cache {
        #[command(subcommand)]
        action: CacheAction,
    },

    /// List the selectable catalogues: intervals, scales, chords, keys
    Catalog {
        /// Output machine-readable JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Subcommand)]
pub enum QuestionFamily {
    /// Interval recognition: two notes in sequence
    Interval {
        /// Comma-separated allowed interval names (default: all but unison)
        #[arg(long, value_delimiter = ',')]
        intervals: Option<Vec<String>>,

        /// Comma-separated allowed directions: up, down (default: both)
        #[arg(long, value_delimiter = ',')]
        directions: Option<Vec<String>>,

        #[command(flatten)]
        common: CommonArgs,
    },

    /// Scale-degree recognition: one note against a reference scale
    ScaleDegree {
        /// Scale catalogue entry name
        #[arg(long, default_value = "major")]
        scale: String,

        /// Key root pitch class
        #[arg(long, default_value = "C")]
        key: String,

        /// Base octave of the walk
        #[arg(long, default_value_t = 4)]
        octave: i32,

        /// Octave range: 1 or 2
        #[arg(long, default_value_t = 1)]
        range: u8,

        #[command(flatten)]
        common: CommonArgs,
    },

    /// Chord-quality recognition: a stacked diatonic chord
    ChordQuality {
        /// Key root pitch class
        #[arg(long, default_value = "C")]
        key: String,

        /// Comma-separated allowed roman numerals (default: I,ii,iii,IV,V,vi)
        #[arg(long, value_delimiter = ',')]
        numerals: Option<Vec<String>>,

        #[command(flatten)]
        common: CommonArgs,
    },
}

/// Arguments shared by every question subcommand.
#[derive(Args)]
pub struct CommonArgs {
    /// Directory of single-note source recordings
    #[arg(long, default_value = "assets/notes")]
    pub notes_dir: String,

    /// Directory for synthesized composite clips
    #[arg(long, default_value = "assets/cache")]
    pub cache_dir: String,

    /// Seed for reproducible questions (default: drawn from OS entropy)
    #[arg(long)]
    pub seed: Option<u32>,

    /// Output machine-readable JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Subcommand)]
pub enum CacheAction {
    /// Show entry count and total size
    Info {
        /// Directory for synthesized composite clips
        #[arg(long, default_value = "assets/cache")]
        cache_dir: String,

        /// Output machine-readable JSON
        #[arg(long)]
        json: bool,
    },

    /// Delete every cached artifact
    Clear {
        /// Directory for synthesized composite clips
        #[arg(long, default_value = "assets/cache")]
        cache_dir: String,

        /// Output machine-readable JSON
        #[arg(long)]
        json: bool,
    },
}
