//! Content-addressed cache of synthesized composite clips.
//!
//! Artifacts are keyed by (layout, note sequence, per-note duration). The
//! canonical key string is BLAKE3-hashed into the entry file name, so two
//! requests with the same key always resolve to the same path and, modulo
//! first synthesis, byte-identical content.

use std::fs;
use std::path::{Path, PathBuf};

use pitchdrill_theory::NoteId;

use crate::clip::{concat_slices, frames_for_ms, load_clip, stack_slices, write_wav_mono16};
use crate::error::{AudioError, AudioResult};
use crate::store::AudioAssetStore;

/// Headroom target for stacked mixes, in dBFS.
const STACK_HEADROOM_DB: f64 = -1.0;

/// How the slices of a composite clip are assembled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClipLayout {
    /// Slices play one after another (intervals, scales).
    Sequence,
    /// Slices play simultaneously (chords).
    Stacked,
}

impl ClipLayout {
    fn tag(self) -> &'static str {
        match self {
            ClipLayout::Sequence => "seq",
            ClipLayout::Stacked => "stack",
        }
    }
}

/// Deterministic identifier for a cached composite clip.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ArtifactKey {
    /// Assembly layout.
    pub layout: ClipLayout,
    /// Ordered note sequence.
    pub notes: Vec<NoteId>,
    /// Fixed duration of each slice in milliseconds.
    pub per_note_ms: u32,
}

impl ArtifactKey {
    /// Key for a sequential composite (interval, scale).
    pub fn sequence(notes: Vec<NoteId>, per_note_ms: u32) -> Self {
        Self {
            layout: ClipLayout::Sequence,
            notes,
            per_note_ms,
        }
    }

    /// Key for a stacked composite (chord).
    pub fn stacked(notes: Vec<NoteId>, per_note_ms: u32) -> Self {
        Self {
            layout: ClipLayout::Stacked,
            notes,
            per_note_ms,
        }
    }

    /// Canonical key string, e.g. `"seq:C4,Csharp4:1000ms"`.
    pub fn canonical(&self) -> String {
        let names: Vec<String> = self.notes.iter().map(|n| n.safe_name()).collect();
        format!("{}:{}:{}ms", self.layout.tag(), names.join(","), self.per_note_ms)
    }

    /// Entry file name: BLAKE3 of the canonical string, hex, `.wav`.
    pub fn entry_name(&self) -> String {
        let hash = blake3::hash(self.canonical().as_bytes());
        format!("{}.wav", hash.to_hex())
    }
}

/// Write-once cache of derived composite clips.
///
/// Entries are created lazily on first resolve and never invalidated or
/// evicted here; cleanup is an operational concern. Concurrent resolves of
/// the same missing key may both synthesize; the atomic rename makes that
/// a benign last-writer-wins race since outputs are deterministic.
#[derive(Debug, Clone)]
pub struct ArtifactCache {
    store: AudioAssetStore,
    cache_dir: PathBuf,
}

impl ArtifactCache {
    /// Creates a cache over a source store, persisting under `cache_dir`.
    pub fn new(store: AudioAssetStore, cache_dir: impl Into<PathBuf>) -> Self {
        Self {
            store,
            cache_dir: cache_dir.into(),
        }
    }

    /// The source store backing this cache.
    pub fn store(&self) -> &AudioAssetStore {
        &self.store
    }

    /// The cache directory.
    pub fn cache_dir(&self) -> &Path {
        &self.cache_dir
    }

    /// Path where the artifact for `key` lives (whether or not it exists).
    pub fn artifact_path(&self, key: &ArtifactKey) -> PathBuf {
        self.cache_dir.join(key.entry_name())
    }

    /// Existence probe; no side effects.
    pub fn contains(&self, key: &ArtifactKey) -> bool {
        self.artifact_path(key).is_file()
    }

    /// Returns the artifact path, synthesizing and persisting on first access.
    ///
    /// A cache hit returns immediately without re-validating byte content.
    /// On a miss, every note's source is checked up front and a single
    /// missing recording fails the whole request (no partial synthesis).
    pub fn resolve(&self, key: &ArtifactKey) -> AudioResult<PathBuf> {
        let path = self.artifact_path(key);
        if path.is_file() {
            return Ok(path);
        }

        if key.notes.is_empty() {
            return Err(AudioError::synthesis("empty note sequence"));
        }

        let mut sources = Vec::with_capacity(key.notes.len());
        for &note in &key.notes {
            sources.push(self.store.require(note)?);
        }

        let mut clips = Vec::with_capacity(sources.len());
        for source in &sources {
            clips.push(load_clip(source)?);
        }

        let sample_rate = clips[0].sample_rate;
        if let Some(odd) = clips.iter().find(|c| c.sample_rate != sample_rate) {
            return Err(AudioError::synthesis(format!(
                "sample rate mismatch: {} vs {}",
                sample_rate, odd.sample_rate
            )));
        }

        let frames = frames_for_ms(sample_rate, key.per_note_ms);
        let slices: Vec<Vec<f64>> = clips.iter().map(|c| c.fit_to(frames)).collect();
        let samples = match key.layout {
            ClipLayout::Sequence => concat_slices(&slices),
            ClipLayout::Stacked => stack_slices(&slices, STACK_HEADROOM_DB),
        };

        fs::create_dir_all(&self.cache_dir)?;
        let tmp = tempfile::Builder::new()
            .prefix(".artifact-")
            .suffix(".wav")
            .tempfile_in(&self.cache_dir)?;
        write_wav_mono16(tmp.path(), sample_rate, &samples)?;
        tmp.persist(&path)
            .map_err(|e| AudioError::synthesis(format!("failed to persist artifact: {}", e)))?;

        Ok(path)
    }

    /// Removes every cached artifact, returning how many were deleted.
    pub fn clear(&self) -> AudioResult<u64> {
        if !self.cache_dir.exists() {
            return Ok(0);
        }

        let mut count = 0u64;
        for entry in fs::read_dir(&self.cache_dir)? {
            let path = entry?.path();
            if path.is_file() && path.extension().and_then(|s| s.to_str()) == Some("wav") {
                fs::remove_file(&path)?;
                count += 1;
            }
        }
        Ok(count)
    }

    /// Cache statistics: entry count and total size on disk.
    pub fn info(&self) -> AudioResult<CacheInfo> {
        let mut info = CacheInfo {
            cache_dir: self.cache_dir.clone(),
            entry_count: 0,
            total_size_bytes: 0,
        };
        if !self.cache_dir.exists() {
            return Ok(info);
        }

        for entry in fs::read_dir(&self.cache_dir)? {
            let entry = entry?;
            let path = entry.path();
            if path.is_file() && path.extension().and_then(|s| s.to_str()) == Some("wav") {
                info.entry_count += 1;
                info.total_size_bytes += entry.metadata()?.len();
            }
        }
        Ok(info)
    }
}

/// Cache statistics.
#[derive(Debug, Clone)]
pub struct CacheInfo {
    /// Cache directory path.
    pub cache_dir: PathBuf,
    /// Number of cached artifacts.
    pub entry_count: u64,
    /// Total size in bytes.
    pub total_size_bytes: u64,
}
