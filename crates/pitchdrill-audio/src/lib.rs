//! Pitchdrill Audio - Source Store and Derived Artifact Cache
//!
//! This crate owns everything that touches audio storage:
//!
//! - [`store`]: read-only lookup from a note to its single-note source
//!   recording
//! - [`clip`]: WAV decoding plus the slice/pad/concat/stack operations
//! - [`cache`]: BLAKE3 content-addressed persistence of synthesized
//!   composite clips
//!
//! Synthesis is a deterministic pure function of the artifact key: the same
//! (layout, note sequence, per-note duration) always produces byte-identical
//! output, which is why concurrent redundant synthesis of the same key is
//! tolerated instead of locked.

pub mod cache;
pub mod clip;
pub mod error;
pub mod store;

// Re-export main types at the crate root
pub use cache::{ArtifactCache, ArtifactKey, CacheInfo, ClipLayout};
pub use clip::{frames_for_ms, load_clip, write_wav_mono16, Clip};
pub use error::{AudioError, AudioResult};
pub use store::AudioAssetStore;
