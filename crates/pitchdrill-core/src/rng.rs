//! Deterministic RNG construction with BLAKE3 seed derivation.
//!
//! All sampling flows through a seeded PCG32 generator so a drill question
//! can be replayed from its seed. Per-family streams are derived by hashing
//! the base seed with the family key.

use rand::SeedableRng;
use rand_pcg::Pcg32;

/// Creates a PCG32 RNG from a 32-bit seed.
///
/// The 32-bit seed is expanded to 64 bits by duplicating the value in both
/// halves of the PCG state.
pub fn create_rng(seed: u32) -> Pcg32 {
    let seed64 = (seed as u64) | ((seed as u64) << 32);
    Pcg32::seed_from_u64(seed64)
}

/// Derives an independent seed for a component from the base seed.
///
/// Hashes `base_seed || key` with BLAKE3 and truncates to 32 bits, so
/// different components draw from unrelated streams.
pub fn derive_component_seed(base_seed: u32, key: &str) -> u32 {
    let mut input = Vec::with_capacity(4 + key.len());
    input.extend_from_slice(&base_seed.to_le_bytes());
    input.extend_from_slice(key.as_bytes());

    let hash = blake3::hash(&input);
    let bytes: [u8; 4] = hash.as_bytes()[0..4].try_into().expect("hash is 32 bytes");
    u32::from_le_bytes(bytes)
}

/// Creates the RNG for a component stream.
pub fn create_component_rng(base_seed: u32, key: &str) -> Pcg32 {
    create_rng(derive_component_seed(base_seed, key))
}
