//! Random source helpers.
//!
//! Every stochastic operation in the crate takes an explicit `&mut R: Rng`.
//! A run owns exactly one generator created here, so a fixed seed replays
//! the whole run.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Lowest printable ASCII byte (space).
pub const GENE_MIN: u8 = 32;

/// Highest printable ASCII byte (`~`).
pub const GENE_MAX: u8 = 126;

/// Creates a seeded generator.
pub fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Draws one printable ASCII byte uniformly from `32..=126`.
pub fn random_gene<R: Rng>(rng: &mut R) -> u8 {
    rng.random_range(GENE_MIN..=GENE_MAX)
}

/// Returns `true` if `byte` may appear in a genome.
pub fn is_gene(byte: u8) -> bool {
    (GENE_MIN..=GENE_MAX).contains(&byte)
}
