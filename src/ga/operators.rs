//! Genetic operators for byte-string genomes.
//!
//! # Crossover
//!
//! - [`single_point_crossover`]: splice two parents at one random cut point
//! - [`crossover_at`]: the same splice at a caller-chosen point
//!
//! # Mutation
//!
//! - [`point_mutation`]: replace one random position with a fresh gene — O(1)
//! - [`mutate_population`]: apply [`point_mutation`] to each member with a
//!   fixed probability

use super::population::Population;
use crate::random::random_gene;
use rand::Rng;

// ============================================================================
// Crossover operators
// ============================================================================

/// Single-point crossover.
///
/// Draws a cut point `p` uniformly from `[0, L)` and returns
/// `father[..p] ++ mother[p..]`. Because `p` never reaches `L`, the last
/// gene always comes from the mother; `p = 0` yields a copy of the mother.
///
/// # Complexity
/// O(L) time, O(L) space
///
/// # Panics
/// Panics if parents have different lengths or are empty.
pub fn single_point_crossover<R: Rng>(father: &[u8], mother: &[u8], rng: &mut R) -> Vec<u8> {
    assert!(!father.is_empty(), "parents must not be empty");
    let point = rng.random_range(0..father.len());
    crossover_at(father, mother, point)
}

/// Splices `father[..point]` with `mother[point..]`.
///
/// # Panics
/// Panics if parents have different lengths or `point > len`.
pub fn crossover_at(father: &[u8], mother: &[u8], point: usize) -> Vec<u8> {
    assert_eq!(father.len(), mother.len(), "parents must have equal length");
    assert!(point <= father.len(), "crossover point out of range");

    let mut child = Vec::with_capacity(father.len());
    child.extend_from_slice(&father[..point]);
    child.extend_from_slice(&mother[point..]);
    child
}

// ============================================================================
// Mutation operators
// ============================================================================

/// Replaces one uniformly chosen gene with a fresh random printable byte.
///
/// The new byte may equal the old one. Returns the mutated position, or
/// `None` for an empty genome.
pub fn point_mutation<R: Rng>(genome: &mut [u8], rng: &mut R) -> Option<usize> {
    if genome.is_empty() {
        return None;
    }
    let idx = rng.random_range(0..genome.len());
    genome[idx] = random_gene(rng);
    Some(idx)
}

/// Mutates each member independently with probability `rate`.
///
/// At most one position per member changes. Mutated members keep a stale
/// fitness until the next evaluation pass, and the population's best index
/// is invalidated. Returns how many members were mutated.
///
/// # Panics
/// Panics if `rate` is outside `[0, 1]`.
pub fn mutate_population<R: Rng>(population: &mut Population, rate: f64, rng: &mut R) -> usize {
    let mut mutated = 0;
    for member in population.members_mut() {
        if rng.random_bool(rate) && point_mutation(member.genome_mut(), rng).is_some() {
            mutated += 1;
        }
    }
    mutated
}
