//! Core data types for the string GA.
//!
//! An [`Individual`] is a genome of printable ASCII bytes plus a cached
//! fitness. The cache is only meaningful after a
//! [`Target`](super::Target) has evaluated the genome; until then it holds
//! the [`WORST_FITNESS`] sentinel.

use std::fmt::{self, Write as _};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Fitness value: summed per-character distance to the target.
///
/// Lower is better, `0` is an exact match.
pub type Fitness = u64;

/// Fitness carried by an individual that has not been evaluated yet.
pub const WORST_FITNESS: Fitness = Fitness::MAX;

/// A candidate string in the population.
///
/// # Examples
///
/// ```
/// use string_evolver::ga::Individual;
///
/// let ind = Individual::new(b"Hi".to_vec());
/// assert!(!ind.is_evaluated());
/// assert_eq!(ind.to_string(), "Hi");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Individual {
    genome: Vec<u8>,
    fitness: Fitness,
}

impl Individual {
    /// Wraps a genome. The fitness starts stale.
    pub fn new(genome: Vec<u8>) -> Self {
        Self {
            genome,
            fitness: WORST_FITNESS,
        }
    }

    pub fn genome(&self) -> &[u8] {
        &self.genome
    }

    /// Mutable access to the genome. Marks the fitness stale.
    pub fn genome_mut(&mut self) -> &mut [u8] {
        self.fitness = WORST_FITNESS;
        &mut self.genome
    }

    pub fn len(&self) -> usize {
        self.genome.len()
    }

    pub fn is_empty(&self) -> bool {
        self.genome.is_empty()
    }

    /// Cached fitness, [`WORST_FITNESS`] if not evaluated.
    pub fn fitness(&self) -> Fitness {
        self.fitness
    }

    pub fn set_fitness(&mut self, fitness: Fitness) {
        self.fitness = fitness;
    }

    pub fn is_evaluated(&self) -> bool {
        self.fitness != WORST_FITNESS
    }
}

impl fmt::Display for Individual {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Genomes only ever hold printable ASCII, so bytes map 1:1 to chars.
        self.genome.iter().try_for_each(|&b| f.write_char(b as char))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_stale() {
        let ind = Individual::new(b"abc".to_vec());
        assert_eq!(ind.fitness(), WORST_FITNESS);
        assert!(!ind.is_evaluated());
        assert_eq!(ind.len(), 3);
    }

    #[test]
    fn test_genome_mut_invalidates_fitness() {
        let mut ind = Individual::new(b"abc".to_vec());
        ind.set_fitness(4);
        assert!(ind.is_evaluated());

        ind.genome_mut()[0] = b'z';
        assert_eq!(ind.genome(), b"zbc");
        assert!(!ind.is_evaluated());
    }

    #[test]
    fn test_display_writes_genome() {
        let ind = Individual::new(b"Hello world!".to_vec());
        assert_eq!(format!("{ind}"), "Hello world!");
    }
}
