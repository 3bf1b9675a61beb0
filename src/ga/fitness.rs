//! Fitness evaluation against the target string.

use super::types::{Fitness, Individual};
use crate::error::ConfigError;
use crate::random::is_gene;

/// The string the population evolves toward.
///
/// Construction validates that the target is non-empty printable ASCII, so
/// every genome drawn from the gene alphabet can in principle reach it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    bytes: Vec<u8>,
}

impl Target {
    /// Validates and wraps a target string.
    pub fn new(target: &str) -> Result<Self, ConfigError> {
        if target.is_empty() {
            return Err(ConfigError::EmptyTarget);
        }
        if let Some((position, &byte)) = target
            .as_bytes()
            .iter()
            .enumerate()
            .find(|&(_, &b)| !is_gene(b))
        {
            return Err(ConfigError::NonPrintableTarget { position, byte });
        }
        Ok(Self {
            bytes: target.as_bytes().to_vec(),
        })
    }

    /// Chromosome length implied by the target.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Summed absolute byte distance between `genome` and the target.
    ///
    /// # Panics
    /// Panics if `genome.len() != self.len()`.
    pub fn distance(&self, genome: &[u8]) -> Fitness {
        assert_eq!(
            genome.len(),
            self.bytes.len(),
            "genome length must equal target length"
        );
        genome
            .iter()
            .zip(&self.bytes)
            .map(|(&g, &t)| Fitness::from(g.abs_diff(t)))
            .sum()
    }

    /// Computes and stores the fitness of `individual`.
    pub fn evaluate(&self, individual: &mut Individual) -> Fitness {
        let fitness = self.distance(individual.genome());
        individual.set_fitness(fitness);
        fitness
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_exact_match_is_zero() {
        let target = Target::new("Hello world!").unwrap();
        assert_eq!(target.distance(b"Hello world!"), 0);
    }

    #[test]
    fn test_distance_sums_abs_diff() {
        let target = Target::new("Hi").unwrap();
        // |'G' - 'H'| + |'k' - 'i'| = 1 + 2
        assert_eq!(target.distance(b"Gk"), 3);
        // ' ' (32) vs '~' (126) is the widest single-position gap
        let wide = Target::new("~").unwrap();
        assert_eq!(wide.distance(b" "), 94);
    }

    #[test]
    fn test_evaluate_writes_fitness() {
        let target = Target::new("abc").unwrap();
        let mut ind = Individual::new(b"abd".to_vec());
        assert_eq!(target.evaluate(&mut ind), 1);
        assert_eq!(ind.fitness(), 1);
        assert!(ind.is_evaluated());
    }

    #[test]
    #[should_panic(expected = "genome length must equal target length")]
    fn test_length_mismatch_panics() {
        let target = Target::new("abc").unwrap();
        target.distance(b"ab");
    }

    #[test]
    fn test_rejects_empty_target() {
        assert_eq!(Target::new(""), Err(ConfigError::EmptyTarget));
    }

    #[test]
    fn test_rejects_non_printable_target() {
        assert_eq!(
            Target::new("ab\tc"),
            Err(ConfigError::NonPrintableTarget {
                position: 2,
                byte: b'\t'
            })
        );
        assert!(Target::new("héllo").is_err());
    }

    proptest! {
        #[test]
        fn prop_zero_iff_identical(
            pair in (1usize..32).prop_flat_map(|n| (
                prop::collection::vec(32u8..=126, n),
                prop::collection::vec(32u8..=126, n),
            ))
        ) {
            let (target_bytes, genome) = pair;
            let target_str = String::from_utf8(target_bytes).unwrap();
            let target = Target::new(&target_str).unwrap();

            let d = target.distance(&genome);
            prop_assert_eq!(d == 0, genome == target.as_bytes());
            prop_assert_eq!(target.distance(target.as_bytes()), 0);
        }
    }
}
