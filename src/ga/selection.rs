//! Tournament selection.
//!
//! The only selection scheme of the string GA. A tournament draws `k`
//! members uniformly *with replacement* and keeps the fittest. Larger `k`
//! raises selection pressure:
//! - k=1: uniform random choice, no pressure
//! - k=2-3: moderate pressure (the default is 3)
//! - k>5: strong pressure, diversity collapses quickly
//!
//! # References
//!
//! - Miller & Goldberg (1995), "Genetic Algorithms, Tournament Selection,
//!   and the Effects of Noise"

use super::types::Individual;
use rand::Rng;

/// Tournament selector of a fixed size.
///
/// Assumes **minimization**: the lowest fitness wins. Ties keep the member
/// drawn first, which only makes the choice deterministic for a given
/// random stream; no policy beyond that is implied.
///
/// # Examples
///
/// ```
/// use string_evolver::ga::{Individual, Tournament};
/// use string_evolver::random::create_rng;
///
/// let mut members: Vec<Individual> =
///     [b"aa", b"ab", b"ba"].iter().map(|g| Individual::new(g.to_vec())).collect();
/// for (i, m) in members.iter_mut().enumerate() {
///     m.set_fitness(i as u64);
/// }
///
/// let mut rng = create_rng(1);
/// let idx = Tournament::new(3).select(&members, &mut rng);
/// assert!(idx < members.len());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tournament {
    size: usize,
}

impl Default for Tournament {
    fn default() -> Self {
        Self { size: 3 }
    }
}

impl Tournament {
    /// Creates a tournament of `size` draws. A size of 0 is treated as 1.
    pub fn new(size: usize) -> Self {
        Self { size: size.max(1) }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the index of the tournament winner.
    ///
    /// # Complexity
    /// O(k) per selection
    ///
    /// # Panics
    /// Panics if `members` is empty.
    pub fn select<R: Rng>(&self, members: &[Individual], rng: &mut R) -> usize {
        assert!(!members.is_empty(), "cannot select from empty population");

        let n = members.len();
        let mut best_idx = rng.random_range(0..n);
        for _ in 1..self.size {
            let idx = rng.random_range(0..n);
            if members[idx].fitness() < members[best_idx].fitness() {
                best_idx = idx;
            }
        }
        best_idx
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    fn make_members(fitnesses: &[u64]) -> Vec<Individual> {
        fitnesses
            .iter()
            .map(|&f| {
                let mut ind = Individual::new(vec![b'a']);
                ind.set_fitness(f);
                ind
            })
            .collect()
    }

    #[test]
    fn test_tournament_favors_best() {
        let members = make_members(&[10, 5, 1, 8]);
        let mut rng = create_rng(42);

        // k = n still samples with replacement, so the best wins often, not always
        let mut counts = [0u32; 4];
        let n = 10_000;
        for _ in 0..n {
            counts[Tournament::new(4).select(&members, &mut rng)] += 1;
        }
        let best_count = counts[2];
        assert!(
            best_count > 6000,
            "expected best to be selected >60% of the time, got {best_count}/{n}"
        );
    }

    #[test]
    fn test_size_1_is_uniform() {
        let members = make_members(&[10, 5, 1, 8]);
        let mut rng = create_rng(42);

        let mut counts = [0u32; 4];
        for _ in 0..10_000 {
            counts[Tournament::new(1).select(&members, &mut rng)] += 1;
        }
        for &c in &counts {
            assert!(c > 1500, "expected uniform, got counts: {counts:?}");
        }
    }

    #[test]
    fn test_winners_beat_population_mean() {
        let fitnesses: Vec<u64> = (0..100).map(|i| (i * 37 % 100) as u64).collect();
        let members = make_members(&fitnesses);
        let population_mean = fitnesses.iter().sum::<u64>() as f64 / fitnesses.len() as f64;

        let mut rng = create_rng(7);
        let trials = 10_000;
        let total: u64 = (0..trials)
            .map(|_| {
                let idx = Tournament::new(3).select(&members, &mut rng);
                assert!(idx < members.len());
                members[idx].fitness()
            })
            .sum();
        let winners_mean = total as f64 / trials as f64;

        assert!(
            winners_mean < population_mean,
            "winners mean {winners_mean} should be below population mean {population_mean}"
        );
    }

    #[test]
    fn test_equal_fitness_roughly_uniform() {
        let members = make_members(&[5, 5, 5, 5]);
        let mut rng = create_rng(42);

        let mut counts = [0u32; 4];
        for _ in 0..10_000 {
            counts[Tournament::new(2).select(&members, &mut rng)] += 1;
        }
        for &c in &counts {
            assert!(
                c > 1500,
                "expected roughly uniform with equal fitness, got {counts:?}"
            );
        }
    }

    #[test]
    fn test_single_member() {
        let members = make_members(&[5]);
        let mut rng = create_rng(42);
        assert_eq!(Tournament::new(3).select(&members, &mut rng), 0);
    }

    #[test]
    fn test_zero_size_clamped() {
        assert_eq!(Tournament::new(0).size(), 1);
        assert_eq!(Tournament::default().size(), 3);
    }

    #[test]
    #[should_panic(expected = "cannot select from empty population")]
    fn test_empty_population_panics() {
        let mut rng = create_rng(42);
        let members: Vec<Individual> = Vec::new();
        Tournament::new(3).select(&members, &mut rng);
    }
}
