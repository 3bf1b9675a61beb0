//! Population of candidate strings.

use super::fitness::Target;
use super::types::{Fitness, Individual};
use crate::random::random_gene;
use rand::Rng;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Aggregate statistics of one evaluated generation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GenerationStats {
    /// 1-based generation number.
    pub generation: usize,
    pub best_fitness: Fitness,
    pub worst_fitness: Fitness,
    pub mean_fitness: f64,
    pub total_fitness: u128,
    /// Members mutated while producing this generation (0 for generation 1).
    pub mutations: usize,
}

/// An ordered collection of individuals with a fixed chromosome length.
///
/// `best_index` is only valid right after [`evaluate`](Self::evaluate);
/// any structural change or mutable access drops it back to `None`.
#[derive(Debug, Clone)]
pub struct Population {
    members: Vec<Individual>,
    chromosome_length: usize,
    best_index: Option<usize>,
    total_fitness: u128,
}

impl Population {
    /// Creates an empty population with room for `capacity` members.
    pub fn with_capacity(capacity: usize, chromosome_length: usize) -> Self {
        Self {
            members: Vec::with_capacity(capacity),
            chromosome_length,
            best_index: None,
            total_fitness: 0,
        }
    }

    /// Creates `size` individuals with uniformly random printable genomes.
    ///
    /// No fitness is computed; call [`evaluate`](Self::evaluate) before
    /// relying on [`best`](Self::best).
    pub fn random<R: Rng>(size: usize, chromosome_length: usize, rng: &mut R) -> Self {
        let mut population = Self::with_capacity(size, chromosome_length);
        for _ in 0..size {
            let genome = (0..chromosome_length).map(|_| random_gene(rng)).collect();
            population.push(Individual::new(genome));
        }
        population
    }

    /// Appends a member.
    ///
    /// # Panics
    /// Panics if the genome length differs from the chromosome length.
    pub fn push(&mut self, individual: Individual) {
        assert_eq!(
            individual.len(),
            self.chromosome_length,
            "genome length must equal chromosome length"
        );
        self.best_index = None;
        self.members.push(individual);
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn chromosome_length(&self) -> usize {
        self.chromosome_length
    }

    pub fn members(&self) -> &[Individual] {
        &self.members
    }

    /// Mutable access to the members. Invalidates the best index.
    pub fn members_mut(&mut self) -> &mut [Individual] {
        self.best_index = None;
        &mut self.members
    }

    /// Evaluates every member and records the best one.
    ///
    /// Ties resolve to the first minimum in member order.
    pub fn evaluate(&mut self, target: &Target) {
        assert_eq!(
            target.len(),
            self.chromosome_length,
            "target length must equal chromosome length"
        );

        let mut best: Option<(usize, Fitness)> = None;
        let mut total = 0u128;
        for (i, member) in self.members.iter_mut().enumerate() {
            let fitness = target.evaluate(member);
            total += u128::from(fitness);
            if best.map_or(true, |(_, f)| fitness < f) {
                best = Some((i, fitness));
            }
        }

        self.best_index = best.map(|(i, _)| i);
        self.total_fitness = total;
    }

    /// Index of the best member as of the last evaluation.
    pub fn best_index(&self) -> Option<usize> {
        self.best_index
    }

    /// Best member as of the last evaluation, `None` if stale or empty.
    pub fn best(&self) -> Option<&Individual> {
        self.best_index.map(|i| &self.members[i])
    }

    /// Mean fitness as of the last evaluation, `None` if stale or empty.
    pub fn mean_fitness(&self) -> Option<f64> {
        self.best_index
            .map(|_| self.total_fitness as f64 / self.members.len() as f64)
    }

    /// Summary of the last evaluation, `None` if stale or empty.
    pub fn stats(&self, generation: usize, mutations: usize) -> Option<GenerationStats> {
        let best = self.best()?;
        let worst_fitness = self.members.iter().map(Individual::fitness).max()?;
        Some(GenerationStats {
            generation,
            best_fitness: best.fitness(),
            worst_fitness,
            mean_fitness: self.total_fitness as f64 / self.members.len() as f64,
            total_fitness: self.total_fitness,
            mutations,
        })
    }
}
