//! GA configuration.
//!
//! [`GaConfig`] holds every parameter of a run. It is built once, validated,
//! and then only read.

use super::fitness::Target;
use crate::error::ConfigError;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration for the string GA.
///
/// # Defaults
///
/// ```
/// use string_evolver::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.target, "Hello world!");
/// assert_eq!(config.population_size, 1000);
/// assert_eq!(config.max_generations, 100);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use string_evolver::ga::GaConfig;
///
/// let config = GaConfig::new("Hi")
///     .with_population_size(50)
///     .with_max_generations(50)
///     .with_tournament_size(3)
///     .with_selection_ratio(0.1)
///     .with_mutation_rate(0.1)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GaConfig {
    /// String the population evolves toward. Its length fixes the
    /// chromosome length of the run.
    pub target: String,

    /// Number of individuals in every generation.
    pub population_size: usize,

    /// Number of generations reported (and evolution steps run).
    pub max_generations: usize,

    /// Fraction of each new generation filled by plain tournament winners
    /// (0.0–1.0). The rest is filled with crossover children.
    pub selection_ratio: f64,

    /// Members drawn per tournament.
    pub tournament_size: usize,

    /// Probability that a member receives one point mutation per
    /// generation (0.0–1.0).
    pub mutation_rate: f64,

    /// Random seed for reproducibility.
    ///
    /// `None` draws a fresh seed for each run.
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            target: "Hello world!".to_string(),
            population_size: 1000,
            max_generations: 100,
            selection_ratio: 0.1,
            tournament_size: 3,
            mutation_rate: 0.02,
            seed: None,
        }
    }
}

impl GaConfig {
    /// Default parameters with a different target.
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            ..Self::default()
        }
    }

    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.target = target.into();
        self
    }

    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = n;
        self
    }

    /// Sets the selection ratio, clamped to `[0, 1]`.
    pub fn with_selection_ratio(mut self, ratio: f64) -> Self {
        self.selection_ratio = ratio.clamp(0.0, 1.0);
        self
    }

    pub fn with_tournament_size(mut self, k: usize) -> Self {
        self.tournament_size = k;
        self
    }

    /// Sets the mutation rate, clamped to `[0, 1]`.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Number of tournament winners copied into each new generation:
    /// `floor(selection_ratio * population_size)`.
    pub fn survivor_count(&self) -> usize {
        ((self.selection_ratio * self.population_size as f64).floor() as usize)
            .min(self.population_size)
    }

    /// Validates the configuration and returns the parsed target.
    pub fn validate(&self) -> Result<Target, ConfigError> {
        let target = Target::new(&self.target)?;
        if self.population_size < 2 {
            return Err(ConfigError::PopulationTooSmall(self.population_size));
        }
        if self.max_generations == 0 {
            return Err(ConfigError::ZeroGenerations);
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(ConfigError::MutationRateOutOfRange(self.mutation_rate));
        }
        if !(0.0..=1.0).contains(&self.selection_ratio) {
            return Err(ConfigError::SelectionRatioOutOfRange(self.selection_ratio));
        }
        if self.tournament_size == 0 || self.tournament_size > self.population_size {
            return Err(ConfigError::TournamentSize {
                size: self.tournament_size,
                population_size: self.population_size,
            });
        }
        Ok(target)
    }
}
