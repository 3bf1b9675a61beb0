//! Generational genetic algorithm that evolves strings toward a target.
//!
//! Candidate strings of printable ASCII are scored by their summed
//! per-character distance to a target string and improved generation by
//! generation through tournament selection, single-point crossover and
//! point mutation.
//!
//! # Example
//!
//! ```
//! use string_evolver::ga::{GaConfig, GaRunner};
//!
//! let config = GaConfig::new("Hi")
//!     .with_population_size(50)
//!     .with_max_generations(30)
//!     .with_seed(7);
//! let result = GaRunner::run(&config).unwrap();
//! println!("record: {} (fitness {})", result.record, result.record.fitness());
//! ```
//!
//! All randomness flows through one explicitly passed generator, so a run
//! with a fixed seed is fully reproducible.

pub mod error;
pub mod ga;
pub mod random;

pub use error::{ConfigError, GaError};
