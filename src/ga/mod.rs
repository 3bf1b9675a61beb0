//! Generational genetic algorithm over printable-ASCII strings.
//!
//! A population of random strings is evolved toward a fixed target by
//! minimizing the summed per-character distance to it.
//!
//! # Key Types
//!
//! - [`GaConfig`]: Run parameters (target, population size, rates, seed)
//! - [`Individual`]: A genome with its cached fitness
//! - [`Target`]: Fitness evaluation against the target string
//! - [`Population`]: Members plus the best index of the last evaluation
//! - [`Tournament`]: Tournament selection
//! - [`GaRunner`]: Executes the generational loop
//! - [`GaResult`]: Final and all-time best individuals with statistics
//!
//! # Submodules
//!
//! - [`operators`]: Single-point crossover and point mutation
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

mod config;
mod fitness;
pub mod operators;
mod population;
mod report;
mod runner;
mod selection;
mod types;

pub use config::GaConfig;
pub use fitness::Target;
pub use population::{GenerationStats, Population};
pub use report::{GenerationObserver, GenerationPrinter, GenerationReport};
pub use runner::{GaResult, GaRunner};
pub use selection::Tournament;
pub use types::{Fitness, Individual, WORST_FITNESS};
