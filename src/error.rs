//! Error types.
//!
//! Configuration problems are detected eagerly by
//! [`GaConfig::validate`](crate::ga::GaConfig::validate) before a run draws a
//! single random number. Everything else inside the evolutionary loop is a
//! total function over validated data; broken preconditions (such as a genome
//! whose length differs from the target) panic instead of surfacing here.

use thiserror::Error;

/// An invalid run configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("target string must not be empty")]
    EmptyTarget,

    #[error("target byte {byte:#04x} at position {position} is not printable ASCII (32..=126)")]
    NonPrintableTarget { position: usize, byte: u8 },

    #[error("population_size must be at least 2, got {0}")]
    PopulationTooSmall(usize),

    #[error("max_generations must be at least 1")]
    ZeroGenerations,

    #[error("mutation_rate must be within [0, 1], got {0}")]
    MutationRateOutOfRange(f64),

    #[error("selection_ratio must be within [0, 1], got {0}")]
    SelectionRatioOutOfRange(f64),

    #[error("tournament_size must be within 1..={population_size}, got {size}")]
    TournamentSize { size: usize, population_size: usize },
}

/// Errors returned by a GA run.
#[derive(Debug, Error)]
pub enum GaError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("failed to report generation: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, GaError>;
