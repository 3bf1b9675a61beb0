//! Per-generation reporting.
//!
//! The runner hands a [`GenerationReport`] to a [`GenerationObserver`] once
//! per generation. [`GenerationPrinter`] writes the line-oriented format the
//! command-line binary prints:
//!
//! ```text
//! Best individual of generation 1:
//! Gdkkn vnqkc!
//! ```

use super::population::GenerationStats;
use super::types::Individual;
use std::io::{self, Write};

/// What the runner knows about one evaluated generation.
#[derive(Debug, Clone)]
pub struct GenerationReport {
    /// 1-based generation number.
    pub generation: usize,
    /// Best member of this generation (first minimum on ties).
    pub best: Individual,
    pub stats: GenerationStats,
}

/// Receives one report per generation.
///
/// Returning an error aborts the run.
pub trait GenerationObserver {
    fn on_generation(&mut self, report: &GenerationReport) -> io::Result<()>;
}

impl<F> GenerationObserver for F
where
    F: FnMut(&GenerationReport) -> io::Result<()>,
{
    fn on_generation(&mut self, report: &GenerationReport) -> io::Result<()> {
        self(report)
    }
}

/// Writes the best genome of each generation to `W`.
pub struct GenerationPrinter<W: Write> {
    out: W,
}

impl<W: Write> GenerationPrinter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> GenerationObserver for GenerationPrinter<W> {
    fn on_generation(&mut self, report: &GenerationReport) -> io::Result<()> {
        writeln!(
            self.out,
            "Best individual of generation {}:",
            report.generation
        )?;
        writeln!(self.out, "{}", report.best)
    }
}
