//! GA evolutionary loop execution.
//!
//! [`GaRunner`] orchestrates the generational process:
//! initialization → evaluation → (report → selection → crossover → mutation
//! → evaluation) × `max_generations`.
//!
//! Generation `n` in reports is the population *entering* the `n`-th
//! evolution step, so generation 1 is the evaluated random population. The
//! population produced by the last step is returned in [`GaResult::best`]
//! but not reported.

use super::config::GaConfig;
use super::operators::{mutate_population, single_point_crossover};
use super::population::Population;
use super::report::{GenerationObserver, GenerationReport};
use super::selection::Tournament;
use super::types::{Fitness, Individual};
use crate::error::Result;
use crate::random::create_rng;
use log::{debug, info, trace};
use rand::Rng;

/// Result of a GA run.
#[derive(Debug, Clone)]
pub struct GaResult {
    /// Best individual of the final population.
    pub best: Individual,

    /// Same as `best.fitness()`.
    pub best_fitness: Fitness,

    /// Best individual seen in any generation (first one found on ties).
    pub record: Individual,

    /// Generation in which `record` was first seen. The final, unreported
    /// population counts as `generations + 1`.
    pub record_generation: usize,

    /// Number of evolution steps executed.
    pub generations: usize,

    /// Best fitness of each reported generation.
    pub fitness_history: Vec<Fitness>,

    /// Seed the run used. Feeding it back through
    /// [`GaConfig::with_seed`] replays the run exactly.
    pub seed: u64,
}

/// Executes the string GA.
///
/// # Usage
///
/// ```
/// use string_evolver::ga::{GaConfig, GaRunner};
///
/// let config = GaConfig::new("Hi")
///     .with_population_size(50)
///     .with_max_generations(20)
///     .with_seed(42);
/// let result = GaRunner::run(&config).unwrap();
/// assert_eq!(result.fitness_history.len(), 20);
/// assert!(result.record.fitness() <= result.fitness_history[0]);
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs the GA without reporting generations.
    pub fn run(config: &GaConfig) -> Result<GaResult> {
        Self::run_with_observer(config, &mut |_: &GenerationReport| -> std::io::Result<()> {
            Ok(())
        })
    }

    /// Runs the GA, handing one [`GenerationReport`] per generation to
    /// `observer`.
    ///
    /// The configuration is validated before any random draw. An observer
    /// error stops the run and is returned as [`GaError::Io`].
    ///
    /// [`GaError::Io`]: crate::error::GaError::Io
    pub fn run_with_observer<O: GenerationObserver>(
        config: &GaConfig,
        observer: &mut O,
    ) -> Result<GaResult> {
        let target = config.validate()?;
        let seed = config.seed.unwrap_or_else(rand::random);
        let mut rng = create_rng(seed);
        let tournament = Tournament::new(config.tournament_size);

        info!(
            "evolving {:?}: population={} generations={} survivors={} tournament={} mutation_rate={} seed={}",
            config.target,
            config.population_size,
            config.max_generations,
            config.survivor_count(),
            config.tournament_size,
            config.mutation_rate,
            seed
        );

        // 1. Initialize and evaluate
        let mut population = Population::random(config.population_size, target.len(), &mut rng);
        population.evaluate(&target);

        let mut record = current_best(&population).clone();
        let mut record_generation = 1;
        let mut fitness_history = Vec::with_capacity(config.max_generations);
        let mut mutations = 0;

        // 2. Generational loop
        for generation in 1..=config.max_generations {
            let best = current_best(&population);
            if best.fitness() < record.fitness() {
                record = best.clone();
                record_generation = generation;
            }
            fitness_history.push(best.fitness());

            let stats = population
                .stats(generation, mutations)
                .expect("population is evaluated");
            debug!(
                "generation {}: best={} mean={:.2} worst={} mutations={}",
                generation,
                stats.best_fitness,
                stats.mean_fitness,
                stats.worst_fitness,
                stats.mutations
            );

            observer.on_generation(&GenerationReport {
                generation,
                best: best.clone(),
                stats,
            })?;

            let mut next = next_generation(&population, config, &tournament, &mut rng);
            trace!("generation {}: mutating", generation);
            mutations = mutate_population(&mut next, config.mutation_rate, &mut rng);
            trace!("generation {}: evaluating", generation);
            next.evaluate(&target);
            population = next;
        }

        let best = current_best(&population).clone();
        if best.fitness() < record.fitness() {
            record = best.clone();
            record_generation = config.max_generations + 1;
        }

        info!(
            "finished {} generations: record fitness {} ({}) in generation {}",
            config.max_generations,
            record.fitness(),
            record,
            record_generation
        );

        Ok(GaResult {
            best_fitness: best.fitness(),
            best,
            record,
            record_generation,
            generations: config.max_generations,
            fitness_history,
            seed,
        })
    }
}

/// Builds the replacement population from `current`.
///
/// Survivors are plain tournament winners; the remaining slots are filled
/// with single-point crossover children of two independent tournament
/// winners. Tournaments always read `current`, never the population being
/// built. The result is unevaluated.
fn next_generation<R: Rng>(
    current: &Population,
    config: &GaConfig,
    tournament: &Tournament,
    rng: &mut R,
) -> Population {
    let size = current.len();
    let members = current.members();
    let mut next = Population::with_capacity(size, current.chromosome_length());

    trace!("selecting {} survivors", config.survivor_count());
    for _ in 0..config.survivor_count() {
        let idx = tournament.select(members, rng);
        next.push(members[idx].clone());
    }

    trace!("filling {} slots by crossover", size - next.len());
    while next.len() < size {
        let father = &members[tournament.select(members, rng)];
        let mother = &members[tournament.select(members, rng)];
        let child = single_point_crossover(father.genome(), mother.genome(), rng);
        next.push(Individual::new(child));
    }

    next
}

fn current_best(population: &Population) -> &Individual {
    population
        .best()
        .expect("population must be evaluated and non-empty")
}

// ============================================================================
// Tests
// ============================================================================
