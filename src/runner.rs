//! Generational loop execution.
//!
//! [`QueensRunner`] orchestrates one full generational step —
//! reproduction, mutation of the fresh children, pooling, selection —
//! and repeats it for a fixed iteration count. There is no convergence
//! detection and no early exit; the run is bounded only by the caller's
//! iteration budget.

use crate::config::QueensConfig;
use crate::evaluate::mean_conflicts;
use crate::operators::{mutate, reproduce};
use crate::random::create_rng;
use crate::selection::select;
use crate::types::{Individual, Population};
use rand::Rng;
use tracing::debug;

/// Executes the evolutionary loop.
///
/// # Usage
///
/// ```
/// use queens_evo::{QueensConfig, QueensRunner};
/// use queens_evo::random::create_rng;
///
/// let config = QueensConfig::default()
///     .with_n_queens(6)
///     .with_population_size(20);
/// let mut rng = create_rng(42);
/// let initial = QueensRunner::create_population(6, 20, &mut rng);
/// let evolved = QueensRunner::run(&config, initial, 30, &mut rng);
/// assert!(evolved.len() <= 20);
/// ```
pub struct QueensRunner;

impl QueensRunner {
    /// Builds `size` individuals with `n` positions each, drawn uniformly
    /// from `[0, n)` per row. Duplicates are permitted.
    pub fn create_population<R: Rng>(n: usize, size: usize, rng: &mut R) -> Population {
        (0..size).map(|_| Individual::random(n, rng)).collect()
    }

    /// Advances the population by one generation.
    ///
    /// Children come from pairing and crossover over the parents; the
    /// mutants are perturbed copies of those fresh children, not of the
    /// parents. Parents, children, and mutants are pooled together and
    /// the selector culls the pool back toward `population_size`.
    pub fn step<R: Rng>(
        config: &QueensConfig,
        parents: Population,
        rng: &mut R,
    ) -> Population {
        let children = reproduce(parents.clone(), config.birth_rate, rng);
        let mutants = mutate(children.clone(), config.mutation_rate, rng);

        let mut pool = parents;
        pool.extend(children);
        pool.extend(mutants);
        select(pool, config.population_size, rng)
    }

    /// Applies [`step`](Self::step) exactly `iterations` times, feeding
    /// each output population into the next generation.
    ///
    /// # Panics
    /// Panics if the configuration is invalid (call
    /// [`QueensConfig::validate`] first to get a descriptive error).
    pub fn run<R: Rng>(
        config: &QueensConfig,
        population: Population,
        iterations: usize,
        rng: &mut R,
    ) -> Population {
        config.validate().expect("invalid QueensConfig");

        let mut population = population;
        for generation in 0..iterations {
            population = Self::step(config, population, rng);
            debug!(
                generation = generation + 1,
                size = population.len(),
                mean_conflicts = mean_conflicts(&population),
                "generation complete"
            );
        }
        population
    }

    /// Like [`run`](Self::run), but builds the RNG from `config.seed`
    /// (falling back to an entropy seed when `None`).
    pub fn run_seeded(
        config: &QueensConfig,
        population: Population,
        iterations: usize,
    ) -> Population {
        let mut rng = match config.seed {
            Some(seed) => create_rng(seed),
            None => create_rng(rand::random()),
        };
        Self::run(config, population, iterations, &mut rng)
    }
}

// ============================================================================
// Tests
// ============================================================================
