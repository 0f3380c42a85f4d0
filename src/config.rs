//! Engine configuration.
//!
//! [`QueensConfig`] holds every parameter of the evolutionary run. It is
//! built once before a run, validated, and then shared read-only by all
//! components.

use thiserror::Error;

/// Invalid configuration parameters.
///
/// These are precondition violations at the configuration boundary; the
/// engine itself has no recoverable runtime faults.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// Fewer than two queens: swap mutation and diagonal conflicts both
    /// need at least two rows.
    #[error("n_queens must be at least 2, got {0}")]
    BoardTooSmall(usize),

    /// Fewer than two individuals: culling stages two distinct
    /// individuals per round.
    #[error("population_size must be at least 2, got {0}")]
    PopulationTooSmall(usize),
}

/// Configuration for the evolutionary N-queens engine.
///
/// # Defaults
///
/// ```
/// use queens_evo::QueensConfig;
///
/// let config = QueensConfig::default();
/// assert_eq!(config.n_queens, 8);
/// assert_eq!(config.population_size, 100);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use queens_evo::QueensConfig;
///
/// let config = QueensConfig::default()
///     .with_n_queens(12)
///     .with_population_size(50)
///     .with_birth_rate(0.2)
///     .with_mutation_rate(0.4)
///     .with_seed(42);
/// ```
#[derive(Debug, Clone)]
pub struct QueensConfig {
    /// Board size: number of rows, columns, and queens. Must be >= 2.
    pub n_queens: usize,

    /// Target population size after selection. Must be >= 2.
    ///
    /// Deduplication can leave a generation below this size; the engine
    /// never pads the shortfall back up.
    pub population_size: usize,

    /// Crossover *suppression* probability in `[0, 1]`.
    ///
    /// A couple whose gate draw lands at or below this rate produces no
    /// child, so 0.9 suppresses roughly 90% of crossovers. The inverted
    /// naming is part of the engine's historical contract.
    pub birth_rate: f64,

    /// Mutation *suppression* probability in `[0, 1]`.
    ///
    /// Same inverted semantics as `birth_rate`: an individual whose gate
    /// draw lands at or below this rate is dropped instead of mutated.
    pub mutation_rate: f64,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for QueensConfig {
    fn default() -> Self {
        Self {
            n_queens: 8,
            population_size: 100,
            birth_rate: 0.3,
            mutation_rate: 0.3,
            seed: None,
        }
    }
}

impl QueensConfig {
    /// Sets the board size.
    pub fn with_n_queens(mut self, n: usize) -> Self {
        self.n_queens = n;
        self
    }

    /// Sets the target population size.
    pub fn with_population_size(mut self, size: usize) -> Self {
        self.population_size = size;
        self
    }

    /// Sets the crossover suppression rate, clamped to `[0, 1]`.
    pub fn with_birth_rate(mut self, rate: f64) -> Self {
        self.birth_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the mutation suppression rate, clamped to `[0, 1]`.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.n_queens < 2 {
            return Err(ConfigError::BoardTooSmall(self.n_queens));
        }
        if self.population_size < 2 {
            return Err(ConfigError::PopulationTooSmall(self.population_size));
        }
        Ok(())
    }
}
