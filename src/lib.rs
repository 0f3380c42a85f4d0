//! Generational evolutionary search for low-conflict N-queens placements.
//!
//! The engine evolves a population of candidate placements toward fewer
//! attacking pairs through repeated generational steps:
//!
//! 1. **Reproduction**: the population is paired into couples and each
//!    couple may produce one child by single-point crossover.
//! 2. **Mutation**: the fresh children (not the parents) are perturbed
//!    by swapping the columns of two random rows.
//! 3. **Selection**: parents, children, and mutants are pooled, exact
//!    duplicates removed, and the pool culled back to the target size by
//!    pairwise conflict comparisons.
//!
//! # Core Types
//!
//! - [`Individual`]: one candidate placement, a column index per row
//! - [`Population`]: the working multiset of individuals
//! - [`QueensConfig`]: run parameters (board size, rates, seed)
//! - [`QueensRunner`]: executes the generational loop
//!
//! # Determinism
//!
//! Every stochastic operation receives an explicit [`rand::Rng`] handle;
//! seeding via [`random::create_rng`] makes whole runs reproducible.
//!
//! # Rate semantics
//!
//! `birth_rate` and `mutation_rate` are suppression probabilities: draws
//! at or below the rate *skip* production. See [`QueensConfig`].

mod config;
mod evaluate;
mod operators;
pub mod random;
mod runner;
mod selection;
mod types;

pub use config::{ConfigError, QueensConfig};
pub use evaluate::{conflicts, mean_conflicts};
pub use operators::{mutate, reproduce};
pub use runner::QueensRunner;
pub use selection::select;
pub use types::{Couple, Individual, Population};
