//! Core data types for the evolutionary N-queens engine.
//!
//! An [`Individual`] encodes one candidate placement as a column index per
//! row. A [`Population`] is an owned multiset snapshot of individuals:
//! every engine component takes a population by value and returns a new
//! one, so no two components ever alias the same working set.

use rand::Rng;

/// One candidate N-queens placement.
///
/// `positions[i]` is the column of the queen on row `i`. Every value lies
/// in `[0, n)` where `n == positions.len()`. Two individuals are equal iff
/// their position sequences are equal element-wise.
///
/// Individuals are immutable once constructed; the genetic operators
/// always build new ones rather than editing in place.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Individual {
    positions: Vec<usize>,
}

impl Individual {
    /// Wraps an explicit position vector.
    ///
    /// # Panics
    /// Panics if any position is out of range for the board implied by
    /// the vector's length.
    pub fn new(positions: Vec<usize>) -> Self {
        let n = positions.len();
        assert!(
            positions.iter().all(|&p| p < n),
            "every position must lie in [0, {n})"
        );
        Self { positions }
    }

    /// Creates an individual with `n` positions drawn uniformly from
    /// `[0, n)`, independently per row. Duplicate columns are permitted.
    pub fn random<R: Rng>(n: usize, rng: &mut R) -> Self {
        let positions = (0..n).map(|_| rng.random_range(0..n)).collect();
        Self { positions }
    }

    /// The column indices, one per row.
    pub fn positions(&self) -> &[usize] {
        &self.positions
    }

    /// Board size (number of rows, equals number of queens).
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// True for the degenerate zero-queen board.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

/// The working set of individuals at a given generation.
///
/// Duplicates are permitted until the selector deduplicates. Owned
/// exclusively by the generation driver between steps.
pub type Population = Vec<Individual>;

/// A transient pairing of two crossover parents.
///
/// Built during reproduction and consumed immediately; never persisted
/// across generations.
#[derive(Debug, Clone)]
pub struct Couple(pub Individual, pub Individual);
