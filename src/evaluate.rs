//! Board conflict evaluation.
//!
//! [`conflicts`] is the engine's fitness function: the number of row
//! pairs whose queens attack each other. Lower is better; zero means a
//! valid N-queens placement.

use crate::types::Individual;

/// Counts attacking pairs of queens in a placement.
///
/// Each unordered row pair `(j, i)` with `j < i` contributes at most one
/// conflict, counted when the two queens share a column or lie on the
/// same ascending or descending diagonal.
///
/// Pure and deterministic; the result is bounded by `n * (n - 1) / 2`.
pub fn conflicts(individual: &Individual) -> usize {
    let positions = individual.positions();
    let mut count = 0;
    for i in 1..positions.len() {
        for j in 0..i {
            let position = positions[i] as i64;
            let other = positions[j] as i64;
            let distance = (i - j) as i64;
            if other == position || other - distance == position || other + distance == position {
                count += 1;
            }
        }
    }
    count
}

/// Mean conflict count across a population, 0.0 when empty.
///
/// Reporting helper for the consuming shell and for generation logging.
pub fn mean_conflicts(population: &[Individual]) -> f64 {
    if population.is_empty() {
        return 0.0;
    }
    let total: usize = population.iter().map(conflicts).sum();
    total as f64 / population.len() as f64
}
