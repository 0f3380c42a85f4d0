//! Genetic operators: reproduction (pairing + crossover) and mutation.
//!
//! Both operators take a population by value and return a new one; the
//! input snapshot is consumed, never edited in place.
//!
//! # Rate semantics
//!
//! `birth_rate` and `mutation_rate` are **suppression** probabilities: a
//! uniform `[0, 1)` draw at or below the rate skips production. A rate of
//! 0.9 therefore suppresses roughly 90% of crossovers. This inversion is
//! part of the engine's contract and is preserved deliberately.

use crate::types::{Couple, Individual, Population};
use rand::Rng;

// ============================================================================
// Reproduction
// ============================================================================

/// Pairs the population into couples and produces candidate children.
///
/// Pairing walks the population front to back: the head individual is
/// removed and matched with a uniformly random partner from the rest,
/// yielding `floor(size / 2)` couples (an odd leftover produces none).
/// Each couple then passes the birth gate: a draw at or below
/// `birth_rate` suppresses its child, otherwise single-point crossover
/// produces one.
///
/// Returns between 0 and `floor(size / 2)` children.
pub fn reproduce<R: Rng>(population: Population, birth_rate: f64, rng: &mut R) -> Population {
    let couples = pair_up(population, rng);
    let mut children = Vec::with_capacity(couples.len());
    for Couple(x, y) in &couples {
        if rng.random_range(0.0..1.0) <= birth_rate {
            continue;
        }
        children.push(crossover(x, y, rng));
    }
    children
}

/// Consumes a population into `floor(size / 2)` couples.
fn pair_up<R: Rng>(mut remaining: Population, rng: &mut R) -> Vec<Couple> {
    let mut couples = Vec::with_capacity(remaining.len() / 2);
    while remaining.len() >= 2 {
        let first = remaining.remove(0);
        let partner = remaining.remove(rng.random_range(0..remaining.len()));
        couples.push(Couple(first, partner));
    }
    couples
}

/// Single-point crossover: a prefix of one parent spliced onto the
/// suffix of the other.
///
/// The split index is uniform in `[0, n)` and a fair coin decides which
/// parent contributes the prefix. The child always has exactly `n`
/// positions because the two slices partition the row range.
fn crossover<R: Rng>(x: &Individual, y: &Individual, rng: &mut R) -> Individual {
    let n = x.len();
    debug_assert_eq!(n, y.len(), "crossover parents must have equal length");
    let split = rng.random_range(0..n);
    let (head, tail) = if rng.random_bool(0.5) { (x, y) } else { (y, x) };
    let positions = head.positions()[..split]
        .iter()
        .chain(&tail.positions()[split..])
        .copied()
        .collect();
    Individual::new(positions)
}

// ============================================================================
// Mutation
// ============================================================================

/// Independently perturbs each individual by a two-row position swap.
///
/// Per individual, a draw at or below `mutation_rate` drops it from the
/// output (same suppression semantics as the birth gate); otherwise a
/// mutant is produced by swapping the columns of two distinct rows. The
/// swap preserves both the length and the multiset of column values, so
/// the output is at most as large as the input.
pub fn mutate<R: Rng>(population: Population, mutation_rate: f64, rng: &mut R) -> Population {
    population
        .into_iter()
        .filter_map(|individual| {
            if rng.random_range(0.0..1.0) <= mutation_rate {
                None
            } else {
                Some(swap_two(&individual, rng))
            }
        })
        .collect()
}

/// Swap the columns of two distinct rows, chosen uniformly.
///
/// # Panics
/// Panics if the individual has fewer than two rows, since two distinct
/// indices cannot be drawn from a smaller range.
fn swap_two<R: Rng>(individual: &Individual, rng: &mut R) -> Individual {
    let n = individual.len();
    assert!(n >= 2, "swap mutation needs at least 2 rows, got {n}");
    let a = rng.random_range(0..n);
    let mut b = rng.random_range(0..n);
    while b == a {
        b = rng.random_range(0..n);
    }
    let mut positions = individual.positions().to_vec();
    positions.swap(a, b);
    Individual::new(positions)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;
    use proptest::prelude::*;

    fn random_population(n: usize, size: usize, seed: u64) -> Population {
        let mut rng = create_rng(seed);
        (0..size).map(|_| Individual::random(n, &mut rng)).collect()
    }

    // ---- Pairing ----

    #[test]
    fn test_pairing_yields_half_as_many_couples() {
        let mut rng = create_rng(42);
        for size in [2, 3, 7, 10, 11] {
            let pop = random_population(6, size, size as u64);
            let couples = pair_up(pop, &mut rng);
            assert_eq!(couples.len(), size / 2);
        }
    }

    #[test]
    fn test_pairing_consumes_each_individual_once() {
        let mut rng = create_rng(42);
        let pop = random_population(6, 8, 1);
        let original = pop.clone();
        let couples = pair_up(pop, &mut rng);

        let mut paired: Vec<Individual> = couples
            .into_iter()
            .flat_map(|Couple(a, b)| [a, b])
            .collect();
        // Same multiset of individuals, just reordered into couples.
        let mut expected = original;
        paired.sort_by(|a, b| a.positions().cmp(b.positions()));
        expected.sort_by(|a, b| a.positions().cmp(b.positions()));
        assert_eq!(paired, expected);
    }

    #[test]
    fn test_pairing_drops_odd_leftover() {
        let mut rng = create_rng(42);
        let pop = random_population(4, 5, 3);
        let couples = pair_up(pop, &mut rng);
        assert_eq!(couples.len(), 2);
    }

    // ---- Crossover ----

    #[test]
    fn test_crossover_child_rows_come_from_parents() {
        let mut rng = create_rng(42);
        let x = Individual::new(vec![0, 0, 0, 0, 0]);
        let y = Individual::new(vec![4, 4, 4, 4, 4]);
        for _ in 0..100 {
            let child = crossover(&x, &y, &mut rng);
            assert_eq!(child.len(), 5);
            // Each row's value comes from the parent owning that slice.
            for &p in child.positions() {
                assert!(p == 0 || p == 4);
            }
            // Prefix/suffix structure: at most one transition point.
            let transitions = child
                .positions()
                .windows(2)
                .filter(|w| w[0] != w[1])
                .count();
            assert!(transitions <= 1, "not a single splice: {:?}", child);
        }
    }

    #[test]
    fn test_crossover_identical_parents_identity() {
        let mut rng = create_rng(42);
        let p = Individual::new(vec![1, 3, 0, 2]);
        for _ in 0..20 {
            assert_eq!(crossover(&p, &p, &mut rng), p);
        }
    }

    // ---- Birth gate ----

    #[test]
    fn test_birth_rate_one_suppresses_all_children() {
        let mut rng = create_rng(42);
        let pop = random_population(6, 10, 9);
        let children = reproduce(pop, 1.0, &mut rng);
        assert!(children.is_empty());
    }

    #[test]
    fn test_birth_rate_zero_births_one_child_per_couple() {
        let mut rng = create_rng(42);
        let pop = random_population(6, 10, 9);
        let children = reproduce(pop, 0.0, &mut rng);
        assert_eq!(children.len(), 5);
    }

    #[test]
    fn test_reproduce_against_half_rate_is_between_bounds() {
        let mut rng = create_rng(42);
        let pop = random_population(6, 20, 9);
        let children = reproduce(pop, 0.5, &mut rng);
        assert!(children.len() <= 10);
    }

    // ---- Mutation ----

    #[test]
    fn test_mutation_rate_one_drops_everyone() {
        let mut rng = create_rng(42);
        let pop = random_population(5, 8, 4);
        assert!(mutate(pop, 1.0, &mut rng).is_empty());
    }

    #[test]
    fn test_mutation_rate_zero_keeps_size() {
        let mut rng = create_rng(42);
        let pop = random_population(5, 8, 4);
        assert_eq!(mutate(pop, 0.0, &mut rng).len(), 8);
    }

    #[test]
    fn test_swap_changes_at_most_two_rows() {
        let mut rng = create_rng(42);
        let ind = Individual::new(vec![0, 1, 2, 3, 4]);
        for _ in 0..100 {
            let mutant = swap_two(&ind, &mut rng);
            let differing = ind
                .positions()
                .iter()
                .zip(mutant.positions())
                .filter(|(a, b)| a != b)
                .count();
            assert_eq!(differing, 2, "distinct values swap both rows");
        }
    }

    #[test]
    #[should_panic(expected = "swap mutation needs at least 2 rows")]
    fn test_swap_panics_below_two_rows() {
        let mut rng = create_rng(42);
        let ind = Individual::new(vec![0]);
        swap_two(&ind, &mut rng);
    }

    // ---- Property tests ----

    proptest! {
        #[test]
        fn prop_mutation_preserves_value_multiset(seed in any::<u64>(), n in 2usize..12) {
            let mut rng = create_rng(seed);
            let ind = Individual::random(n, &mut rng);
            let mutant = swap_two(&ind, &mut rng);

            let mut before = ind.positions().to_vec();
            let mut after = mutant.positions().to_vec();
            before.sort_unstable();
            after.sort_unstable();
            prop_assert_eq!(before, after);
        }

        #[test]
        fn prop_children_keep_length_and_range(seed in any::<u64>(), n in 2usize..12, size in 2usize..16) {
            let mut rng = create_rng(seed);
            let pop: Population = (0..size).map(|_| Individual::random(n, &mut rng)).collect();
            let children = reproduce(pop, 0.2, &mut rng);

            prop_assert!(children.len() <= size / 2);
            for child in &children {
                prop_assert_eq!(child.len(), n);
                prop_assert!(child.positions().iter().all(|&p| p < n));
            }
        }

        #[test]
        fn prop_mutants_keep_length_and_range(seed in any::<u64>(), n in 2usize..12, size in 1usize..16) {
            let mut rng = create_rng(seed);
            let pop: Population = (0..size).map(|_| Individual::random(n, &mut rng)).collect();
            let mutants = mutate(pop, 0.2, &mut rng);

            prop_assert!(mutants.len() <= size);
            for mutant in &mutants {
                prop_assert_eq!(mutant.len(), n);
                prop_assert!(mutant.positions().iter().all(|&p| p < n));
            }
        }
    }
}
