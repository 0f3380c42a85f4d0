//! Competitive selection: deduplication followed by pairwise culling.
//!
//! Selection is the only component that shrinks a population. It first
//! removes exact duplicates, then repeatedly stages two random
//! individuals against each other and discards the one with more
//! conflicts until the target size is reached.

use crate::evaluate::conflicts;
use crate::types::Population;
use rand::Rng;
use std::cmp::Ordering;
use std::collections::HashSet;

/// Reduces an oversized population to at most `target_size` individuals.
///
/// Duplicates are removed first, keeping first-seen order. If
/// deduplication alone lands at or below the target, no culling happens
/// and the result may be *smaller* than `target_size`; the shortfall is
/// never padded back up, so repeated generations can shrink the working
/// set irreversibly. While the population is still oversized, each
/// culling round draws two distinct individuals, evaluates both, and
/// discards the one with strictly more conflicts; ties are broken by a
/// fair coin.
///
/// # Panics
/// Panics if a culling round would have to draw from fewer than two
/// individuals. Callers guarantee `target_size >= 2`, which makes this
/// unreachable.
pub fn select<R: Rng>(population: Population, target_size: usize, rng: &mut R) -> Population {
    let mut survivors = dedup(population);
    while survivors.len() > target_size {
        assert!(
            survivors.len() >= 2,
            "culling needs at least 2 individuals, got {}",
            survivors.len()
        );
        let i = rng.random_range(0..survivors.len());
        let mut j = rng.random_range(0..survivors.len());
        while j == i {
            j = rng.random_range(0..survivors.len());
        }

        let loser = match conflicts(&survivors[i]).cmp(&conflicts(&survivors[j])) {
            Ordering::Less => j,
            Ordering::Greater => i,
            Ordering::Equal => {
                if rng.random_bool(0.5) {
                    i
                } else {
                    j
                }
            }
        };
        survivors.remove(loser);
    }
    survivors
}

/// Removes exact duplicates, keeping the first occurrence of each
/// individual in its original position.
fn dedup(population: Population) -> Population {
    let mut seen = HashSet::new();
    population
        .into_iter()
        .filter(|individual| seen.insert(individual.clone()))
        .collect()
}
