//! Seeded RNG construction.
//!
//! The engine never touches global random state: every stochastic
//! operation is generic over [`rand::Rng`] and receives its generator by
//! `&mut`. This is the single seeding point, so identical seeds produce
//! identical runs.

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Creates a deterministic RNG from a seed.
pub fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}
