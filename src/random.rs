//! Seedable random source shared by every operator of a run.

use rand::rngs::StdRng;
use rand::SeedableRng;

/// The random number generator threaded through initialization,
/// selection, crossover, and mutation.
pub type RandomSource = StdRng;

/// Creates a deterministic [`RandomSource`] from a seed.
///
/// Two sources created from the same seed yield identical streams.
pub fn create_rng(seed: u64) -> RandomSource {
    StdRng::seed_from_u64(seed)
}
