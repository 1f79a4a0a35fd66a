//! Tournament selection.
//!
//! # References
//!
//! - Miller & Goldberg (1995), "Genetic Algorithms, Tournament Selection,
//!   and the Effects of Noise"
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"

use super::population::Candidate;
use rand::Rng;

/// Tournament selection: sample `size` routes uniformly with replacement
/// and keep the cheapest.
///
/// Larger tournaments mean stronger selection pressure.
/// - size=1: uniform random choice
/// - size=2-5: moderate pressure (3 is the default)
/// - size>5: strong pressure (risk of premature convergence)
///
/// # Examples
///
/// ```
/// use u_tsp_ga::ga::Tournament;
///
/// let sel = Tournament::new(3);
/// assert_eq!(sel.size(), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tournament {
    size: usize,
}

impl Default for Tournament {
    fn default() -> Self {
        Tournament { size: 3 }
    }
}

impl Tournament {
    /// Creates a tournament of `size` contestants (at least 1).
    pub fn new(size: usize) -> Self {
        Tournament { size: size.max(1) }
    }

    /// Number of contestants per tournament.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Select a parent index from the population.
    ///
    /// Ties keep the first-drawn contestant.
    ///
    /// # Complexity
    /// O(size) per selection
    ///
    /// # Panics
    /// Panics if `population` is empty.
    pub fn select<R: Rng>(&self, population: &[Candidate], rng: &mut R) -> usize {
        assert!(
            !population.is_empty(),
            "cannot select from empty population"
        );
        let n = population.len();

        let mut best_idx = rng.random_range(0..n);
        for _ in 1..self.size {
            let idx = rng.random_range(0..n);
            if population[idx].cost() < population[best_idx].cost() {
                best_idx = idx;
            }
        }
        best_idx
    }
}
