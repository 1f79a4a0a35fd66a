//! Closed tours over the locations of a [`CostMatrix`].

use crate::error::{Error, Result};
use crate::matrix::CostMatrix;
use rand::seq::SliceRandom;
use rand::Rng;

/// A visiting order: a permutation of `0..n`.
///
/// The tour is closed, so the last location connects back to the first.
/// A route visits at least one location. [`new`](Route::new) rejects
/// orders that break the invariant, [`identity`](Route::identity) and
/// [`random`](Route::random) panic on zero locations, and the only mutating
/// operation ([`swap`](Route::swap)) preserves it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<usize>", into = "Vec<usize>")
)]
pub struct Route(Vec<usize>);

impl Route {
    /// Wraps `order`, checking that it is a permutation of `0..order.len()`.
    pub fn new(order: Vec<usize>) -> Result<Self> {
        let n = order.len();
        if n == 0 {
            return Err(Error::InvalidRoute("route must not be empty".into()));
        }
        let mut seen = vec![false; n];
        for &loc in &order {
            if loc >= n {
                return Err(Error::InvalidRoute(format!(
                    "location {loc} out of range for {n} locations"
                )));
            }
            if seen[loc] {
                return Err(Error::InvalidRoute(format!("location {loc} visited twice")));
            }
            seen[loc] = true;
        }
        Ok(Self(order))
    }

    /// Wraps an order that an operator has already built as a permutation.
    pub(crate) fn from_permutation(order: Vec<usize>) -> Self {
        debug_assert!(is_permutation(&order), "operator produced {order:?}");
        Self(order)
    }

    /// The route `0, 1, ..., n - 1`.
    ///
    /// # Panics
    /// Panics if `n == 0`.
    pub fn identity(n: usize) -> Self {
        assert!(n > 0, "route must visit at least one location");
        Self((0..n).collect())
    }

    /// A uniformly random permutation of `0..n`.
    ///
    /// # Panics
    /// Panics if `n == 0`.
    pub fn random<R: Rng>(n: usize, rng: &mut R) -> Self {
        assert!(n > 0, "route must visit at least one location");
        let mut order: Vec<usize> = (0..n).collect();
        order.shuffle(rng);
        Self(order)
    }

    /// Number of locations visited.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// The visiting order.
    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }

    /// Consumes the route and returns the visiting order.
    pub fn into_inner(self) -> Vec<usize> {
        self.0
    }

    /// Whether the order is still a full permutation of `0..len()`.
    pub fn is_permutation(&self) -> bool {
        is_permutation(&self.0)
    }

    /// Exchanges the locations at positions `i` and `j`.
    ///
    /// # Panics
    /// Panics if either position is out of bounds.
    pub fn swap(&mut self, i: usize, j: usize) {
        self.0.swap(i, j);
    }

    /// Total cost of the closed tour: every consecutive edge plus the edge
    /// from the last location back to the first.
    ///
    /// # Complexity
    /// O(n)
    pub fn cost(&self, matrix: &CostMatrix) -> Result<f64> {
        if self.len() != matrix.len() {
            return Err(Error::DimensionMismatch {
                expected: matrix.len(),
                found: self.len(),
            });
        }
        let order = &self.0;
        let path: f64 = order.windows(2).map(|w| matrix.get(w[0], w[1])).sum();
        let closing = matrix.get(order[order.len() - 1], order[0]);
        Ok(path + closing)
    }
}

impl TryFrom<Vec<usize>> for Route {
    type Error = Error;

    fn try_from(order: Vec<usize>) -> Result<Self> {
        Self::new(order)
    }
}

impl From<Route> for Vec<usize> {
    fn from(route: Route) -> Self {
        route.0
    }
}

impl AsRef<[usize]> for Route {
    fn as_ref(&self) -> &[usize] {
        &self.0
    }
}

fn is_permutation(order: &[usize]) -> bool {
    let n = order.len();
    let mut seen = vec![false; n];
    n > 0 && order.iter().all(|&loc| loc < n && !std::mem::replace(&mut seen[loc], true))
}
