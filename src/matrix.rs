//! Symmetric travel-cost matrix.
//!
//! [`CostMatrix`] is the read-only input of every other component. It is
//! validated once at construction and never modified afterwards.

use crate::error::{Error, Result};
use rand::Rng;

/// Lowest cost produced by [`CostMatrix::random`] for off-diagonal entries.
pub const RANDOM_COST_MIN: u32 = 10;

/// Exclusive upper bound for costs produced by [`CostMatrix::random`].
pub const RANDOM_COST_MAX: u32 = 100;

/// Square matrix of non-negative travel costs between `n` locations.
///
/// # Invariants
///
/// - `n >= 2`
/// - every entry is finite and `>= 0`
/// - zero diagonal
/// - symmetric: `get(i, j) == get(j, i)`
///
/// # Examples
///
/// ```
/// use u_tsp_ga::CostMatrix;
///
/// let m = CostMatrix::new(vec![
///     vec![0.0, 2.0, 9.0],
///     vec![2.0, 0.0, 6.0],
///     vec![9.0, 6.0, 0.0],
/// ])
/// .unwrap();
/// assert_eq!(m.len(), 3);
/// assert_eq!(m.get(2, 1), 6.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<Vec<f64>>", into = "Vec<Vec<f64>>")
)]
pub struct CostMatrix {
    n: usize,
    costs: Vec<f64>,
}

impl CostMatrix {
    /// Builds a matrix from rows, validating every invariant.
    pub fn new(rows: Vec<Vec<f64>>) -> Result<Self> {
        let n = rows.len();
        if n < 2 {
            return Err(Error::InvalidMatrix(format!(
                "at least 2 locations required, got {n}"
            )));
        }
        if let Some((i, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != n) {
            return Err(Error::InvalidMatrix(format!(
                "matrix is not square: row {i} has {} entries, expected {n}",
                row.len()
            )));
        }

        let costs: Vec<f64> = rows.into_iter().flatten().collect();
        let matrix = Self { n, costs };
        matrix.validate()?;
        Ok(matrix)
    }

    /// Builds an `n × n` matrix by calling `f(i, j)` for every cell.
    pub fn from_fn<F>(n: usize, mut f: F) -> Result<Self>
    where
        F: FnMut(usize, usize) -> f64,
    {
        let rows = (0..n).map(|i| (0..n).map(|j| f(i, j)).collect()).collect();
        Self::new(rows)
    }

    /// Generates a synthetic symmetric matrix with integer costs in
    /// `[RANDOM_COST_MIN, RANDOM_COST_MAX)` and a zero diagonal.
    pub fn random<R: Rng>(n: usize, rng: &mut R) -> Result<Self> {
        let mut costs = vec![0.0; n * n];
        for i in 0..n {
            for j in (i + 1)..n {
                let c = rng.random_range(RANDOM_COST_MIN..RANDOM_COST_MAX) as f64;
                costs[i * n + j] = c;
                costs[j * n + i] = c;
            }
        }
        let rows = costs.chunks(n.max(1)).map(<[f64]>::to_vec).collect();
        Self::new(rows)
    }

    fn validate(&self) -> Result<()> {
        let n = self.n;
        for i in 0..n {
            for j in 0..n {
                let c = self.get(i, j);
                if !c.is_finite() || c < 0.0 {
                    return Err(Error::InvalidMatrix(format!(
                        "cost[{i}][{j}] = {c} is not a finite non-negative value"
                    )));
                }
            }
            if self.get(i, i) != 0.0 {
                return Err(Error::InvalidMatrix(format!(
                    "diagonal entry cost[{i}][{i}] = {} must be zero",
                    self.get(i, i)
                )));
            }
            for j in (i + 1)..n {
                let (a, b) = (self.get(i, j), self.get(j, i));
                let tolerance = 1e-9 * a.abs().max(b.abs()).max(1.0);
                if (a - b).abs() > tolerance {
                    return Err(Error::InvalidMatrix(format!(
                        "matrix is asymmetric: cost[{i}][{j}] = {a}, cost[{j}][{i}] = {b}"
                    )));
                }
            }
        }
        Ok(())
    }

    /// Number of locations.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.n
    }

    /// Cost of travelling from `from` to `to`.
    ///
    /// # Panics
    /// Panics if either index is `>= len()`.
    #[inline]
    pub fn get(&self, from: usize, to: usize) -> f64 {
        assert!(from < self.n && to < self.n, "location index out of bounds");
        self.costs[from * self.n + to]
    }

    /// Iterates over the rows of the matrix.
    pub fn rows(&self) -> impl Iterator<Item = &[f64]> {
        self.costs.chunks(self.n)
    }
}

impl TryFrom<Vec<Vec<f64>>> for CostMatrix {
    type Error = Error;

    fn try_from(rows: Vec<Vec<f64>>) -> Result<Self> {
        Self::new(rows)
    }
}

impl From<CostMatrix> for Vec<Vec<f64>> {
    fn from(matrix: CostMatrix) -> Self {
        matrix.rows().map(<[f64]>::to_vec).collect()
    }
}
