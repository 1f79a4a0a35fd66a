//! Error types.

/// Errors raised while validating inputs or building routes.
///
/// Every variant is detected before the evolutionary loop starts, or by an
/// operator that was handed inconsistent arguments directly.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// The cost matrix is not square, too small, negative, asymmetric,
    /// or has a non-zero diagonal.
    #[error("invalid cost matrix: {0}")]
    InvalidMatrix(String),

    /// A configuration parameter is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A visiting order is not a permutation of `0..n`.
    #[error("invalid route: {0}")]
    InvalidRoute(String),

    /// Two collaborating values disagree on the number of locations.
    #[error("dimension mismatch: expected {expected} locations, found {found}")]
    DimensionMismatch {
        /// Number of locations expected.
        expected: usize,
        /// Number of locations actually supplied.
        found: usize,
    },

    /// Crossover cut points do not satisfy `start < end <= len`.
    #[error("invalid crossover cut [{start}, {end}) for length {len}")]
    InvalidCrossoverCut {
        /// First cut (inclusive).
        start: usize,
        /// Second cut (exclusive).
        end: usize,
        /// Route length.
        len: usize,
    },
}

/// Crate result alias.
pub type Result<T> = core::result::Result<T, Error>;
