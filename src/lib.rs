//! Genetic-algorithm heuristic solver for the symmetric Traveling Salesman
//! Problem.
//!
//! Given a [`CostMatrix`] of pairwise travel costs, the solver evolves a
//! population of [`Route`]s and returns the cheapest closed tour it
//! observed. It makes no optimality claim.
//!
//! ```
//! use u_tsp_ga::{run, CostMatrix};
//! use u_tsp_ga::ga::GaConfig;
//!
//! let matrix = CostMatrix::new(vec![
//!     vec![0.0, 10.0, 15.0, 20.0],
//!     vec![10.0, 0.0, 35.0, 25.0],
//!     vec![15.0, 35.0, 0.0, 30.0],
//!     vec![20.0, 25.0, 30.0, 0.0],
//! ])
//! .unwrap();
//! let config = GaConfig::default()
//!     .with_population_size(20)
//!     .with_generations(50)
//!     .with_seed(42);
//! let result = run(&matrix, &config).unwrap();
//! assert_eq!(result.best_cost, 80.0);
//! ```
//!
//! # Architecture
//!
//! - [`matrix`]: validated, immutable cost matrix
//! - [`route`]: permutation-checked tours and their cost
//! - [`random`]: the seedable random source threaded through every operator
//! - [`ga`]: initialization, selection, crossover, mutation, and the engine

pub mod error;
pub mod ga;
pub mod matrix;
pub mod random;
pub mod route;

pub use error::{Error, Result};
pub use matrix::CostMatrix;
pub use route::Route;

/// Runs the genetic algorithm on `matrix` with `config`.
///
/// # Errors
/// [`Error::InvalidConfig`] if `config` is out of range. No generation
/// runs in that case.
pub fn run(matrix: &CostMatrix, config: &ga::GaConfig) -> Result<ga::GaResult> {
    ga::GeneticEngine::new(matrix, config.clone())?.run()
}
