//! Population initialization and evaluation.

use crate::error::Result;
use crate::matrix::CostMatrix;
use crate::route::Route;
use rand::Rng;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// A population member: a route together with its cached tour cost.
///
/// The cost is computed once when the route joins a population and is
/// never invalidated, because population members are not mutated after
/// evaluation.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    route: Route,
    cost: f64,
}

impl Candidate {
    /// Evaluates `route` against `matrix`.
    pub fn evaluate(route: Route, matrix: &CostMatrix) -> Result<Self> {
        let cost = route.cost(matrix)?;
        Ok(Self { route, cost })
    }

    /// The visiting order.
    pub fn route(&self) -> &Route {
        &self.route
    }

    /// Cached closed-tour cost.
    pub fn cost(&self) -> f64 {
        self.cost
    }

    /// Consumes the candidate, returning its route.
    pub fn into_route(self) -> Route {
        self.route
    }
}

/// Creates `size` independent, uniformly random routes over `n` locations.
pub fn initial_population<R: Rng>(size: usize, n: usize, rng: &mut R) -> Vec<Route> {
    (0..size).map(|_| Route::random(n, rng)).collect()
}

/// Evaluate all routes against the matrix.
pub(crate) fn evaluate_population(
    routes: Vec<Route>,
    matrix: &CostMatrix,
    parallel: bool,
) -> Result<Vec<Candidate>> {
    #[cfg(feature = "parallel")]
    if parallel {
        return routes
            .into_par_iter()
            .map(|route| Candidate::evaluate(route, matrix))
            .collect();
    }
    #[cfg(not(feature = "parallel"))]
    let _ = parallel;

    routes
        .into_iter()
        .map(|route| Candidate::evaluate(route, matrix))
        .collect()
}

/// Find the candidate with the lowest cost; the first one wins ties.
pub(crate) fn find_best(population: &[Candidate]) -> &Candidate {
    population
        .iter()
        .reduce(|best, c| if c.cost < best.cost { c } else { best })
        .expect("population must not be empty")
}

/// Mean cost of the population.
pub(crate) fn mean_cost(population: &[Candidate]) -> f64 {
    population.iter().map(Candidate::cost).sum::<f64>() / population.len() as f64
}
