//! Generational loop.
//!
//! [`GeneticEngine`] orchestrates the complete evolutionary process:
//! initialization → selection → crossover → mutation → replacement → repeat,
//! tracking the cheapest route seen across all generations.

use super::config::GaConfig;
use super::operators::{order_crossover, swap_mutation};
use super::population::{evaluate_population, find_best, initial_population, mean_cost, Candidate};
use super::selection::Tournament;
use crate::error::Result;
use crate::matrix::CostMatrix;
use crate::random::{create_rng, RandomSource};
use crate::route::Route;
use rand::Rng;
use tracing::{debug, info, trace};

/// Summary of one completed generation, passed to observers.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GenerationStats {
    /// 1-based generation number.
    pub generation: usize,

    /// Best cost seen so far, across all generations.
    pub best_cost: f64,

    /// Cheapest route of this generation's population.
    pub generation_best_cost: f64,

    /// Mean cost of this generation's population.
    pub mean_cost: f64,

    /// Number of children that received a swap mutation.
    pub mutations: usize,
}

/// Result of a GA run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaResult {
    /// The cheapest route found during the entire run.
    pub best: Route,

    /// Closed-tour cost of `best`.
    pub best_cost: f64,

    /// Total number of generations executed.
    pub generations: usize,

    /// Seed the run's random source was created from.
    pub seed: u64,

    /// Best cost after initialization and after each generation.
    ///
    /// Has `generations + 1` entries and never increases.
    pub history: Vec<f64>,
}

/// Executes the genetic algorithm over a borrowed [`CostMatrix`].
///
/// # Usage
///
/// ```
/// use u_tsp_ga::CostMatrix;
/// use u_tsp_ga::ga::{GaConfig, GeneticEngine};
///
/// let matrix = CostMatrix::from_fn(6, |i, j| i.abs_diff(j) as f64).unwrap();
/// let config = GaConfig::default()
///     .with_population_size(20)
///     .with_generations(30)
///     .with_seed(42);
/// let result = GeneticEngine::new(&matrix, config).unwrap().run().unwrap();
/// assert_eq!(result.history.len(), 31);
/// ```
#[derive(Debug)]
pub struct GeneticEngine<'a> {
    matrix: &'a CostMatrix,
    config: GaConfig,
    selection: Tournament,
    rng: RandomSource,
    seed: u64,
}

impl<'a> GeneticEngine<'a> {
    /// Validates `config` and seeds the random source.
    ///
    /// # Errors
    /// [`Error::InvalidConfig`](crate::Error::InvalidConfig) for any
    /// out-of-range parameter.
    pub fn new(matrix: &'a CostMatrix, config: GaConfig) -> Result<Self> {
        config.validate()?;

        let seed = config.seed.unwrap_or_else(rand::random);
        debug!(
            "Genetic engine: {} locations, population {}, {} generations, seed {seed}",
            matrix.len(),
            config.population_size,
            config.generations
        );

        Ok(Self {
            matrix,
            selection: Tournament::new(config.tournament_size),
            config,
            rng: create_rng(seed),
            seed,
        })
    }

    /// Seed of the random source.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Runs all configured generations.
    pub fn run(self) -> Result<GaResult> {
        self.run_with_observer(|_| {})
    }

    /// Runs all configured generations, calling `observer` after each one.
    pub fn run_with_observer<F>(mut self, mut observer: F) -> Result<GaResult>
    where
        F: FnMut(&GenerationStats),
    {
        let n = self.matrix.len();
        let generations = self.config.generations;

        // 1. Initialize and evaluate
        let routes = initial_population(self.config.population_size, n, &mut self.rng);
        let mut population = evaluate_population(routes, self.matrix, self.config.parallel)?;

        // 2. Track best
        let mut best = find_best(&population).clone();
        let mut history = Vec::with_capacity(generations + 1);
        history.push(best.cost());

        // 3. Evolutionary loop
        for gen in 1..=generations {
            let (routes, mutations) = self.breed(&population)?;
            population = evaluate_population(routes, self.matrix, self.config.parallel)?;

            let gen_best = find_best(&population);
            if gen_best.cost() < best.cost() {
                trace!(
                    "Generation {gen}: improved {} -> {}",
                    best.cost(),
                    gen_best.cost()
                );
                best = gen_best.clone();
            }
            history.push(best.cost());

            let stats = GenerationStats {
                generation: gen,
                best_cost: best.cost(),
                generation_best_cost: gen_best.cost(),
                mean_cost: mean_cost(&population),
                mutations,
            };
            if reports_progress(gen, self.config.log_interval) {
                info!(
                    "Generation {gen}: best cost = {}, mean cost = {:.3}",
                    stats.best_cost, stats.mean_cost
                );
            }
            observer(&stats);
        }

        info!(
            "Finished {generations} generations: best cost = {}",
            best.cost()
        );

        Ok(GaResult {
            best_cost: best.cost(),
            best: best.into_route(),
            generations,
            seed: self.seed,
            history,
        })
    }

    /// Builds the next generation's routes from the current population.
    ///
    /// Returns the routes and how many of them were mutated.
    fn breed(&mut self, population: &[Candidate]) -> Result<(Vec<Route>, usize)> {
        let size = self.config.population_size;
        let mut next_gen = Vec::with_capacity(size);
        let mut mutations = 0usize;

        for _ in 0..size / 2 {
            let p1 = population[self.selection.select(population, &mut self.rng)].route();
            let p2 = population[self.selection.select(population, &mut self.rng)].route();

            let children = if self.rng.random_range(0.0..1.0) < self.config.crossover_rate {
                [
                    order_crossover(p1, p2, &mut self.rng)?,
                    order_crossover(p2, p1, &mut self.rng)?,
                ]
            } else {
                [p1.clone(), p2.clone()]
            };

            for mut child in children {
                if swap_mutation(&mut child, self.config.mutation_rate, &mut self.rng) {
                    mutations += 1;
                }
                next_gen.push(child);
            }
        }

        Ok((next_gen, mutations))
    }
}

/// Whether generation `gen` (1-based) emits a progress event: the first
/// generation and every `interval` generations after it.
fn reports_progress(gen: usize, interval: usize) -> bool {
    interval > 0 && (gen - 1) % interval == 0
}

// ============================================================================
// Tests
// ============================================================================
