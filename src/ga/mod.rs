//! Genetic algorithm for the symmetric TSP.
//!
//! Routes are permutations of location indices. Each generation is built
//! by tournament selection, order crossover, and swap mutation, and fully
//! replaces the previous one. The cheapest route ever seen is tracked
//! outside the population.
//!
//! # Key Types
//!
//! - [`GaConfig`]: Algorithm parameters (population size, rates, seed)
//! - [`GeneticEngine`]: Executes the generational loop
//! - [`GaResult`]: Best route, its cost, and the best-cost history
//!
//! # Submodules
//!
//! - [`operators`]: Order crossover (OX) and swap mutation
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*
//! - Larrañaga et al. (1999), "Genetic Algorithms for the Travelling Salesman
//!   Problem: A Review of Representations and Operators"

mod config;
mod engine;
pub mod operators;
mod population;
mod selection;

pub use config::GaConfig;
pub use engine::{GaResult, GenerationStats, GeneticEngine};
pub use operators::{order_crossover, order_crossover_at, swap_mutation};
pub use population::{initial_population, Candidate};
pub use selection::Tournament;
