//! GA configuration.
//!
//! [`GaConfig`] holds all parameters that control the evolutionary loop.

use crate::error::{Error, Result};

/// Configuration for the genetic engine.
///
/// # Defaults
///
/// ```
/// use u_tsp_ga::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 100);
/// assert_eq!(config.generations, 500);
/// assert_eq!(config.tournament_size, 3);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_tsp_ga::ga::GaConfig;
///
/// let config = GaConfig::default()
///     .with_population_size(200)
///     .with_tournament_size(5)
///     .with_mutation_rate(0.05)
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GaConfig {
    /// Number of routes in every generation. Must be even and at least 2.
    pub population_size: usize,

    /// Number of generational replacements to perform.
    ///
    /// Zero returns the best route of the initial population.
    pub generations: usize,

    /// Probability of recombining a selected parent pair (0.0–1.0).
    ///
    /// When crossover is not applied, both parents are copied unchanged.
    pub crossover_rate: f64,

    /// Probability that a child receives one swap (0.0–1.0).
    pub mutation_rate: f64,

    /// Number of routes sampled per tournament. `1..=population_size`.
    pub tournament_size: usize,

    /// Random seed for reproducibility.
    ///
    /// `None` draws a seed from the thread-local generator.
    pub seed: Option<u64>,

    /// Whether to evaluate route costs in parallel using rayon.
    ///
    /// Only takes effect with the `parallel` cargo feature. Results are
    /// identical either way.
    pub parallel: bool,

    /// Emit an `info` progress event at the first generation and every
    /// this many generations after it.
    ///
    /// Set to 0 to disable periodic progress events.
    pub log_interval: usize,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            generations: 500,
            crossover_rate: 0.9,
            mutation_rate: 0.01,
            tournament_size: 3,
            seed: None,
            parallel: false,
            log_interval: 100,
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the number of generations.
    pub fn with_generations(mut self, n: usize) -> Self {
        self.generations = n;
        self
    }

    /// Sets the crossover rate.
    pub fn with_crossover_rate(mut self, rate: f64) -> Self {
        self.crossover_rate = rate;
        self
    }

    /// Sets the mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate;
        self
    }

    /// Sets the tournament size.
    pub fn with_tournament_size(mut self, k: usize) -> Self {
        self.tournament_size = k;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Enables or disables parallel evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets the progress logging interval (0 to disable).
    pub fn with_log_interval(mut self, generations: usize) -> Self {
        self.log_interval = generations;
        self
    }

    /// Validates the configuration.
    ///
    /// Out-of-range rates are rejected, not clamped.
    pub fn validate(&self) -> Result<()> {
        if self.population_size < 2 {
            return Err(Error::InvalidConfig(format!(
                "population_size must be at least 2, got {}",
                self.population_size
            )));
        }
        if self.population_size % 2 != 0 {
            return Err(Error::InvalidConfig(format!(
                "population_size must be even, got {}",
                self.population_size
            )));
        }
        if self.tournament_size == 0 {
            return Err(Error::InvalidConfig(
                "tournament_size must be at least 1".into(),
            ));
        }
        if self.tournament_size > self.population_size {
            return Err(Error::InvalidConfig(format!(
                "tournament_size {} exceeds population_size {}",
                self.tournament_size, self.population_size
            )));
        }
        check_rate("crossover_rate", self.crossover_rate)?;
        check_rate("mutation_rate", self.mutation_rate)?;
        Ok(())
    }
}

fn check_rate(name: &str, rate: f64) -> Result<()> {
    if (0.0..=1.0).contains(&rate) {
        Ok(())
    } else {
        Err(Error::InvalidConfig(format!(
            "{name} must be within [0, 1], got {rate}"
        )))
    }
}
