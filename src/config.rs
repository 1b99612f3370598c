//! ACO run configuration.
//!
//! [`AcoConfig`] holds every parameter that controls a run: colony size,
//! elitism, iteration count, evaporation, and the two influence exponents.

use crate::error::AcoError;

/// Configuration for an Ant Colony Optimization run.
///
/// # Builder Pattern
///
/// ```
/// use ant_colony::AcoConfig;
///
/// let config = AcoConfig::default()
///     .with_n_ants(30)
///     .with_n_best(5)
///     .with_n_iterations(200)
///     .with_decay(0.9)
///     .with_seed(42);
/// ```
#[derive(Debug, Clone)]
pub struct AcoConfig {
    /// Number of ants (candidate paths) constructed per generation.
    ///
    /// Must be ≥ 1. Larger colonies explore more per generation at
    /// proportionally higher cost.
    pub n_ants: usize,

    /// Number of elite paths allowed to deposit pheromone each generation.
    ///
    /// Must be ≥ 1. Values larger than `n_ants` are clamped at use.
    pub n_best: usize,

    /// Number of generations to run.
    ///
    /// 0 is valid: the run completes immediately with no best path.
    pub n_iterations: usize,

    /// Evaporation multiplier applied to the whole pheromone field once
    /// per generation. Must be strictly inside (0, 1).
    pub decay: f64,

    /// Pheromone influence exponent. Must be finite and ≥ 0.
    ///
    /// Higher values make ants follow established trails more strongly.
    pub alpha: f64,

    /// Heuristic (inverse-distance) influence exponent. Must be finite
    /// and ≥ 0. Higher values bias ants toward nearby locations.
    pub beta: f64,

    /// Whether to construct ant paths in parallel using rayon.
    ///
    /// Parallel and sequential runs produce identical results for a
    /// fixed seed.
    pub parallel: bool,

    /// Random seed for reproducibility. `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for AcoConfig {
    fn default() -> Self {
        Self {
            n_ants: 20,
            n_best: 4,
            n_iterations: 100,
            decay: 0.95,
            alpha: 1.0,
            beta: 2.0,
            parallel: true,
            seed: None,
        }
    }
}

impl AcoConfig {
    /// Sets the number of ants per generation.
    pub fn with_n_ants(mut self, n: usize) -> Self {
        self.n_ants = n;
        self
    }

    /// Sets the elite count.
    pub fn with_n_best(mut self, n: usize) -> Self {
        self.n_best = n;
        self
    }

    /// Sets the number of generations.
    pub fn with_n_iterations(mut self, n: usize) -> Self {
        self.n_iterations = n;
        self
    }

    /// Sets the evaporation multiplier.
    pub fn with_decay(mut self, decay: f64) -> Self {
        self.decay = decay;
        self
    }

    /// Sets the pheromone influence exponent.
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    /// Sets the heuristic influence exponent.
    pub fn with_beta(mut self, beta: f64) -> Self {
        self.beta = beta;
        self
    }

    /// Enables or disables parallel path construction.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    ///
    /// Called by the runner before any computation starts, so a bad
    /// configuration can never fail mid-run.
    pub fn validate(&self) -> Result<(), AcoError> {
        if self.n_ants < 1 {
            return Err(AcoError::InvalidConfig {
                param: "n_ants",
                reason: "must be at least 1".into(),
            });
        }
        if self.n_best < 1 {
            return Err(AcoError::InvalidConfig {
                param: "n_best",
                reason: "must be at least 1".into(),
            });
        }
        if !(self.decay > 0.0 && self.decay < 1.0) {
            return Err(AcoError::InvalidConfig {
                param: "decay",
                reason: format!("must be in (0, 1), got {}", self.decay),
            });
        }
        if !self.alpha.is_finite() || self.alpha < 0.0 {
            return Err(AcoError::InvalidConfig {
                param: "alpha",
                reason: format!("must be finite and non-negative, got {}", self.alpha),
            });
        }
        if !self.beta.is_finite() || self.beta < 0.0 {
            return Err(AcoError::InvalidConfig {
                param: "beta",
                reason: format!("must be finite and non-negative, got {}", self.beta),
            });
        }
        Ok(())
    }
}
