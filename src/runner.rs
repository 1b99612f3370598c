//! ACO run loop: generations, cancellation, progress reporting.
//!
//! [`AcoRunner`] drives [`run_generation`](crate::engine::run_generation)
//! across the configured number of generations, polls the cooperative
//! stop flag at generation boundaries, tracks the best path seen across
//! the whole run, and hands a [`GenerationReport`] to the caller's
//! observer after every generation.

use crate::config::AcoConfig;
use crate::distance::DistanceMatrix;
use crate::engine::run_generation;
use crate::error::AcoError;
use crate::pheromone::PheromoneField;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Progress snapshot emitted once per completed generation.
///
/// Carries the run-level best (not just the generation's local best) and
/// a snapshot of the pheromone field taken after that generation's
/// update. Observers receive it by shared reference and must return
/// promptly; longer work such as rendering belongs on another thread.
#[derive(Debug, Clone)]
pub struct GenerationReport {
    /// Zero-based generation index.
    pub generation: usize,
    /// Best path found so far across the whole run.
    pub best_path: Vec<usize>,
    /// Length of `best_path`.
    pub best_length: f64,
    /// Pheromone field after this generation's reinforce + evaporate.
    pub pheromone: PheromoneField,
}

/// Final result of an ACO run.
#[derive(Debug, Clone)]
pub struct AcoResult {
    /// Best path found, or `None` when no generation ran.
    pub best_path: Option<Vec<usize>>,

    /// Length of the best path; `f64::INFINITY` when none was found.
    pub best_length: f64,

    /// Number of generations that actually executed.
    pub generations: usize,

    /// Whether the run was cancelled externally.
    pub cancelled: bool,
}

/// Executes the ACO optimization loop.
///
/// The run is a plain blocking call; hosts that need it off their
/// primary thread can dispatch it onto a worker and cancel it through
/// the shared flag.
///
/// # Usage
///
/// ```
/// use ant_colony::{AcoConfig, AcoRunner, DistanceMatrix};
///
/// let distances = DistanceMatrix::new(vec![
///     vec![0.0, 2.0, 9.0],
///     vec![1.0, 0.0, 6.0],
///     vec![15.0, 7.0, 0.0],
/// ]).unwrap();
/// let config = AcoConfig::default().with_n_iterations(50).with_seed(42);
/// let result = AcoRunner::run(&distances, &config).unwrap();
/// assert!(result.best_path.is_some());
/// ```
pub struct AcoRunner;

impl AcoRunner {
    /// Runs the optimization to completion.
    pub fn run(distances: &DistanceMatrix, config: &AcoConfig) -> Result<AcoResult, AcoError> {
        Self::run_with_observer(distances, config, None, |_| Ok(()))
    }

    /// Runs with an optional cancellation flag.
    ///
    /// The flag is polled at generation boundaries only; a generation in
    /// flight always finishes before the run stops.
    pub fn run_with_cancel(
        distances: &DistanceMatrix,
        config: &AcoConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<AcoResult, AcoError> {
        Self::run_with_observer(distances, config, cancel, |_| Ok(()))
    }

    /// Runs with a cancellation flag and a progress observer.
    ///
    /// The observer is invoked synchronously on the calling thread once
    /// per completed generation, after the run-level best has been
    /// updated. An `Err` from the observer stops the run immediately and
    /// surfaces as [`AcoError::Observer`].
    ///
    /// # Errors
    ///
    /// [`AcoError::InvalidConfig`] before any computation if the
    /// configuration is out of range, and [`AcoError::Observer`] if the
    /// observer fails mid-run.
    pub fn run_with_observer<F>(
        distances: &DistanceMatrix,
        config: &AcoConfig,
        cancel: Option<Arc<AtomicBool>>,
        mut observer: F,
    ) -> Result<AcoResult, AcoError>
    where
        F: FnMut(&GenerationReport) -> Result<(), String>,
    {
        config.validate()?;

        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random()),
        };

        let mut pheromone = PheromoneField::new(distances.len());
        let mut best_path: Option<Vec<usize>> = None;
        let mut best_length = f64::INFINITY;
        let mut generations = 0usize;
        let mut cancelled = false;

        for generation in 0..config.n_iterations {
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    cancelled = true;
                    break;
                }
            }

            let gen_best = run_generation(config, distances, &mut pheromone, &mut rng);
            if gen_best.length < best_length {
                best_length = gen_best.length;
                best_path = Some(gen_best.nodes);
            }
            generations = generation + 1;

            let report = GenerationReport {
                generation,
                best_path: best_path
                    .clone()
                    .expect("any finished generation improves on the infinite initial best"),
                best_length,
                pheromone: pheromone.clone(),
            };
            observer(&report).map_err(|message| AcoError::Observer {
                generation,
                message,
            })?;
        }

        Ok(AcoResult {
            best_path,
            best_length,
            generations,
            cancelled,
        })
    }
}
