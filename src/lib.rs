//! Ant Colony Optimization for near-optimal point orderings.
//!
//! A population of stochastic ants repeatedly constructs candidate
//! visiting orders over a set of locations, guided by a shared pheromone
//! matrix. The shortest paths of each generation reinforce the directed
//! edges they traversed, the whole field evaporates, and over many
//! generations the colony converges toward a short open path (a
//! Hamiltonian path, not a closed tour — the return edge to the start is
//! never counted).
//!
//! The crate is presentation-free: the caller supplies a validated
//! [`DistanceMatrix`] and consumes one [`GenerationReport`] per
//! generation through an observer callback. Cancellation is cooperative
//! via a shared [`AtomicBool`](std::sync::atomic::AtomicBool), polled at
//! generation boundaries.
//!
//! # Example
//!
//! ```
//! use ant_colony::{AcoConfig, AcoRunner, DistanceMatrix};
//!
//! let distances = DistanceMatrix::new(vec![
//!     vec![0.0, 2.0, 9.0, 10.0],
//!     vec![1.0, 0.0, 6.0, 4.0],
//!     vec![15.0, 7.0, 0.0, 8.0],
//!     vec![6.0, 3.0, 12.0, 0.0],
//! ])?;
//!
//! let config = AcoConfig::default()
//!     .with_n_ants(10)
//!     .with_n_best(3)
//!     .with_n_iterations(100)
//!     .with_seed(42);
//!
//! let result = AcoRunner::run(&distances, &config)?;
//! let best = result.best_path.expect("at least one generation ran");
//! assert_eq!(best.len(), 4);
//! # Ok::<(), ant_colony::AcoError>(())
//! ```

pub mod config;
pub mod distance;
pub mod engine;
pub mod error;
pub mod path;
pub mod pheromone;
pub mod runner;

pub use config::AcoConfig;
pub use distance::DistanceMatrix;
pub use error::AcoError;
pub use path::CandidatePath;
pub use pheromone::PheromoneField;
pub use runner::{AcoResult, AcoRunner, GenerationReport};
