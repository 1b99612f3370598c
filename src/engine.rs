//! One-generation orchestration: ant fan-out, elitist reinforcement,
//! evaporation.

use crate::config::AcoConfig;
use crate::distance::DistanceMatrix;
use crate::path::{build_path, CandidatePath};
use crate::pheromone::PheromoneField;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;

/// Runs one generation and returns its best path.
///
/// Constructs `n_ants` paths against an immutable view of the pheromone
/// field, then applies the single-writer update: reinforcement for the
/// `n_best` shortest paths (amount `1/length` per traversed directed
/// edge, shared edges accumulate), followed by evaporation.
///
/// Per-ant seeds are drawn sequentially from the master RNG before the
/// fan-out, so parallel and sequential execution construct identical
/// paths for a fixed seed.
pub fn run_generation<R: Rng>(
    config: &AcoConfig,
    distances: &DistanceMatrix,
    pheromone: &mut PheromoneField,
    rng: &mut R,
) -> CandidatePath {
    let seeds: Vec<u64> = (0..config.n_ants).map(|_| rng.random()).collect();

    // Read phase: ants share the field immutably until all have joined.
    let field: &PheromoneField = pheromone;
    let mut paths: Vec<CandidatePath> = if config.parallel {
        seeds
            .par_iter()
            .map(|&seed| {
                let mut ant_rng = StdRng::seed_from_u64(seed);
                build_path(distances, field, config.alpha, config.beta, &mut ant_rng)
            })
            .collect()
    } else {
        seeds
            .iter()
            .map(|&seed| {
                let mut ant_rng = StdRng::seed_from_u64(seed);
                build_path(distances, field, config.alpha, config.beta, &mut ant_rng)
            })
            .collect()
    };

    paths.sort_by(|a, b| {
        a.length
            .partial_cmp(&b.length)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    // Write phase: reinforce the elite set, then evaporate.
    let elite = config.n_best.min(config.n_ants);
    let mut deposits = Vec::new();
    for path in &paths[..elite] {
        let amount = 1.0 / path.length;
        for edge in path.nodes.windows(2) {
            deposits.push((edge[0], edge[1], amount));
        }
    }
    pheromone.reinforce(&deposits);
    pheromone.evaporate(config.decay);

    paths
        .into_iter()
        .next()
        .expect("n_ants >= 1 guarantees at least one path")
}
