//! Stochastic path construction for a single ant.

use crate::distance::DistanceMatrix;
use crate::pheromone::PheromoneField;
use rand::Rng;

/// One complete visiting order and its total open-path cost.
///
/// `nodes` is always a permutation of `0..N`; `length` is the sum of
/// consecutive-pair distances with no closing edge back to the start.
#[derive(Debug, Clone)]
pub struct CandidatePath {
    /// Visiting order over all locations.
    pub nodes: Vec<usize>,
    /// Total open-path cost.
    pub length: f64,
}

/// Constructs one path from a uniformly random start location.
///
/// Per step, every unvisited candidate `c` is scored as
/// `pheromone(last, c)^alpha * (1/distance(last, c))^beta`, scores are
/// normalized to probabilities, and the next location is drawn by
/// roulette-wheel selection over the unvisited candidates in index order.
///
/// When all candidate scores vanish (extreme exponents can underflow
/// every product to zero), the next location is drawn uniformly among
/// the unvisited candidates instead, so the permutation invariant holds
/// on every branch.
pub fn build_path<R: Rng>(
    distances: &DistanceMatrix,
    pheromone: &PheromoneField,
    alpha: f64,
    beta: f64,
    rng: &mut R,
) -> CandidatePath {
    let n = distances.len();
    let start = rng.random_range(0..n);

    let mut nodes = Vec::with_capacity(n);
    let mut visited = vec![false; n];
    nodes.push(start);
    visited[start] = true;

    let mut scores = vec![0.0; n];
    while nodes.len() < n {
        let last = nodes[nodes.len() - 1];

        let mut total = 0.0;
        for (c, score) in scores.iter_mut().enumerate() {
            *score = if visited[c] {
                0.0
            } else {
                let trail = pheromone.value(last, c).powf(alpha);
                let heuristic = (1.0 / distances.distance(last, c)).powf(beta);
                trail * heuristic
            };
            total += *score;
        }

        let next = if total > 0.0 {
            roulette(&scores, total, &visited, rng)
        } else {
            uniform_unvisited(&visited, rng)
        };
        nodes.push(next);
        visited[next] = true;
    }

    let length = distances.path_length(&nodes);
    CandidatePath { nodes, length }
}

/// Roulette-wheel draw over the unvisited candidates in index order.
///
/// Selects the first candidate whose cumulative probability reaches the
/// drawn value (`r <= cumulative`, the canonical comparison). If
/// floating-point rounding leaves the cumulative sum short of `r`, the
/// last unvisited candidate wins.
fn roulette<R: Rng>(scores: &[f64], total: f64, visited: &[bool], rng: &mut R) -> usize {
    let r = rng.random_range(0.0..1.0);
    let mut cumulative = 0.0;
    let mut last_open = 0;
    for (c, &score) in scores.iter().enumerate() {
        if visited[c] {
            continue;
        }
        last_open = c;
        cumulative += score / total;
        if r <= cumulative {
            return c;
        }
    }
    last_open
}

/// Uniform draw among unvisited candidates, for the all-zero-score case.
fn uniform_unvisited<R: Rng>(visited: &[bool], rng: &mut R) -> usize {
    let open: Vec<usize> = visited
        .iter()
        .enumerate()
        .filter(|(_, &v)| !v)
        .map(|(c, _)| c)
        .collect();
    open[rng.random_range(0..open.len())]
}
