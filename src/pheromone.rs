//! Pheromone field: the shared desirability matrix over directed edges.

/// N×N matrix of non-negative desirability values, one per directed edge.
///
/// Initialized uniformly to 1.0 at run start. During a generation the
/// field is read (shared borrow) by every ant; between generations it is
/// updated exactly once by the engine: reinforcement first, then
/// evaporation. The shared-read / exclusive-write split is enforced by
/// the borrow checker, so ants can never observe a partial update.
#[derive(Debug, Clone)]
pub struct PheromoneField {
    n: usize,
    // Row-major N*N buffer.
    values: Vec<f64>,
}

impl PheromoneField {
    /// Creates a field for `n` locations with every cell set to 1.0.
    pub fn new(n: usize) -> Self {
        Self {
            n,
            values: vec![1.0; n * n],
        }
    }

    /// Number of locations.
    pub fn len(&self) -> usize {
        self.n
    }

    /// True for the degenerate zero-location field.
    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Desirability of the directed edge `i -> j`.
    pub fn value(&self, i: usize, j: usize) -> f64 {
        self.values[i * self.n + j]
    }

    /// Adds `amount` to each listed directed edge.
    ///
    /// Only the cell `[i][j]` is touched; the reverse edge `[j][i]` is
    /// not, even when the underlying distances are symmetric.
    pub fn reinforce(&mut self, deposits: &[(usize, usize, f64)]) {
        for &(i, j, amount) in deposits {
            self.values[i * self.n + j] += amount;
        }
    }

    /// Multiplies every cell, diagonal included, by `decay`.
    pub fn evaporate(&mut self, decay: f64) {
        for v in &mut self.values {
            *v *= decay;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_initialized_to_one() {
        let field = PheromoneField::new(3);
        for i in 0..3 {
            for j in 0..3 {
                assert_eq!(field.value(i, j), 1.0);
            }
        }
    }

    #[test]
    fn test_reinforce_is_directed() {
        let mut field = PheromoneField::new(3);
        field.reinforce(&[(0, 1, 0.5)]);
        assert_eq!(field.value(0, 1), 1.5);
        assert_eq!(field.value(1, 0), 1.0);
    }

    #[test]
    fn test_reinforce_accumulates_shared_edges() {
        let mut field = PheromoneField::new(3);
        field.reinforce(&[(0, 1, 0.25), (0, 1, 0.25), (1, 2, 0.1)]);
        assert!((field.value(0, 1) - 1.5).abs() < 1e-12);
        assert!((field.value(1, 2) - 1.1).abs() < 1e-12);
    }

    #[test]
    fn test_evaporate_hits_every_cell() {
        let mut field = PheromoneField::new(2);
        field.evaporate(0.5);
        // Diagonal cells decay too, even though they are never consulted.
        for i in 0..2 {
            for j in 0..2 {
                assert_eq!(field.value(i, j), 0.5);
            }
        }
    }

    #[test]
    fn test_reinforce_then_evaporate_order_is_observable() {
        // (1.0 + 0.5) * 0.9 differs from 1.0 * 0.9 + 0.5; the engine
        // contract is reinforce first.
        let mut field = PheromoneField::new(2);
        field.reinforce(&[(0, 1, 0.5)]);
        field.evaporate(0.9);
        assert!((field.value(0, 1) - 1.35).abs() < 1e-12);
        assert!((field.value(1, 0) - 0.9).abs() < 1e-12);
    }

    proptest! {
        #[test]
        fn prop_repeated_evaporation_is_geometric(
            decay in 0.01f64..0.99,
            k in 1usize..40,
        ) {
            let mut field = PheromoneField::new(4);
            for _ in 0..k {
                field.evaporate(decay);
            }
            let expected = decay.powi(k as i32);
            for i in 0..4 {
                for j in 0..4 {
                    prop_assert!((field.value(i, j) - expected).abs() < 1e-9);
                }
            }
        }
    }
}
