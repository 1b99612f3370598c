//! Validated pairwise distance matrix.

use crate::error::AcoError;

/// Immutable N×N matrix of pairwise travel costs.
///
/// Validated once at construction, then read-only for the lifetime of a
/// run. Asymmetric costs (`distance(i, j) != distance(j, i)`) are
/// permitted; diagonal entries are never consulted.
///
/// # Examples
///
/// ```
/// use ant_colony::DistanceMatrix;
///
/// let m = DistanceMatrix::new(vec![
///     vec![0.0, 2.0],
///     vec![3.0, 0.0],
/// ]).unwrap();
/// assert_eq!(m.len(), 2);
/// assert_eq!(m.distance(0, 1), 2.0);
/// assert_eq!(m.distance(1, 0), 3.0);
/// ```
#[derive(Debug, Clone)]
pub struct DistanceMatrix {
    n: usize,
    // Row-major N*N buffer.
    values: Vec<f64>,
}

impl DistanceMatrix {
    /// Builds a distance matrix from nested rows.
    ///
    /// # Errors
    ///
    /// Returns [`AcoError::InvalidDistanceMatrix`] if the input is not
    /// square, has fewer than two rows, or any off-diagonal entry is
    /// non-finite or ≤ 0.
    pub fn new(rows: Vec<Vec<f64>>) -> Result<Self, AcoError> {
        let n = rows.len();
        if n < 2 {
            return Err(AcoError::InvalidDistanceMatrix {
                reason: format!("need at least 2 locations, got {n}"),
            });
        }
        let mut values = Vec::with_capacity(n * n);
        for (i, row) in rows.iter().enumerate() {
            if row.len() != n {
                return Err(AcoError::InvalidDistanceMatrix {
                    reason: format!("row {i} has {} entries, expected {n}", row.len()),
                });
            }
            for (j, &d) in row.iter().enumerate() {
                if i != j && !(d.is_finite() && d > 0.0) {
                    return Err(AcoError::InvalidDistanceMatrix {
                        reason: format!(
                            "entry [{i}][{j}] must be finite and positive, got {d}"
                        ),
                    });
                }
                values.push(d);
            }
        }
        Ok(Self { n, values })
    }

    /// Number of locations.
    pub fn len(&self) -> usize {
        self.n
    }

    /// Always false: construction rejects N < 2.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Travel cost from `i` to `j`.
    pub fn distance(&self, i: usize, j: usize) -> f64 {
        self.values[i * self.n + j]
    }

    /// Total cost of an open path: the sum of consecutive-pair distances.
    ///
    /// The return edge to the start is not included.
    pub fn path_length(&self, path: &[usize]) -> f64 {
        path.windows(2).map(|w| self.distance(w[0], w[1])).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_matrix() {
        let m = DistanceMatrix::new(vec![
            vec![0.0, 1.0, 2.0],
            vec![1.0, 0.0, 3.0],
            vec![2.0, 3.0, 0.0],
        ])
        .unwrap();
        assert_eq!(m.len(), 3);
        assert_eq!(m.distance(1, 2), 3.0);
    }

    #[test]
    fn test_asymmetric_allowed() {
        let m = DistanceMatrix::new(vec![vec![0.0, 2.0], vec![9.0, 0.0]]).unwrap();
        assert_eq!(m.distance(0, 1), 2.0);
        assert_eq!(m.distance(1, 0), 9.0);
    }

    #[test]
    fn test_too_small() {
        assert!(DistanceMatrix::new(vec![]).is_err());
        assert!(DistanceMatrix::new(vec![vec![0.0]]).is_err());
    }

    #[test]
    fn test_not_square() {
        let err = DistanceMatrix::new(vec![vec![0.0, 1.0], vec![1.0, 0.0, 2.0]]).unwrap_err();
        assert!(matches!(err, AcoError::InvalidDistanceMatrix { .. }));
    }

    #[test]
    fn test_zero_off_diagonal_rejected() {
        let err = DistanceMatrix::new(vec![vec![0.0, 0.0], vec![1.0, 0.0]]).unwrap_err();
        assert!(err.to_string().contains("[0][1]"));
    }

    #[test]
    fn test_negative_off_diagonal_rejected() {
        assert!(DistanceMatrix::new(vec![vec![0.0, -1.0], vec![1.0, 0.0]]).is_err());
    }

    #[test]
    fn test_non_finite_rejected() {
        assert!(DistanceMatrix::new(vec![vec![0.0, f64::NAN], vec![1.0, 0.0]]).is_err());
        assert!(
            DistanceMatrix::new(vec![vec![0.0, f64::INFINITY], vec![1.0, 0.0]]).is_err()
        );
    }

    #[test]
    fn test_diagonal_ignored() {
        // Non-zero diagonal entries are tolerated: they are never consulted.
        let m = DistanceMatrix::new(vec![vec![5.0, 1.0], vec![1.0, 5.0]]).unwrap();
        assert_eq!(m.path_length(&[0, 1]), 1.0);
    }

    #[test]
    fn test_path_length_open() {
        let m = DistanceMatrix::new(vec![
            vec![0.0, 2.0, 9.0],
            vec![1.0, 0.0, 6.0],
            vec![15.0, 7.0, 0.0],
        ])
        .unwrap();
        // 0 -> 1 -> 2 costs 2 + 6; no closing edge back to 0.
        assert_eq!(m.path_length(&[0, 1, 2]), 8.0);
        assert_eq!(m.path_length(&[2]), 0.0);
    }
}
