//! Error types for the ACO engine.
//!
//! All failures are reported before or between generations — construction
//! problems never surface mid-run, and a stochastic failure to find a good
//! path is not an error.

use std::fmt;

/// Error type for ACO configuration and execution.
#[derive(Debug, Clone, PartialEq)]
pub enum AcoError {
    /// The distance matrix is malformed: not square, fewer than two
    /// locations, or an off-diagonal entry that is non-finite or ≤ 0.
    InvalidDistanceMatrix {
        /// What was wrong with the matrix.
        reason: String,
    },

    /// A configuration parameter is out of its valid range.
    InvalidConfig {
        /// Name of the offending parameter.
        param: &'static str,
        /// Constraint that was violated.
        reason: String,
    },

    /// The progress observer returned an error; the run stopped at that
    /// generation boundary without completing or being cancelled.
    Observer {
        /// Generation index at which the observer failed.
        generation: usize,
        /// Message returned by the observer.
        message: String,
    },
}

impl fmt::Display for AcoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AcoError::InvalidDistanceMatrix { reason } => {
                write!(f, "invalid distance matrix: {reason}")
            }
            AcoError::InvalidConfig { param, reason } => {
                write!(f, "invalid configuration: {param} {reason}")
            }
            AcoError::Observer {
                generation,
                message,
            } => {
                write!(f, "observer failed at generation {generation}: {message}")
            }
        }
    }
}

impl std::error::Error for AcoError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_distance_matrix() {
        let err = AcoError::InvalidDistanceMatrix {
            reason: "matrix must be square".into(),
        };
        assert!(err.to_string().contains("invalid distance matrix"));
        assert!(err.to_string().contains("square"));
    }

    #[test]
    fn test_display_config() {
        let err = AcoError::InvalidConfig {
            param: "decay",
            reason: "must be in (0, 1), got 1.5".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("decay"));
        assert!(msg.contains("(0, 1)"));
    }

    #[test]
    fn test_display_observer() {
        let err = AcoError::Observer {
            generation: 7,
            message: "channel closed".into(),
        };
        assert!(err.to_string().contains("generation 7"));
    }
}
