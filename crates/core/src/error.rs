//! Error types shared by both simulation models

/// Errors produced by simulation construction, initialization and stepping
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimulationError {
    /// A construction parameter failed validation
    InvalidParameter(String),
    /// `step()` was called before `initialize()`
    NotInitialized,
    /// A distinct-position sample was requested for more cells than the
    /// lattice holds
    InsufficientCells {
        /// Number of distinct positions requested
        requested: usize,
        /// Number of cells available on the lattice
        available: usize,
    },
}

impl std::fmt::Display for SimulationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SimulationError::InvalidParameter(msg) => {
                write!(f, "Invalid parameter: {msg}")
            }
            SimulationError::NotInitialized => {
                write!(f, "Simulation stepped before initialize() was called")
            }
            SimulationError::InsufficientCells {
                requested,
                available,
            } => {
                write!(
                    f,
                    "Requested {requested} distinct cells but only {available} are available"
                )
            }
        }
    }
}

impl std::error::Error for SimulationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = SimulationError::InvalidParameter("density must be in [0, 1]".to_string());
        assert_eq!(
            err.to_string(),
            "Invalid parameter: density must be in [0, 1]"
        );

        let err = SimulationError::InsufficientCells {
            requested: 101,
            available: 100,
        };
        assert!(err.to_string().contains("101"));
        assert!(err.to_string().contains("100"));
    }
}
