// ============================================================================
// Numeric Errors
// Error types for rejected computation inputs
// ============================================================================

use std::fmt;

/// Errors that can occur when a computation cannot produce a defined result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericError {
    /// Quadrature requested with zero subintervals
    InvalidSubdivisions,
    /// Simpson's rule configured to reject an odd subdivision count
    OddSubdivisions { requested: usize },
    /// Configuration value outside its allowed range
    InvalidConfig(&'static str),
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::InvalidSubdivisions => {
                write!(f, "invalid subdivisions: at least one subinterval is required")
            },
            NumericError::OddSubdivisions { requested } => write!(
                f,
                "odd subdivisions: simpson's rule needs an even count, got {}",
                requested
            ),
            NumericError::InvalidConfig(reason) => write!(f, "invalid configuration: {}", reason),
        }
    }
}

impl std::error::Error for NumericError {}

/// Result type alias for numeric operations
pub type NumericResult<T> = Result<T, NumericError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            NumericError::InvalidSubdivisions.to_string(),
            "invalid subdivisions: at least one subinterval is required"
        );
        assert_eq!(
            NumericError::OddSubdivisions { requested: 7 }.to_string(),
            "odd subdivisions: simpson's rule needs an even count, got 7"
        );
        assert_eq!(
            NumericError::InvalidConfig("default subdivisions must be positive").to_string(),
            "invalid configuration: default subdivisions must be positive"
        );
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(
            NumericError::OddSubdivisions { requested: 3 },
            NumericError::OddSubdivisions { requested: 3 }
        );
        assert_ne!(
            NumericError::InvalidSubdivisions,
            NumericError::OddSubdivisions { requested: 3 }
        );
    }
}
