//! Surface error types.
//!
//! This module provides structured error handling for volatility surface
//! construction and lookup.

use crate::types::InterpolationError;
use thiserror::Error;

/// Surface operation errors.
///
/// Provides structured error handling for surface construction and
/// volatility lookup with descriptive context for each failure mode.
///
/// # Variants
///
/// - `InsufficientData`: Fewer than two distinct points on an axis, or a
///   grid dimension that does not match its axis
/// - `Interpolation`: Wrapped interpolation error from the spline layer
/// - `InvalidInput`: Mismatched observation array lengths
///
/// # Examples
///
/// ```
/// use surface_core::surface::SurfaceError;
///
/// let err = SurfaceError::InsufficientData { got: 1, need: 2 };
/// assert!(format!("{}", err).contains("got 1"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SurfaceError {
    /// Insufficient data for construction.
    #[error("Insufficient data: got {got}, need {need}")]
    InsufficientData {
        /// Number of points provided
        got: usize,
        /// Minimum number of points required
        need: usize,
    },

    /// Interpolation error.
    #[error("Interpolation error: {0}")]
    Interpolation(#[from] InterpolationError),

    /// Invalid input data or parameters.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insufficient_data_display() {
        let err = SurfaceError::InsufficientData { got: 1, need: 2 };
        assert_eq!(format!("{}", err), "Insufficient data: got 1, need 2");
    }

    #[test]
    fn test_from_interpolation_error() {
        let interp_err = InterpolationError::NonMonotonicData { index: 3 };
        let surf_err: SurfaceError = interp_err.into();
        match surf_err {
            SurfaceError::Interpolation(_) => {}
            _ => panic!("Expected Interpolation variant"),
        }
    }

    #[test]
    fn test_invalid_input_display() {
        let err = SurfaceError::InvalidInput("length mismatch".to_string());
        assert_eq!(format!("{}", err), "Invalid input: length mismatch");
    }

    #[test]
    fn test_error_trait_implementation() {
        let err = SurfaceError::InsufficientData { got: 0, need: 2 };
        let _: &dyn std::error::Error = &err;
    }

    #[test]
    fn test_clone_and_equality() {
        let err1 = SurfaceError::InsufficientData { got: 1, need: 2 };
        let err2 = err1.clone();
        assert_eq!(err1, err2);
    }
}
