//! Error types for structured error handling.
//!
//! This module provides:
//! - `InterpolationError`: Errors from interpolation operations

use thiserror::Error;

/// Interpolation-related errors.
///
/// Provides structured error handling for interpolation operations
/// with descriptive context for each failure mode.
///
/// Out-of-range query coordinates are *not* an error anywhere in this
/// crate: the spline and surface evaluators clamp to the boundary level
/// by design. The variants below cover degenerate input data only.
///
/// # Variants
/// - `InsufficientData`: Not enough data points for interpolation
/// - `NonMonotonicData`: Two consecutive abscissae are equal, so an
///   interval has zero width
/// - `FlatSegment`: Two consecutive ordinates are equal where an inverse
///   slope must be formed
/// - `InvalidInput`: General invalid input error
///
/// # Examples
/// ```
/// use surface_core::types::InterpolationError;
///
/// let err = InterpolationError::InsufficientData { got: 1, need: 2 };
/// assert!(format!("{}", err).contains("need at least 2"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InterpolationError {
    /// Insufficient data points for interpolation.
    #[error("Insufficient data points: got {got}, need at least {need}")]
    InsufficientData {
        /// Number of points provided
        got: usize,
        /// Minimum number of points required
        need: usize,
    },

    /// Two consecutive abscissae are equal (zero interval width).
    #[error("Data is not strictly monotonic at index {index}")]
    NonMonotonicData {
        /// Index of the second point of the degenerate interval
        index: usize,
    },

    /// Two consecutive ordinates are equal where an inverse slope is
    /// required by the shape-preserving derivative heuristic.
    #[error("Flat segment at index {index}: consecutive levels are equal")]
    FlatSegment {
        /// Index of the second point of the flat segment
        index: usize,
    },

    /// Invalid input data or parameters.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
