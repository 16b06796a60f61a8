//! Interpolation methods for volatility surface evaluation.
//!
//! This module provides the constrained (shape-preserving) cubic spline
//! family used throughout the crate, with full support for generic
//! computation through `T: Float` type parameters.
//!
//! ## Available Interpolators
//!
//! - [`ConstrainedCubicSpline`]: Local piecewise cubic interpolation with
//!   overshoot damping and boundary clamping
//! - [`TensorSplineInterpolator`]: 2D grid interpolation composing two
//!   passes of the univariate spline
//! - [`constrained_derivative`]: The endpoint derivative estimator behind
//!   the spline's per-interval solve
//!
//! ## Core Trait
//!
//! The 1D interpolator implements the [`Interpolator`] trait, which defines:
//! - `interpolate(x: T) -> Result<T, InterpolationError>`: Compute interpolated value
//! - `domain() -> (T, T)`: Return the knot span
//!
//! ## Locality
//!
//! Unlike a natural cubic spline there is no global tridiagonal solve:
//! each interval's cubic is derived independently from the two endpoint
//! derivatives. This trades global C² smoothness for locality and an O(1)
//! per-interval solve, which is what bounds overshoot near non-monotonic
//! regions of a volatility smile.
//!
//! ## Example
//!
//! ```
//! use surface_core::math::interpolators::{ConstrainedCubicSpline, Interpolator};
//!
//! let xs: [f64; 3] = [1.0, 2.0, 3.0];
//! let ys = [0.30, 0.50, 0.45];
//!
//! let spline = ConstrainedCubicSpline::new(&xs, &ys).unwrap();
//! let y = spline.interpolate(1.5).unwrap();
//! assert!(y.is_finite());
//!
//! // Queries outside the knot span clamp to the boundary level.
//! assert_eq!(spline.interpolate(0.0).unwrap(), 0.30);
//! ```

mod constrained_spline;
mod derivative;
mod tensor;
mod traits;

// Re-export public types at module level
pub use constrained_spline::ConstrainedCubicSpline;
pub use derivative::{constrained_derivative, CurvePosition};
pub use tensor::TensorSplineInterpolator;
pub use traits::Interpolator;
