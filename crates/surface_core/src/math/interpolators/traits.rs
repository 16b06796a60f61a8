//! Interpolator trait definition.

use crate::types::InterpolationError;
use num_traits::Float;

/// Generic one-dimensional interpolator trait.
///
/// All implementations must be generic over `T: Float` so the same code
/// serves `f64` and `f32` evaluation.
///
/// # Contract
///
/// - `interpolate(x)` returns the interpolated value at `x`; queries
///   outside the knot span clamp to the boundary ordinate rather than
///   erroring
/// - `domain()` returns the knot span `(xs[0], xs[n-1])`
///
/// # Example
///
/// ```
/// use surface_core::math::interpolators::{ConstrainedCubicSpline, Interpolator};
///
/// let spline = ConstrainedCubicSpline::new(&[0.0, 1.0], &[0.2, 0.4]).unwrap();
/// assert_eq!(spline.domain(), (0.0, 1.0));
/// ```
pub trait Interpolator<T: Float> {
    /// Interpolate the value at point `x`.
    ///
    /// # Arguments
    ///
    /// * `x` - The point at which to interpolate
    ///
    /// # Returns
    ///
    /// * `Ok(y)` - The interpolated (or clamped boundary) value
    /// * `Err(InterpolationError)` - If the data is degenerate at the
    ///   evaluated interval
    fn interpolate(&self, x: T) -> Result<T, InterpolationError>;

    /// Return the knot span as `(x_min, x_max)`.
    fn domain(&self) -> (T, T);
}
