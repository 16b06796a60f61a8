//! Constrained cubic spline interpolation.

use super::derivative::{constrained_derivative, CurvePosition};
use super::Interpolator;
use crate::types::InterpolationError;
use num_traits::Float;

/// Constrained cubic spline interpolator with boundary clamping.
///
/// Stores the knot arrays and, at evaluation time, solves one local cubic
/// for the interval bracketing the query. Endpoint derivatives come from
/// the constrained estimator in [`constrained_derivative`], which damps
/// overshoot near local shape changes. There is no global tridiagonal
/// solve: each interval is independent, so a query costs O(n) for the
/// interval scan plus an O(1) coefficient solve.
///
/// Queries outside the knot span return the boundary ordinate; two-point
/// curves degrade to clamped linear interpolation.
///
/// # Type Parameters
///
/// * `T` - Floating-point type (e.g., `f64`, `f32`)
///
/// # Construction
///
/// At least 2 data points are required. Knots must be strictly increasing;
/// the constructor does not re-sort, because callers (the surface layer)
/// own the axis ordering. Degenerate spans surface as errors at
/// evaluation time.
///
/// # Example
///
/// ```
/// use surface_core::math::interpolators::{ConstrainedCubicSpline, Interpolator};
///
/// let xs: [f64; 3] = [1.0, 2.0, 3.0];
/// let ys = [0.30, 0.50, 0.45];
///
/// let spline = ConstrainedCubicSpline::new(&xs, &ys).unwrap();
/// let y = spline.interpolate(2.0).unwrap();
/// assert!((y - 0.50).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct ConstrainedCubicSpline<T: Float> {
    /// Knot abscissae, strictly increasing
    xs: Vec<T>,
    /// Knot ordinates
    ys: Vec<T>,
}

impl<T: Float> ConstrainedCubicSpline<T> {
    /// Construct a constrained cubic spline from x and y data points.
    ///
    /// # Arguments
    ///
    /// * `xs` - Slice of strictly increasing abscissae
    /// * `ys` - Slice of corresponding ordinates
    ///
    /// # Returns
    ///
    /// * `Ok(ConstrainedCubicSpline)` - Successfully constructed interpolator
    /// * `Err(InterpolationError::InsufficientData)` - Fewer than 2 data points
    /// * `Err(InterpolationError::InvalidInput)` - Mismatched array lengths
    ///
    /// # Example
    ///
    /// ```
    /// use surface_core::math::interpolators::ConstrainedCubicSpline;
    ///
    /// // Valid construction
    /// let spline = ConstrainedCubicSpline::new(&[0.0, 1.0], &[0.2, 0.4]).unwrap();
    ///
    /// // Insufficient data
    /// let result = ConstrainedCubicSpline::new(&[0.0], &[0.2]);
    /// assert!(result.is_err());
    /// ```
    pub fn new(xs: &[T], ys: &[T]) -> Result<Self, InterpolationError> {
        if xs.len() != ys.len() {
            return Err(InterpolationError::InvalidInput(format!(
                "xs and ys must have same length: got {} and {}",
                xs.len(),
                ys.len()
            )));
        }

        if xs.len() < 2 {
            return Err(InterpolationError::InsufficientData {
                got: xs.len(),
                need: 2,
            });
        }

        Ok(Self {
            xs: xs.to_vec(),
            ys: ys.to_vec(),
        })
    }

    /// Returns a reference to the knot abscissae.
    #[inline]
    pub fn xs(&self) -> &[T] {
        &self.xs
    }

    /// Returns a reference to the knot ordinates.
    #[inline]
    pub fn ys(&self) -> &[T] {
        &self.ys
    }

    /// Returns the number of data points.
    #[inline]
    pub fn len(&self) -> usize {
        self.xs.len()
    }

    /// Returns true if the interpolator has no data points.
    /// Note: This should never be true for a valid interpolator.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    /// Clamped linear interpolation for the two-point curve.
    fn interpolate_linear(&self, x: T) -> Result<T, InterpolationError> {
        let (x0, x1) = (self.xs[0], self.xs[1]);
        let (y0, y1) = (self.ys[0], self.ys[1]);
        if x <= x0 {
            return Ok(y0);
        }
        if x >= x1 {
            return Ok(y1);
        }
        let dx = x1 - x0;
        if dx == T::zero() {
            return Err(InterpolationError::NonMonotonicData { index: 1 });
        }
        Ok(y0 + (y1 - y0) * (x - x0) / dx)
    }

    /// Solve the bracketing interval's cubic and evaluate it at `x`.
    ///
    /// The interval's second-derivative endpoints are derived from the two
    /// constrained first derivatives, then the four coefficients of
    /// `a + b*x + c*x^2 + d*x^3` follow in closed form from matching
    /// `y0`, `y1` and those second derivatives.
    fn interpolate_cubic(&self, x: T) -> Result<T, InterpolationError> {
        let n = self.xs.len();
        let xs = &self.xs;
        let ys = &self.ys;

        if x <= xs[0] {
            return Ok(ys[0]);
        }
        if x >= xs[n - 1] {
            return Ok(ys[n - 1]);
        }

        // Forward scan for the first knot at or beyond the query; the
        // bracketing interval is [xs[i-1], xs[i]]. The clamps above
        // guarantee 1 <= i <= n-1.
        let mut i = n - 1;
        for k in 1..n {
            if xs[k] >= x {
                i = k;
                break;
            }
        }

        let m0 = constrained_derivative(
            xs,
            ys,
            i - 1,
            if i - 1 == 0 {
                CurvePosition::Start
            } else {
                CurvePosition::Interior
            },
        )?;
        let m1 = constrained_derivative(
            xs,
            ys,
            i,
            if i == n - 1 {
                CurvePosition::End
            } else {
                CurvePosition::Interior
            },
        )?;

        let (x0, x1) = (xs[i - 1], xs[i]);
        let (y0, y1) = (ys[i - 1], ys[i]);
        let h = x1 - x0;
        if h == T::zero() {
            return Err(InterpolationError::NonMonotonicData { index: i });
        }

        let two = T::from(2.0).unwrap();
        let six = T::from(6.0).unwrap();

        let f2_x0 = two * (m1 - m0) / h + six * (y1 - y0) / (h * h);
        let f2_x1 = two * (m1 + m0) / h + six * (y1 - y0) / (h * h);

        let d = (f2_x1 - f2_x0) / (six * h);
        let c = (x1 * f2_x0 - x0 * f2_x1) / (two * h);
        let b = ((y1 - y0) - c * (x1 * x1 - x0 * x0) - d * (x1 * x1 * x1 - x0 * x0 * x0)) / h;
        let a = y0 - b * x0 - c * x0 * x0 - d * x0 * x0 * x0;

        Ok(a + b * x + c * x * x + d * x * x * x)
    }
}

impl<T: Float> Interpolator<T> for ConstrainedCubicSpline<T> {
    /// Interpolate the value at point `x`.
    ///
    /// Queries at or outside the knot span return the boundary ordinate
    /// exactly. Two-point curves interpolate linearly; longer curves
    /// solve the bracketing interval's constrained cubic.
    ///
    /// # Arguments
    ///
    /// * `x` - The point at which to interpolate
    ///
    /// # Returns
    ///
    /// * `Ok(y)` - The interpolated (or clamped boundary) value
    /// * `Err(InterpolationError::NonMonotonicData)` - Zero-width interval
    ///   encountered during evaluation
    /// * `Err(InterpolationError::FlatSegment)` - Equal consecutive levels
    ///   where the derivative heuristic forms an inverse slope
    fn interpolate(&self, x: T) -> Result<T, InterpolationError> {
        if self.xs.len() == 2 {
            self.interpolate_linear(x)
        } else {
            self.interpolate_cubic(x)
        }
    }

    /// Return the knot span.
    #[inline]
    fn domain(&self) -> (T, T) {
        (self.xs[0], self.xs[self.xs.len() - 1])
    }
}
