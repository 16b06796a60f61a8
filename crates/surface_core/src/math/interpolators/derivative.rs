//! Constrained endpoint derivative estimation.
//!
//! The per-interval cubic solve in [`super::ConstrainedCubicSpline`] needs a
//! first derivative at each endpoint of the active interval. A naive choice
//! (e.g. the centered slope everywhere) lets the cubic overshoot near local
//! shape changes of the curve. The estimator here damps that: it compares
//! the inverse slopes of two neighbouring intervals and, when their
//! difference flips sign, falls back from the shape-preserving blend to a
//! plain finite-difference slope.

use crate::types::InterpolationError;
use num_traits::Float;

/// Role of a knot within the sampled curve.
///
/// The estimator is called with the *interval-relative* role of the
/// endpoint: whether the active interval's endpoint is the curve's first
/// point, last point, or an interior point. Only when the active interval
/// touches the curve boundary does this coincide with the absolute
/// first/last index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurvePosition {
    /// First point of the curve.
    Start,
    /// Any point strictly between the first and last.
    Interior,
    /// Last point of the curve.
    End,
}

/// Two-point finite-difference slope over `[xs[i], xs[j]]`.
fn slope<T: Float>(xs: &[T], ys: &[T], i: usize, j: usize) -> Result<T, InterpolationError> {
    let dx = xs[j] - xs[i];
    if dx == T::zero() {
        return Err(InterpolationError::NonMonotonicData { index: j });
    }
    Ok((ys[j] - ys[i]) / dx)
}

/// Inverse slope `(xs[j] - xs[i]) / (ys[j] - ys[i])` over one interval.
///
/// A zero level difference makes the inverse slope undefined, which is the
/// degenerate-denominator case of the branch heuristic.
fn inverse_slope<T: Float>(
    xs: &[T],
    ys: &[T],
    i: usize,
    j: usize,
) -> Result<T, InterpolationError> {
    let dy = ys[j] - ys[i];
    if dy == T::zero() {
        return Err(InterpolationError::FlatSegment { index: j });
    }
    Ok((xs[j] - xs[i]) / dy)
}

/// Estimate the constrained first derivative at one knot of a sampled curve.
///
/// The branch condition compares the inverse slopes of two adjacent
/// intervals: a negative difference signals a local shape change (sign
/// flip or inflection), in which case the estimator returns a plain
/// finite-difference slope; otherwise it returns the shape-preserving
/// blend `3*s/2 - s_next/2` of the local and neighbouring interval slopes.
///
/// # Arguments
///
/// * `xs` - Strictly monotonic abscissae
/// * `ys` - Ordinates, same length as `xs`
/// * `index` - Knot index the derivative is requested at (only used for
///   `CurvePosition::Interior`; the boundary roles address the curve ends
///   directly)
/// * `position` - Interval-relative role of the knot (see [`CurvePosition`])
///
/// # Returns
///
/// * `Ok(m)` - The estimated derivative
/// * `Err(InterpolationError::NonMonotonicData)` - Two consecutive
///   abscissae are equal
/// * `Err(InterpolationError::FlatSegment)` - Two consecutive ordinates
///   are equal where an inverse slope is required
/// * `Err(InterpolationError::InsufficientData)` - Fewer than 2 points
/// * `Err(InterpolationError::InvalidInput)` - Mismatched lengths, or an
///   interior index that is not strictly interior
///
/// # Example
///
/// ```
/// use surface_core::math::interpolators::{constrained_derivative, CurvePosition};
///
/// // Linear data reproduces the line's slope at every position.
/// let xs: [f64; 3] = [0.0, 1.0, 2.0];
/// let ys = [0.0, 2.0, 4.0];
/// let m = constrained_derivative(&xs, &ys, 0, CurvePosition::Start).unwrap();
/// assert!((m - 2.0).abs() < 1e-12);
/// ```
pub fn constrained_derivative<T: Float>(
    xs: &[T],
    ys: &[T],
    index: usize,
    position: CurvePosition,
) -> Result<T, InterpolationError> {
    if xs.len() != ys.len() {
        return Err(InterpolationError::InvalidInput(format!(
            "xs and ys must have same length: got {} and {}",
            xs.len(),
            ys.len()
        )));
    }
    let n = xs.len();
    if n < 2 {
        return Err(InterpolationError::InsufficientData { got: n, need: 2 });
    }

    let two = T::from(2.0).unwrap();
    let three = T::from(3.0).unwrap();

    match position {
        CurvePosition::Start => {
            if n == 2 {
                return slope(xs, ys, 0, 1);
            }
            let cond = inverse_slope(xs, ys, 1, 2)? - inverse_slope(xs, ys, 0, 1)?;
            if cond < T::zero() {
                slope(xs, ys, 0, 1)
            } else {
                let s = slope(xs, ys, 0, 1)?;
                let next = slope(xs, ys, 1, 2)?;
                Ok(three * s / two - next / two)
            }
        }
        CurvePosition::End => {
            if n == 2 {
                return slope(xs, ys, 0, 1);
            }
            let l = n - 1;
            let cond = inverse_slope(xs, ys, l - 1, l)? - inverse_slope(xs, ys, l - 2, l - 1)?;
            if cond < T::zero() {
                slope(xs, ys, l - 1, l)
            } else {
                let s = slope(xs, ys, l - 1, l)?;
                let prev = slope(xs, ys, l - 2, l - 1)?;
                Ok(three * s / two - prev / two)
            }
        }
        CurvePosition::Interior => {
            let i = index;
            if i == 0 || i >= n - 1 {
                return Err(InterpolationError::InvalidInput(format!(
                    "interior index {} out of range for {} points",
                    i, n
                )));
            }
            if i + 1 < n - 1 {
                let cond = inverse_slope(xs, ys, i + 1, i + 2)? - inverse_slope(xs, ys, i, i + 1)?;
                if cond < T::zero() {
                    let dx = xs[i + 1] - xs[i - 1];
                    if dx == T::zero() {
                        return Err(InterpolationError::NonMonotonicData { index: i + 1 });
                    }
                    Ok((ys[i + 1] - ys[i - 1]) / dx)
                } else {
                    let s = slope(xs, ys, i, i + 1)?;
                    let next = slope(xs, ys, i + 1, i + 2)?;
                    Ok(three * s / two - next / two)
                }
            } else {
                // No further point to the right: backward slope.
                slope(xs, ys, i - 1, i)
            }
        }
    }
}
