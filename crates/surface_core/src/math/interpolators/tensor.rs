//! Tensor-product 2D interpolation for surfaces.

use super::constrained_spline::ConstrainedCubicSpline;
use super::Interpolator;
use crate::types::InterpolationError;
use num_traits::Float;

/// Tensor-product constrained-spline interpolator for 2D grid data.
///
/// Stores a 2D grid of values z(x, y) and composes two passes of the
/// univariate [`ConstrainedCubicSpline`] to compute values at arbitrary
/// (x, y) coordinates: pass 1 interpolates every grid row at `y`, pass 2
/// interpolates the per-row results at `x`. Because the univariate spline
/// clamps at its boundaries, queries outside the grid return the nearest
/// boundary profile instead of erroring.
///
/// # Type Parameters
///
/// * `T` - Floating-point type (e.g., `f64`, `f32`)
///
/// # Grid Layout
///
/// The grid is stored as `zs[i][j] = z(xs[i], ys[j])` where:
/// - `xs` defines the x-axis coordinates (rows)
/// - `ys` defines the y-axis coordinates (columns)
///
/// # Example
///
/// ```
/// use surface_core::math::interpolators::TensorSplineInterpolator;
///
/// let xs: [f64; 2] = [1.0, 2.0];
/// let ys = [0.05, 0.10];
/// let zs = [
///     [0.3, 0.6],
///     [0.5, 0.1],
/// ];
///
/// let interp = TensorSplineInterpolator::new(&xs, &ys, &zs).unwrap();
/// let z = interp.interpolate(1.5, 0.075).unwrap();
/// assert!((z - 0.375).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct TensorSplineInterpolator<T: Float> {
    /// X-axis coordinates (rows)
    xs: Vec<T>,
    /// Y-axis coordinates (columns)
    ys: Vec<T>,
    /// One univariate spline per row, over `(ys, zs[i])`
    row_splines: Vec<ConstrainedCubicSpline<T>>,
}

impl<T: Float> TensorSplineInterpolator<T> {
    /// Construct a tensor-product interpolator from grid data.
    ///
    /// Row splines are built once here and reused across queries; the
    /// second-pass spline depends on the query and is built per call.
    ///
    /// # Arguments
    ///
    /// * `xs` - Slice of x-axis coordinates (strictly increasing, length >= 2)
    /// * `ys` - Slice of y-axis coordinates (strictly increasing, length >= 2)
    /// * `zs` - Rows of grid values, `zs[i][j] = z(xs[i], ys[j])`
    ///
    /// # Returns
    ///
    /// * `Ok(TensorSplineInterpolator)` - Successfully constructed interpolator
    /// * `Err(InterpolationError::InsufficientData)` - Fewer than 2 points on an axis
    /// * `Err(InterpolationError::InvalidInput)` - Grid dimensions don't match axis lengths
    pub fn new(
        xs: &[T],
        ys: &[T],
        zs: &[impl AsRef<[T]>],
    ) -> Result<Self, InterpolationError> {
        if xs.len() < 2 {
            return Err(InterpolationError::InsufficientData {
                got: xs.len(),
                need: 2,
            });
        }
        if ys.len() < 2 {
            return Err(InterpolationError::InsufficientData {
                got: ys.len(),
                need: 2,
            });
        }

        if zs.len() != xs.len() {
            return Err(InterpolationError::InvalidInput(format!(
                "Grid rows ({}) must match x-axis length ({})",
                zs.len(),
                xs.len()
            )));
        }

        let mut row_splines = Vec::with_capacity(zs.len());
        for (i, row) in zs.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != ys.len() {
                return Err(InterpolationError::InvalidInput(format!(
                    "Grid row {} length ({}) must match y-axis length ({})",
                    i,
                    row.len(),
                    ys.len()
                )));
            }
            row_splines.push(ConstrainedCubicSpline::new(ys, row)?);
        }

        Ok(Self {
            xs: xs.to_vec(),
            ys: ys.to_vec(),
            row_splines,
        })
    }

    /// Interpolate the value at point (x, y).
    ///
    /// Pass 1 evaluates every row spline at `y`, producing one value per
    /// x-axis position; pass 2 interpolates those values at `x`. Either
    /// pass clamps when its query coordinate is outside the axis span.
    ///
    /// # Arguments
    ///
    /// * `x` - X coordinate (row axis)
    /// * `y` - Y coordinate (column axis)
    ///
    /// # Returns
    ///
    /// * `Ok(z)` - The interpolated value
    /// * `Err(InterpolationError)` - If a row or the intermediate column
    ///   is degenerate for the constrained solve
    pub fn interpolate(&self, x: T, y: T) -> Result<T, InterpolationError> {
        let intermediates: Vec<T> = self
            .row_splines
            .iter()
            .map(|spline| spline.interpolate(y))
            .collect::<Result<_, _>>()?;

        ConstrainedCubicSpline::new(&self.xs, &intermediates)?.interpolate(x)
    }

    /// Return the valid interpolation domain for x.
    #[inline]
    pub fn domain_x(&self) -> (T, T) {
        (self.xs[0], self.xs[self.xs.len() - 1])
    }

    /// Return the valid interpolation domain for y.
    #[inline]
    pub fn domain_y(&self) -> (T, T) {
        (self.ys[0], self.ys[self.ys.len() - 1])
    }

    /// Returns a reference to the x-axis coordinates.
    #[inline]
    pub fn xs(&self) -> &[T] {
        &self.xs
    }

    /// Returns a reference to the y-axis coordinates.
    #[inline]
    pub fn ys(&self) -> &[T] {
        &self.ys
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    // ========================================
    // Construction Tests
    // ========================================

    #[test]
    fn test_new_minimum_grid() {
        let xs = [0.0, 1.0];
        let ys = [0.0, 1.0];
        let zs = [[0.1, 0.2], [0.3, 0.4]];
        assert!(TensorSplineInterpolator::new(&xs, &ys, &zs).is_ok());
    }

    #[test]
    fn test_new_insufficient_x_axis() {
        let xs = [0.0];
        let ys = [0.0, 1.0];
        let zs = [[0.1, 0.2]];
        let result = TensorSplineInterpolator::new(&xs, &ys, &zs);
        match result.unwrap_err() {
            InterpolationError::InsufficientData { got, need } => {
                assert_eq!(got, 1);
                assert_eq!(need, 2);
            }
            _ => panic!("Expected InsufficientData error"),
        }
    }

    #[test]
    fn test_new_insufficient_y_axis() {
        let xs = [0.0, 1.0];
        let ys = [0.0];
        let zs = [[0.1], [0.2]];
        let result = TensorSplineInterpolator::new(&xs, &ys, &zs);
        assert!(result.is_err());
    }

    #[test]
    fn test_new_grid_rows_mismatch() {
        let xs = [0.0, 1.0, 2.0];
        let ys = [0.0, 1.0];
        let zs = [[0.1, 0.2], [0.3, 0.4]];
        let result = TensorSplineInterpolator::new(&xs, &ys, &zs);
        match result.unwrap_err() {
            InterpolationError::InvalidInput(msg) => assert!(msg.contains("rows")),
            _ => panic!("Expected InvalidInput error"),
        }
    }

    #[test]
    fn test_new_grid_cols_mismatch() {
        let xs = [0.0, 1.0];
        let ys = [0.0, 1.0, 2.0];
        let zs = [[0.1, 0.2], [0.3, 0.4]];
        let result = TensorSplineInterpolator::new(&xs, &ys, &zs);
        match result.unwrap_err() {
            InterpolationError::InvalidInput(msg) => assert!(msg.contains("row")),
            _ => panic!("Expected InvalidInput error"),
        }
    }

    // ========================================
    // Domain Tests
    // ========================================

    #[test]
    fn test_domains() {
        let xs = [1.0, 2.0, 4.0];
        let ys = [0.1, 0.5];
        let zs = [[0.2, 0.3], [0.4, 0.5], [0.6, 0.7]];
        let interp = TensorSplineInterpolator::new(&xs, &ys, &zs).unwrap();
        assert_eq!(interp.domain_x(), (1.0, 4.0));
        assert_eq!(interp.domain_y(), (0.1, 0.5));
        assert_eq!(interp.xs(), &[1.0, 2.0, 4.0]);
        assert_eq!(interp.ys(), &[0.1, 0.5]);
    }

    // ========================================
    // Interpolation Tests
    // ========================================

    #[test]
    fn test_interpolate_at_grid_points_2x2() {
        let xs = [1.0, 2.0];
        let ys = [0.05, 0.10];
        let zs = [[0.3, 0.6], [0.5, 0.1]];
        let interp = TensorSplineInterpolator::new(&xs, &ys, &zs).unwrap();

        assert_relative_eq!(interp.interpolate(1.0, 0.05).unwrap(), 0.3, epsilon = 1e-14);
        assert_relative_eq!(interp.interpolate(1.0, 0.10).unwrap(), 0.6, epsilon = 1e-14);
        assert_relative_eq!(interp.interpolate(2.0, 0.05).unwrap(), 0.5, epsilon = 1e-14);
        assert_relative_eq!(interp.interpolate(2.0, 0.10).unwrap(), 0.1, epsilon = 1e-14);
    }

    #[test]
    fn test_interpolate_center_of_2x2_grid() {
        // Both passes are linear for 2-point axes, so the center is the
        // average of the four corners.
        let xs = [1.0, 2.0];
        let ys = [0.05, 0.10];
        let zs = [[0.3, 0.6], [0.5, 0.1]];
        let interp = TensorSplineInterpolator::new(&xs, &ys, &zs).unwrap();
        let z = interp.interpolate(1.5, 0.075).unwrap();
        assert_relative_eq!(z, (0.3 + 0.6 + 0.5 + 0.1) / 4.0, epsilon = 1e-12);
    }

    #[test]
    fn test_interpolate_at_grid_points_3x3() {
        let xs = [0.25, 0.5, 1.0];
        let ys = [0.1, 0.25, 0.5];
        let zs = [
            [0.22, 0.20, 0.21],
            [0.23, 0.26, 0.22],
            [0.24, 0.22, 0.27],
        ];
        let interp = TensorSplineInterpolator::new(&xs, &ys, &zs).unwrap();
        for (i, &x) in xs.iter().enumerate() {
            for (j, &y) in ys.iter().enumerate() {
                let z = interp.interpolate(x, y).unwrap();
                assert_relative_eq!(z, zs[i][j], epsilon = 1e-9);
            }
        }
    }

    #[test]
    fn test_interpolate_clamps_outside_grid() {
        let xs = [1.0, 2.0];
        let ys = [0.05, 0.10];
        let zs = [[0.3, 0.6], [0.5, 0.1]];
        let interp = TensorSplineInterpolator::new(&xs, &ys, &zs).unwrap();

        // Below both axes: the (x0, y0) corner.
        assert_relative_eq!(interp.interpolate(0.0, 0.0).unwrap(), 0.3, epsilon = 1e-14);
        // Above both axes: the (x1, y1) corner.
        assert_relative_eq!(interp.interpolate(9.0, 1.0).unwrap(), 0.1, epsilon = 1e-14);
        // Outside one axis only: clamped edge profile, interpolated on the other.
        assert_relative_eq!(
            interp.interpolate(1.5, 0.0).unwrap(),
            (0.3 + 0.5) / 2.0,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_interpolate_degenerate_row_errors() {
        // A flat 3-point row breaks the inverse-slope heuristic of the
        // constrained derivative.
        let xs = [1.0, 2.0];
        let ys = [0.1, 0.2, 0.3];
        let zs = [[0.5, 0.5, 0.5], [0.2, 0.3, 0.4]];
        let interp = TensorSplineInterpolator::new(&xs, &ys, &zs).unwrap();
        let result = interp.interpolate(1.5, 0.15);
        assert!(matches!(
            result.unwrap_err(),
            InterpolationError::FlatSegment { .. }
        ));
    }

    #[test]
    fn test_with_f32() {
        let xs: [f32; 2] = [0.0, 1.0];
        let ys: [f32; 2] = [0.0, 1.0];
        let zs: [[f32; 2]; 2] = [[0.1, 0.2], [0.3, 0.4]];
        let interp = TensorSplineInterpolator::new(&xs, &ys, &zs).unwrap();
        let z = interp.interpolate(0.5_f32, 0.5_f32).unwrap();
        assert!(z.is_finite());
    }
}
