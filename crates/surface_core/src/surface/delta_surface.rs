//! Delta × expiry volatility surface built from raw quotes.

use super::observations::{aggregate_levels, first_appearance_axis};
use super::VolatilitySurface;
use crate::math::interpolators::TensorSplineInterpolator;
use crate::surface::error::SurfaceError;

/// Volatility surface on a delta × expiry grid.
///
/// Stores the two axis sequences and the volatility grid and answers
/// σ(delta, expiry) queries through the tensor-product constrained
/// spline: one pass along the delta axis per expiry slice, then one pass
/// along the expiry axis over the per-slice results. Queries outside the
/// measured spans clamp to the boundary profile.
///
/// # Grid Layout
///
/// The grid is organised as `vols[expiry_idx][delta_idx]`:
/// - Rows correspond to expiry slices
/// - Columns correspond to deltas within each slice
///
/// Axis order is the order of first appearance in the source quotes, not
/// sorted order; the interval search of the underlying spline expects the
/// caller to have supplied an increasing ordering.
///
/// # Example
///
/// ```
/// use surface_core::surface::{DeltaVolSurface, VolatilitySurface};
///
/// let deltas = [0.05, 0.1];
/// let expiries = [1.0, 2.0];
/// let vols = vec![
///     vec![0.3, 0.6],  // 1Y slice
///     vec![0.5, 0.1],  // 2Y slice
/// ];
///
/// let surface = DeltaVolSurface::new(&deltas, &expiries, vols).unwrap();
/// let vol = surface.volatility(0.075, 1.5).unwrap();
/// assert!((vol - 0.375).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct DeltaVolSurface {
    /// Delta axis in first-appearance order
    deltas: Vec<f64>,
    /// Expiry axis in first-appearance order
    expiries: Vec<f64>,
    /// Volatility grid: `vols[expiry_idx][delta_idx]`
    vols: Vec<Vec<f64>>,
}

impl DeltaVolSurface {
    /// Construct a surface from pre-materialized grid data.
    ///
    /// # Arguments
    ///
    /// * `deltas` - Delta axis (at least 2 distinct points)
    /// * `expiries` - Expiry axis (at least 2 distinct points)
    /// * `vols` - Volatility grid: `vols[expiry_idx][delta_idx]`
    ///
    /// # Returns
    ///
    /// * `Ok(DeltaVolSurface)` - Successfully constructed surface
    /// * `Err(SurfaceError::InsufficientData)` - Fewer than 2 points on an
    ///   axis, or grid dimensions that do not match the axes
    ///
    /// # Example
    ///
    /// ```
    /// use surface_core::surface::DeltaVolSurface;
    ///
    /// let surface = DeltaVolSurface::new(
    ///     &[0.25, 0.5, 0.75],
    ///     &[0.5, 1.0],
    ///     vec![vec![0.11, 0.10, 0.11], vec![0.12, 0.11, 0.12]],
    /// )
    /// .unwrap();
    /// ```
    pub fn new(
        deltas: &[f64],
        expiries: &[f64],
        vols: Vec<Vec<f64>>,
    ) -> Result<Self, SurfaceError> {
        if deltas.len() < 2 {
            return Err(SurfaceError::InsufficientData {
                got: deltas.len(),
                need: 2,
            });
        }
        if expiries.len() < 2 {
            return Err(SurfaceError::InsufficientData {
                got: expiries.len(),
                need: 2,
            });
        }

        if vols.len() != expiries.len() {
            return Err(SurfaceError::InsufficientData {
                got: vols.len(),
                need: expiries.len(),
            });
        }
        for row in &vols {
            if row.len() != deltas.len() {
                return Err(SurfaceError::InsufficientData {
                    got: row.len(),
                    need: deltas.len(),
                });
            }
        }

        Ok(Self {
            deltas: deltas.to_vec(),
            expiries: expiries.to_vec(),
            vols,
        })
    }

    /// Build a surface from raw parallel quote arrays.
    ///
    /// Quotes with a blank expiry or delta are excluded from aggregation,
    /// but both axes are derived over the *raw* arrays in first-appearance
    /// order, so a coordinate seen only on an otherwise-blank row still
    /// occupies an axis position. Duplicate `(expiry, delta)` pairs sum
    /// their levels; grid cells with no quote are filled with `0.0`.
    ///
    /// # Arguments
    ///
    /// * `expiries` - Raw expiry column, blanks as `None`
    /// * `deltas` - Raw delta column, blanks as `None`
    /// * `vols` - Raw level column, parallel to the coordinate columns
    ///
    /// # Returns
    ///
    /// * `Ok(DeltaVolSurface)` - Materialized surface
    /// * `Err(SurfaceError::InvalidInput)` - Mismatched column lengths
    /// * `Err(SurfaceError::InsufficientData)` - Fewer than 2 distinct
    ///   points on a derived axis
    ///
    /// # Example
    ///
    /// ```
    /// use surface_core::surface::DeltaVolSurface;
    ///
    /// let expiries = [Some(1.0), Some(2.0), Some(1.0), Some(2.0)];
    /// let deltas = [Some(0.05), Some(0.05), Some(0.1), Some(0.1)];
    /// let vols = [0.3, 0.5, 0.6, 0.1];
    ///
    /// let surface = DeltaVolSurface::from_quotes(&expiries, &deltas, &vols).unwrap();
    /// assert_eq!(surface.expiries(), &[1.0, 2.0]);
    /// assert_eq!(surface.deltas(), &[0.05, 0.1]);
    /// ```
    pub fn from_quotes(
        expiries: &[Option<f64>],
        deltas: &[Option<f64>],
        vols: &[f64],
    ) -> Result<Self, SurfaceError> {
        if expiries.len() != deltas.len() || expiries.len() != vols.len() {
            return Err(SurfaceError::InvalidInput(format!(
                "quote columns must have same length: got {}, {} and {}",
                expiries.len(),
                deltas.len(),
                vols.len()
            )));
        }

        let levels = aggregate_levels(expiries, deltas, vols);
        let expiry_axis = first_appearance_axis(expiries);
        let delta_axis = first_appearance_axis(deltas);

        let grid: Vec<Vec<f64>> = expiry_axis
            .iter()
            .map(|t| {
                delta_axis
                    .iter()
                    .map(|d| {
                        levels
                            .get(&(t.to_bits(), d.to_bits()))
                            .copied()
                            .unwrap_or(0.0)
                    })
                    .collect()
            })
            .collect();

        Self::new(&delta_axis, &expiry_axis, grid)
    }

    /// Returns the delta axis in first-appearance order.
    #[inline]
    pub fn deltas(&self) -> &[f64] {
        &self.deltas
    }

    /// Returns the expiry axis in first-appearance order.
    #[inline]
    pub fn expiries(&self) -> &[f64] {
        &self.expiries
    }

    /// Returns the volatility grid, `vols[expiry_idx][delta_idx]`.
    #[inline]
    pub fn vols(&self) -> &[Vec<f64>] {
        &self.vols
    }
}

impl VolatilitySurface<f64> for DeltaVolSurface {
    /// Return the implied volatility for the given delta and expiry.
    ///
    /// Composes the tensor-product constrained spline over the grid:
    /// delta pass per expiry slice, then the expiry pass over the
    /// per-slice results. Out-of-range coordinates clamp to the boundary
    /// profile instead of erroring.
    ///
    /// # Arguments
    ///
    /// * `delta` - Option delta coordinate
    /// * `expiry` - Time to expiry in years
    ///
    /// # Returns
    ///
    /// * `Ok(sigma)` - Interpolated (or clamped boundary) volatility
    /// * `Err(SurfaceError::Interpolation)` - Degenerate grid data at the
    ///   evaluated interval
    fn volatility(&self, delta: f64, expiry: f64) -> Result<f64, SurfaceError> {
        // Tensor layout: xs = expiries (rows), ys = deltas (columns).
        let interp = TensorSplineInterpolator::new(&self.expiries, &self.deltas, &self.vols)?;
        let vol = interp.interpolate(expiry, delta)?;
        Ok(vol)
    }

    /// Return the measured delta span.
    #[inline]
    fn delta_domain(&self) -> (f64, f64) {
        (self.deltas[0], self.deltas[self.deltas.len() - 1])
    }

    /// Return the measured expiry span.
    #[inline]
    fn expiry_domain(&self) -> (f64, f64) {
        (self.expiries[0], self.expiries[self.expiries.len() - 1])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn quote_columns() -> (Vec<Option<f64>>, Vec<Option<f64>>, Vec<f64>) {
        (
            vec![Some(1.0), Some(2.0), Some(1.0), Some(2.0)],
            vec![Some(0.05), Some(0.05), Some(0.1), Some(0.1)],
            vec![0.3, 0.5, 0.6, 0.1],
        )
    }

    // ========================================
    // Construction Tests
    // ========================================

    #[test]
    fn test_new_valid() {
        let surface = DeltaVolSurface::new(
            &[0.05, 0.1],
            &[1.0, 2.0],
            vec![vec![0.3, 0.6], vec![0.5, 0.1]],
        )
        .unwrap();
        assert_eq!(surface.delta_domain(), (0.05, 0.1));
        assert_eq!(surface.expiry_domain(), (1.0, 2.0));
    }

    #[test]
    fn test_new_insufficient_deltas() {
        let result = DeltaVolSurface::new(&[0.05], &[1.0, 2.0], vec![vec![0.3], vec![0.5]]);
        match result.unwrap_err() {
            SurfaceError::InsufficientData { got, need } => {
                assert_eq!(got, 1);
                assert_eq!(need, 2);
            }
            _ => panic!("Expected InsufficientData error"),
        }
    }

    #[test]
    fn test_new_insufficient_expiries() {
        let result = DeltaVolSurface::new(&[0.05, 0.1], &[1.0], vec![vec![0.3, 0.6]]);
        assert!(result.is_err());
    }

    #[test]
    fn test_new_grid_dimension_mismatch() {
        let result =
            DeltaVolSurface::new(&[0.05, 0.1], &[1.0, 2.0], vec![vec![0.3, 0.6]]);
        assert!(result.is_err());

        let result = DeltaVolSurface::new(
            &[0.05, 0.1],
            &[1.0, 2.0],
            vec![vec![0.3], vec![0.5, 0.1]],
        );
        assert!(result.is_err());
    }

    // ========================================
    // Quote Ingestion Tests
    // ========================================

    #[test]
    fn test_from_quotes_axes_in_first_appearance_order() {
        let expiries = [Some(2.0), Some(1.0), Some(2.0), Some(1.0)];
        let deltas = [Some(0.1), Some(0.1), Some(0.05), Some(0.05)];
        let vols = [0.1, 0.6, 0.5, 0.3];
        let surface = DeltaVolSurface::from_quotes(&expiries, &deltas, &vols).unwrap();
        assert_eq!(surface.expiries(), &[2.0, 1.0]);
        assert_eq!(surface.deltas(), &[0.1, 0.05]);
    }

    #[test]
    fn test_from_quotes_duplicate_cells_sum() {
        let expiries = [Some(1.0), Some(1.0), Some(2.0), Some(1.0), Some(2.0)];
        let deltas = [Some(0.05), Some(0.05), Some(0.05), Some(0.1), Some(0.1)];
        let vols = [0.2, 0.1, 0.5, 0.6, 0.1];
        let surface = DeltaVolSurface::from_quotes(&expiries, &deltas, &vols).unwrap();
        // Cell (1.0, 0.05) holds 0.2 + 0.1.
        assert_relative_eq!(surface.vols()[0][0], 0.3, epsilon = 1e-15);
    }

    #[test]
    fn test_from_quotes_zero_fills_missing_cells() {
        // Only 3 of the 4 cells are quoted.
        let expiries = [Some(1.0), Some(2.0), Some(1.0)];
        let deltas = [Some(0.05), Some(0.05), Some(0.1)];
        let vols = [0.3, 0.5, 0.6];
        let surface = DeltaVolSurface::from_quotes(&expiries, &deltas, &vols).unwrap();
        assert_eq!(surface.vols()[1][1], 0.0);
    }

    #[test]
    fn test_from_quotes_blank_row_still_feeds_axis() {
        // The second quote has a blank delta: it is skipped by
        // aggregation, yet its expiry 3.0 still claims an axis slot and
        // its row is entirely zero-filled.
        let expiries = [Some(1.0), Some(3.0), Some(2.0), Some(1.0), Some(2.0)];
        let deltas = [Some(0.05), None, Some(0.05), Some(0.1), Some(0.1)];
        let vols = [0.3, 9.9, 0.5, 0.6, 0.1];
        let surface = DeltaVolSurface::from_quotes(&expiries, &deltas, &vols).unwrap();
        assert_eq!(surface.expiries(), &[1.0, 3.0, 2.0]);
        assert_eq!(surface.vols()[1], vec![0.0, 0.0]);
    }

    #[test]
    fn test_from_quotes_column_length_mismatch() {
        let result =
            DeltaVolSurface::from_quotes(&[Some(1.0)], &[Some(0.05), Some(0.1)], &[0.3]);
        assert!(matches!(
            result.unwrap_err(),
            SurfaceError::InvalidInput(_)
        ));
    }

    #[test]
    fn test_from_quotes_single_axis_point_rejected() {
        let expiries = [Some(1.0), Some(1.0)];
        let deltas = [Some(0.05), Some(0.1)];
        let vols = [0.3, 0.6];
        let result = DeltaVolSurface::from_quotes(&expiries, &deltas, &vols);
        assert!(matches!(
            result.unwrap_err(),
            SurfaceError::InsufficientData { got: 1, need: 2 }
        ));
    }

    // ========================================
    // Lookup Tests
    // ========================================

    #[test]
    fn test_volatility_at_grid_points() {
        let (expiries, deltas, vols) = quote_columns();
        let surface = DeltaVolSurface::from_quotes(&expiries, &deltas, &vols).unwrap();
        assert_relative_eq!(surface.volatility(0.05, 1.0).unwrap(), 0.3, epsilon = 1e-14);
        assert_relative_eq!(surface.volatility(0.05, 2.0).unwrap(), 0.5, epsilon = 1e-14);
        assert_relative_eq!(surface.volatility(0.1, 1.0).unwrap(), 0.6, epsilon = 1e-14);
        assert_relative_eq!(surface.volatility(0.1, 2.0).unwrap(), 0.1, epsilon = 1e-14);
    }

    #[test]
    fn test_volatility_interpolated_center() {
        let (expiries, deltas, vols) = quote_columns();
        let surface = DeltaVolSurface::from_quotes(&expiries, &deltas, &vols).unwrap();
        let vol = surface.volatility(0.075, 1.5).unwrap();
        assert_relative_eq!(vol, 0.375, epsilon = 1e-12);
    }

    #[test]
    fn test_volatility_clamps_beyond_measured_span() {
        let (expiries, deltas, vols) = quote_columns();
        let surface = DeltaVolSurface::from_quotes(&expiries, &deltas, &vols).unwrap();
        // Beyond the last expiry: the 2Y slice, interpolated in delta.
        let vol = surface.volatility(0.075, 2.5).unwrap();
        assert_relative_eq!(vol, 0.3, epsilon = 1e-12);
        // Below the first delta and expiry: the (1Y, 0.05) corner.
        let vol = surface.volatility(0.01, 0.5).unwrap();
        assert_relative_eq!(vol, 0.3, epsilon = 1e-12);
    }

    #[test]
    fn test_volatility_degenerate_axis_surfaces_error() {
        // Duplicate expiry knots make the expiry pass non-monotonic for a
        // 3-row grid.
        let surface = DeltaVolSurface::new(
            &[0.05, 0.1],
            &[1.0, 1.0, 2.0],
            vec![vec![0.3, 0.6], vec![0.4, 0.2], vec![0.5, 0.1]],
        )
        .unwrap();
        let result = surface.volatility(0.075, 1.5);
        assert!(matches!(
            result.unwrap_err(),
            SurfaceError::Interpolation(_)
        ));
    }
}
