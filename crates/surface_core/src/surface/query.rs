//! Batch query evaluation over a volatility surface.

use super::VolatilitySurface;
use crate::surface::error::SurfaceError;
use serde::{Deserialize, Serialize};

/// One interpolated query result.
///
/// The key identifies the query point in the fixed
/// `"<delta3>_<expiry5>"` format produced by [`format_query_key`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryResult {
    /// Formatted query key, e.g. `"075_00002"`
    pub key: String,
    /// Interpolated volatility level
    pub vol: f64,
}

/// Format the fixed-width key for one query point.
///
/// The delta component is `round(query_delta * 1000)` zero-padded to 3
/// digits; the expiry component is `round(query_time)` as an integer
/// zero-padded to 5 digits; the two are joined with an underscore.
///
/// # Arguments
///
/// * `query_delta` - Query delta coordinate
/// * `query_time` - Query time-to-expiry coordinate
///
/// # Example
///
/// ```
/// use surface_core::surface::format_query_key;
///
/// assert_eq!(format_query_key(0.075, 2.5), "075_00003");
/// ```
pub fn format_query_key(query_delta: f64, query_time: f64) -> String {
    format!(
        "{:03}_{:05}",
        (query_delta * 1000.0).round() as i64,
        query_time.round() as i64
    )
}

/// Evaluate a surface over the Cartesian product of query coordinates.
///
/// Iteration is expiry in the outer loop and delta in the inner loop, and
/// no sorting is applied to either sequence: the output order mirrors the
/// input iteration order exactly, which makes the batch deterministic and
/// keyed records stable across runs. Out-of-range query points clamp to
/// the surface boundary rather than failing; a degenerate surface fails
/// the whole batch, and the caller is responsible for isolating that
/// failure from sibling batches.
///
/// # Arguments
///
/// * `surface` - The surface to query
/// * `query_deltas` - Query delta coordinates (inner loop)
/// * `query_times` - Query expiry coordinates (outer loop)
///
/// # Returns
///
/// * `Ok(results)` - One [`QueryResult`] per product pair,
///   `query_times.len() * query_deltas.len()` in total
/// * `Err(SurfaceError)` - The first interpolation failure
///
/// # Example
///
/// ```
/// use surface_core::surface::{evaluate_query_grid, DeltaVolSurface};
///
/// let expiries = [Some(1.0), Some(2.0), Some(1.0), Some(2.0)];
/// let deltas = [Some(0.05), Some(0.05), Some(0.1), Some(0.1)];
/// let vols = [0.3, 0.5, 0.6, 0.1];
/// let surface = DeltaVolSurface::from_quotes(&expiries, &deltas, &vols).unwrap();
///
/// let results = evaluate_query_grid(&surface, &[0.075, 0.085], &[1.5, 2.5]).unwrap();
/// assert_eq!(results.len(), 4);
/// assert_eq!(results[0].key, "075_00002");
/// ```
pub fn evaluate_query_grid<S: VolatilitySurface<f64>>(
    surface: &S,
    query_deltas: &[f64],
    query_times: &[f64],
) -> Result<Vec<QueryResult>, SurfaceError> {
    let mut results = Vec::with_capacity(query_times.len() * query_deltas.len());
    for &t in query_times {
        for &d in query_deltas {
            let vol = surface.volatility(d, t)?;
            results.push(QueryResult {
                key: format_query_key(d, t),
                vol,
            });
        }
    }
    Ok(results)
}
