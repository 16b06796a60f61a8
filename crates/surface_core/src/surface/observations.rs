//! Raw surface observations and axis construction.

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// One raw surface observation.
///
/// A quote carries a time-to-expiry, an option delta, and a volatility
/// level. Either coordinate may be blank (`None`), which excludes the
/// quote from aggregation while its present coordinate still participates
/// in axis construction (axes scan the raw arrays). Multiple quotes
/// sharing the same `(expiry, delta)` pair are *summed* during grid
/// construction; this is the aggregation policy for duplicated feeds,
/// not an error.
///
/// # Example
///
/// ```
/// use surface_core::surface::VolQuote;
///
/// let quote = VolQuote { expiry: Some(1.0), delta: Some(0.25), vol: 0.18 };
/// assert_eq!(quote.delta, Some(0.25));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VolQuote {
    /// Time to expiry in years, `None` when the source field was blank
    pub expiry: Option<f64>,
    /// Option delta, `None` when the source field was blank
    pub delta: Option<f64>,
    /// Volatility level
    pub vol: f64,
}

/// Derive an axis from raw coordinate values in first-appearance order.
///
/// Scans the raw, unfiltered values and keeps the first occurrence of
/// each distinct value in original order; later duplicates are dropped
/// and blanks contribute nothing. No sorting is applied: the grid and the
/// spline both rely on the order the caller supplied.
///
/// Distinctness is exact bit equality, which is correct here because axis
/// values are never recomputed from arithmetic.
///
/// # Arguments
///
/// * `values` - Raw coordinate array, blanks as `None`
///
/// # Returns
///
/// The distinct values in order of first appearance.
///
/// # Example
///
/// ```
/// use surface_core::surface::first_appearance_axis;
///
/// let axis = first_appearance_axis(&[Some(2.0), Some(1.0), Some(2.0), None]);
/// assert_eq!(axis, vec![2.0, 1.0]);
/// ```
pub fn first_appearance_axis(values: &[Option<f64>]) -> Vec<f64> {
    let mut seen: HashSet<u64> = HashSet::with_capacity(values.len());
    let mut axis = Vec::new();
    for value in values.iter().flatten() {
        if seen.insert(value.to_bits()) {
            axis.push(*value);
        }
    }
    axis
}

/// Aggregate raw levels into a map keyed by `(expiry, delta)` bit patterns.
///
/// Quotes with a blank coordinate are skipped; duplicate coordinates sum.
pub(crate) fn aggregate_levels(
    expiries: &[Option<f64>],
    deltas: &[Option<f64>],
    vols: &[f64],
) -> HashMap<(u64, u64), f64> {
    let mut levels: HashMap<(u64, u64), f64> = HashMap::with_capacity(vols.len());
    for ((expiry, delta), vol) in expiries.iter().zip(deltas.iter()).zip(vols.iter()) {
        if let (Some(t), Some(d)) = (expiry, delta) {
            *levels.entry((t.to_bits(), d.to_bits())).or_insert(0.0) += *vol;
        }
    }
    levels
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_preserves_first_appearance_order() {
        let axis = first_appearance_axis(&[Some(2.0), Some(1.0), Some(2.0)]);
        assert_eq!(axis, vec![2.0, 1.0]);
    }

    #[test]
    fn test_axis_skips_blanks_but_keeps_order() {
        let axis = first_appearance_axis(&[None, Some(3.0), None, Some(1.0), Some(3.0)]);
        assert_eq!(axis, vec![3.0, 1.0]);
    }

    #[test]
    fn test_axis_empty_input() {
        let axis = first_appearance_axis(&[]);
        assert!(axis.is_empty());
    }

    #[test]
    fn test_aggregate_sums_duplicates() {
        let expiries = [Some(1.0), Some(1.0), Some(2.0)];
        let deltas = [Some(0.25), Some(0.25), Some(0.25)];
        let vols = [0.10, 0.05, 0.20];
        let levels = aggregate_levels(&expiries, &deltas, &vols);
        assert_eq!(levels.len(), 2);
        let cell = levels[&(1.0f64.to_bits(), 0.25f64.to_bits())];
        assert!((cell - 0.15).abs() < 1e-15);
    }

    #[test]
    fn test_aggregate_skips_blank_coordinates() {
        let expiries = [Some(1.0), None, Some(2.0)];
        let deltas = [None, Some(0.25), Some(0.25)];
        let vols = [0.10, 0.05, 0.20];
        let levels = aggregate_levels(&expiries, &deltas, &vols);
        assert_eq!(levels.len(), 1);
        assert!(levels.contains_key(&(2.0f64.to_bits(), 0.25f64.to_bits())));
    }

    #[test]
    fn test_quote_serde_roundtrip() {
        let quote = VolQuote {
            expiry: Some(1.0),
            delta: None,
            vol: 0.3,
        };
        let json = serde_json::to_string(&quote).unwrap();
        let back: VolQuote = serde_json::from_str(&json).unwrap();
        assert_eq!(quote, back);
    }
}
