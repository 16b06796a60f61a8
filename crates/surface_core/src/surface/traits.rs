//! Volatility surface trait definition.

use crate::surface::error::SurfaceError;
use num_traits::Float;

/// Generic volatility surface trait for implied volatility lookup.
///
/// Implementations answer σ(delta, expiry) queries. Out-of-range query
/// coordinates are not an error for implementations in this crate: the
/// level clamps to the nearest boundary profile by design, so the domain
/// accessors describe where the surface is *measured*, not where it may
/// be queried.
///
/// # Contract
///
/// - `volatility(delta, expiry)` returns the implied volatility σ(Δ, T)
/// - `delta_domain()` returns the measured delta span
/// - `expiry_domain()` returns the measured expiry span
pub trait VolatilitySurface<T: Float> {
    /// Return the implied volatility for the given delta and expiry.
    ///
    /// # Arguments
    ///
    /// * `delta` - Option delta coordinate
    /// * `expiry` - Time to expiry in years
    ///
    /// # Returns
    ///
    /// * `Ok(sigma)` - Interpolated (or clamped boundary) volatility
    /// * `Err(SurfaceError)` - If the measured data is degenerate at the
    ///   evaluated interval
    fn volatility(&self, delta: T, expiry: T) -> Result<T, SurfaceError>;

    /// Return the measured delta span as `(first, last)` axis values.
    fn delta_domain(&self) -> (T, T);

    /// Return the measured expiry span as `(first, last)` axis values.
    fn expiry_domain(&self) -> (T, T);
}

#[cfg(test)]
mod tests {
    use super::*;

    // Mock implementation for testing
    struct MockVolSurface {
        sigma: f64,
    }

    impl VolatilitySurface<f64> for MockVolSurface {
        fn volatility(&self, _delta: f64, _expiry: f64) -> Result<f64, SurfaceError> {
            Ok(self.sigma)
        }

        fn delta_domain(&self) -> (f64, f64) {
            (0.0, 1.0)
        }

        fn expiry_domain(&self) -> (f64, f64) {
            (0.0, f64::INFINITY)
        }
    }

    #[test]
    fn test_mock_volatility() {
        let surface = MockVolSurface { sigma: 0.25 };
        let vol = surface.volatility(0.5, 1.0).unwrap();
        assert_eq!(vol, 0.25);
    }

    #[test]
    fn test_mock_domains() {
        let surface = MockVolSurface { sigma: 0.25 };
        assert_eq!(surface.delta_domain(), (0.0, 1.0));
        let (t_min, _t_max) = surface.expiry_domain();
        assert_eq!(t_min, 0.0);
    }
}
