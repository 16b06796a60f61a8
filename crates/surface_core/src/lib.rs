//! # surface_core: Volatility Surface Interpolation Kernel
//!
//! ## Layer Role
//!
//! surface_core is the kernel layer of the volgrid workspace, providing:
//! - Constrained cubic spline interpolation with overshoot damping (`math::interpolators`)
//! - Tensor-product bivariate interpolation over rectangular grids (`math::interpolators`)
//! - Surface construction from raw, possibly duplicated market quotes (`surface`)
//! - Batch query evaluation with formatted result keys (`surface::query`)
//! - Error types: `InterpolationError`, `SurfaceError` (`types`, `surface`)
//!
//! ## Purity Principle
//!
//! The kernel performs no I/O, holds no shared mutable state, and is
//! synchronous throughout: every evaluation is a pure function of its
//! inputs and is safe to invoke concurrently from independent threads
//! without coordination. Batch orchestration (grouping observations,
//! isolating per-group failures) belongs to the service layer above.
//!
//! ## Usage Example
//!
//! ```rust
//! use surface_core::surface::{DeltaVolSurface, VolatilitySurface};
//!
//! let expiries = [Some(1.0), Some(2.0), Some(1.0), Some(2.0)];
//! let deltas = [Some(0.05), Some(0.05), Some(0.1), Some(0.1)];
//! let vols = [0.3, 0.5, 0.6, 0.1];
//!
//! let surface = DeltaVolSurface::from_quotes(&expiries, &deltas, &vols).unwrap();
//! let vol = surface.volatility(0.075, 1.5).unwrap();
//! assert!(vol.is_finite());
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod math;
pub mod surface;
pub mod types;
