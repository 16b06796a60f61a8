//! Volatility surface construction and query evaluation.
//!
//! This module provides:
//! - [`VolatilitySurface`]: Generic trait for implied volatility lookup
//! - [`DeltaVolSurface`]: Delta × expiry grid surface built from raw quotes
//! - [`VolQuote`]: Raw surface observation with blank-able coordinates
//! - [`evaluate_query_grid`]: Batch evaluation over a query grid with
//!   formatted result keys
//! - [`SurfaceError`]: Surface construction and lookup errors
//!
//! # Data Flow
//!
//! Raw quotes flow strictly upward: observations are aggregated by
//! `(expiry, delta)` coordinate (duplicates are summed), both axes are
//! derived in first-appearance order over the raw coordinate arrays, the
//! grid is materialized with explicit zero-fill for missing cells, and
//! each query point is answered by the tensor-product spline with
//! boundary clamping.

mod delta_surface;
mod error;
mod observations;
mod query;
mod traits;

pub use delta_surface::DeltaVolSurface;
pub use error::SurfaceError;
pub use observations::{first_appearance_axis, VolQuote};
pub use query::{evaluate_query_grid, format_query_key, QueryResult};
pub use traits::VolatilitySurface;
