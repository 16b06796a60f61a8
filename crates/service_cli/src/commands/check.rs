//! Check command implementation
//!
//! Verifies that the interpolation kernel is operational by running a
//! small reference surface through the full query path.

use tracing::info;

use surface_core::surface::{evaluate_query_grid, DeltaVolSurface};

use crate::{CliError, Result};

/// Run the check command
pub fn run() -> Result<()> {
    info!("Checking volgrid configuration...");
    info!("  Version: {}", env!("CARGO_PKG_VERSION"));

    // Reference 2x2 surface queried at its center.
    let expiries = [Some(1.0), Some(2.0), Some(1.0), Some(2.0)];
    let deltas = [Some(0.05), Some(0.05), Some(0.1), Some(0.1)];
    let vols = [0.3, 0.5, 0.6, 0.1];

    let surface = DeltaVolSurface::from_quotes(&expiries, &deltas, &vols)
        .map_err(|err| CliError::InvalidArgument(err.to_string()))?;
    let results = evaluate_query_grid(&surface, &[0.075], &[1.5])
        .map_err(|err| CliError::InvalidArgument(err.to_string()))?;

    if results.len() != 1 || !results[0].vol.is_finite() {
        return Err(CliError::InvalidArgument(
            "self-test interpolation produced unexpected output".to_string(),
        ));
    }

    info!("  Kernel self-test: OK ({} = {:.6})", results[0].key, results[0].vol);
    println!("volgrid check: OK");
    Ok(())
}
