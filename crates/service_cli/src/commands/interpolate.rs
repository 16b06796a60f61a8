//! Interpolate command implementation
//!
//! Builds one volatility surface per observation group and evaluates the
//! query grid against each. A group that fails to interpolate (degenerate
//! axis, too few distinct points) is logged and skipped so the remaining
//! groups still produce results.

use std::collections::HashMap;
use std::io::Write;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{error, info};

use surface_core::surface::{evaluate_query_grid, DeltaVolSurface};

use crate::{CliError, Result};

/// One observation row of the input file.
///
/// `expiry` and `delta` may be blank in the source; blank coordinates
/// exclude the row from aggregation while still feeding axis order.
#[derive(Debug, Clone, Deserialize)]
struct ObservationRecord {
    asset: String,
    value_date: NaiveDate,
    expiry: Option<f64>,
    delta: Option<f64>,
    vol: f64,
}

/// One interpolated output row.
#[derive(Debug, Clone, Serialize)]
struct ResultRecord {
    asset: String,
    value_date: NaiveDate,
    key: String,
    vol: f64,
}

/// Observation columns of one `(asset, value_date)` group.
#[derive(Debug, Default)]
struct ObservationGroup {
    expiries: Vec<Option<f64>>,
    deltas: Vec<Option<f64>>,
    vols: Vec<f64>,
}

/// Run the interpolate command
pub fn run(
    observations: &str,
    query_deltas: &[f64],
    query_times: &[f64],
    format: &str,
    output: Option<&str>,
) -> Result<()> {
    info!("Starting surface interpolation...");
    info!("  Observations: {}", observations);
    info!("  Query deltas: {:?}", query_deltas);
    info!("  Query times: {:?}", query_times);
    info!("  Output format: {}", format);

    if !std::path::Path::new(observations).exists() {
        return Err(CliError::FileNotFound(observations.to_string()));
    }
    if !matches!(format, "csv" | "json") {
        return Err(CliError::InvalidArgument(format!(
            "Unknown format: {}. Supported: csv, json",
            format
        )));
    }

    let mut reader = csv::Reader::from_path(observations)?;
    let mut records = Vec::new();
    for record in reader.deserialize() {
        let record: ObservationRecord = record?;
        records.push(record);
    }
    info!("Read {} observation rows", records.len());

    let results = interpolate_groups(&records, query_deltas, query_times);
    info!("Produced {} result rows", results.len());

    let rendered = match format {
        "json" => render_json(&results)?,
        _ => render_csv(&results)?,
    };

    match output {
        Some(path) => {
            std::fs::write(path, rendered)?;
            info!("Results written to {}", path);
        }
        None => {
            std::io::stdout().write_all(rendered.as_bytes())?;
        }
    }

    info!("Interpolation complete");
    Ok(())
}

/// Evaluate the query grid for every observation group.
///
/// Groups are keyed by `(asset, value_date)` and processed in order of
/// first appearance, matching the axis-ordering convention of the kernel.
/// A failing group is logged and skipped; it never aborts its siblings.
fn interpolate_groups(
    records: &[ObservationRecord],
    query_deltas: &[f64],
    query_times: &[f64],
) -> Vec<ResultRecord> {
    let mut order: Vec<(String, NaiveDate)> = Vec::new();
    let mut groups: HashMap<(String, NaiveDate), ObservationGroup> = HashMap::new();

    for record in records {
        let key = (record.asset.clone(), record.value_date);
        let group = groups.entry(key.clone()).or_insert_with(|| {
            order.push(key);
            ObservationGroup::default()
        });
        group.expiries.push(record.expiry);
        group.deltas.push(record.delta);
        group.vols.push(record.vol);
    }

    let mut results = Vec::new();
    let mut failed = 0usize;
    for key in &order {
        let group = &groups[key];
        let surface =
            DeltaVolSurface::from_quotes(&group.expiries, &group.deltas, &group.vols);
        let evaluated = surface
            .and_then(|surface| evaluate_query_grid(&surface, query_deltas, query_times));
        match evaluated {
            Ok(points) => {
                for point in points {
                    results.push(ResultRecord {
                        asset: key.0.clone(),
                        value_date: key.1,
                        key: point.key,
                        vol: point.vol,
                    });
                }
            }
            Err(err) => {
                failed += 1;
                error!(
                    "Skipping group ({}, {}): {}",
                    key.0, key.1, err
                );
            }
        }
    }

    if failed > 0 {
        info!(
            "{} of {} groups failed and were skipped",
            failed,
            order.len()
        );
    }

    results
}

/// Serialise result rows as CSV with a header line.
fn render_csv(results: &[ResultRecord]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for record in results {
        writer.serialize(record)?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|err| CliError::InvalidArgument(err.to_string()))?;
    String::from_utf8(bytes)
        .map_err(|err| CliError::InvalidArgument(err.to_string()))
}

/// Serialise result rows as a JSON array.
fn render_json(results: &[ResultRecord]) -> Result<String> {
    Ok(serde_json::to_string_pretty(results)?)
}
