//! Volgrid CLI - Command Line Operations for Surface Interpolation
//!
//! This is the operational entry point for the volgrid surface
//! interpolation library.
//!
//! # Commands
//!
//! - `volgrid interpolate --observations <file> --query-deltas ... --query-times ...` -
//!   Build one surface per observation group and evaluate the query grid
//! - `volgrid check` - Check system configuration and run a self-test
//!
//! # Architecture
//!
//! As the service layer of the workspace, this crate wraps the pure
//! surface_core kernel with batch orchestration: grouped CSV ingestion,
//! per-group failure isolation, and csv/json result emission.

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod error;

pub use error::{CliError, Result};

/// Volgrid Surface Interpolation CLI
#[derive(Parser)]
#[command(name = "volgrid")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Interpolate volatility surfaces from grouped observations
    Interpolate {
        /// Path to observations file (CSV: asset,value_date,expiry,delta,vol)
        #[arg(short, long)]
        observations: String,

        /// Query deltas, comma separated (e.g. 0.075,0.085)
        #[arg(long, value_delimiter = ',', required = true)]
        query_deltas: Vec<f64>,

        /// Query times to expiry, comma separated (e.g. 1.5,2.5)
        #[arg(long, value_delimiter = ',', required = true)]
        query_times: Vec<f64>,

        /// Output format (csv, json)
        #[arg(short, long, default_value = "csv")]
        format: String,

        /// Output file path (stdout when omitted)
        #[arg(long)]
        output: Option<String>,
    },

    /// Check system configuration and dependencies
    Check,
}

fn main() -> Result<()> {
    // Initialise tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    match cli.command {
        Commands::Interpolate {
            observations,
            query_deltas,
            query_times,
            format,
            output,
        } => commands::interpolate::run(
            &observations,
            &query_deltas,
            &query_times,
            &format,
            output.as_deref(),
        ),
        Commands::Check => commands::check::run(),
    }
}
