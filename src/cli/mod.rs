//! Command-line parsing for the biofuel design sweep.
//!
//! The goal of this module is to keep **argument parsing** and **command
//! dispatch** separate from the simulation/selection code.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::domain::Dataset;

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "bsweep", version, about = "Biofuel pathway design sweep")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run the full sweep, print the selected designs, and optionally export
    /// the grid (CSV) or the full results file (JSON).
    Sweep(SweepArgs),
    /// Re-run design selection on a previously exported results JSON,
    /// possibly with different thresholds, without repeating simulations.
    Select(SelectArgs),
}

/// Options for running a sweep.
#[derive(Debug, Parser, Clone)]
pub struct SweepArgs {
    /// Which simulator constant set to use.
    #[arg(short = 'd', long, value_enum, default_value_t = Dataset::One)]
    pub dataset: Dataset,

    /// End of the simulated time window.
    #[arg(long, default_value_t = 60.0)]
    pub t_end: f64,

    /// Integration step between time instants.
    #[arg(long, default_value_t = 0.05)]
    pub dt: f64,

    /// Initial amount of bacteria.
    #[arg(long, default_value_t = 0.5)]
    pub initial_bacteria: f64,

    /// Candidate biofuel production rates (comma-separated, ascending).
    #[arg(long, value_delimiter = ',', default_values_t = vec![2.0, 4.0, 6.0, 8.0, 10.0])]
    pub alpha_b: Vec<f64>,

    /// First element of the pump production rate axis.
    #[arg(long, default_value_t = 0.0)]
    pub alpha_p_lower: f64,

    /// Last element of the pump production rate axis (inclusive).
    #[arg(long, default_value_t = 4.0)]
    pub alpha_p_upper: f64,

    /// Step of the pump production rate axis.
    #[arg(long, default_value_t = 0.5)]
    pub alpha_p_step: f64,

    /// Threshold on the maximum internal biofuel level (inclusive).
    #[arg(long, default_value_t = 6.0)]
    pub max_internal: f64,

    /// Threshold on the internal biofuel oscillation amplitude (inclusive).
    #[arg(long, default_value_t = 1.5)]
    pub max_oscillation: f64,

    /// Export the grid to CSV (one row per cell).
    #[arg(long)]
    pub export: Option<PathBuf>,

    /// Export the full results file (axes + matrices) to JSON.
    #[arg(long = "export-grid")]
    pub export_grid: Option<PathBuf>,
}

/// Options for re-selecting from a saved results file.
#[derive(Debug, Parser)]
pub struct SelectArgs {
    /// Results JSON produced by `bsweep sweep --export-grid`.
    #[arg(long, value_name = "JSON")]
    pub grid: PathBuf,

    /// Threshold on the maximum internal biofuel level (inclusive).
    #[arg(long, default_value_t = 6.0)]
    pub max_internal: f64,

    /// Threshold on the internal biofuel oscillation amplitude (inclusive).
    #[arg(long, default_value_t = 1.5)]
    pub max_oscillation: f64,
}
