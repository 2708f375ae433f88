//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - builds the sweep specification and thresholds
//! - runs the sweep + selection pipeline
//! - prints reports
//! - writes optional exports

use clap::Parser;

use crate::cli::{Command, SelectArgs, SweepArgs};
use crate::domain::{SweepSpec, Thresholds};
use crate::error::AppError;
use crate::sweep::inclusive_range;

pub mod pipeline;

/// Entry point for the `bsweep` binary.
pub fn run() -> Result<(), AppError> {
    let cli = crate::cli::Cli::parse();

    match cli.command {
        Command::Sweep(args) => handle_sweep(args),
        Command::Select(args) => handle_select(args),
    }
}

fn handle_sweep(args: SweepArgs) -> Result<(), AppError> {
    let spec = sweep_spec_from_args(&args)?;
    let thresholds = Thresholds {
        max_internal: args.max_internal,
        oscillation: args.max_oscillation,
    };

    let run = pipeline::run_sweep(&spec, &thresholds)?;

    println!("{}", crate::report::format_run_summary(&spec, &run.grid));
    println!("{}", crate::report::format_selection(&run.selection, &thresholds));

    if let Some(path) = &args.export {
        crate::io::export::write_grid_csv(path, &run.grid)?;
    }
    if let Some(path) = &args.export_grid {
        crate::io::results::write_grid_json(path, &run.grid)?;
    }

    Ok(())
}

fn handle_select(args: SelectArgs) -> Result<(), AppError> {
    let grid = crate::io::results::read_grid_json(&args.grid)?.into_grid()?;
    let thresholds = Thresholds {
        max_internal: args.max_internal,
        oscillation: args.max_oscillation,
    };

    let selection = crate::sweep::select(&grid, &thresholds)?;
    println!("{}", crate::report::format_selection(&selection, &thresholds));

    Ok(())
}

/// Build a `SweepSpec` from CLI arguments.
///
/// The time axis is generated here (uniform, `0..=t_end` in steps of `dt`) so
/// the pipeline itself only ever sees explicit time instants.
pub fn sweep_spec_from_args(args: &SweepArgs) -> Result<SweepSpec, AppError> {
    if !(args.t_end.is_finite() && args.t_end > 0.0) {
        return Err(AppError::new(2, format!("Invalid --t-end: {}.", args.t_end)));
    }
    let times = inclusive_range(0.0, args.t_end, args.dt)?;

    Ok(SweepSpec {
        dataset: args.dataset,
        times,
        initial_bacteria: args.initial_bacteria,
        alpha_b: args.alpha_b.clone(),
        alpha_p_lower: args.alpha_p_lower,
        alpha_p_upper: args.alpha_p_upper,
        alpha_p_step: args.alpha_p_step,
    })
}
