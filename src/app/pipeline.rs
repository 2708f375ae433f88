//! Shared "sweep pipeline" logic used by the CLI front-end.
//!
//! Keeping this in one place avoids duplicating the core workflow:
//! axis generation -> grid evaluation -> design selection
//!
//! The CLI can then focus on presentation (printing and exports).

use crate::domain::{SelectionResult, SweepGrid, SweepSpec, Thresholds};
use crate::error::AppError;
use crate::sim::{BiofuelModel, Simulate};
use crate::sweep::{evaluate_grid, select};

/// All computed outputs of a single `bsweep sweep` run.
#[derive(Debug, Clone)]
pub struct RunOutput {
    pub grid: SweepGrid,
    pub selection: SelectionResult,
}

/// Execute the full sweep pipeline with the built-in simulator.
pub fn run_sweep(spec: &SweepSpec, thresholds: &Thresholds) -> Result<RunOutput, AppError> {
    run_sweep_with(&BiofuelModel, spec, thresholds)
}

/// Execute the sweep pipeline against an arbitrary simulator.
///
/// This is the seam tests and alternative model backends plug into.
pub fn run_sweep_with<S: Simulate + Sync>(
    sim: &S,
    spec: &SweepSpec,
    thresholds: &Thresholds,
) -> Result<RunOutput, AppError> {
    let grid = evaluate_grid(sim, spec)?;
    let selection = select(&grid, thresholds)?;
    Ok(RunOutput { grid, selection })
}
