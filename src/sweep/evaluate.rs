//! Grid evaluation.
//!
//! For every (alpha_b, alpha_p) pair we run one simulation and keep three
//! numbers: the internal-fuel peak, its post-peak oscillation, and the final
//! external-fuel level. Cells are mutually independent, so they are sharded
//! across rayon workers; each worker produces its own cell record and the
//! matrices are filled from the collected records afterwards (no shared
//! mutable state during the parallel stage).
//!
//! Fault policy: the first failing cell aborts the whole sweep.

use nalgebra::DMatrix;
use rayon::prelude::*;

use crate::domain::{SweepGrid, SweepSpec};
use crate::error::AppError;
use crate::sim::{SimRequest, Simulate};
use crate::sweep::axis::{inclusive_range, validate_axis, validate_time_axis};
use crate::sweep::trajectory::summarize;

#[derive(Debug, Clone, Copy)]
struct CellOutcome {
    row: usize,
    col: usize,
    max_internal: f64,
    oscillation: f64,
    final_external: f64,
}

/// Evaluate the full parameter grid.
///
/// Returns the three result matrices plus both axes; row `i` corresponds to
/// `spec.alpha_b[i]`, column `j` to the generated alpha_p axis at `j`.
pub fn evaluate_grid<S: Simulate + Sync>(sim: &S, spec: &SweepSpec) -> Result<SweepGrid, AppError> {
    validate_time_axis(&spec.times)?;
    validate_axis("alpha_b", &spec.alpha_b)?;
    if !(spec.initial_bacteria.is_finite() && spec.initial_bacteria >= 0.0) {
        return Err(AppError::new(
            2,
            format!("Invalid initial bacteria amount: {}.", spec.initial_bacteria),
        ));
    }

    let alpha_p = inclusive_range(spec.alpha_p_lower, spec.alpha_p_upper, spec.alpha_p_step)?;

    let rows = spec.alpha_b.len();
    let cols = alpha_p.len();
    let n_times = spec.times.len();

    // Row-major cell indices; each worker touches only its own record.
    let cells: Vec<CellOutcome> = (0..rows * cols)
        .into_par_iter()
        .map(|idx| {
            let row = idx / cols;
            let col = idx % cols;

            let req = SimRequest {
                dataset: spec.dataset,
                times: &spec.times,
                initial_bacteria: spec.initial_bacteria,
                alpha_b: spec.alpha_b[row],
                alpha_p: alpha_p[col],
            };
            let out = sim.simulate(&req)?;

            if out.internal_fuel.len() != n_times || out.external_fuel.len() != n_times {
                return Err(AppError::new(
                    4,
                    format!(
                        "Simulator returned {} internal / {} external samples for cell ({row}, {col}), expected {n_times}.",
                        out.internal_fuel.len(),
                        out.external_fuel.len()
                    ),
                ));
            }

            let summary = summarize(&out.internal_fuel)?;
            let final_external = out.external_fuel[n_times - 1];
            if !final_external.is_finite() {
                return Err(AppError::new(
                    4,
                    format!("Non-finite final external biofuel at cell ({row}, {col})."),
                ));
            }

            Ok(CellOutcome {
                row,
                col,
                max_internal: summary.peak,
                oscillation: summary.oscillation,
                final_external,
            })
        })
        .collect::<Result<Vec<_>, AppError>>()?;

    let mut max_internal = DMatrix::<f64>::zeros(rows, cols);
    let mut oscillation = DMatrix::<f64>::zeros(rows, cols);
    let mut final_external = DMatrix::<f64>::zeros(rows, cols);
    for cell in cells {
        max_internal[(cell.row, cell.col)] = cell.max_internal;
        oscillation[(cell.row, cell.col)] = cell.oscillation;
        final_external[(cell.row, cell.col)] = cell.final_external;
    }

    Ok(SweepGrid {
        dataset: spec.dataset,
        alpha_b: spec.alpha_b.clone(),
        alpha_p,
        max_internal,
        oscillation,
        final_external,
    })
}
