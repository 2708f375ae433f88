//! Shared domain types.
//!
//! These types are intentionally kept lightweight and serializable so they can be:
//!
//! - used in-memory during the sweep
//! - exported to JSON/CSV
//! - reloaded later for re-selection under different thresholds

use clap::ValueEnum;
use nalgebra::DMatrix;
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Which physical constant set the simulator uses.
///
/// The dataset id is opaque to the sweep/selection core: it is passed through
/// to the simulator unchanged and only affects the model's rate constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Dataset {
    #[value(name = "1")]
    One,
    #[value(name = "2")]
    Two,
}

impl Dataset {
    /// Numeric id for terminal output and exports.
    pub fn id(self) -> u8 {
        match self {
            Dataset::One => 1,
            Dataset::Two => 2,
        }
    }
}

/// Upper bounds defining the feasible region for constrained selection.
///
/// Both bounds are **inclusive**: a cell sitting exactly on a threshold is
/// feasible.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Thresholds {
    /// Maximum tolerated internal biofuel level (toxicity bound).
    pub max_internal: f64,
    /// Maximum tolerated post-peak oscillation amplitude of internal biofuel.
    pub oscillation: f64,
}

/// Full description of one sweep: which simulator constants, which time axis,
/// and which two parameter ranges to cross.
///
/// The alpha_b axis is caller-supplied; the alpha_p axis is generated from
/// `(alpha_p_lower, alpha_p_upper, alpha_p_step)` inclusive of the upper bound.
#[derive(Debug, Clone)]
pub struct SweepSpec {
    pub dataset: Dataset,
    /// Strictly increasing time instants the simulator integrates over.
    pub times: Vec<f64>,
    pub initial_bacteria: f64,
    /// Candidate biofuel production rates (rows of the result grid).
    pub alpha_b: Vec<f64>,
    pub alpha_p_lower: f64,
    pub alpha_p_upper: f64,
    pub alpha_p_step: f64,
}

/// Peak and post-peak oscillation amplitude of one internal-biofuel trajectory.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrajectorySummary {
    /// Maximum value attained anywhere in the trajectory.
    pub peak: f64,
    /// `peak - min(values after the first peak index)`, or 0 when the
    /// trajectory ends at its peak.
    pub oscillation: f64,
}

/// The three result matrices of a sweep plus the two parameter axes.
///
/// Invariant: all three matrices share shape `(alpha_b.len(), alpha_p.len())`;
/// row `i` corresponds to `alpha_b[i]`, column `j` to `alpha_p[j]`.
/// Constructed once per sweep and treated as immutable afterwards.
#[derive(Debug, Clone)]
pub struct SweepGrid {
    pub dataset: Dataset,
    pub alpha_b: Vec<f64>,
    pub alpha_p: Vec<f64>,
    pub max_internal: DMatrix<f64>,
    pub oscillation: DMatrix<f64>,
    pub final_external: DMatrix<f64>,
}

/// One chosen design: axis values (not indices) plus the yield that won.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DesignPoint {
    pub alpha_b: f64,
    pub alpha_p: f64,
    /// The winning `final_external` value.
    pub external_yield: f64,
}

/// Output of design selection.
///
/// `constrained` is `None` when no grid cell satisfies both thresholds. This
/// is the explicit infeasibility signal; there is no sentinel value that can
/// collide with a genuine zero-yield cell.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectionResult {
    pub unconstrained: DesignPoint,
    pub constrained: Option<DesignPoint>,
}

/// A saved sweep results file (JSON).
///
/// Matrices are stored as row-major `Vec<Vec<f64>>` so the file stays easy to
/// consume from spreadsheets and downstream scripts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GridFile {
    pub tool: String,
    pub dataset: Dataset,
    pub alpha_b: Vec<f64>,
    pub alpha_p: Vec<f64>,
    pub max_internal: Vec<Vec<f64>>,
    pub oscillation: Vec<Vec<f64>>,
    pub final_external: Vec<Vec<f64>>,
}

impl GridFile {
    pub fn from_grid(grid: &SweepGrid) -> Self {
        Self {
            tool: "bsweep".to_string(),
            dataset: grid.dataset,
            alpha_b: grid.alpha_b.clone(),
            alpha_p: grid.alpha_p.clone(),
            max_internal: matrix_rows(&grid.max_internal),
            oscillation: matrix_rows(&grid.oscillation),
            final_external: matrix_rows(&grid.final_external),
        }
    }

    /// Rebuild an in-memory grid, validating shapes against the axes.
    pub fn into_grid(self) -> Result<SweepGrid, AppError> {
        let rows = self.alpha_b.len();
        let cols = self.alpha_p.len();

        let max_internal = rows_to_matrix("max_internal", &self.max_internal, rows, cols)?;
        let oscillation = rows_to_matrix("oscillation", &self.oscillation, rows, cols)?;
        let final_external = rows_to_matrix("final_external", &self.final_external, rows, cols)?;

        Ok(SweepGrid {
            dataset: self.dataset,
            alpha_b: self.alpha_b,
            alpha_p: self.alpha_p,
            max_internal,
            oscillation,
            final_external,
        })
    }
}

fn matrix_rows(m: &DMatrix<f64>) -> Vec<Vec<f64>> {
    (0..m.nrows())
        .map(|i| (0..m.ncols()).map(|j| m[(i, j)]).collect())
        .collect()
}

fn rows_to_matrix(
    name: &str,
    rows_data: &[Vec<f64>],
    rows: usize,
    cols: usize,
) -> Result<DMatrix<f64>, AppError> {
    if rows_data.len() != rows {
        return Err(AppError::new(
            4,
            format!(
                "Results file matrix '{name}' has {} rows, expected {rows} (alpha_b axis length).",
                rows_data.len()
            ),
        ));
    }
    for (i, row) in rows_data.iter().enumerate() {
        if row.len() != cols {
            return Err(AppError::new(
                4,
                format!(
                    "Results file matrix '{name}' row {i} has {} columns, expected {cols} (alpha_p axis length).",
                    row.len()
                ),
            ));
        }
    }
    Ok(DMatrix::from_fn(rows, cols, |i, j| rows_data[i][j]))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_grid() -> SweepGrid {
        SweepGrid {
            dataset: Dataset::One,
            alpha_b: vec![1.0, 2.0],
            alpha_p: vec![0.0, 0.5, 1.0],
            max_internal: DMatrix::from_row_slice(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]),
            oscillation: DMatrix::from_row_slice(2, 3, &[0.0, 0.1, 0.2, 0.3, 0.4, 0.5]),
            final_external: DMatrix::from_row_slice(2, 3, &[9.0, 8.0, 7.0, 6.0, 5.0, 4.0]),
        }
    }

    #[test]
    fn grid_file_round_trips() {
        let grid = sample_grid();
        let file = GridFile::from_grid(&grid);
        let back = file.into_grid().unwrap();

        assert_eq!(back.alpha_b, grid.alpha_b);
        assert_eq!(back.alpha_p, grid.alpha_p);
        assert_eq!(back.max_internal, grid.max_internal);
        assert_eq!(back.oscillation, grid.oscillation);
        assert_eq!(back.final_external, grid.final_external);
    }

    #[test]
    fn into_grid_rejects_row_count_mismatch() {
        let grid = sample_grid();
        let mut file = GridFile::from_grid(&grid);
        file.max_internal.pop();

        let err = file.into_grid().unwrap_err();
        assert_eq!(err.exit_code(), 4);
    }

    #[test]
    fn into_grid_rejects_ragged_rows() {
        let grid = sample_grid();
        let mut file = GridFile::from_grid(&grid);
        file.oscillation[1].pop();

        let err = file.into_grid().unwrap_err();
        assert_eq!(err.exit_code(), 4);
    }
}
