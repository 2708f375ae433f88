//! Design selection.
//!
//! Two scans over the result matrices:
//!
//! - **unconstrained**: the cell with the greatest `final_external`, ignoring
//!   thresholds entirely
//! - **constrained**: the greatest `final_external` among cells whose
//!   `max_internal` and `oscillation` both sit at or under their thresholds
//!
//! Both scans track the best-so-far value *together with* its (row, col)
//! location, so there is no reverse lookup-by-equality step and no sentinel
//! that a genuine zero-yield cell could collide with. Updates use strict `>`
//! in row-major order, so the first cell attaining the maximum wins ties
//! deterministically.

use crate::domain::{DesignPoint, SelectionResult, SweepGrid, Thresholds};
use crate::error::AppError;

#[derive(Debug, Clone, Copy)]
struct Best {
    row: usize,
    col: usize,
    value: f64,
}

/// Select the unconstrained and constrained optimal designs from a grid.
///
/// Returns `constrained: None` when no cell satisfies both thresholds.
pub fn select(grid: &SweepGrid, thresholds: &Thresholds) -> Result<SelectionResult, AppError> {
    validate_grid(grid)?;
    if !(thresholds.max_internal.is_finite() && thresholds.oscillation.is_finite()) {
        return Err(AppError::new(
            2,
            format!(
                "Thresholds must be finite: max_internal={}, oscillation={}.",
                thresholds.max_internal, thresholds.oscillation
            ),
        ));
    }

    let rows = grid.alpha_b.len();
    let cols = grid.alpha_p.len();

    let mut unconstrained = Best {
        row: 0,
        col: 0,
        value: grid.final_external[(0, 0)],
    };
    let mut constrained: Option<Best> = None;

    for row in 0..rows {
        for col in 0..cols {
            let value = grid.final_external[(row, col)];

            if value > unconstrained.value {
                unconstrained = Best { row, col, value };
            }

            let feasible = grid.max_internal[(row, col)] <= thresholds.max_internal
                && grid.oscillation[(row, col)] <= thresholds.oscillation;
            if feasible {
                let better = match constrained {
                    Some(best) => value > best.value,
                    None => true,
                };
                if better {
                    constrained = Some(Best { row, col, value });
                }
            }
        }
    }

    Ok(SelectionResult {
        unconstrained: to_point(grid, unconstrained),
        constrained: constrained.map(|best| to_point(grid, best)),
    })
}

fn to_point(grid: &SweepGrid, best: Best) -> DesignPoint {
    DesignPoint {
        alpha_b: grid.alpha_b[best.row],
        alpha_p: grid.alpha_p[best.col],
        external_yield: best.value,
    }
}

fn validate_grid(grid: &SweepGrid) -> Result<(), AppError> {
    let expected = (grid.alpha_b.len(), grid.alpha_p.len());
    if expected.0 == 0 || expected.1 == 0 {
        return Err(AppError::new(2, "Cannot select from an empty grid."));
    }
    for (name, m) in [
        ("max_internal", &grid.max_internal),
        ("oscillation", &grid.oscillation),
        ("final_external", &grid.final_external),
    ] {
        if m.shape() != expected {
            return Err(AppError::new(
                4,
                format!(
                    "Matrix '{name}' has shape {:?}, expected {:?} from the axes.",
                    m.shape(),
                    expected
                ),
            ));
        }
        if m.iter().any(|v| !v.is_finite()) {
            return Err(AppError::new(
                4,
                format!("Matrix '{name}' contains non-finite values."),
            ));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Dataset;
    use nalgebra::DMatrix;

    fn grid(max_internal: &[f64], oscillation: &[f64], final_external: &[f64]) -> SweepGrid {
        SweepGrid {
            dataset: Dataset::One,
            alpha_b: vec![1.0, 2.0],
            alpha_p: vec![0.5, 1.0, 1.5],
            max_internal: DMatrix::from_row_slice(2, 3, max_internal),
            oscillation: DMatrix::from_row_slice(2, 3, oscillation),
            final_external: DMatrix::from_row_slice(2, 3, final_external),
        }
    }

    fn loose() -> Thresholds {
        Thresholds {
            max_internal: 100.0,
            oscillation: 100.0,
        }
    }

    #[test]
    fn unconstrained_picks_the_unique_maximum() {
        let g = grid(
            &[0.0; 6],
            &[0.0; 6],
            &[1.0, 2.0, 3.0, 4.0, 9.0, 5.0],
        );
        let result = select(&g, &loose()).unwrap();

        // (1, 1) holds 9.0 -> alpha_b=2.0, alpha_p=1.0, regardless of thresholds.
        assert_eq!(result.unconstrained.alpha_b, 2.0);
        assert_eq!(result.unconstrained.alpha_p, 1.0);
        assert_eq!(result.unconstrained.external_yield, 9.0);
    }

    #[test]
    fn constrained_avoids_oscillating_maximum() {
        // Global maximum at (1, 1) violates the oscillation threshold; the
        // best feasible cell is (0, 2) with yield 6.0.
        let g = grid(
            &[1.0, 1.0, 1.0, 1.0, 1.0, 1.0],
            &[0.0, 0.0, 0.0, 0.0, 5.0, 0.0],
            &[1.0, 2.0, 6.0, 4.0, 9.0, 5.0],
        );
        let thresholds = Thresholds {
            max_internal: 2.0,
            oscillation: 1.0,
        };
        let result = select(&g, &thresholds).unwrap();

        assert_eq!(result.unconstrained.external_yield, 9.0);
        let constrained = result.constrained.unwrap();
        assert_eq!(constrained.alpha_b, 1.0);
        assert_eq!(constrained.alpha_p, 1.5);
        assert_eq!(constrained.external_yield, 6.0);
    }

    #[test]
    fn infeasible_region_yields_none() {
        let g = grid(
            &[10.0; 6],
            &[10.0; 6],
            &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0],
        );
        let thresholds = Thresholds {
            max_internal: 1.0,
            oscillation: 1.0,
        };
        let result = select(&g, &thresholds).unwrap();

        assert!(result.constrained.is_none());
        // The unconstrained optimum is unaffected.
        assert_eq!(result.unconstrained.external_yield, 6.0);
    }

    #[test]
    fn threshold_boundaries_are_feasible() {
        // Sole standout cell sits exactly on both thresholds.
        let g = grid(
            &[2.0, 3.0, 3.0, 3.0, 3.0, 3.0],
            &[1.0, 3.0, 3.0, 3.0, 3.0, 3.0],
            &[7.0, 1.0, 1.0, 1.0, 1.0, 1.0],
        );
        let thresholds = Thresholds {
            max_internal: 2.0,
            oscillation: 1.0,
        };
        let result = select(&g, &thresholds).unwrap();

        let constrained = result.constrained.unwrap();
        assert_eq!(constrained.external_yield, 7.0);
    }

    #[test]
    fn ties_resolve_to_first_cell_in_row_major_order() {
        let g = grid(
            &[0.0; 6],
            &[0.0; 6],
            &[5.0, 9.0, 3.0, 9.0, 1.0, 2.0],
        );
        let result = select(&g, &loose()).unwrap();

        // 9.0 appears at (0, 1) and (1, 0); the earlier row-major cell wins.
        assert_eq!(result.unconstrained.alpha_b, 1.0);
        assert_eq!(result.unconstrained.alpha_p, 1.0);
    }

    #[test]
    fn zero_yield_feasible_cell_is_still_reported() {
        // Every feasible yield is 0.0. A sentinel-based scan would miss this;
        // the index-tracking scan must report a real cell.
        let g = grid(
            &[0.0; 6],
            &[0.0; 6],
            &[0.0; 6],
        );
        let result = select(&g, &loose()).unwrap();

        let constrained = result.constrained.unwrap();
        assert_eq!(constrained.external_yield, 0.0);
        assert_eq!(constrained.alpha_b, 1.0);
        assert_eq!(constrained.alpha_p, 0.5);
    }

    #[test]
    fn shape_mismatch_is_an_error() {
        let mut g = grid(&[0.0; 6], &[0.0; 6], &[0.0; 6]);
        g.oscillation = DMatrix::zeros(3, 2);
        let err = select(&g, &loose()).unwrap_err();
        assert_eq!(err.exit_code(), 4);
    }

    #[test]
    fn non_finite_matrix_is_an_error() {
        let mut g = grid(&[0.0; 6], &[0.0; 6], &[0.0; 6]);
        g.final_external[(0, 0)] = f64::NAN;
        let err = select(&g, &loose()).unwrap_err();
        assert_eq!(err.exit_code(), 4);
    }

    #[test]
    fn non_finite_thresholds_are_an_error() {
        let g = grid(&[0.0; 6], &[0.0; 6], &[0.0; 6]);
        let thresholds = Thresholds {
            max_internal: f64::NAN,
            oscillation: 1.0,
        };
        let err = select(&g, &thresholds).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }
}
