//! Export the result grid to CSV.
//!
//! One row per grid cell, flat format, easy to consume in spreadsheets or
//! downstream scripts.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::domain::SweepGrid;
use crate::error::AppError;

/// Write the full grid to a CSV file, one row per (alpha_b, alpha_p) cell in
/// row-major order.
pub fn write_grid_csv(path: &Path, grid: &SweepGrid) -> Result<(), AppError> {
    let mut file = File::create(path)
        .map_err(|e| AppError::new(2, format!("Failed to create export CSV '{}': {e}", path.display())))?;

    writeln!(
        file,
        "dataset,alpha_b,alpha_p,max_internal,oscillation,final_external"
    )
    .map_err(|e| AppError::new(2, format!("Failed to write export CSV header: {e}")))?;

    for (i, &alpha_b) in grid.alpha_b.iter().enumerate() {
        for (j, &alpha_p) in grid.alpha_p.iter().enumerate() {
            writeln!(
                file,
                "{},{:.10},{:.10},{:.10},{:.10},{:.10}",
                grid.dataset.id(),
                alpha_b,
                alpha_p,
                grid.max_internal[(i, j)],
                grid.oscillation[(i, j)],
                grid.final_external[(i, j)],
            )
            .map_err(|e| AppError::new(2, format!("Failed to write export CSV row: {e}")))?;
        }
    }

    Ok(())
}
