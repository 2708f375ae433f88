//! Read/write sweep results JSON files.
//!
//! The results JSON is the "portable" representation of one finished sweep:
//! both parameter axes plus the three row-major result matrices. A saved
//! sweep can be reloaded with `bsweep select` to re-run design selection
//! under different thresholds without repeating the simulations.
//!
//! The schema is defined by `domain::GridFile`.

use std::fs::File;
use std::path::Path;

use crate::domain::{GridFile, SweepGrid};
use crate::error::AppError;

/// Write a results JSON file.
pub fn write_grid_json(path: &Path, grid: &SweepGrid) -> Result<(), AppError> {
    let file = File::create(path)
        .map_err(|e| AppError::new(2, format!("Failed to create results JSON '{}': {e}", path.display())))?;

    serde_json::to_writer_pretty(file, &GridFile::from_grid(grid))
        .map_err(|e| AppError::new(2, format!("Failed to write results JSON: {e}")))?;

    Ok(())
}

/// Read a results JSON file.
pub fn read_grid_json(path: &Path) -> Result<GridFile, AppError> {
    let file = File::open(path)
        .map_err(|e| AppError::new(2, format!("Failed to open results JSON '{}': {e}", path.display())))?;
    let grid: GridFile =
        serde_json::from_reader(file).map_err(|e| AppError::new(2, format!("Invalid results JSON: {e}")))?;
    Ok(grid)
}
