//! Trajectory summarization.
//!
//! For one internal-biofuel trajectory we report two numbers:
//!
//! - `peak`: the maximum value anywhere in the series
//! - `oscillation`: how far the series drops after first reaching that peak
//!
//! If the series ends exactly at its peak, no decay happened after the peak
//! and the oscillation is zero; the post-peak slice is never formed in that
//! case, so a peak at the last index cannot produce an empty-slice scan.

use crate::domain::TrajectorySummary;
use crate::error::AppError;

/// Summarize one trajectory into its peak and post-peak oscillation.
///
/// Ties at the peak resolve to the **earliest** occurrence; the oscillation
/// window starts strictly after that index.
pub fn summarize(series: &[f64]) -> Result<TrajectorySummary, AppError> {
    if series.is_empty() {
        return Err(AppError::new(4, "Cannot summarize an empty trajectory."));
    }
    if let Some(i) = series.iter().position(|v| !v.is_finite()) {
        return Err(AppError::new(
            4,
            format!("Trajectory contains a non-finite value at index {i}."),
        ));
    }

    let mut peak = series[0];
    let mut peak_idx = 0;
    for (i, &v) in series.iter().enumerate().skip(1) {
        // Strict comparison keeps the first occurrence on ties.
        if v > peak {
            peak = v;
            peak_idx = i;
        }
    }

    if series[series.len() - 1] == peak {
        return Ok(TrajectorySummary {
            peak,
            oscillation: 0.0,
        });
    }

    // Last element differs from the peak, so the suffix is non-empty.
    let mut after_min = series[peak_idx + 1];
    for &v in &series[peak_idx + 2..] {
        if v < after_min {
            after_min = v;
        }
    }

    Ok(TrajectorySummary {
        peak,
        oscillation: peak - after_min,
    })
}
