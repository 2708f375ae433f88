//! Parameter axis generation and validation.
//!
//! The sweep is a deterministic exhaustive scan over a two-parameter grid, so
//! axis construction is the only place "range" semantics live. The alpha_p
//! axis must include its upper bound: the generation bound is effectively
//! `upper + step`, the same one-extra-step trick the original design notes
//! call out for exclusive-stop ranges.

use crate::error::AppError;

/// Generate a uniformly spaced axis from `lower` to `upper` (inclusive) in
/// increments of `step`.
///
/// `inclusive_range(0.0, 1.0, 0.5)` yields `[0.0, 0.5, 1.0]`. When `upper`
/// is not an exact multiple of `step` away from `lower`, the last element is
/// the largest grid point `<= upper` (within a small tolerance for float
/// error).
pub fn inclusive_range(lower: f64, upper: f64, step: f64) -> Result<Vec<f64>, AppError> {
    if !(lower.is_finite() && upper.is_finite() && step.is_finite()) {
        return Err(AppError::new(
            2,
            format!("Invalid axis range: lower={lower}, upper={upper}, step={step} (must be finite)."),
        ));
    }
    if step <= 0.0 {
        return Err(AppError::new(2, format!("Axis step must be > 0 (got {step}).")));
    }
    if upper < lower {
        return Err(AppError::new(
            2,
            format!("Axis upper bound {upper} is below lower bound {lower}."),
        ));
    }

    // Points are computed as lower + i*step rather than by accumulation so
    // float error does not drift with axis length. The tolerance keeps the
    // upper bound in when (upper - lower) / step lands just under an integer.
    let last = ((upper - lower) / step + 1e-9).floor() as usize;
    let mut out = Vec::with_capacity(last + 1);
    for i in 0..=last {
        out.push(lower + step * i as f64);
    }
    Ok(out)
}

/// Validate a caller-supplied parameter axis: non-empty, finite, strictly
/// ascending.
pub fn validate_axis(name: &str, values: &[f64]) -> Result<(), AppError> {
    if values.is_empty() {
        return Err(AppError::new(2, format!("The {name} axis is empty.")));
    }
    for (i, &v) in values.iter().enumerate() {
        if !v.is_finite() {
            return Err(AppError::new(
                2,
                format!("The {name} axis contains a non-finite value at index {i}."),
            ));
        }
        if i > 0 && v <= values[i - 1] {
            return Err(AppError::new(
                2,
                format!("The {name} axis must be strictly ascending (violated at index {i})."),
            ));
        }
    }
    Ok(())
}

/// Validate a time axis: non-empty, finite, strictly increasing.
pub fn validate_time_axis(times: &[f64]) -> Result<(), AppError> {
    validate_axis("time", times)
}
