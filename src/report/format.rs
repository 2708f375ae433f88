//! Formatted terminal summaries.
//!
//! We keep formatting code in one place so:
//! - the sweep/selection code stays clean and testable
//! - output changes are localized (important for future snapshot tests)

use crate::domain::{DesignPoint, SelectionResult, SweepGrid, SweepSpec, Thresholds};

/// Format the sweep summary (dataset, axes, grid extremes).
pub fn format_run_summary(spec: &SweepSpec, grid: &SweepGrid) -> String {
    let mut out = String::new();

    out.push_str("=== bsweep - Biofuel Design Sweep ===\n");
    out.push_str(&format!("Dataset: {}\n", grid.dataset.id()));
    out.push_str(&format!(
        "Time axis: n={} | t=[{:.3}, {:.3}]\n",
        spec.times.len(),
        spec.times[0],
        spec.times[spec.times.len() - 1],
    ));
    out.push_str(&format!("Initial bacteria: {:.4}\n", spec.initial_bacteria));
    out.push_str(&format!(
        "Grid: {} alpha_b x {} alpha_p = {} simulations\n",
        grid.alpha_b.len(),
        grid.alpha_p.len(),
        grid.alpha_b.len() * grid.alpha_p.len(),
    ));
    out.push_str(&format!(
        "alpha_b: [{:.3}, {:.3}] | alpha_p: [{:.3}, {:.3}]\n",
        grid.alpha_b[0],
        grid.alpha_b[grid.alpha_b.len() - 1],
        grid.alpha_p[0],
        grid.alpha_p[grid.alpha_p.len() - 1],
    ));

    out.push_str("\nGrid extremes:\n");
    out.push_str(&format!(
        "- final external biofuel: [{:.4}, {:.4}]\n",
        grid.final_external.min(),
        grid.final_external.max(),
    ));
    out.push_str(&format!(
        "- max internal biofuel  : [{:.4}, {:.4}]\n",
        grid.max_internal.min(),
        grid.max_internal.max(),
    ));
    out.push_str(&format!(
        "- oscillation amplitude : [{:.4}, {:.4}]\n",
        grid.oscillation.min(),
        grid.oscillation.max(),
    ));

    out
}

/// Format both selected designs, including the explicit infeasibility case.
pub fn format_selection(selection: &SelectionResult, thresholds: &Thresholds) -> String {
    let mut out = String::new();

    out.push_str("Selected designs:\n");
    out.push_str(&format!(
        "- unconstrained: {}\n",
        fmt_point(&selection.unconstrained)
    ));
    out.push_str(&format!(
        "- constrained (max_internal <= {:.4}, oscillation <= {:.4}): ",
        thresholds.max_internal, thresholds.oscillation
    ));
    match &selection.constrained {
        Some(point) => out.push_str(&format!("{}\n", fmt_point(point))),
        None => out.push_str("no feasible design (every grid cell violates a threshold)\n"),
    }

    out
}

fn fmt_point(point: &DesignPoint) -> String {
    format!(
        "alpha_b={:.4}, alpha_p={:.4} (external yield {:.4})",
        point.alpha_b, point.alpha_p, point.external_yield
    )
}
