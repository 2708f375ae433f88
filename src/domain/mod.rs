//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - input configuration (`Dataset`, `SweepSpec`, `Thresholds`)
//! - sweep outputs (`SweepGrid`, `TrajectorySummary`)
//! - selection outputs (`DesignPoint`, `SelectionResult`)
//! - the portable results-file schema (`GridFile`)

pub mod types;

pub use types::*;
