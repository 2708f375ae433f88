//! Reporting utilities: formatted terminal output for sweeps and selections.

pub mod format;

pub use format::*;
