//! File input/output: CSV grid exports and JSON results files.

pub mod export;
pub mod results;
