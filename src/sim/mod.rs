//! Simulator seam.
//!
//! The sweep core treats the biofuel simulator as an external collaborator:
//! it depends only on the shapes and values of the returned trajectories,
//! never on the model's internal dynamics. `Simulate` is the boundary; the
//! built-in `BiofuelModel` is one implementation, and tests substitute stubs.

pub mod model;

pub use model::BiofuelModel;

use crate::domain::Dataset;
use crate::error::AppError;

/// One simulator invocation: the dataset's constant set, the shared time
/// axis, and the scalar rates for a single grid cell.
#[derive(Debug, Clone, Copy)]
pub struct SimRequest<'a> {
    pub dataset: Dataset,
    pub times: &'a [f64],
    pub initial_bacteria: f64,
    /// Biofuel production rate for this cell.
    pub alpha_b: f64,
    /// Efflux pump production rate for this cell.
    pub alpha_p: f64,
}

/// Five trajectories aligned to the request's time axis (equal lengths).
#[derive(Debug, Clone)]
pub struct SimOutput {
    pub bacteria: Vec<f64>,
    pub sensor: Vec<f64>,
    pub pump: Vec<f64>,
    pub internal_fuel: Vec<f64>,
    pub external_fuel: Vec<f64>,
}

/// Anything that can simulate one grid cell.
///
/// Implementations must be deterministic for fixed inputs and safe to invoke
/// concurrently for independent requests (the sweep shards cells across
/// rayon workers).
pub trait Simulate {
    fn simulate(&self, req: &SimRequest<'_>) -> Result<SimOutput, AppError>;
}
