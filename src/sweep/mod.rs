//! Sweep-and-select core.
//!
//! Responsibilities:
//!
//! - generate the alpha_p parameter axis (inclusive of its upper bound)
//! - evaluate every (alpha_b, alpha_p) cell against the simulator (parallel)
//! - summarize each internal-biofuel trajectory (peak + oscillation)
//! - select the unconstrained and threshold-constrained optimal designs

pub mod axis;
pub mod evaluate;
pub mod select;
pub mod trajectory;

pub use axis::*;
pub use evaluate::*;
pub use select::*;
pub use trajectory::*;
