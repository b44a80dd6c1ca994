//! Checks applied to a finished route.
//!
//! - [`validate_capacity`] — First capacity limit a route breaks, if any
//! - [`total_distance`] — Closed-loop length from the depot and back

mod evaluator;

pub use evaluator::{total_distance, total_distance_with, validate_capacity};
