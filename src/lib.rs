//! # u-tour
//!
//! Single-vehicle delivery tour construction: given a depot, candidate
//! deliveries with weight/volume demand and a vehicle capacity profile,
//! builds a feasible visiting order with a greedy nearest-neighbor walk or a
//! Clarke-Wright savings merge.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (GeoPoint, Delivery, VehicleClass, Load, CapacityViolation)
//! - [`distance`] — Great-circle metric and distance matrix
//! - [`constructive`] — Route construction (Nearest Neighbor, Clarke-Wright)
//! - [`evaluation`] — Capacity validation and closed-loop route distance
//! - [`planner`] — One-call planning facade
//! - [`config`] — Serializable planner configuration

pub mod config;
pub mod constructive;
pub mod distance;
mod error;
pub mod evaluation;
pub mod models;
pub mod planner;

pub use constructive::{compute_route, Strategy};
pub use distance::distance_km;
pub use error::{Error, Result};
pub use evaluation::{total_distance, validate_capacity};
pub use planner::{PlannedTour, TourPlanner};
