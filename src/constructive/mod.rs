//! Constructive heuristics for building a single-vehicle delivery route.
//!
//! - [`nearest_neighbor`] — Greedy nearest-neighbor walk from the depot, O(n²)
//! - [`clarke_wright_savings`] — Clarke-Wright savings merge (1964), O(n² log n)
//! - [`compute_route`] — Dispatch on a [`Strategy`]
//!
//! Both heuristics first drop every delivery the vehicle could not carry on
//! its own. Dropped deliveries are silently left out of the result; they
//! are never reported as errors.

mod clarke_wright;
mod nearest_neighbor;
mod strategy;
mod sub_route;

pub use clarke_wright::{clarke_wright_savings, clarke_wright_savings_with};
pub use nearest_neighbor::{nearest_neighbor, nearest_neighbor_with};
pub use strategy::{compute_route, compute_route_with, Strategy};

use tracing::debug;

use crate::models::{Delivery, VehicleClass};

/// Copies the deliveries that individually fit the vehicle into a fresh
/// list, keeping input order.
fn feasible_deliveries(deliveries: &[Delivery], vehicle: &VehicleClass) -> Vec<Delivery> {
    let feasible: Vec<Delivery> = deliveries
        .iter()
        .filter(|d| vehicle.can_handle(d.weight_kg(), d.volume_m3()))
        .copied()
        .collect();
    debug!(
        candidates = deliveries.len(),
        feasible = feasible.len(),
        dropped = deliveries.len() - feasible.len(),
        "filtered individually infeasible deliveries"
    );
    feasible
}

/// Returns the finished route when no search is needed: nothing to visit,
/// a vehicle that may not stop at all, or a single stop.
fn trivial_route(feasible: &[Delivery], vehicle: &VehicleClass) -> Option<Vec<Delivery>> {
    if feasible.is_empty() || vehicle.max_stops() == 0 {
        return Some(Vec::new());
    }
    if feasible.len() == 1 {
        return Some(feasible.to_vec());
    }
    None
}
