//! Nearest-neighbor constructive heuristic.
//!
//! Builds the route greedily: starting from the depot, always visit the
//! nearest delivery that still fits the vehicle. Stops when nothing fits or
//! the stop limit is reached.
//!
//! # Complexity
//!
//! O(n²) where n = number of deliveries.
//!
//! # Reference
//!
//! This is the simplest constructive heuristic for routing. The result is not
//! globally optimal but it is fast, deterministic for a fixed input order,
//! and capacity-feasible by construction.

use tracing::{debug, instrument};

use super::{feasible_deliveries, trivial_route};
use crate::distance::{DistanceMatrix, DistanceMetric, Haversine};
use crate::models::{Delivery, GeoPoint, Load, VehicleClass};

/// Builds a route with the nearest-neighbor heuristic over great-circle
/// distances.
///
/// # Examples
///
/// ```
/// use u_tour::constructive::nearest_neighbor;
/// use u_tour::models::{Delivery, GeoPoint, VehicleClass};
///
/// let depot = GeoPoint::new(0.0, 0.0);
/// let deliveries = vec![
///     Delivery::new(1, GeoPoint::new(0.0, 0.3), 10.0, 0.1),
///     Delivery::new(2, GeoPoint::new(0.0, 0.1), 10.0, 0.1),
///     Delivery::new(3, GeoPoint::new(0.0, 0.2), 10.0, 0.1),
/// ];
///
/// let route = nearest_neighbor(depot, &deliveries, &VehicleClass::medium());
/// let ids: Vec<u64> = route.iter().map(|d| d.id()).collect();
/// assert_eq!(ids, vec![2, 3, 1]);
/// ```
pub fn nearest_neighbor(
    depot: GeoPoint,
    deliveries: &[Delivery],
    vehicle: &VehicleClass,
) -> Vec<Delivery> {
    nearest_neighbor_with(depot, deliveries, vehicle, &Haversine)
}

/// Builds a route with the nearest-neighbor heuristic over any metric.
///
/// Deliveries that do not fit the vehicle on their own are dropped. From
/// the current position the nearest remaining delivery whose addition keeps
/// weight, volume and stop count within limits is appended; ties go to the
/// delivery listed first in `deliveries`.
#[instrument(level = "debug", skip_all, fields(candidates = deliveries.len()))]
pub fn nearest_neighbor_with<M: DistanceMetric>(
    depot: GeoPoint,
    deliveries: &[Delivery],
    vehicle: &VehicleClass,
    metric: &M,
) -> Vec<Delivery> {
    let feasible = feasible_deliveries(deliveries, vehicle);
    if let Some(route) = trivial_route(&feasible, vehicle) {
        return route;
    }

    let distances = DistanceMatrix::from_stops(depot, &feasible, metric);
    let mut visited = vec![false; feasible.len()];
    let mut route = Vec::with_capacity(feasible.len().min(vehicle.max_stops()));
    let mut load = Load::EMPTY;
    // Matrix index of the current position (0 = depot).
    let mut current = 0;

    while load.stops() < vehicle.max_stops() {
        let candidates = feasible
            .iter()
            .enumerate()
            .filter(|&(i, d)| !visited[i] && vehicle.fits(&load.add(d)))
            .map(|(i, _)| i + 1);

        let Some(next) = distances.nearest(current, candidates) else {
            break;
        };

        let delivery = feasible[next - 1];
        visited[next - 1] = true;
        load = load.add(&delivery);
        route.push(delivery);
        current = next;
    }

    debug!(
        stops = route.len(),
        weight_kg = load.weight_kg(),
        volume_m3 = load.volume_m3(),
        "nearest-neighbor route built"
    );
    route
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constructive::testing::{ids, stop, TableMetric};

    fn three_stop_metric() -> TableMetric {
        TableMetric::new(&[
            ((0, 1), 5.0),
            ((0, 2), 10.0),
            ((0, 3), 15.0),
            ((1, 2), 3.0),
            ((1, 3), 7.0),
            ((2, 3), 4.0),
        ])
    }

    #[test]
    fn test_nn_follows_nearest_chain() {
        let deliveries = vec![stop(1, 5.0, 0.1), stop(2, 5.0, 0.1), stop(3, 5.0, 0.1)];
        let route = nearest_neighbor_with(
            GeoPoint::new(0.0, 0.0),
            &deliveries,
            &VehicleClass::heavy(),
            &three_stop_metric(),
        );
        assert_eq!(ids(&route), vec![1, 2, 3]);
    }

    #[test]
    fn test_nn_input_order_does_not_matter_without_ties() {
        let deliveries = vec![stop(3, 5.0, 0.1), stop(1, 5.0, 0.1), stop(2, 5.0, 0.1)];
        let route = nearest_neighbor_with(
            GeoPoint::new(0.0, 0.0),
            &deliveries,
            &VehicleClass::heavy(),
            &three_stop_metric(),
        );
        assert_eq!(ids(&route), vec![1, 2, 3]);
    }

    #[test]
    fn test_nn_stop_limit() {
        // Three equidistant deliveries, room for two.
        let metric = TableMetric::new(&[
            ((0, 1), 5.0),
            ((0, 2), 5.0),
            ((0, 3), 5.0),
            ((1, 2), 5.0),
            ((1, 3), 5.0),
            ((2, 3), 5.0),
        ]);
        let deliveries = vec![stop(1, 1.0, 0.1), stop(2, 1.0, 0.1), stop(3, 1.0, 0.1)];
        let vehicle = VehicleClass::medium().with_max_stops(2);
        let route = nearest_neighbor_with(GeoPoint::new(0.0, 0.0), &deliveries, &vehicle, &metric);
        assert_eq!(route.len(), 2);
        // Ties go to the earliest candidate.
        assert_eq!(ids(&route), vec![1, 2]);
    }

    #[test]
    fn test_nn_skips_what_no_longer_fits() {
        // 1 is nearest, 2 would overflow weight after 1, 3 still fits.
        let deliveries = vec![stop(1, 60.0, 0.1), stop(2, 50.0, 0.1), stop(3, 30.0, 0.1)];
        let vehicle = VehicleClass::new(100.0, 10.0, 10);
        let route = nearest_neighbor_with(
            GeoPoint::new(0.0, 0.0),
            &deliveries,
            &vehicle,
            &three_stop_metric(),
        );
        assert_eq!(ids(&route), vec![1, 3]);
    }

    #[test]
    fn test_nn_drops_infeasible_without_duplicates() {
        let deliveries = vec![
            stop(1, 5.0, 0.1),
            stop(2, 500.0, 0.1),
            stop(3, 5.0, 0.1),
        ];
        let vehicle = VehicleClass::new(100.0, 10.0, 10);
        let route = nearest_neighbor_with(
            GeoPoint::new(0.0, 0.0),
            &deliveries,
            &vehicle,
            &three_stop_metric(),
        );
        assert_eq!(ids(&route), vec![1, 3]);
    }

    #[test]
    fn test_nn_empty() {
        let route = nearest_neighbor(GeoPoint::new(0.0, 0.0), &[], &VehicleClass::light());
        assert!(route.is_empty());
    }

    #[test]
    fn test_nn_single() {
        let d = Delivery::new(9, GeoPoint::new(1.0, 1.0), 10.0, 0.1);
        let route = nearest_neighbor(GeoPoint::new(0.0, 0.0), &[d], &VehicleClass::light());
        assert_eq!(route, vec![d]);
    }

    #[test]
    fn test_nn_all_infeasible() {
        let d = Delivery::new(9, GeoPoint::new(1.0, 1.0), 51.0, 0.1);
        let route = nearest_neighbor(GeoPoint::new(0.0, 0.0), &[d], &VehicleClass::light());
        assert!(route.is_empty());
    }

    #[test]
    fn test_nn_deterministic() {
        let deliveries: Vec<Delivery> = (1..=20u32)
            .map(|k| {
                let x = f64::from(k);
                Delivery::new(u64::from(k), GeoPoint::new(x.sin(), x.cos()), 4.0, 0.02)
            })
            .collect();
        let vehicle = VehicleClass::light();
        let a = nearest_neighbor(GeoPoint::new(0.0, 0.0), &deliveries, &vehicle);
        let b = nearest_neighbor(GeoPoint::new(0.0, 0.0), &deliveries, &vehicle);
        assert_eq!(ids(&a), ids(&b));
        // 12 × 4 kg = 48 kg; a 13th would exceed 50 kg.
        assert_eq!(a.len(), 12);
    }
}
