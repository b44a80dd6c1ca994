//! Clarke-Wright savings algorithm.
//!
//! # Algorithm
//!
//! The savings algorithm (Clarke & Wright, 1964) starts with each delivery
//! on its own route (depot → delivery → depot). It then merges routes by
//! linking an end of one route to an end of another, in decreasing order of
//! the distance saved:
//!
//! ```text
//! s(i, j) = d(0, i) + d(0, j) - d(i, j)
//! ```
//!
//! A merge is accepted only when both deliveries are ends of their chains
//! and the combined chain fits the vehicle. A rejected saving is never
//! revisited. Only one vehicle is routed, so the longest chain left at the
//! end is the result and every other chain is discarded.
//!
//! # Complexity
//!
//! O(n² log n) where n = number of deliveries (dominated by sorting savings).
//!
//! # Reference
//!
//! Clarke, G. & Wright, J.W. (1964). "Scheduling of Vehicles from a Central
//! Depot to a Number of Delivery Points", *Operations Research* 12(4), 568-581.

use tracing::{debug, instrument, trace};

use super::sub_route::SubRoutes;
use super::{feasible_deliveries, trivial_route};
use crate::distance::{DistanceMatrix, DistanceMetric, Haversine};
use crate::models::{Delivery, DeliveryId, GeoPoint, VehicleClass};

/// Distance saved by serving `a` and `b` back to back.
#[derive(Debug)]
struct Saving {
    a: usize,
    b: usize,
    value: f64,
    key: (DeliveryId, DeliveryId),
}

/// Builds a route with the Clarke-Wright savings algorithm over
/// great-circle distances.
///
/// # Examples
///
/// ```
/// use u_tour::constructive::clarke_wright_savings;
/// use u_tour::models::{Delivery, GeoPoint, VehicleClass};
///
/// let depot = GeoPoint::new(0.0, 0.0);
/// let deliveries = vec![
///     Delivery::new(1, GeoPoint::new(0.0, 0.1), 10.0, 0.1),
///     Delivery::new(2, GeoPoint::new(0.0, 0.2), 10.0, 0.1),
///     Delivery::new(3, GeoPoint::new(0.0, 0.3), 10.0, 0.1),
/// ];
///
/// let route = clarke_wright_savings(depot, &deliveries, &VehicleClass::medium());
/// assert_eq!(route.len(), 3);
/// ```
pub fn clarke_wright_savings(
    depot: GeoPoint,
    deliveries: &[Delivery],
    vehicle: &VehicleClass,
) -> Vec<Delivery> {
    clarke_wright_savings_with(depot, deliveries, vehicle, &Haversine)
}

/// Builds a route with the Clarke-Wright savings algorithm over any metric.
///
/// Deliveries that do not fit the vehicle on their own are dropped. Savings
/// are processed highest first; equal savings are ordered by the ids of the
/// two deliveries. The returned order is directional but may start from
/// either end; the depot is implicit at both ends.
#[instrument(level = "debug", skip_all, fields(candidates = deliveries.len()))]
pub fn clarke_wright_savings_with<M: DistanceMetric>(
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
    let savings = compute_savings(&feasible, &distances);
    debug!(savings = savings.len(), "computed positive savings");

    let mut routes = SubRoutes::singletons(&feasible);
    for saving in &savings {
        merge(&mut routes, saving, vehicle);
    }

    // Longest chain wins; ties go to the chain created first.
    let mut best: Option<(usize, usize)> = None;
    for route in routes.live() {
        let stops = routes.load(route).stops();
        match best {
            Some((_, best_stops)) if best_stops >= stops => {}
            _ => best = Some((route, stops)),
        }
    }

    let result: Vec<Delivery> = best
        .map(|(route, _)| routes.members(route))
        .unwrap_or_default()
        .into_iter()
        .map(|i| feasible[i])
        .collect();
    debug!(
        stops = result.len(),
        chains = routes.live().count(),
        "clarke-wright route selected"
    );
    result
}

/// Positive savings for every unordered pair, sorted highest first.
fn compute_savings(feasible: &[Delivery], distances: &DistanceMatrix) -> Vec<Saving> {
    let n = feasible.len();
    let mut savings = Vec::with_capacity(n * (n - 1) / 2);
    for a in 0..n {
        for b in (a + 1)..n {
            let value = distances.get(0, a + 1) + distances.get(0, b + 1)
                - distances.get(a + 1, b + 1);
            if value > 0.0 {
                let (x, y) = (feasible[a].id(), feasible[b].id());
                savings.push(Saving {
                    a,
                    b,
                    value,
                    key: (x.min(y), x.max(y)),
                });
            }
        }
    }

    savings.sort_by(|s, t| t.value.total_cmp(&s.value).then_with(|| s.key.cmp(&t.key)));
    savings
}

/// Applies one saving if its two deliveries can be joined end to end.
fn merge(routes: &mut SubRoutes, saving: &Saving, vehicle: &VehicleClass) {
    let route_a = routes.owner(saving.a);
    let route_b = routes.owner(saving.b);
    if route_a == route_b {
        return;
    }

    let combined = routes.load(route_a).merge(&routes.load(route_b));
    if !vehicle.fits(&combined) {
        trace!(a = saving.a, b = saving.b, "saving rejected: capacity");
        return;
    }

    let end_a = routes.ends(route_a, saving.a);
    let end_b = routes.ends(route_b, saving.b);
    let survivor = if end_a.tail && end_b.head {
        routes.join(route_a, route_b)
    } else if end_a.head && end_b.tail {
        routes.join(route_b, route_a)
    } else if end_a.tail && end_b.tail {
        routes.reverse(route_b);
        routes.join(route_a, route_b)
    } else if end_a.head && end_b.head {
        routes.reverse(route_a);
        routes.join(route_a, route_b)
    } else {
        trace!(a = saving.a, b = saving.b, "saving rejected: interior stop");
        return;
    };

    trace!(
        a = saving.a,
        b = saving.b,
        value = saving.value,
        survivor,
        stops = combined.stops(),
        "merged routes"
    );
}
