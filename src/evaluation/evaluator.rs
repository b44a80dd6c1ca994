//! Post-construction checks: capacity validation and closed-loop distance.

use crate::distance::{DistanceMetric, Haversine};
use crate::models::{CapacityDimension, CapacityViolation, Delivery, GeoPoint, Load, VehicleClass};

/// Checks a finished route against the vehicle's limits.
///
/// Dimensions are checked in the order weight, volume, stops and the first
/// one exceeded is reported. An empty route always passes.
///
/// # Examples
///
/// ```
/// use u_tour::evaluation::validate_capacity;
/// use u_tour::models::{CapacityDimension, CapacityViolation, Delivery, GeoPoint, VehicleClass};
///
/// let route = vec![
///     Delivery::new(1, GeoPoint::new(0.0, 0.0), 200.0, 1.5),
///     Delivery::new(2, GeoPoint::new(0.0, 1.0), 300.0, 2.0),
/// ];
/// let vehicle = VehicleClass::medium().with_max_weight_kg(200.0);
///
/// assert_eq!(
///     validate_capacity(&vehicle, &route),
///     Err(CapacityViolation::CapacityExceeded {
///         dimension: CapacityDimension::Weight,
///         actual: 500.0,
///         limit: 200.0,
///     })
/// );
/// assert!(validate_capacity(&VehicleClass::medium(), &route).is_ok());
/// ```
pub fn validate_capacity(
    vehicle: &VehicleClass,
    route: &[Delivery],
) -> Result<(), CapacityViolation> {
    let load = Load::of(route);
    if vehicle.fits(&load) {
        return Ok(());
    }

    // Written as `<=` checks so a NaN demand counts as exceeding the limit.
    let weight_ok = load.weight_kg() <= vehicle.max_weight_kg();
    if !weight_ok {
        return Err(CapacityViolation::CapacityExceeded {
            dimension: CapacityDimension::Weight,
            actual: load.weight_kg(),
            limit: vehicle.max_weight_kg(),
        });
    }
    let volume_ok = load.volume_m3() <= vehicle.max_volume_m3();
    if !volume_ok {
        return Err(CapacityViolation::CapacityExceeded {
            dimension: CapacityDimension::Volume,
            actual: load.volume_m3(),
            limit: vehicle.max_volume_m3(),
        });
    }
    Err(CapacityViolation::MaxStopsExceeded {
        actual: load.stops(),
        limit: vehicle.max_stops(),
    })
}

/// Closed-loop great-circle length of a route in kilometres:
/// depot → first → ... → last → depot.
///
/// The route is taken in the given order. An empty route has length zero.
///
/// # Examples
///
/// ```
/// use u_tour::evaluation::total_distance;
/// use u_tour::models::{Delivery, GeoPoint};
///
/// let depot = GeoPoint::new(0.0, 0.0);
/// let route = vec![Delivery::new(1, GeoPoint::new(0.0, 1.0), 1.0, 0.1)];
/// let d = total_distance(depot, &route);
/// assert!((d - 2.0 * 111.19).abs() < 0.1);
/// assert_eq!(total_distance(depot, &[]), 0.0);
/// ```
pub fn total_distance(depot: GeoPoint, route: &[Delivery]) -> f64 {
    total_distance_with(depot, route, &Haversine)
}

/// Closed-loop length of a route under the given metric.
pub fn total_distance_with<M: DistanceMetric>(
    depot: GeoPoint,
    route: &[Delivery],
    metric: &M,
) -> f64 {
    let (Some(first), Some(last)) = (route.first(), route.last()) else {
        return 0.0;
    };

    let legs: f64 = route
        .windows(2)
        .map(|pair| metric.distance_km(&pair[0].position(), &pair[1].position()))
        .sum();
    metric.distance_km(&depot, &first.position()) + legs + metric.distance_km(&last.position(), &depot)
}
