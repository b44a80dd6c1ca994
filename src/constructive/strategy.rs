//! Strategy selection.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{clarke_wright_savings_with, nearest_neighbor_with};
use crate::distance::{DistanceMetric, Haversine};
use crate::error::Error;
use crate::models::{Delivery, GeoPoint, VehicleClass};

/// Route-construction heuristic.
///
/// Parses case-insensitively; `-`, `_` and spaces are interchangeable and
/// the short forms `nn` and `cw` are accepted.
///
/// # Examples
///
/// ```
/// use u_tour::constructive::Strategy;
///
/// assert_eq!("Nearest-Neighbor".parse::<Strategy>().unwrap(), Strategy::NearestNeighbor);
/// assert_eq!("CLARKE_WRIGHT".parse::<Strategy>().unwrap(), Strategy::ClarkeWright);
/// assert!("genetic".parse::<Strategy>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Greedy nearest-neighbor walk.
    #[default]
    #[serde(alias = "nn")]
    NearestNeighbor,
    /// Clarke-Wright savings merge.
    #[serde(alias = "cw")]
    ClarkeWright,
}

impl Strategy {
    /// Every strategy.
    pub const ALL: [Strategy; 2] = [Strategy::NearestNeighbor, Strategy::ClarkeWright];

    /// Canonical snake-case name.
    pub fn name(&self) -> &'static str {
        match self {
            Strategy::NearestNeighbor => "nearest_neighbor",
            Strategy::ClarkeWright => "clarke_wright",
        }
    }

    /// Runs this strategy with the given metric.
    pub fn build<M: DistanceMetric>(
        &self,
        depot: GeoPoint,
        deliveries: &[Delivery],
        vehicle: &VehicleClass,
        metric: &M,
    ) -> Vec<Delivery> {
        match self {
            Strategy::NearestNeighbor => nearest_neighbor_with(depot, deliveries, vehicle, metric),
            Strategy::ClarkeWright => clarke_wright_savings_with(depot, deliveries, vehicle, metric),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .map(|c| match c {
                '-' | ' ' => '_',
                c => c.to_ascii_lowercase(),
            })
            .collect();
        match normalized.as_str() {
            "nearest_neighbor" | "nearest_neighbour" | "nn" => Ok(Strategy::NearestNeighbor),
            "clarke_wright" | "cw" => Ok(Strategy::ClarkeWright),
            _ => Err(Error::InvalidAlgorithmName {
                name: s.to_owned(),
                accepted: Strategy::ALL
                    .iter()
                    .map(Strategy::name)
                    .collect::<Vec<_>>()
                    .join(", "),
            }),
        }
    }
}

/// Builds a route for one vehicle with the chosen strategy over
/// great-circle distances.
///
/// # Examples
///
/// ```
/// use u_tour::constructive::{compute_route, Strategy};
/// use u_tour::models::{Delivery, GeoPoint, VehicleClass};
///
/// let depot = GeoPoint::new(33.57, -7.59);
/// let deliveries = vec![
///     Delivery::new(1, GeoPoint::new(33.59, -7.61), 20.0, 0.2),
///     Delivery::new(2, GeoPoint::new(33.55, -7.58), 20.0, 0.2),
///     Delivery::new(3, GeoPoint::new(33.60, -7.50), 20.0, 0.2),
/// ];
///
/// let route = compute_route(depot, &deliveries, &VehicleClass::light(), Strategy::ClarkeWright);
/// assert_eq!(route.len(), 2); // 50 kg limit
/// ```
pub fn compute_route(
    depot: GeoPoint,
    deliveries: &[Delivery],
    vehicle: &VehicleClass,
    strategy: Strategy,
) -> Vec<Delivery> {
    strategy.build(depot, deliveries, vehicle, &Haversine)
}

/// Builds a route for one vehicle with the chosen strategy and metric.
pub fn compute_route_with<M: DistanceMetric>(
    depot: GeoPoint,
    deliveries: &[Delivery],
    vehicle: &VehicleClass,
    strategy: Strategy,
    metric: &M,
) -> Vec<Delivery> {
    strategy.build(depot, deliveries, vehicle, metric)
}
