//! Tour planning facade.
//!
//! Bundles depot, vehicle and metric so a caller can go from candidate
//! deliveries to a validated, measured tour in one call.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::config::PlannerConfig;
use crate::constructive::Strategy;
use crate::distance::{DistanceMetric, Haversine};
use crate::error::{Error, Result};
use crate::evaluation::{total_distance_with, validate_capacity};
use crate::models::{Delivery, DeliveryId, Depot, VehicleClass};

/// A planned tour for one vehicle.
///
/// # Examples
///
/// ```
/// use u_tour::models::{Delivery, Depot, GeoPoint, VehicleClass};
/// use u_tour::{Strategy, TourPlanner};
///
/// let planner = TourPlanner::new(Depot::at(0.0, 0.0), VehicleClass::light());
/// let candidates = vec![
///     Delivery::new(1, GeoPoint::new(0.0, 0.1), 30.0, 0.1),
///     Delivery::new(2, GeoPoint::new(0.0, 0.2), 30.0, 0.1),
/// ];
///
/// let tour = planner.plan(&candidates, Strategy::NearestNeighbor).unwrap();
/// assert_eq!(tour.len(), 1); // 50 kg limit
/// assert_eq!(tour.unassigned(), &[2]);
/// assert!(tour.total_distance_km() > 0.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlannedTour {
    strategy: Strategy,
    deliveries: Vec<Delivery>,
    total_distance_km: f64,
    unassigned: Vec<DeliveryId>,
}

impl PlannedTour {
    /// Strategy that built the route.
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Deliveries in visiting order (depot implicit at both ends).
    pub fn deliveries(&self) -> &[Delivery] {
        &self.deliveries
    }

    /// Consumes the tour, returning the ordered deliveries.
    pub fn into_deliveries(self) -> Vec<Delivery> {
        self.deliveries
    }

    /// Closed-loop length in kilometres.
    pub fn total_distance_km(&self) -> f64 {
        self.total_distance_km
    }

    /// Candidate ids left off the route, in input order.
    pub fn unassigned(&self) -> &[DeliveryId] {
        &self.unassigned
    }

    /// Number of stops.
    pub fn len(&self) -> usize {
        self.deliveries.len()
    }

    /// Returns `true` if the tour has no stops.
    pub fn is_empty(&self) -> bool {
        self.deliveries.is_empty()
    }
}

/// Plans single-vehicle tours from a fixed depot.
#[derive(Debug, Clone)]
pub struct TourPlanner<M = Haversine> {
    depot: Depot,
    vehicle: VehicleClass,
    default_strategy: Strategy,
    metric: M,
}

impl TourPlanner<Haversine> {
    /// Creates a planner using great-circle distances and nearest-neighbor
    /// as the default strategy.
    pub fn new(depot: Depot, vehicle: VehicleClass) -> Self {
        Self {
            depot,
            vehicle,
            default_strategy: Strategy::default(),
            metric: Haversine,
        }
    }

    /// Creates a planner from a configuration.
    ///
    /// Fails with [`Error::InvalidVehicleClass`] if the vehicle class is
    /// not in the catalogue.
    pub fn from_config(config: &PlannerConfig) -> Result<Self> {
        Ok(Self::new(config.depot(), config.vehicle.resolve()?)
            .with_default_strategy(config.strategy))
    }
}

impl<M: DistanceMetric> TourPlanner<M> {
    /// Replaces the distance metric.
    pub fn with_metric<N: DistanceMetric>(self, metric: N) -> TourPlanner<N> {
        TourPlanner {
            depot: self.depot,
            vehicle: self.vehicle,
            default_strategy: self.default_strategy,
            metric,
        }
    }

    /// Sets the strategy used by [`TourPlanner::plan_default`].
    pub fn with_default_strategy(mut self, strategy: Strategy) -> Self {
        self.default_strategy = strategy;
        self
    }

    /// Depot of every planned tour.
    pub fn depot(&self) -> Depot {
        self.depot
    }

    /// Vehicle running every planned tour.
    pub fn vehicle(&self) -> &VehicleClass {
        &self.vehicle
    }

    /// Default strategy.
    pub fn default_strategy(&self) -> Strategy {
        self.default_strategy
    }

    /// Plans a tour with the given strategy.
    ///
    /// Candidate ids must be unique ([`Error::DuplicateDelivery`]).
    /// Deliveries the vehicle cannot take are left unassigned, not
    /// rejected. The built route is validated against the vehicle before it
    /// is returned.
    #[instrument(level = "debug", skip_all, fields(strategy = %strategy, candidates = candidates.len()))]
    pub fn plan(&self, candidates: &[Delivery], strategy: Strategy) -> Result<PlannedTour> {
        let mut seen = HashSet::with_capacity(candidates.len());
        if let Some(dup) = candidates.iter().find(|d| !seen.insert(d.id())) {
            return Err(Error::DuplicateDelivery(dup.id()));
        }

        let depot = self.depot.position();
        let deliveries = strategy.build(depot, candidates, &self.vehicle, &self.metric);
        validate_capacity(&self.vehicle, &deliveries)?;

        let assigned: HashSet<DeliveryId> = deliveries.iter().map(Delivery::id).collect();
        let unassigned: Vec<DeliveryId> = candidates
            .iter()
            .map(Delivery::id)
            .filter(|id| !assigned.contains(id))
            .collect();
        let total_distance_km = total_distance_with(depot, &deliveries, &self.metric);

        debug!(
            stops = deliveries.len(),
            unassigned = unassigned.len(),
            total_distance_km,
            "tour planned"
        );
        Ok(PlannedTour {
            strategy,
            deliveries,
            total_distance_km,
            unassigned,
        })
    }

    /// Plans a tour with a strategy given by name.
    ///
    /// Fails with [`Error::InvalidAlgorithmName`] before any work is done if
    /// the name is not recognised.
    pub fn plan_named(&self, candidates: &[Delivery], algorithm: &str) -> Result<PlannedTour> {
        let strategy: Strategy = algorithm.parse()?;
        self.plan(candidates, strategy)
    }

    /// Plans a tour with the default strategy.
    pub fn plan_default(&self, candidates: &[Delivery]) -> Result<PlannedTour> {
        self.plan(candidates, self.default_strategy)
    }

    /// Closed-loop length of an already ordered route under this
    /// planner's depot and metric.
    pub fn total_distance(&self, route: &[Delivery]) -> f64 {
        total_distance_with(self.depot.position(), route, &self.metric)
    }
}
