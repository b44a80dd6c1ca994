//! Planner configuration.
//!
//! A configuration names the depot, the vehicle and the default strategy:
//!
//! ```json
//! {
//!   "depot": { "latitude": 33.5731, "longitude": -7.5898 },
//!   "vehicle": { "class": "van", "max_stops": 20 },
//!   "strategy": "clarke_wright"
//! }
//! ```
//!
//! `vehicle.class` is a catalogue name; the optional `max_weight_kg`,
//! `max_volume_m3` and `max_stops` fields tighten or relax that entry for
//! one vehicle. `strategy` defaults to nearest-neighbor.

use serde::{Deserialize, Serialize};

use crate::constructive::Strategy;
use crate::error::Result;
use crate::models::{Depot, GeoPoint, VehicleClass};

/// A vehicle described by catalogue name plus per-vehicle overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleSpec {
    /// Catalogue name, matched case-insensitively.
    pub class: String,
    /// Replaces the catalogue weight limit.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_weight_kg: Option<f64>,
    /// Replaces the catalogue volume limit.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_volume_m3: Option<f64>,
    /// Replaces the catalogue stop limit.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_stops: Option<usize>,
}

impl VehicleSpec {
    /// A catalogue vehicle without overrides.
    pub fn named(class: impl Into<String>) -> Self {
        Self {
            class: class.into(),
            max_weight_kg: None,
            max_volume_m3: None,
            max_stops: None,
        }
    }

    /// Looks up the catalogue entry and applies the overrides.
    ///
    /// Fails with [`Error::InvalidVehicleClass`](crate::Error::InvalidVehicleClass)
    /// for unknown class names.
    pub fn resolve(&self) -> Result<VehicleClass> {
        let mut vehicle = VehicleClass::from_name(&self.class)?;
        if let Some(max) = self.max_weight_kg {
            vehicle = vehicle.with_max_weight_kg(max);
        }
        if let Some(max) = self.max_volume_m3 {
            vehicle = vehicle.with_max_volume_m3(max);
        }
        if let Some(max) = self.max_stops {
            vehicle = vehicle.with_max_stops(max);
        }
        Ok(vehicle)
    }
}

/// Everything a [`TourPlanner`](crate::TourPlanner) needs besides the
/// candidate deliveries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlannerConfig {
    /// Start and end of every tour.
    pub depot: GeoPoint,
    /// Vehicle running the tour.
    pub vehicle: VehicleSpec,
    /// Strategy used when none is named explicitly.
    #[serde(default)]
    pub strategy: Strategy,
}

impl PlannerConfig {
    /// Creates a configuration.
    pub fn new(depot: GeoPoint, vehicle: VehicleSpec, strategy: Strategy) -> Self {
        Self {
            depot,
            vehicle,
            strategy,
        }
    }

    /// Parses a configuration from JSON.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_tour::config::PlannerConfig;
    /// use u_tour::constructive::Strategy;
    ///
    /// let config = PlannerConfig::from_json(
    ///     r#"{ "depot": { "latitude": 0.0, "longitude": 0.0 },
    ///          "vehicle": { "class": "truck" } }"#,
    /// )
    /// .unwrap();
    /// assert_eq!(config.strategy, Strategy::NearestNeighbor);
    /// assert_eq!(config.vehicle.resolve().unwrap().max_stops(), 100);
    /// ```
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Depot described by this configuration.
    pub fn depot(&self) -> Depot {
        Depot::new(self.depot)
    }
}
