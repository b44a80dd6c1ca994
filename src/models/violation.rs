//! Capacity violation types.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A continuous capacity dimension of a vehicle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CapacityDimension {
    /// Total weight in kilograms.
    Weight,
    /// Total volume in cubic metres.
    Volume,
}

impl CapacityDimension {
    /// Unit symbol used in messages.
    pub fn unit(&self) -> &'static str {
        match self {
            CapacityDimension::Weight => "kg",
            CapacityDimension::Volume => "m3",
        }
    }
}

impl fmt::Display for CapacityDimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CapacityDimension::Weight => f.write_str("weight"),
            CapacityDimension::Volume => f.write_str("volume"),
        }
    }
}

/// The first capacity limit a route breaks.
///
/// # Examples
///
/// ```
/// use u_tour::models::{CapacityDimension, CapacityViolation};
///
/// let v = CapacityViolation::CapacityExceeded {
///     dimension: CapacityDimension::Volume,
///     actual: 3.5,
///     limit: 2.0,
/// };
/// assert_eq!(v.to_string(), "total volume 3.5 m3 exceeds limit of 2 m3");
/// ```
#[derive(Debug, Clone, PartialEq, Error, Serialize, Deserialize)]
pub enum CapacityViolation {
    /// Total weight or volume is above the vehicle limit.
    #[error("total {dimension} {actual} {unit} exceeds limit of {limit} {unit}", unit = .dimension.unit())]
    CapacityExceeded {
        /// Which dimension was exceeded.
        dimension: CapacityDimension,
        /// Summed demand on the route.
        actual: f64,
        /// Vehicle limit.
        limit: f64,
    },
    /// More stops than the vehicle may serve on one tour.
    #[error("total stops {actual} exceeds limit of {limit}")]
    MaxStopsExceeded {
        /// Number of stops on the route.
        actual: usize,
        /// Vehicle limit.
        limit: usize,
    },
}
