//! Geographic position and depot types.

use serde::{Deserialize, Serialize};

/// A position on the Earth's surface in decimal degrees.
///
/// Coordinates are not range-checked: a malformed latitude or longitude is
/// carried through unchanged and shows up in whatever distance is computed
/// from it.
///
/// # Examples
///
/// ```
/// use u_tour::models::GeoPoint;
///
/// let p = GeoPoint::new(52.3676, 4.9041);
/// assert_eq!(p.latitude(), 52.3676);
/// assert_eq!(p.longitude(), 4.9041);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    latitude: f64,
    longitude: f64,
}

impl GeoPoint {
    /// Creates a point from latitude and longitude in degrees.
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Latitude in degrees.
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Longitude in degrees.
    pub fn longitude(&self) -> f64 {
        self.longitude
    }
}

impl From<GeoPoint> for geo::Point<f64> {
    fn from(p: GeoPoint) -> Self {
        geo::Point::new(p.longitude, p.latitude)
    }
}

/// The fixed start and end point of a vehicle's tour.
///
/// # Examples
///
/// ```
/// use u_tour::models::{Depot, GeoPoint};
///
/// let depot = Depot::new(GeoPoint::new(33.57, -7.59));
/// assert_eq!(depot.position().latitude(), 33.57);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Depot {
    position: GeoPoint,
}

impl Depot {
    /// Creates a depot at the given position.
    pub const fn new(position: GeoPoint) -> Self {
        Self { position }
    }

    /// Creates a depot from latitude and longitude in degrees.
    pub const fn at(latitude: f64, longitude: f64) -> Self {
        Self::new(GeoPoint::new(latitude, longitude))
    }

    /// Position of the depot.
    pub fn position(&self) -> GeoPoint {
        self.position
    }
}

impl From<GeoPoint> for Depot {
    fn from(position: GeoPoint) -> Self {
        Self::new(position)
    }
}
