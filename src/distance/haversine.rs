//! Great-circle distance.

use geo::{Distance, Haversine as GeoHaversine};

use crate::models::GeoPoint;

/// Mean Earth radius in kilometres, equal to the radius `geo`'s haversine
/// measure uses.
pub const EARTH_RADIUS_KM: f64 = 6371.0088;

/// A symmetric, non-negative distance between two positions, in kilometres.
///
/// Route construction is generic over the metric so callers can plug in a
/// precomputed table instead of great-circle distances.
pub trait DistanceMetric {
    /// Distance from `a` to `b` in kilometres.
    fn distance_km(&self, a: &GeoPoint, b: &GeoPoint) -> f64;
}

impl<M: DistanceMetric + ?Sized> DistanceMetric for &M {
    fn distance_km(&self, a: &GeoPoint, b: &GeoPoint) -> f64 {
        (**self).distance_km(a, b)
    }
}

/// Haversine great-circle distance on a spherical Earth.
///
/// # Examples
///
/// ```
/// use u_tour::distance::{DistanceMetric, Haversine};
/// use u_tour::models::GeoPoint;
///
/// let a = GeoPoint::new(0.0, 0.0);
/// let b = GeoPoint::new(0.0, 90.0);
/// let d = Haversine.distance_km(&a, &b);
/// assert!((d - 10_007.5).abs() < 1.0);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Haversine;

impl DistanceMetric for Haversine {
    fn distance_km(&self, a: &GeoPoint, b: &GeoPoint) -> f64 {
        if a == b {
            return 0.0;
        }
        GeoHaversine.distance(geo::Point::<f64>::from(*a), geo::Point::<f64>::from(*b)) / 1000.0
    }
}

/// Haversine distance between two points in kilometres.
///
/// Coordinates are not validated; NaN in, NaN out.
pub fn distance_km(a: GeoPoint, b: GeoPoint) -> f64 {
    Haversine.distance_km(&a, &b)
}
