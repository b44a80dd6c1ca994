//! Delivery stop type.

use serde::{Deserialize, Serialize};

use super::GeoPoint;

/// Stable identifier of a delivery.
pub type DeliveryId = u64;

/// A delivery stop with a location and a weight/volume demand.
///
/// Identity is the `id`: two deliveries with the same id are the same stop.
///
/// # Examples
///
/// ```
/// use u_tour::models::{Delivery, GeoPoint};
///
/// let d = Delivery::new(7, GeoPoint::new(48.85, 2.35), 12.5, 0.3);
/// assert_eq!(d.id(), 7);
/// assert_eq!(d.weight_kg(), 12.5);
/// assert_eq!(d.volume_m3(), 0.3);
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Delivery {
    id: DeliveryId,
    position: GeoPoint,
    weight_kg: f64,
    volume_m3: f64,
}

impl Delivery {
    /// Creates a new delivery.
    pub const fn new(id: DeliveryId, position: GeoPoint, weight_kg: f64, volume_m3: f64) -> Self {
        Self {
            id,
            position,
            weight_kg,
            volume_m3,
        }
    }

    /// Delivery ID.
    pub fn id(&self) -> DeliveryId {
        self.id
    }

    /// Location of the stop.
    pub fn position(&self) -> GeoPoint {
        self.position
    }

    /// Weight demand in kilograms.
    pub fn weight_kg(&self) -> f64 {
        self.weight_kg
    }

    /// Volume demand in cubic metres.
    pub fn volume_m3(&self) -> f64 {
        self.volume_m3
    }
}

impl PartialEq for Delivery {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Delivery {}

impl std::hash::Hash for Delivery {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_delivery_new() {
        let d = Delivery::new(3, GeoPoint::new(1.0, 2.0), 40.0, 0.25);
        assert_eq!(d.id(), 3);
        assert_eq!(d.position(), GeoPoint::new(1.0, 2.0));
        assert_eq!(d.weight_kg(), 40.0);
        assert_eq!(d.volume_m3(), 0.25);
    }

    #[test]
    fn test_delivery_identity_by_id() {
        let a = Delivery::new(1, GeoPoint::new(0.0, 0.0), 1.0, 1.0);
        let b = Delivery::new(1, GeoPoint::new(9.0, 9.0), 5.0, 5.0);
        let c = Delivery::new(2, GeoPoint::new(0.0, 0.0), 1.0, 1.0);
        assert_eq!(a, b);
        assert_ne!(a, c);

        let set: HashSet<Delivery> = [a, b, c].into_iter().collect();
        assert_eq!(set.len(), 2);
    }
}
