//! Aggregate demand of a set of deliveries.

use serde::{Deserialize, Serialize};

use super::Delivery;

/// Total weight, volume and stop count carried on a (partial) route.
///
/// # Examples
///
/// ```
/// use u_tour::models::{Delivery, GeoPoint, Load};
///
/// let a = Delivery::new(1, GeoPoint::new(0.0, 0.0), 200.0, 1.5);
/// let b = Delivery::new(2, GeoPoint::new(0.0, 1.0), 300.0, 2.0);
/// let load = Load::of(&[a, b]);
/// assert_eq!(load.weight_kg(), 500.0);
/// assert_eq!(load.volume_m3(), 3.5);
/// assert_eq!(load.stops(), 2);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Load {
    weight_kg: f64,
    volume_m3: f64,
    stops: usize,
}

impl Load {
    /// An empty load.
    pub const EMPTY: Load = Load::new(0.0, 0.0, 0);

    /// Creates a load from explicit totals.
    pub const fn new(weight_kg: f64, volume_m3: f64, stops: usize) -> Self {
        Self {
            weight_kg,
            volume_m3,
            stops,
        }
    }

    /// Load of a single delivery.
    pub fn single(delivery: &Delivery) -> Self {
        Self::new(delivery.weight_kg(), delivery.volume_m3(), 1)
    }

    /// Sums the demand of every delivery in the slice.
    pub fn of(deliveries: &[Delivery]) -> Self {
        deliveries
            .iter()
            .fold(Self::EMPTY, |load, delivery| load.add(delivery))
    }

    /// Returns this load with one more delivery on board.
    #[must_use]
    pub fn add(&self, delivery: &Delivery) -> Self {
        self.merge(&Self::single(delivery))
    }

    /// Returns the combined load of two partial routes.
    #[must_use]
    pub fn merge(&self, other: &Load) -> Self {
        Self::new(
            self.weight_kg + other.weight_kg,
            self.volume_m3 + other.volume_m3,
            self.stops + other.stops,
        )
    }

    /// Total weight in kilograms.
    pub fn weight_kg(&self) -> f64 {
        self.weight_kg
    }

    /// Total volume in cubic metres.
    pub fn volume_m3(&self) -> f64 {
        self.volume_m3
    }

    /// Number of stops.
    pub fn stops(&self) -> usize {
        self.stops
    }
}
