//! Vehicle capacity profiles.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::Load;
use crate::error::Error;

/// Named entries of the fixed vehicle catalogue.
///
/// Names are matched case-insensitively. `bike`, `van` and `truck` are
/// accepted as aliases of `light`, `medium` and `heavy`.
///
/// # Examples
///
/// ```
/// use u_tour::models::VehicleKind;
///
/// let kind: VehicleKind = "Medium".parse().unwrap();
/// assert_eq!(kind, VehicleKind::Medium);
/// assert_eq!("TRUCK".parse::<VehicleKind>().unwrap(), VehicleKind::Heavy);
/// assert!("scooter".parse::<VehicleKind>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VehicleKind {
    /// 50 kg, 0.5 m³, 15 stops.
    #[serde(alias = "bike")]
    Light,
    /// 1000 kg, 8 m³, 50 stops.
    #[serde(alias = "van")]
    Medium,
    /// 5000 kg, 40 m³, 100 stops.
    #[serde(alias = "truck")]
    Heavy,
}

impl VehicleKind {
    /// Every catalogue entry, lightest first.
    pub const ALL: [VehicleKind; 3] = [VehicleKind::Light, VehicleKind::Medium, VehicleKind::Heavy];

    /// Canonical lowercase name.
    pub fn name(&self) -> &'static str {
        match self {
            VehicleKind::Light => "light",
            VehicleKind::Medium => "medium",
            VehicleKind::Heavy => "heavy",
        }
    }

    /// Capacity profile of this catalogue entry.
    pub fn class(&self) -> VehicleClass {
        match self {
            VehicleKind::Light => VehicleClass::new(50.0, 0.5, 15),
            VehicleKind::Medium => VehicleClass::new(1000.0, 8.0, 50),
            VehicleKind::Heavy => VehicleClass::new(5000.0, 40.0, 100),
        }
    }

    fn accepted_names() -> String {
        Self::ALL
            .iter()
            .map(VehicleKind::name)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for VehicleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for VehicleKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" | "bike" => Ok(VehicleKind::Light),
            "medium" | "van" => Ok(VehicleKind::Medium),
            "heavy" | "truck" => Ok(VehicleKind::Heavy),
            _ => Err(Error::InvalidVehicleClass {
                name: s.to_owned(),
                accepted: Self::accepted_names(),
            }),
        }
    }
}

/// Capacity limits of a vehicle: weight, volume and number of stops.
///
/// Usually obtained from the catalogue ([`VehicleClass::light`],
/// [`VehicleClass::from_name`], ...) and optionally tightened per vehicle
/// with the `with_*` builders.
///
/// # Examples
///
/// ```
/// use u_tour::models::VehicleClass;
///
/// let v = VehicleClass::medium();
/// assert!(v.can_handle(800.0, 6.0));
/// assert!(!v.can_handle(1200.0, 6.0));
/// assert!(!v.can_handle_stops(800.0, 6.0, 51));
///
/// let small = VehicleClass::from_name("van").unwrap().with_max_stops(2);
/// assert_eq!(small.max_stops(), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VehicleClass {
    max_weight_kg: f64,
    max_volume_m3: f64,
    max_stops: usize,
}

impl VehicleClass {
    /// Creates a capacity profile with explicit limits.
    pub const fn new(max_weight_kg: f64, max_volume_m3: f64, max_stops: usize) -> Self {
        Self {
            max_weight_kg,
            max_volume_m3,
            max_stops,
        }
    }

    /// The `light` catalogue entry.
    pub fn light() -> Self {
        VehicleKind::Light.class()
    }

    /// The `medium` catalogue entry.
    pub fn medium() -> Self {
        VehicleKind::Medium.class()
    }

    /// The `heavy` catalogue entry.
    pub fn heavy() -> Self {
        VehicleKind::Heavy.class()
    }

    /// Resolves a catalogue entry by case-insensitive name.
    ///
    /// Fails with [`Error::InvalidVehicleClass`] for unknown names.
    pub fn from_name(name: &str) -> Result<Self, Error> {
        name.parse::<VehicleKind>().map(|kind| kind.class())
    }

    /// Overrides the weight limit.
    pub fn with_max_weight_kg(mut self, max: f64) -> Self {
        self.max_weight_kg = max;
        self
    }

    /// Overrides the volume limit.
    pub fn with_max_volume_m3(mut self, max: f64) -> Self {
        self.max_volume_m3 = max;
        self
    }

    /// Overrides the stop-count limit.
    pub fn with_max_stops(mut self, max: usize) -> Self {
        self.max_stops = max;
        self
    }

    /// Maximum total weight in kilograms.
    pub fn max_weight_kg(&self) -> f64 {
        self.max_weight_kg
    }

    /// Maximum total volume in cubic metres.
    pub fn max_volume_m3(&self) -> f64 {
        self.max_volume_m3
    }

    /// Maximum number of stops on one tour.
    pub fn max_stops(&self) -> usize {
        self.max_stops
    }

    /// Returns `true` if a load of this weight and volume fits, ignoring
    /// the stop limit.
    pub fn can_handle(&self, weight_kg: f64, volume_m3: f64) -> bool {
        weight_kg <= self.max_weight_kg && volume_m3 <= self.max_volume_m3
    }

    /// Returns `true` if a load of this weight, volume and stop count fits.
    pub fn can_handle_stops(&self, weight_kg: f64, volume_m3: f64, stops: usize) -> bool {
        self.can_handle(weight_kg, volume_m3) && stops <= self.max_stops
    }

    /// Returns `true` if the aggregated load fits in every dimension.
    pub fn fits(&self, load: &Load) -> bool {
        self.can_handle_stops(load.weight_kg(), load.volume_m3(), load.stops())
    }
}

impl From<VehicleKind> for VehicleClass {
    fn from(kind: VehicleKind) -> Self {
        kind.class()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("light", 50.0, 0.5, 15)]
    #[case("LIGHT", 50.0, 0.5, 15)]
    #[case("bike", 50.0, 0.5, 15)]
    #[case("Medium", 1000.0, 8.0, 50)]
    #[case("van", 1000.0, 8.0, 50)]
    #[case("heavy", 5000.0, 40.0, 100)]
    #[case(" Truck ", 5000.0, 40.0, 100)]
    fn test_catalogue_lookup(
        #[case] name: &str,
        #[case] weight: f64,
        #[case] volume: f64,
        #[case] stops: usize,
    ) {
        let v = VehicleClass::from_name(name).expect("known class");
        assert_eq!(v.max_weight_kg(), weight);
        assert_eq!(v.max_volume_m3(), volume);
        assert_eq!(v.max_stops(), stops);
    }

    #[test]
    fn test_unknown_class() {
        let err = VehicleClass::from_name("scooter").unwrap_err();
        match err {
            Error::InvalidVehicleClass { name, accepted } => {
                assert_eq!(name, "scooter");
                assert_eq!(accepted, "light, medium, heavy");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_can_handle_boundaries() {
        let v = VehicleClass::light();
        assert!(v.can_handle(50.0, 0.5));
        assert!(!v.can_handle(50.1, 0.5));
        assert!(!v.can_handle(50.0, 0.51));
        assert!(v.can_handle_stops(50.0, 0.5, 15));
        assert!(!v.can_handle_stops(50.0, 0.5, 16));
    }

    #[test]
    fn test_overrides() {
        let v = VehicleClass::medium()
            .with_max_weight_kg(200.0)
            .with_max_volume_m3(2.0)
            .with_max_stops(3);
        assert_eq!(v.max_weight_kg(), 200.0);
        assert_eq!(v.max_volume_m3(), 2.0);
        assert_eq!(v.max_stops(), 3);
    }

    #[test]
    fn test_fits_load() {
        let v = VehicleClass::new(100.0, 1.0, 2);
        assert!(v.fits(&Load::new(100.0, 1.0, 2)));
        assert!(!v.fits(&Load::new(100.0, 1.0, 3)));
    }

    #[test]
    fn test_kind_serde_alias() {
        let kind: VehicleKind = serde_json::from_str("\"truck\"").expect("alias");
        assert_eq!(kind, VehicleKind::Heavy);
        assert_eq!(serde_json::to_string(&kind).expect("ser"), "\"heavy\"");
    }
}
