//! Domain model types for single-vehicle delivery tours.
//!
//! Provides the core abstractions: geographic points and the depot,
//! deliveries with weight/volume demand, vehicle capacity profiles, load
//! aggregates, and the typed capacity violations reported by validation.

mod delivery;
mod geo_point;
mod load;
mod vehicle;
mod violation;

pub use delivery::{Delivery, DeliveryId};
pub use geo_point::{Depot, GeoPoint};
pub use load::Load;
pub use vehicle::{VehicleClass, VehicleKind};
pub use violation::{CapacityDimension, CapacityViolation};
