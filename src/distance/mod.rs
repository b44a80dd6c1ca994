//! Distances between depot and delivery positions.
//!
//! Provides the great-circle metric and a dense distance matrix used during
//! route construction.

mod haversine;
mod matrix;

pub use haversine::{distance_km, DistanceMetric, Haversine, EARTH_RADIUS_KM};
pub use matrix::DistanceMatrix;
