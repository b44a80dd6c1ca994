//! Crate error type.

use thiserror::Error;

use crate::models::{CapacityViolation, DeliveryId};

/// Errors surfaced to callers of the planner and the name parsers.
///
/// All variants are local validation failures; none of them is worth
/// retrying with the same input.
#[derive(Debug, Error)]
pub enum Error {
    /// A vehicle class name did not match any catalogue entry.
    #[error("invalid vehicle class: {name}. Accepted classes: {accepted}")]
    InvalidVehicleClass {
        /// The name as supplied.
        name: String,
        /// Comma-separated canonical names.
        accepted: String,
    },

    /// An algorithm name did not match any route-construction strategy.
    #[error("invalid algorithm: {name}. Accepted algorithms: {accepted}")]
    InvalidAlgorithmName {
        /// The name as supplied.
        name: String,
        /// Comma-separated canonical names.
        accepted: String,
    },

    /// A route does not fit the vehicle.
    #[error(transparent)]
    Capacity(#[from] CapacityViolation),

    /// The same delivery id was supplied twice.
    #[error("delivery {0} appears more than once in the candidate list")]
    DuplicateDelivery(DeliveryId),

    /// Planner configuration could not be parsed.
    #[error("invalid planner configuration: {0}")]
    Config(#[from] serde_json::Error),
}

/// Alias for results produced by this crate.
pub type Result<T> = std::result::Result<T, Error>;
