//! Error types for the Fleet actor.

use crate::model::{DriverId, DriverStatus, VehicleNo, VehicleStatus};
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur in fleet registration and assignment.
#[derive(Debug, Error)]
pub enum FleetError {
    /// The driver id does not resolve to a registered driver.
    #[error("Driver not found: {0}")]
    DriverNotFound(DriverId),

    /// The vehicle number does not resolve to a registered vehicle.
    #[error("Vehicle not found: {0}")]
    VehicleNotFound(VehicleNo),

    /// A vehicle with this number is already registered.
    #[error("Vehicle already registered: {0}")]
    VehicleExists(VehicleNo),

    /// The driver is not in the `Available` state; the pairing was refused
    /// and neither party was changed.
    #[error("Driver {driver} is not available (status: {status})")]
    DriverUnavailable {
        driver: DriverId,
        status: DriverStatus,
    },

    /// The vehicle is not in the `Available` state; the pairing was refused
    /// and neither party was changed.
    #[error("Vehicle {vehicle} is not available (status: {status})")]
    VehicleUnavailable {
        vehicle: VehicleNo,
        status: VehicleStatus,
    },

    /// A required field was empty or missing.
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// The actor did not answer in time; the operation may not have happened.
    #[error("Fleet actor timed out after {0:?}")]
    Timeout(Duration),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
