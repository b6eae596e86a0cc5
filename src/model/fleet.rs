//! Driver and vehicle master data with their availability states.
//!
//! The status enums carry the original system's exact display strings
//! ("On-Trip", "In-Use", ...). Because the states are enums, an invalid
//! status cannot be stored; `FromStr` is where a bad string from an outer
//! surface turns into a typed error.

use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

/// Type-safe identifier for Drivers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DriverId(pub u32);

impl From<u32> for DriverId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for DriverId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "driver_{}", self.0)
    }
}

/// Natural-key identifier for Vehicles (the registration plate).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VehicleNo(pub String);

impl VehicleNo {
    pub fn new(no: impl Into<String>) -> Self {
        Self(no.into())
    }
}

impl Display for VehicleNo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Raised when a status string does not name a defined state.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid status: {0}")]
pub struct InvalidStatus(pub String);

/// Availability state gating whether a driver may be newly assigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DriverStatus {
    Available,
    OnTrip,
    Unavailable,
}

impl Display for DriverStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            DriverStatus::Available => "Available",
            DriverStatus::OnTrip => "On-Trip",
            DriverStatus::Unavailable => "Unavailable",
        };
        write!(f, "{s}")
    }
}

impl FromStr for DriverStatus {
    type Err = InvalidStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Available" => Ok(DriverStatus::Available),
            "On-Trip" => Ok(DriverStatus::OnTrip),
            "Unavailable" => Ok(DriverStatus::Unavailable),
            other => Err(InvalidStatus(other.to_string())),
        }
    }
}

/// Availability state gating whether a vehicle may be newly assigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VehicleStatus {
    Available,
    InUse,
    Maintenance,
}

impl Display for VehicleStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            VehicleStatus::Available => "Available",
            VehicleStatus::InUse => "In-Use",
            VehicleStatus::Maintenance => "Maintenance",
        };
        write!(f, "{s}")
    }
}

impl FromStr for VehicleStatus {
    type Err = InvalidStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Available" => Ok(VehicleStatus::Available),
            "In-Use" => Ok(VehicleStatus::InUse),
            "Maintenance" => Ok(VehicleStatus::Maintenance),
            other => Err(InvalidStatus(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Driver {
    pub id: DriverId,
    pub name: String,
    pub availability: DriverStatus,
    /// Vehicle of the current (or last) pairing.
    pub current_vehicle: Option<VehicleNo>,
}

impl Driver {
    pub fn new(id: DriverId, name: impl Into<String>, availability: DriverStatus) -> Self {
        Self {
            id,
            name: name.into(),
            availability,
            current_vehicle: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Vehicle {
    pub vehicle_no: VehicleNo,
    pub availability: VehicleStatus,
    pub location: String,
    /// Driver of the current (or last) pairing.
    pub current_driver: Option<DriverId>,
}

impl Vehicle {
    pub fn new(
        vehicle_no: VehicleNo,
        availability: VehicleStatus,
        location: impl Into<String>,
    ) -> Self {
        Self {
            vehicle_no,
            availability,
            location: location.into(),
            current_driver: None,
        }
    }
}

/// Payload for registering a new driver.
#[derive(Debug, Clone)]
pub struct DriverCreate {
    pub name: String,
    pub availability: DriverStatus,
}

/// Payload for registering a new vehicle.
#[derive(Debug, Clone)]
pub struct VehicleCreate {
    pub vehicle_no: VehicleNo,
    pub availability: VehicleStatus,
    pub location: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_strings_round_trip() {
        for s in ["Available", "On-Trip", "Unavailable"] {
            assert_eq!(s.parse::<DriverStatus>().unwrap().to_string(), s);
        }
        for s in ["Available", "In-Use", "Maintenance"] {
            assert_eq!(s.parse::<VehicleStatus>().unwrap().to_string(), s);
        }
    }

    #[test]
    fn unknown_status_is_rejected() {
        let err = "Sleeping".parse::<DriverStatus>().unwrap_err();
        assert_eq!(err, InvalidStatus("Sleeping".to_string()));
        assert!("in-use".parse::<VehicleStatus>().is_err());
    }
}
