//! Message protocol for the Fleet actor.
//!
//! Drivers and vehicles are managed by one actor rather than two, because the
//! core operation — `Assign` — must check and flip a driver and a vehicle as
//! a single step. Splitting them into separate actors would reintroduce the
//! two-writer race the actor model is here to remove.

use super::error::FleetError;
use crate::model::{
    Driver, DriverCreate, DriverId, DriverStatus, Vehicle, VehicleCreate, VehicleNo, VehicleStatus,
};
use tokio::sync::oneshot;

/// One-shot response channel carrying a fleet result.
pub type FleetResponse<T> = oneshot::Sender<Result<T, FleetError>>;

/// Requests understood by the Fleet actor.
pub enum FleetRequest {
    AddDriver {
        params: DriverCreate,
        respond_to: FleetResponse<DriverId>,
    },
    AddVehicle {
        params: VehicleCreate,
        respond_to: FleetResponse<VehicleNo>,
    },
    GetDriver {
        id: DriverId,
        respond_to: FleetResponse<Option<Driver>>,
    },
    GetVehicle {
        vehicle_no: VehicleNo,
        respond_to: FleetResponse<Option<Vehicle>>,
    },
    ListDrivers {
        respond_to: FleetResponse<Vec<Driver>>,
    },
    ListVehicles {
        respond_to: FleetResponse<Vec<Vehicle>>,
    },
    /// Pair an available driver with an available vehicle. Both are checked
    /// and both are flipped within one message, or neither is touched.
    Assign {
        driver: DriverId,
        vehicle: VehicleNo,
        respond_to: FleetResponse<()>,
    },
    /// Manual availability override. Only the status changes; any recorded
    /// pairing is left as history.
    SetDriverStatus {
        id: DriverId,
        status: DriverStatus,
        respond_to: FleetResponse<Driver>,
    },
    /// Manual availability override. Only the status changes; any recorded
    /// pairing is left as history.
    SetVehicleStatus {
        vehicle_no: VehicleNo,
        status: VehicleStatus,
        respond_to: FleetResponse<Vehicle>,
    },
}
