//! The Fleet actor server.
//!
//! Owns both the driver and the vehicle maps, so an `Assign` holds exclusive
//! access to both sides while it validates and flips them. Drivers get
//! sequential ids like other entities; vehicles are keyed by their natural
//! registration number.

use super::error::FleetError;
use super::message::FleetRequest;
use crate::clients::FleetClient;
use crate::model::{Driver, DriverId, DriverStatus, Vehicle, VehicleNo, VehicleStatus};
use std::collections::HashMap;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// Actor that manages the delivery fleet: drivers, vehicles, and pairings.
pub struct FleetActor {
    receiver: mpsc::Receiver<FleetRequest>,
    drivers: HashMap<DriverId, Driver>,
    vehicles: HashMap<VehicleNo, Vehicle>,
    next_driver_id: u32,
}

impl FleetActor {
    /// Creates a new `FleetActor` and its associated `FleetClient`.
    pub fn new(buffer_size: usize) -> (Self, FleetClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            drivers: HashMap::new(),
            vehicles: HashMap::new(),
            next_driver_id: 1,
        };
        (actor, FleetClient::new(sender))
    }

    /// Runs the actor's event loop, processing messages until the channel closes.
    pub async fn run(mut self) {
        info!("Fleet actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                FleetRequest::AddDriver { params, respond_to } => {
                    debug!(?params, "AddDriver");
                    let result = if params.name.trim().is_empty() {
                        warn!("AddDriver failed: empty name");
                        Err(FleetError::MissingField("name"))
                    } else {
                        let id = DriverId(self.next_driver_id);
                        self.next_driver_id += 1;
                        self.drivers
                            .insert(id, Driver::new(id, params.name, params.availability));
                        info!(%id, drivers = self.drivers.len(), "Driver registered");
                        Ok(id)
                    };
                    let _ = respond_to.send(result);
                }
                FleetRequest::AddVehicle { params, respond_to } => {
                    debug!(?params, "AddVehicle");
                    let no = params.vehicle_no.clone();
                    let result = if self.vehicles.contains_key(&no) {
                        warn!(vehicle = %no, "AddVehicle failed: already registered");
                        Err(FleetError::VehicleExists(no))
                    } else {
                        self.vehicles.insert(
                            no.clone(),
                            Vehicle::new(no.clone(), params.availability, params.location),
                        );
                        info!(vehicle = %no, vehicles = self.vehicles.len(), "Vehicle registered");
                        Ok(no)
                    };
                    let _ = respond_to.send(result);
                }
                FleetRequest::GetDriver { id, respond_to } => {
                    let driver = self.drivers.get(&id).cloned();
                    debug!(%id, found = driver.is_some(), "GetDriver");
                    let _ = respond_to.send(Ok(driver));
                }
                FleetRequest::GetVehicle {
                    vehicle_no,
                    respond_to,
                } => {
                    let vehicle = self.vehicles.get(&vehicle_no).cloned();
                    debug!(vehicle = %vehicle_no, found = vehicle.is_some(), "GetVehicle");
                    let _ = respond_to.send(Ok(vehicle));
                }
                FleetRequest::ListDrivers { respond_to } => {
                    debug!(size = self.drivers.len(), "ListDrivers");
                    let mut drivers: Vec<Driver> = self.drivers.values().cloned().collect();
                    drivers.sort_by_key(|d| d.id.0);
                    let _ = respond_to.send(Ok(drivers));
                }
                FleetRequest::ListVehicles { respond_to } => {
                    debug!(size = self.vehicles.len(), "ListVehicles");
                    let mut vehicles: Vec<Vehicle> = self.vehicles.values().cloned().collect();
                    vehicles.sort_by(|a, b| a.vehicle_no.0.cmp(&b.vehicle_no.0));
                    let _ = respond_to.send(Ok(vehicles));
                }
                FleetRequest::Assign {
                    driver,
                    vehicle,
                    respond_to,
                } => {
                    debug!(%driver, %vehicle, "Assign");
                    let result = self.assign(driver, &vehicle);
                    match &result {
                        Ok(()) => info!(%driver, %vehicle, "Assigned"),
                        Err(e) => warn!(%driver, %vehicle, error = %e, "Assign refused"),
                    }
                    let _ = respond_to.send(result);
                }
                FleetRequest::SetDriverStatus {
                    id,
                    status,
                    respond_to,
                } => {
                    debug!(%id, %status, "SetDriverStatus");
                    let result = match self.drivers.get_mut(&id) {
                        Some(driver) => {
                            driver.availability = status;
                            info!(%id, %status, "Driver status set");
                            Ok(driver.clone())
                        }
                        None => {
                            warn!(%id, "Not found");
                            Err(FleetError::DriverNotFound(id))
                        }
                    };
                    let _ = respond_to.send(result);
                }
                FleetRequest::SetVehicleStatus {
                    vehicle_no,
                    status,
                    respond_to,
                } => {
                    debug!(vehicle = %vehicle_no, %status, "SetVehicleStatus");
                    let result = match self.vehicles.get_mut(&vehicle_no) {
                        Some(vehicle) => {
                            vehicle.availability = status;
                            info!(vehicle = %vehicle_no, %status, "Vehicle status set");
                            Ok(vehicle.clone())
                        }
                        None => {
                            warn!(vehicle = %vehicle_no, "Not found");
                            Err(FleetError::VehicleNotFound(vehicle_no))
                        }
                    };
                    let _ = respond_to.send(result);
                }
            }
        }

        info!(
            drivers = self.drivers.len(),
            vehicles = self.vehicles.len(),
            "Shutdown"
        );
    }

    /// Validate both parties, then flip both. No mutation happens until every
    /// check has passed, so a refusal leaves driver and vehicle untouched.
    fn assign(&mut self, driver_id: DriverId, vehicle_no: &VehicleNo) -> Result<(), FleetError> {
        let driver = self
            .drivers
            .get(&driver_id)
            .ok_or(FleetError::DriverNotFound(driver_id))?;
        let vehicle = self
            .vehicles
            .get(vehicle_no)
            .ok_or_else(|| FleetError::VehicleNotFound(vehicle_no.clone()))?;

        if driver.availability != DriverStatus::Available {
            return Err(FleetError::DriverUnavailable {
                driver: driver_id,
                status: driver.availability,
            });
        }
        if vehicle.availability != VehicleStatus::Available {
            return Err(FleetError::VehicleUnavailable {
                vehicle: vehicle_no.clone(),
                status: vehicle.availability,
            });
        }

        if let Some(driver) = self.drivers.get_mut(&driver_id) {
            driver.availability = DriverStatus::OnTrip;
            driver.current_vehicle = Some(vehicle_no.clone());
        }
        if let Some(vehicle) = self.vehicles.get_mut(vehicle_no) {
            vehicle.availability = VehicleStatus::InUse;
            vehicle.current_driver = Some(driver_id);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> FleetActor {
        let (mut actor, _client) = FleetActor::new(8);
        actor.drivers.insert(
            DriverId(1),
            Driver::new(DriverId(1), "Asha", DriverStatus::Available),
        );
        actor.vehicles.insert(
            VehicleNo::new("KA-01-1234"),
            Vehicle::new(
                VehicleNo::new("KA-01-1234"),
                VehicleStatus::Available,
                "Indiranagar",
            ),
        );
        actor.next_driver_id = 2;
        actor
    }

    #[test]
    fn assign_flips_and_links_both_parties() {
        let mut actor = fixture();
        actor.assign(DriverId(1), &VehicleNo::new("KA-01-1234")).unwrap();

        let driver = &actor.drivers[&DriverId(1)];
        assert_eq!(driver.availability, DriverStatus::OnTrip);
        assert_eq!(driver.current_vehicle, Some(VehicleNo::new("KA-01-1234")));

        let vehicle = &actor.vehicles[&VehicleNo::new("KA-01-1234")];
        assert_eq!(vehicle.availability, VehicleStatus::InUse);
        assert_eq!(vehicle.current_driver, Some(DriverId(1)));
    }

    #[test]
    fn busy_driver_refuses_and_leaves_vehicle_untouched() {
        let mut actor = fixture();
        if let Some(d) = actor.drivers.get_mut(&DriverId(1)) {
            d.availability = DriverStatus::OnTrip;
        }

        let err = actor
            .assign(DriverId(1), &VehicleNo::new("KA-01-1234"))
            .unwrap_err();
        assert!(matches!(
            err,
            FleetError::DriverUnavailable {
                driver: DriverId(1),
                status: DriverStatus::OnTrip,
            }
        ));

        let vehicle = &actor.vehicles[&VehicleNo::new("KA-01-1234")];
        assert_eq!(vehicle.availability, VehicleStatus::Available);
        assert_eq!(vehicle.current_driver, None);
    }

    #[test]
    fn busy_vehicle_refuses_and_leaves_driver_untouched() {
        let mut actor = fixture();
        if let Some(v) = actor.vehicles.get_mut(&VehicleNo::new("KA-01-1234")) {
            v.availability = VehicleStatus::Maintenance;
        }

        let err = actor
            .assign(DriverId(1), &VehicleNo::new("KA-01-1234"))
            .unwrap_err();
        assert!(matches!(err, FleetError::VehicleUnavailable { .. }));

        let driver = &actor.drivers[&DriverId(1)];
        assert_eq!(driver.availability, DriverStatus::Available);
        assert_eq!(driver.current_vehicle, None);
    }

    #[test]
    fn unknown_parties_are_reported() {
        let mut actor = fixture();
        assert!(matches!(
            actor.assign(DriverId(99), &VehicleNo::new("KA-01-1234")),
            Err(FleetError::DriverNotFound(DriverId(99)))
        ));
        assert!(matches!(
            actor.assign(DriverId(1), &VehicleNo::new("XX-00-0000")),
            Err(FleetError::VehicleNotFound(_))
        ));
    }
}
