//! # Fleet Client
//!
//! High-level API for the Fleet actor. The fleet speaks its own message
//! protocol rather than the generic CRUD one, but the client follows the same
//! shape: cheap-to-clone sender, one-shot reply per request, bounded wait.

use crate::fleet_actor::{FleetError, FleetRequest};
use crate::framework::REQUEST_TIMEOUT;
use crate::model::{
    Driver, DriverCreate, DriverId, DriverStatus, Vehicle, VehicleCreate, VehicleNo, VehicleStatus,
};
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, instrument};

/// Client for interacting with the Fleet actor.
#[derive(Clone)]
pub struct FleetClient {
    sender: mpsc::Sender<FleetRequest>,
}

impl FleetClient {
    pub fn new(sender: mpsc::Sender<FleetRequest>) -> Self {
        Self { sender }
    }

    async fn request<R>(
        &self,
        msg: FleetRequest,
        response: oneshot::Receiver<Result<R, FleetError>>,
    ) -> Result<R, FleetError> {
        self.sender.send(msg).await.map_err(|_| {
            FleetError::ActorCommunicationError("fleet actor channel closed".to_string())
        })?;
        match tokio::time::timeout(REQUEST_TIMEOUT, response).await {
            Err(_) => Err(FleetError::Timeout(REQUEST_TIMEOUT)),
            Ok(Err(_)) => Err(FleetError::ActorCommunicationError(
                "fleet actor dropped the request".to_string(),
            )),
            Ok(Ok(result)) => result,
        }
    }

    #[instrument(skip(self, params), fields(name = %params.name))]
    pub async fn add_driver(&self, params: DriverCreate) -> Result<DriverId, FleetError> {
        debug!("Sending request");
        let (respond_to, response) = oneshot::channel();
        self.request(FleetRequest::AddDriver { params, respond_to }, response)
            .await
    }

    #[instrument(skip(self, params), fields(vehicle = %params.vehicle_no))]
    pub async fn add_vehicle(&self, params: VehicleCreate) -> Result<VehicleNo, FleetError> {
        debug!("Sending request");
        let (respond_to, response) = oneshot::channel();
        self.request(FleetRequest::AddVehicle { params, respond_to }, response)
            .await
    }

    #[instrument(skip(self))]
    pub async fn get_driver(&self, id: DriverId) -> Result<Option<Driver>, FleetError> {
        debug!("Sending request");
        let (respond_to, response) = oneshot::channel();
        self.request(FleetRequest::GetDriver { id, respond_to }, response)
            .await
    }

    #[instrument(skip(self))]
    pub async fn get_vehicle(&self, vehicle_no: VehicleNo) -> Result<Option<Vehicle>, FleetError> {
        debug!("Sending request");
        let (respond_to, response) = oneshot::channel();
        self.request(
            FleetRequest::GetVehicle {
                vehicle_no,
                respond_to,
            },
            response,
        )
        .await
    }

    /// Every registered driver, sorted by id.
    #[instrument(skip(self))]
    pub async fn list_drivers(&self) -> Result<Vec<Driver>, FleetError> {
        debug!("Sending request");
        let (respond_to, response) = oneshot::channel();
        self.request(FleetRequest::ListDrivers { respond_to }, response)
            .await
    }

    /// Every registered vehicle, sorted by registration number.
    #[instrument(skip(self))]
    pub async fn list_vehicles(&self) -> Result<Vec<Vehicle>, FleetError> {
        debug!("Sending request");
        let (respond_to, response) = oneshot::channel();
        self.request(FleetRequest::ListVehicles { respond_to }, response)
            .await
    }

    /// Pair an available driver with an available vehicle, or fail changing
    /// neither.
    #[instrument(skip(self))]
    pub async fn assign(&self, driver: DriverId, vehicle: VehicleNo) -> Result<(), FleetError> {
        debug!("Sending request");
        let (respond_to, response) = oneshot::channel();
        self.request(
            FleetRequest::Assign {
                driver,
                vehicle,
                respond_to,
            },
            response,
        )
        .await
    }

    /// Manual availability override; any recorded pairing stays as history.
    #[instrument(skip(self))]
    pub async fn set_driver_status(
        &self,
        id: DriverId,
        status: DriverStatus,
    ) -> Result<Driver, FleetError> {
        debug!("Sending request");
        let (respond_to, response) = oneshot::channel();
        self.request(
            FleetRequest::SetDriverStatus {
                id,
                status,
                respond_to,
            },
            response,
        )
        .await
    }

    /// Manual availability override; any recorded pairing stays as history.
    #[instrument(skip(self))]
    pub async fn set_vehicle_status(
        &self,
        vehicle_no: VehicleNo,
        status: VehicleStatus,
    ) -> Result<Vehicle, FleetError> {
        debug!("Sending request");
        let (respond_to, response) = oneshot::channel();
        self.request(
            FleetRequest::SetVehicleStatus {
                vehicle_no,
                status,
                respond_to,
            },
            response,
        )
        .await
    }
}
