use quick_commerce::fleet_actor::FleetError;
use quick_commerce::lifecycle::BackOffice;
use quick_commerce::model::{
    DriverCreate, DriverStatus, VehicleCreate, VehicleNo, VehicleStatus,
};

async fn seed(system: &BackOffice) -> (quick_commerce::model::DriverId, VehicleNo) {
    let driver_id = system
        .fleet_client
        .add_driver(DriverCreate {
            name: "Ravi".to_string(),
            availability: DriverStatus::Available,
        })
        .await
        .unwrap();
    let vehicle_no = system
        .fleet_client
        .add_vehicle(VehicleCreate {
            vehicle_no: VehicleNo::new("KA-01-1234"),
            availability: VehicleStatus::Available,
            location: "Indiranagar".to_string(),
        })
        .await
        .unwrap();
    (driver_id, vehicle_no)
}

#[tokio::test]
async fn test_assignment_flips_and_links_both_parties() {
    let system = BackOffice::new();
    let (driver_id, vehicle_no) = seed(&system).await;

    system
        .fleet_client
        .assign(driver_id, vehicle_no.clone())
        .await
        .expect("Failed to assign");

    let driver = system
        .fleet_client
        .get_driver(driver_id)
        .await
        .unwrap()
        .expect("Driver not found");
    assert_eq!(driver.availability, DriverStatus::OnTrip);
    assert_eq!(driver.current_vehicle, Some(vehicle_no.clone()));

    let vehicle = system
        .fleet_client
        .get_vehicle(vehicle_no)
        .await
        .unwrap()
        .expect("Vehicle not found");
    assert_eq!(vehicle.availability, VehicleStatus::InUse);
    assert_eq!(vehicle.current_driver, Some(driver_id));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_busy_driver_refuses_second_assignment() {
    let system = BackOffice::new();
    let (driver_id, vehicle_no) = seed(&system).await;
    let second = system
        .fleet_client
        .add_vehicle(VehicleCreate {
            vehicle_no: VehicleNo::new("KA-01-5678"),
            availability: VehicleStatus::Available,
            location: "Koramangala".to_string(),
        })
        .await
        .unwrap();

    system
        .fleet_client
        .assign(driver_id, vehicle_no)
        .await
        .unwrap();

    let err = system
        .fleet_client
        .assign(driver_id, second.clone())
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        FleetError::DriverUnavailable {
            status: DriverStatus::OnTrip,
            ..
        }
    ));

    // The refused vehicle was not touched.
    let vehicle = system
        .fleet_client
        .get_vehicle(second)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(vehicle.availability, VehicleStatus::Available);
    assert_eq!(vehicle.current_driver, None);

    system.shutdown().await.unwrap();
}

/// A manual status override re-enables assignment, and it only changes the
/// status: the recorded pairing stays as history until the next assignment
/// overwrites it.
#[tokio::test]
async fn test_manual_release_reenables_assignment() {
    let system = BackOffice::new();
    let (driver_id, vehicle_no) = seed(&system).await;

    system
        .fleet_client
        .assign(driver_id, vehicle_no.clone())
        .await
        .unwrap();

    let driver = system
        .fleet_client
        .set_driver_status(driver_id, DriverStatus::Available)
        .await
        .unwrap();
    assert_eq!(driver.availability, DriverStatus::Available);
    assert_eq!(
        driver.current_vehicle,
        Some(vehicle_no.clone()),
        "Override must not clear the pairing history"
    );
    system
        .fleet_client
        .set_vehicle_status(vehicle_no.clone(), VehicleStatus::Available)
        .await
        .unwrap();

    system
        .fleet_client
        .assign(driver_id, vehicle_no)
        .await
        .expect("Released pair should be assignable again");

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_duplicate_vehicle_registration_is_rejected() {
    let system = BackOffice::new();
    let (_, vehicle_no) = seed(&system).await;

    let err = system
        .fleet_client
        .add_vehicle(VehicleCreate {
            vehicle_no: vehicle_no.clone(),
            availability: VehicleStatus::Available,
            location: "Elsewhere".to_string(),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, FleetError::VehicleExists(no) if no == vehicle_no));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_unknown_parties_are_reported() {
    let system = BackOffice::new();
    let (driver_id, vehicle_no) = seed(&system).await;

    let err = system
        .fleet_client
        .assign(quick_commerce::model::DriverId(99), vehicle_no)
        .await
        .unwrap_err();
    assert!(matches!(err, FleetError::DriverNotFound(_)));

    let err = system
        .fleet_client
        .assign(driver_id, VehicleNo::new("XX-00-0000"))
        .await
        .unwrap_err();
    assert!(matches!(err, FleetError::VehicleNotFound(_)));

    system.shutdown().await.unwrap();
}
