use quick_commerce::lifecycle::BackOffice;
use quick_commerce::model::{
    CartLine, CustomerCreate, DriverCreate, DriverStatus, OrderCreate, ProductCreate,
    VehicleCreate, VehicleNo, VehicleStatus, WarehouseCreate,
};

/// Concurrent orders against exactly enough stock: all succeed, stock ends
/// at zero. The warehouse actor serializes the reserves.
#[tokio::test]
async fn test_concurrent_orders_with_sufficient_stock() {
    let system = BackOffice::new();

    let warehouse_id = system
        .warehouse_client
        .create_warehouse(WarehouseCreate {
            location: "HSR Layout".to_string(),
        })
        .await
        .unwrap();
    let product_id = system
        .product_client
        .create_product(ProductCreate {
            name: "Eggs (dozen)".to_string(),
            price: 80.0,
            description: None,
            expiry: None,
        })
        .await
        .unwrap();
    let customer_id = system
        .customer_client
        .create_customer(CustomerCreate {
            name: "Bob".to_string(),
            email: "bob@example.com".to_string(),
        })
        .await
        .unwrap();
    system
        .warehouse_client
        .restock(warehouse_id, product_id, 20)
        .await
        .unwrap();

    let mut handles = vec![];
    for _ in 0..10 {
        let order_client = system.order_client.clone();
        handles.push(tokio::spawn(async move {
            order_client
                .place_order(OrderCreate {
                    customer_id,
                    warehouse_id,
                    lines: vec![CartLine {
                        product_id,
                        quantity: 2,
                    }],
                })
                .await
        }));
    }

    let mut successful = 0;
    for handle in handles {
        if handle.await.unwrap().is_ok() {
            successful += 1;
        }
    }
    assert_eq!(successful, 10, "Expected every order to succeed");

    let final_stock = system
        .warehouse_client
        .check_stock(warehouse_id, product_id)
        .await
        .unwrap();
    assert_eq!(final_stock, 0, "All stock should be consumed");

    system.shutdown().await.unwrap();
}

/// Concurrent orders racing for more stock than exists: the winners consume
/// what is there, the rest are refused, and the ledger never oversells.
#[tokio::test]
async fn test_oversell_race_is_lost_by_someone() {
    let system = BackOffice::new();

    let warehouse_id = system
        .warehouse_client
        .create_warehouse(WarehouseCreate {
            location: "Whitefield".to_string(),
        })
        .await
        .unwrap();
    let product_id = system
        .product_client
        .create_product(ProductCreate {
            name: "Butter 500g".to_string(),
            price: 250.0,
            description: None,
            expiry: None,
        })
        .await
        .unwrap();
    let customer_id = system
        .customer_client
        .create_customer(CustomerCreate {
            name: "Carol".to_string(),
            email: "carol@example.com".to_string(),
        })
        .await
        .unwrap();
    system
        .warehouse_client
        .restock(warehouse_id, product_id, 10)
        .await
        .unwrap();

    // 8 orders of 3 against 10 units: only 3 can fit.
    let mut handles = vec![];
    for _ in 0..8 {
        let order_client = system.order_client.clone();
        handles.push(tokio::spawn(async move {
            order_client
                .place_order(OrderCreate {
                    customer_id,
                    warehouse_id,
                    lines: vec![CartLine {
                        product_id,
                        quantity: 3,
                    }],
                })
                .await
        }));
    }

    let mut successful = 0;
    let mut failed = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(_) => successful += 1,
            Err(_) => failed += 1,
        }
    }
    assert_eq!(successful, 3, "Only three orders of 3 fit in 10 units");
    assert_eq!(failed, 5);

    let final_stock = system
        .warehouse_client
        .check_stock(warehouse_id, product_id)
        .await
        .unwrap();
    assert_eq!(final_stock, 1, "10 - 3*3 units must remain");

    system.shutdown().await.unwrap();
}

/// Two concurrent assignments contending for the same driver: exactly one
/// wins. The fleet actor holds both maps, so the loser sees the flipped
/// status, never a half-applied pairing.
#[tokio::test]
async fn test_concurrent_assignments_one_winner() {
    let system = BackOffice::new();

    let driver_id = system
        .fleet_client
        .add_driver(DriverCreate {
            name: "Ravi".to_string(),
            availability: DriverStatus::Available,
        })
        .await
        .unwrap();
    for no in ["KA-01-0001", "KA-01-0002"] {
        system
            .fleet_client
            .add_vehicle(VehicleCreate {
                vehicle_no: VehicleNo::new(no),
                availability: VehicleStatus::Available,
                location: "Depot".to_string(),
            })
            .await
            .unwrap();
    }

    let mut handles = vec![];
    for no in ["KA-01-0001", "KA-01-0002"] {
        let fleet = system.fleet_client.clone();
        handles.push(tokio::spawn(async move {
            fleet.assign(driver_id, VehicleNo::new(no)).await
        }));
    }

    let mut successful = 0;
    for handle in handles {
        if handle.await.unwrap().is_ok() {
            successful += 1;
        }
    }
    assert_eq!(successful, 1, "Exactly one assignment must win the driver");

    // Exactly one vehicle ended up in use.
    let vehicles = system.fleet_client.list_vehicles().await.unwrap();
    let in_use = vehicles
        .iter()
        .filter(|v| v.availability == VehicleStatus::InUse)
        .count();
    assert_eq!(in_use, 1);

    system.shutdown().await.unwrap();
}
