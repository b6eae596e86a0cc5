//! Demo binary: brings up the full back office, walks one day of operations
//! through it — stock a warehouse, place an order, dispatch a driver, pull
//! the sales report — and shuts down cleanly.
//!
//! Run with `RUST_LOG=info cargo run` for the commit log, `RUST_LOG=debug`
//! for full request payloads.

use chrono::Utc;
use quick_commerce::lifecycle::{setup_tracing, BackOffice};
use quick_commerce::model::{
    CartLine, CustomerCreate, DriverCreate, DriverStatus, OrderCreate, ProductCreate,
    VehicleCreate, VehicleNo, VehicleStatus, WarehouseCreate,
};
use tracing::{error, info, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    info!("Starting back office");
    let system = BackOffice::new();

    // Master data: one warehouse, one product, one customer.
    let warehouse_id = system
        .warehouse_client
        .create_warehouse(WarehouseCreate {
            location: "Indiranagar".to_string(),
        })
        .await
        .map_err(|e| e.to_string())?;

    let product_id = system
        .product_client
        .create_product(ProductCreate {
            name: "Milk 1L".to_string(),
            price: 30.0,
            description: Some("Full cream, pasteurized".to_string()),
            expiry: None,
        })
        .await
        .map_err(|e| e.to_string())?;

    let customer_id = system
        .customer_client
        .create_customer(CustomerCreate {
            name: "Alice".to_string(),
            email: "alice@example.com".to_string(),
        })
        .await
        .map_err(|e| e.to_string())?;

    system
        .warehouse_client
        .restock(warehouse_id, product_id, 10)
        .await
        .map_err(|e| e.to_string())?;
    info!(%warehouse_id, %product_id, "Stocked 10 units");

    // Place an order; placement prices the cart, reserves stock, and records
    // payment as one transaction.
    let span = tracing::info_span!("order_processing");
    let order_result = async {
        info!("Placing order");
        system
            .order_client
            .place_order(OrderCreate {
                customer_id,
                warehouse_id,
                lines: vec![CartLine {
                    product_id,
                    quantity: 4,
                }],
            })
            .await
    }
    .instrument(span)
    .await;

    match order_result {
        Ok(order_id) => info!(%order_id, "Order placed"),
        Err(e) => error!(error = %e, "Order placement failed"),
    }

    let remaining = system
        .warehouse_client
        .check_stock(warehouse_id, product_id)
        .await
        .map_err(|e| e.to_string())?;
    info!(remaining, "Stock after order");

    // Dispatch: register a driver and a vehicle, then pair them.
    let driver_id = system
        .fleet_client
        .add_driver(DriverCreate {
            name: "Ravi".to_string(),
            availability: DriverStatus::Available,
        })
        .await
        .map_err(|e| e.to_string())?;

    let vehicle_no = system
        .fleet_client
        .add_vehicle(VehicleCreate {
            vehicle_no: VehicleNo::new("KA-01-1234"),
            availability: VehicleStatus::Available,
            location: "Indiranagar".to_string(),
        })
        .await
        .map_err(|e| e.to_string())?;

    system
        .fleet_client
        .assign(driver_id, vehicle_no.clone())
        .await
        .map_err(|e| e.to_string())?;
    info!(%driver_id, vehicle = %vehicle_no, "Driver dispatched");

    // Today's sales.
    let today = Utc::now().date_naive();
    let report = system
        .reporter
        .generate(today, today)
        .await
        .map_err(|e| e.to_string())?;
    for row in &report {
        info!(
            order_id = %row.order_id,
            customer = %row.customer_name,
            total = row.order_total,
            warehouse = %row.warehouse_location,
            "Sale"
        );
    }

    system.shutdown().await?;
    info!("Done");
    Ok(())
}
