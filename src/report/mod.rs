//! # Sales Report
//!
//! Read-only aggregation over placed orders. The reporter holds clients, not
//! data: each run takes a fresh snapshot from the order actor and joins in
//! customer names and warehouse locations, so it can never dirty-read an
//! order that is mid-placement — the order actor only stores completed ones.

use crate::clients::{CustomerClient, OrderClient, WarehouseClient};
use crate::customer_actor::CustomerError;
use crate::framework::ActorClient;
use crate::model::{CustomerId, OrderId, WarehouseId};
use crate::order_actor::OrderError;
use crate::warehouse_actor::InventoryError;
use chrono::NaiveDate;
use std::collections::HashMap;
use thiserror::Error;
use tracing::{info, instrument, warn};

/// Errors that can occur while generating a sales report.
#[derive(Debug, Error)]
pub enum ReportError {
    /// The requested window ends before it starts.
    #[error("Invalid report range: {start} is after {end}")]
    InvalidRange { start: NaiveDate, end: NaiveDate },

    #[error(transparent)]
    Order(#[from] OrderError),

    #[error(transparent)]
    Customer(#[from] CustomerError),

    #[error(transparent)]
    Inventory(#[from] InventoryError),
}

/// One row of the sales report: an order joined with its customer and
/// fulfilling warehouse.
#[derive(Debug, Clone, PartialEq)]
pub struct SalesReportRow {
    pub order_id: OrderId,
    pub customer_name: String,
    pub order_total: f64,
    pub payment_date: NaiveDate,
    pub warehouse_location: String,
}

/// Generates sales reports by querying the live actors.
#[derive(Clone)]
pub struct SalesReporter {
    orders: OrderClient,
    customers: CustomerClient,
    warehouses: WarehouseClient,
}

impl SalesReporter {
    pub fn new(
        orders: OrderClient,
        customers: CustomerClient,
        warehouses: WarehouseClient,
    ) -> Self {
        Self {
            orders,
            customers,
            warehouses,
        }
    }

    /// Report every order paid within `[start, end]` (both ends inclusive),
    /// sorted by payment date and then order id. A same-day report passes
    /// `start == end`; an empty window yields an empty report, not an error.
    #[instrument(skip(self))]
    pub async fn generate(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<SalesReportRow>, ReportError> {
        if start > end {
            return Err(ReportError::InvalidRange { start, end });
        }

        let orders = self.orders.list_orders().await?;
        let mut customer_names: HashMap<CustomerId, String> = HashMap::new();
        let mut warehouse_locations: HashMap<WarehouseId, String> = HashMap::new();
        let mut rows = Vec::new();

        for order in orders {
            if order.payment.paid_at < start || order.payment.paid_at > end {
                continue;
            }

            if !customer_names.contains_key(&order.customer_id) {
                if let Some(customer) = self.customers.get(order.customer_id).await? {
                    customer_names.insert(order.customer_id, customer.name);
                }
            }
            if !warehouse_locations.contains_key(&order.warehouse_id) {
                if let Some(warehouse) = self.warehouses.get(order.warehouse_id).await? {
                    warehouse_locations.insert(order.warehouse_id, warehouse.location);
                }
            }

            // Inner-join semantics: an order whose referents are gone is
            // dropped from the report rather than shown half-joined.
            let (Some(customer_name), Some(warehouse_location)) = (
                customer_names.get(&order.customer_id),
                warehouse_locations.get(&order.warehouse_id),
            ) else {
                warn!(order_id = %order.id, "Skipping order with missing referents");
                continue;
            };

            rows.push(SalesReportRow {
                order_id: order.id,
                customer_name: customer_name.clone(),
                order_total: order.total,
                payment_date: order.payment.paid_at,
                warehouse_location: warehouse_location.clone(),
            });
        }

        rows.sort_by_key(|r| (r.payment_date, r.order_id));
        info!(rows = rows.len(), "Report generated");
        Ok(rows)
    }
}
