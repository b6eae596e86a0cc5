//! # Warehouse Client
//!
//! High-level API for the Warehouse actor. Exposes the ledger contract
//! (`check_stock`, `restock`, `reserve`) plus warehouse record maintenance.

use crate::framework::{ActorClient, FrameworkError, ResourceClient};
use crate::model::{CartLine, ProductId, Warehouse, WarehouseCreate, WarehouseId};
use crate::warehouse_actor::{InventoryError, WarehouseAction, WarehouseActionResult};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Warehouse actor.
#[derive(Clone)]
pub struct WarehouseClient {
    inner: ResourceClient<Warehouse>,
}

impl WarehouseClient {
    pub fn new(inner: ResourceClient<Warehouse>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn create_warehouse(
        &self,
        params: WarehouseCreate,
    ) -> Result<WarehouseId, InventoryError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(InventoryError::from)
    }

    /// Current quantity of a product at a warehouse; 0 when no stock row exists.
    #[instrument(skip(self))]
    pub async fn check_stock(
        &self,
        warehouse: WarehouseId,
        product: ProductId,
    ) -> Result<u32, InventoryError> {
        debug!("Checking stock");
        match self
            .inner
            .perform_action(warehouse, WarehouseAction::CheckStock(product))
            .await
        {
            Ok(WarehouseActionResult::CheckStock(level)) => Ok(level),
            Ok(_) => unreachable!("CheckStock action must return CheckStock result"),
            Err(e) => Err(InventoryError::from(e)),
        }
    }

    /// Additive restock; upserts the stock row. Returns the new quantity.
    #[instrument(skip(self))]
    pub async fn restock(
        &self,
        warehouse: WarehouseId,
        product: ProductId,
        quantity: u32,
    ) -> Result<u32, InventoryError> {
        debug!("Restocking {} units", quantity);
        match self
            .inner
            .perform_action(
                warehouse,
                WarehouseAction::Restock {
                    product_id: product,
                    quantity,
                },
            )
            .await
        {
            Ok(WarehouseActionResult::Restock(new_quantity)) => Ok(new_quantity),
            Ok(_) => unreachable!("Restock action must return Restock result"),
            Err(e) => Err(InventoryError::from(e)),
        }
    }

    /// Atomically decrement stock for every cart line, or fail changing nothing.
    #[instrument(skip(self, lines))]
    pub async fn reserve(
        &self,
        warehouse: WarehouseId,
        lines: Vec<CartLine>,
    ) -> Result<(), InventoryError> {
        debug!(line_count = lines.len(), "Reserving stock");
        match self
            .inner
            .perform_action(warehouse, WarehouseAction::Reserve(lines))
            .await
        {
            Ok(WarehouseActionResult::Reserve(())) => Ok(()),
            Ok(_) => unreachable!("Reserve action must return Reserve result"),
            Err(e) => Err(InventoryError::from(e)),
        }
    }
}

#[async_trait]
impl ActorClient<Warehouse> for WarehouseClient {
    type Error = InventoryError;

    fn inner(&self) -> &ResourceClient<Warehouse> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        InventoryError::from(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::mock::{create_mock_client, expect_action};

    #[tokio::test]
    async fn test_check_stock_returns_level() {
        let (client, mut receiver) = create_mock_client::<Warehouse>(10);
        let warehouse_client = WarehouseClient::new(client);

        let check_task = tokio::spawn(async move {
            warehouse_client
                .check_stock(WarehouseId(1), ProductId(3))
                .await
        });

        let (id, action, responder) = expect_action(&mut receiver)
            .await
            .expect("Expected Action request");
        assert_eq!(id, WarehouseId(1));
        assert!(matches!(action, WarehouseAction::CheckStock(p) if p == ProductId(3)));

        responder
            .send(Ok(WarehouseActionResult::CheckStock(42)))
            .unwrap();

        assert_eq!(check_task.await.unwrap().unwrap(), 42);
    }

    #[tokio::test]
    async fn test_reserve_surfaces_structured_insufficient_stock() {
        let (client, mut receiver) = create_mock_client::<Warehouse>(10);
        let warehouse_client = WarehouseClient::new(client);

        let reserve_task = tokio::spawn(async move {
            warehouse_client
                .reserve(
                    WarehouseId(1),
                    vec![CartLine {
                        product_id: ProductId(3),
                        quantity: 7,
                    }],
                )
                .await
        });

        let (_, _, responder) = expect_action(&mut receiver)
            .await
            .expect("Expected Action request");

        responder
            .send(Err(FrameworkError::EntityError(Box::new(
                InventoryError::InsufficientStock {
                    product: ProductId(3),
                    requested: 7,
                    available: 6,
                },
            ))))
            .unwrap();

        // The typed detail must survive the framework boundary.
        match reserve_task.await.unwrap().unwrap_err() {
            InventoryError::InsufficientStock {
                product,
                requested,
                available,
            } => {
                assert_eq!(product, ProductId(3));
                assert_eq!(requested, 7);
                assert_eq!(available, 6);
            }
            other => panic!("expected InsufficientStock, got {other}"),
        }
    }
}
