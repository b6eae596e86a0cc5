//! Entity trait implementation for the Warehouse domain type.
//!
//! The warehouse IS the inventory ledger: its stock map is the single source
//! of truth for sellable quantities, and `handle_action` is the only code
//! path that mutates it.

use super::actions::{WarehouseAction, WarehouseActionResult};
use super::error::InventoryError;
use crate::framework::ActorEntity;
use crate::model::{CartLine, ProductId, Warehouse, WarehouseCreate, WarehouseId};
use async_trait::async_trait;

impl Warehouse {
    /// All-or-nothing decrement across the given cart lines.
    ///
    /// Two passes in ascending product-id order: validate every line against
    /// current stock, then apply. A failed validation returns before any
    /// mutation, so a rejected reserve is indistinguishable from one that
    /// never happened.
    fn reserve(&mut self, mut lines: Vec<CartLine>) -> Result<(), InventoryError> {
        lines.sort_by_key(|line| line.product_id);

        for line in &lines {
            if line.quantity == 0 {
                return Err(InventoryError::InvalidQuantity(line.quantity));
            }
            let available = self.quantity_of(line.product_id);
            if available < line.quantity {
                return Err(InventoryError::InsufficientStock {
                    product: line.product_id,
                    requested: line.quantity,
                    available,
                });
            }
        }

        for line in &lines {
            // Validated above; u32 cannot go negative here.
            *self.stock.entry(line.product_id).or_insert(0) -= line.quantity;
        }
        Ok(())
    }

    /// Upsert-add: creates the stock row on first restock.
    fn restock(&mut self, product: ProductId, quantity: u32) -> Result<u32, InventoryError> {
        if quantity == 0 {
            return Err(InventoryError::InvalidQuantity(quantity));
        }
        let entry = self.stock.entry(product).or_insert(0);
        *entry = entry.saturating_add(quantity);
        Ok(*entry)
    }
}

#[async_trait]
impl ActorEntity for Warehouse {
    type Id = WarehouseId;
    type Create = WarehouseCreate;
    type Update = ();
    type Action = WarehouseAction;
    type ActionResult = WarehouseActionResult;
    type Context = ();
    type Error = InventoryError;

    fn from_create_params(id: WarehouseId, params: WarehouseCreate) -> Result<Self, InventoryError> {
        Ok(Warehouse::new(id, params.location))
    }

    async fn on_update(&mut self, _update: (), _: &()) -> Result<(), InventoryError> {
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: WarehouseAction,
        _: &(),
    ) -> Result<WarehouseActionResult, InventoryError> {
        match action {
            WarehouseAction::CheckStock(product) => {
                Ok(WarehouseActionResult::CheckStock(self.quantity_of(product)))
            }
            WarehouseAction::Restock {
                product_id,
                quantity,
            } => {
                let new_quantity = self.restock(product_id, quantity)?;
                Ok(WarehouseActionResult::Restock(new_quantity))
            }
            WarehouseAction::Reserve(lines) => {
                self.reserve(lines)?;
                Ok(WarehouseActionResult::Reserve(()))
            }
        }
    }
}
