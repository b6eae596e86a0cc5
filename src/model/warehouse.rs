//! Warehouse and inventory ledger types.
//!
//! A `Warehouse` owns the authoritative stock counter for every product it
//! carries. The map is keyed by [`ProductId`]; a missing key means quantity 0.
//! Quantities are `u32`, so a negative balance is unrepresentable — the
//! decrement path must check sufficiency before subtracting.

use crate::model::product::ProductId;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt::Display;

/// Type-safe identifier for Warehouses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WarehouseId(pub u32);

/// The single warehouse the current operation runs against.
pub const DEFAULT_WAREHOUSE: WarehouseId = WarehouseId(1);

impl From<u32> for WarehouseId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for WarehouseId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "warehouse_{}", self.0)
    }
}

#[derive(Debug, Clone)]
pub struct Warehouse {
    pub id: WarehouseId,
    pub location: String,
    /// Per-product stock. Rows are created implicitly on first restock.
    pub stock: HashMap<ProductId, u32>,
}

impl Warehouse {
    pub fn new(id: WarehouseId, location: impl Into<String>) -> Self {
        Self {
            id,
            location: location.into(),
            stock: HashMap::new(),
        }
    }

    /// Current quantity for a product; 0 when the product has no row.
    pub fn quantity_of(&self, product: ProductId) -> u32 {
        self.stock.get(&product).copied().unwrap_or(0)
    }
}

/// Payload for creating a new warehouse.
#[derive(Debug, Clone)]
pub struct WarehouseCreate {
    pub location: String,
}
