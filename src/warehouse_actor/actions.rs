//! Custom actions for the Warehouse actor — the ledger contract.
//!
//! These are the only operations that touch stock quantities. Every one is
//! handled inside the warehouse actor's sequential loop, which is what makes
//! check-and-subtract indivisible with respect to concurrent callers.

use crate::model::{CartLine, ProductId};

/// Ledger operations on a warehouse's stock map.
#[derive(Debug, Clone)]
pub enum WarehouseAction {
    /// Read the current quantity for a product (0 if no row). Read-only.
    CheckStock(ProductId),
    /// Additive restock; creates the row if absent. Quantity must be ≥ 1.
    Restock { product_id: ProductId, quantity: u32 },
    /// Multi-line decrement-if-sufficient, all lines or none.
    ///
    /// Lines are checked and applied in ascending product-id order; the first
    /// line that does not fit aborts the whole action with no change made.
    Reserve(Vec<CartLine>),
}

/// Results from WarehouseActions — variants match 1:1 with WarehouseAction.
#[derive(Debug, Clone)]
pub enum WarehouseActionResult {
    /// Current stock level.
    CheckStock(u32),
    /// New quantity after the restock was applied.
    Restock(u32),
    /// All lines were decremented.
    Reserve(()),
}
