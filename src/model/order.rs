//! Order, order items, payment, and the cart DTO.
//!
//! An order is an append-only fact: once placed it is never mutated, and its
//! items carry the unit price captured at the moment of sale rather than a
//! live catalog lookup. The cart is the caller-held staging list; it crosses
//! the boundary as a typed sequence of (product, quantity) pairs, replacing
//! the original system's loose JSON string.

use crate::model::customer::CustomerId;
use crate::model::product::ProductId;
use crate::model::warehouse::WarehouseId;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct OrderId(pub u32);

impl From<u32> for OrderId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "order_{}", self.0)
    }
}

/// One requested purchase in a cart: product and quantity.
///
/// Quantity must be at least 1 and product ids must be distinct within a
/// cart; both are enforced at order creation before any actor is consulted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub product_id: ProductId,
    pub quantity: u32,
}

/// A line of a placed order, with the unit price frozen at placement time.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderItem {
    pub product_id: ProductId,
    pub quantity: u32,
    pub unit_price: f64,
}

/// Payment recorded together with its order, dated at commit time.
#[derive(Debug, Clone, PartialEq)]
pub struct Payment {
    pub amount: f64,
    pub paid_at: NaiveDate,
}

#[derive(Debug, Clone)]
pub struct Order {
    pub id: OrderId,
    pub customer_id: CustomerId,
    pub warehouse_id: WarehouseId,
    pub created_at: DateTime<Utc>,
    pub items: Vec<OrderItem>,
    pub total: f64,
    pub payment: Payment,
}

/// Payload for placing a new order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderCreate {
    pub customer_id: CustomerId,
    pub warehouse_id: WarehouseId,
    pub lines: Vec<CartLine>,
}
