//! Product catalog types.
//!
//! A `Product` is master data: identity, name, unit price, and the optional
//! description/expiry columns. Sellable stock is NOT stored here — quantities
//! live in the warehouse's stock map, which is the single source of truth.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Products.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ProductId(pub u32);

impl From<u32> for ProductId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "product_{}", self.0)
    }
}

#[derive(Debug, Clone)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    /// Unit price; validated non-negative at creation and update.
    pub price: f64,
    pub description: Option<String>,
    pub expiry: Option<NaiveDate>,
}

impl Product {
    pub fn new(id: ProductId, name: impl Into<String>, price: f64) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            description: None,
            expiry: None,
        }
    }
}

/// Payload for creating a new product.
#[derive(Debug, Clone)]
pub struct ProductCreate {
    pub name: String,
    pub price: f64,
    pub description: Option<String>,
    pub expiry: Option<NaiveDate>,
}

/// Payload for updating an existing product. Identity and name are immutable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductUpdate {
    pub price: Option<f64>,
    pub description: Option<String>,
}
