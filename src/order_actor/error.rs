//! Error types for the Order actor.
//!
//! Splits caller-input errors (empty cart, bad quantities — rejected before
//! any other actor is consulted) from business-rule failures (insufficient
//! stock) and transport failures, so a front end can render each precisely.

use crate::customer_actor::CustomerError;
use crate::framework::FrameworkError;
use crate::model::{CustomerId, ProductId};
use crate::product_actor::ProductError;
use crate::warehouse_actor::InventoryError;
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur during order placement.
#[derive(Debug, Error)]
pub enum OrderError {
    /// The requested order was not found.
    #[error("Order not found: {0}")]
    NotFound(String),

    /// The cart contains no lines.
    #[error("Cart is empty")]
    EmptyCart,

    /// A cart line requested zero units.
    #[error("Invalid quantity for {0}")]
    InvalidQuantity(ProductId),

    /// The same product appears in more than one cart line.
    #[error("Duplicate cart line for {0}")]
    DuplicateProduct(ProductId),

    /// The customer id does not resolve to a customer record.
    #[error("Unknown customer: {0}")]
    UnknownCustomer(CustomerId),

    /// A cart line references a product that is not in the catalog.
    #[error("Unknown product: {0}")]
    UnknownProduct(ProductId),

    /// The warehouse id does not resolve to a warehouse.
    #[error("Unknown warehouse: {0}")]
    UnknownWarehouse(String),

    /// The ledger rejected the reserve; no stock was decremented and no
    /// order was created. Reported verbatim for the first failing line.
    #[error("Insufficient stock for {product}: requested {requested}, available {available}")]
    InsufficientStock {
        product: ProductId,
        requested: u32,
        available: u32,
    },

    /// The actor did not answer in time; the operation may not have happened.
    #[error("Order actor timed out after {0:?}")]
    Timeout(Duration),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError> for OrderError {
    fn from(e: FrameworkError) -> Self {
        match e.downcast_entity::<OrderError>() {
            Ok(err) => err,
            Err(FrameworkError::NotFound(id)) => OrderError::NotFound(id),
            Err(FrameworkError::Timeout(d)) => OrderError::Timeout(d),
            Err(other) => OrderError::ActorCommunicationError(other.to_string()),
        }
    }
}

impl From<InventoryError> for OrderError {
    fn from(e: InventoryError) -> Self {
        match e {
            InventoryError::InsufficientStock {
                product,
                requested,
                available,
            } => OrderError::InsufficientStock {
                product,
                requested,
                available,
            },
            InventoryError::NotFound(id) => OrderError::UnknownWarehouse(id),
            InventoryError::Timeout(d) => OrderError::Timeout(d),
            other => OrderError::ActorCommunicationError(other.to_string()),
        }
    }
}

impl From<CustomerError> for OrderError {
    fn from(e: CustomerError) -> Self {
        match e {
            CustomerError::Timeout(d) => OrderError::Timeout(d),
            other => OrderError::ActorCommunicationError(other.to_string()),
        }
    }
}

impl From<ProductError> for OrderError {
    fn from(e: ProductError) -> Self {
        match e {
            ProductError::Timeout(d) => OrderError::Timeout(d),
            other => OrderError::ActorCommunicationError(other.to_string()),
        }
    }
}
