//! Error types for the Warehouse actor (the inventory ledger).

use crate::framework::FrameworkError;
use crate::model::ProductId;
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur during inventory ledger operations.
#[derive(Debug, Error)]
pub enum InventoryError {
    /// The requested warehouse was not found.
    #[error("Warehouse not found: {0}")]
    NotFound(String),

    /// A decrement asked for more units than the ledger holds.
    ///
    /// Carries the actual available quantity so the caller can render a
    /// precise message; the ledger is left completely unchanged.
    #[error("Insufficient stock for {product}: requested {requested}, available {available}")]
    InsufficientStock {
        product: ProductId,
        requested: u32,
        available: u32,
    },

    /// Restock and reserve quantities must be at least 1.
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(u32),

    /// The actor did not answer in time; the operation may not have happened.
    #[error("Warehouse actor timed out after {0:?}")]
    Timeout(Duration),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError> for InventoryError {
    fn from(e: FrameworkError) -> Self {
        match e.downcast_entity::<InventoryError>() {
            Ok(err) => err,
            Err(FrameworkError::NotFound(id)) => InventoryError::NotFound(id),
            Err(FrameworkError::Timeout(d)) => InventoryError::Timeout(d),
            Err(other) => InventoryError::ActorCommunicationError(other.to_string()),
        }
    }
}
