//! Error types for the Product actor.

use crate::framework::FrameworkError;
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur during product catalog operations.
#[derive(Debug, Error)]
pub enum ProductError {
    /// The requested product was not found.
    #[error("Product not found: {0}")]
    NotFound(String),

    /// The provided price is negative or not a finite number.
    #[error("Invalid price: {0}")]
    InvalidPrice(f64),

    /// The actor did not answer in time; the operation may not have happened.
    #[error("Product actor timed out after {0:?}")]
    Timeout(Duration),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError> for ProductError {
    fn from(e: FrameworkError) -> Self {
        match e.downcast_entity::<ProductError>() {
            Ok(err) => err,
            Err(FrameworkError::NotFound(id)) => ProductError::NotFound(id),
            Err(FrameworkError::Timeout(d)) => ProductError::Timeout(d),
            Err(other) => ProductError::ActorCommunicationError(other.to_string()),
        }
    }
}
