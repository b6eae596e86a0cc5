//! Error types for the Customer actor.

use crate::framework::FrameworkError;
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur during customer record operations.
#[derive(Debug, Error)]
pub enum CustomerError {
    /// The requested customer was not found.
    #[error("Customer not found: {0}")]
    NotFound(String),

    /// Name or email is missing.
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// The actor did not answer in time; the operation may not have happened.
    #[error("Customer actor timed out after {0:?}")]
    Timeout(Duration),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError> for CustomerError {
    fn from(e: FrameworkError) -> Self {
        match e.downcast_entity::<CustomerError>() {
            Ok(err) => err,
            Err(FrameworkError::NotFound(id)) => CustomerError::NotFound(id),
            Err(FrameworkError::Timeout(d)) => CustomerError::Timeout(d),
            Err(other) => CustomerError::ActorCommunicationError(other.to_string()),
        }
    }
}
