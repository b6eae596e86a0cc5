//! # Framework Errors
//!
//! Errors raised by the actor plumbing itself, as opposed to the typed
//! per-entity errors defined next to each actor. Entity errors cross the
//! channel boundary boxed inside [`FrameworkError::EntityError`]; domain
//! clients downcast them back to their concrete type so structured detail
//! (requested vs available stock, entity ids) survives to the caller.

/// Errors that can occur within the actor framework itself.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    /// The actor's channel is closed; it has shut down or never started.
    #[error("Actor closed")]
    ActorClosed,
    /// The actor dropped the response channel without answering.
    #[error("Actor dropped response channel")]
    ActorDropped,
    /// The actor did not answer within the request timeout.
    #[error("Actor did not respond within {0:?}")]
    Timeout(std::time::Duration),
    #[error("Item not found: {0}")]
    NotFound(String),
    /// A typed error raised by the entity's own hooks or actions.
    #[error("Entity error: {0}")]
    EntityError(Box<dyn std::error::Error + Send + Sync>),
}

impl FrameworkError {
    /// Recover the concrete entity error carried by [`FrameworkError::EntityError`].
    ///
    /// Returns `Err(self)` unchanged when the error is not an entity error of
    /// type `E`, so callers can fall through to a generic mapping.
    pub fn downcast_entity<E>(self) -> Result<E, FrameworkError>
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        match self {
            FrameworkError::EntityError(boxed) => boxed
                .downcast::<E>()
                .map(|e| *e)
                .map_err(FrameworkError::EntityError),
            other => Err(other),
        }
    }
}
