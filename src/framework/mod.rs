//! Generic actor framework for resource management.
//!
//! The engine of the system: a generic, type-safe actor pattern where each
//! resource type gets its own Tokio task with exclusive ownership of its
//! state. Message processing inside an actor is strictly sequential, which is
//! what gives the domain layer its transactional guarantees — a multi-step
//! operation handled in one message either completes or leaves no trace.
//!
//! # Main Components
//!
//! - [`ActorEntity`] — trait a resource type implements to be managed
//! - [`ResourceActor`] — generic server loop owning the entity store
//! - [`ResourceClient`] — cloneable, timeout-bounded request API
//! - [`FrameworkError`] — plumbing errors, distinct from entity errors
//!
//! # Testing
//!
//! See [`mock`] for utilities to test clients without spawning full actors.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;

pub use actor::ResourceActor;
pub use client::{ResourceClient, REQUEST_TIMEOUT};
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    // Minimal entity exercising the whole request surface.

    #[derive(Clone, Debug, PartialEq)]
    struct Counter {
        id: u32,
        value: u32,
    }

    #[derive(Debug)]
    struct CounterCreate {
        start: u32,
    }

    #[derive(Debug)]
    struct CounterUpdate {
        value: u32,
    }

    #[derive(Debug)]
    enum CounterAction {
        AddChecked(u32),
    }

    #[derive(Debug, thiserror::Error)]
    enum CounterError {
        #[error("overflow")]
        Overflow,
    }

    #[async_trait]
    impl ActorEntity for Counter {
        type Id = u32;
        type Create = CounterCreate;
        type Update = CounterUpdate;
        type Action = CounterAction;
        type ActionResult = u32;
        type Context = ();
        type Error = CounterError;

        fn from_create_params(id: u32, params: CounterCreate) -> Result<Self, CounterError> {
            Ok(Self {
                id,
                value: params.start,
            })
        }

        async fn on_update(&mut self, update: CounterUpdate, _: &()) -> Result<(), CounterError> {
            self.value = update.value;
            Ok(())
        }

        async fn handle_action(
            &mut self,
            action: CounterAction,
            _: &(),
        ) -> Result<u32, CounterError> {
            match action {
                CounterAction::AddChecked(n) => {
                    self.value = self.value.checked_add(n).ok_or(CounterError::Overflow)?;
                    Ok(self.value)
                }
            }
        }
    }

    #[tokio::test]
    async fn test_resource_actor_lifecycle() {
        let (actor, client) = ResourceActor::<Counter>::new(10);
        tokio::spawn(actor.run(()));

        // Create
        let id = client.create(CounterCreate { start: 5 }).await.unwrap();
        assert_eq!(id, 1);

        // Action
        let value = client
            .perform_action(id, CounterAction::AddChecked(3))
            .await
            .unwrap();
        assert_eq!(value, 8);

        // Get reflects the action
        let counter = client.get(id).await.unwrap().unwrap();
        assert_eq!(counter.value, 8);

        // Update
        let updated = client.update(id, CounterUpdate { value: 1 }).await.unwrap();
        assert_eq!(updated.value, 1);

        // List sees exactly the one entity
        let all = client.list().await.unwrap();
        assert_eq!(all.len(), 1);

        // Delete
        client.delete(id).await.unwrap();
        assert!(client.get(id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_entity_error_is_downcastable() {
        let (actor, client) = ResourceActor::<Counter>::new(10);
        tokio::spawn(actor.run(()));

        let id = client
            .create(CounterCreate { start: u32::MAX })
            .await
            .unwrap();
        let err = client
            .perform_action(id, CounterAction::AddChecked(1))
            .await
            .unwrap_err();

        let entity_err = err.downcast_entity::<CounterError>().unwrap();
        assert!(matches!(entity_err, CounterError::Overflow));

        // A failed action leaves the value untouched.
        let counter = client.get(id).await.unwrap().unwrap();
        assert_eq!(counter.value, u32::MAX);
    }

    #[tokio::test]
    async fn test_get_unknown_id_returns_none() {
        let (actor, client) = ResourceActor::<Counter>::new(10);
        tokio::spawn(actor.run(()));

        assert!(client.get(42).await.unwrap().is_none());
    }
}
