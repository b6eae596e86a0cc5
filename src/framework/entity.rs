//! # ActorEntity Trait
//!
//! The contract every managed resource (Product, Customer, Warehouse, Order)
//! implements so the generic [`ResourceActor`](crate::framework::ResourceActor)
//! can own it. Associated types pin down the DTOs, the custom action set, the
//! injected dependencies, and the error type, so a `ProductCreate` can never be
//! sent to the customer actor — the compiler rules that class of bug out.
//!
//! # Hooks
//! The trait provides default implementations for the lifecycle hooks
//! [`ActorEntity::on_create`] and [`ActorEntity::on_delete`]; implement them
//! only when the entity needs validation or side effects (the Order entity
//! does all of its placement orchestration in `on_create`).

use async_trait::async_trait;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any resource entity must implement to be managed by `ResourceActor`.
///
/// # Async & Context
/// The trait is `#[async_trait]` so hooks can call other actors. The `Context`
/// type carries those dependencies; it is injected into `run()` rather than the
/// constructor ("late binding"), which keeps actor wiring free of circular
/// references.
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// The unique identifier for this entity.
    /// Must be convertible from `u32` for automatic ID generation.
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug + From<u32>;

    /// The data required to create a new instance.
    type Create: Send + Sync + Debug;

    /// The data required to update an existing instance.
    type Update: Send + Sync + Debug;

    /// Enum of resource-specific operations beyond CRUD (e.g. `Reserve`).
    type Action: Send + Sync + Debug;

    /// The result type returned by custom actions.
    type ActionResult: Send + Sync + Debug;

    /// The runtime dependencies injected into every hook.
    /// Use `()` when the entity needs none.
    type Context: Send + Sync;

    /// The error type for this entity.
    ///
    /// One enum per actor, not one per message: the error type is the union of
    /// everything the entity's hooks and actions can fail with. Clients get a
    /// single type to match on, at the cost of a little precision per call.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Construct the full entity from the ID and payload.
    /// Called synchronously before `on_create`; this is the place for input
    /// validation that must not touch any other actor.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    // --- Lifecycle hooks (async) ---

    /// Called after the entity is constructed and before it is stored.
    /// If this fails, the entity is never inserted.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Called when an update request is received.
    async fn on_update(
        &mut self,
        update: Self::Update,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error>;

    /// Called immediately before the entity is removed.
    async fn on_delete(&self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    // --- Action handler (async) ---

    /// Handle a custom resource-specific action.
    async fn handle_action(
        &mut self,
        action: Self::Action,
        _ctx: &Self::Context,
    ) -> Result<Self::ActionResult, Self::Error>;
}
