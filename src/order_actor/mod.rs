//! # Order Actor
//!
//! Transactional order placement. The actor's sequential loop plays the role
//! of the store transaction: each `Create` runs the full placement — customer
//! lookup, catalog pricing, atomic stock reserve, payment record — before the
//! next request is taken, and the order is inserted only if every step
//! succeeded. Orders are append-only; there is no update surface.

pub mod entity;
pub mod error;

pub use entity::OrderContext;
pub use error::OrderError;

use crate::framework::{ResourceActor, ResourceClient};
use crate::model::Order;

/// Creates a new Order actor and its generic client.
pub fn new() -> (ResourceActor<Order>, ResourceClient<Order>) {
    ResourceActor::new(32)
}
