//! # Customer Actor
//!
//! Master-data actor for customer records: create, get, list, and
//! name/email updates. No custom actions, no dependencies.

pub mod entity;
pub mod error;

pub use error::*;

use crate::framework::{ResourceActor, ResourceClient};
use crate::model::Customer;

/// Creates a new Customer actor and its generic client.
pub fn new() -> (ResourceActor<Customer>, ResourceClient<Customer>) {
    ResourceActor::new(32)
}
