//! # Product Actor
//!
//! Master-data actor for the product catalog: create, get, list, and the
//! price/description update. It owns no stock — quantities belong to the
//! warehouse actor — so it has no custom actions and no dependencies.

pub mod entity;
pub mod error;

pub use error::*;

use crate::framework::{ResourceActor, ResourceClient};
use crate::model::Product;

/// Creates a new Product actor and its generic client.
pub fn new() -> (ResourceActor<Product>, ResourceClient<Product>) {
    ResourceActor::new(32)
}
