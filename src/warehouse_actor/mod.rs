//! # Warehouse Actor (Inventory Ledger)
//!
//! One actor instance manages all warehouses; each warehouse entity owns the
//! authoritative per-product stock map for its location. The ledger contract
//! — `check_stock`, `restock`, `reserve` — is expressed as custom actions so
//! that every stock mutation runs inside the actor's sequential loop:
//!
//! - two reserves racing for the last units of a product are serialized, so
//!   they can never both succeed or drive a quantity negative;
//! - a multi-line reserve is checked and applied as one unit — no caller can
//!   observe or cause a partial decrement;
//! - reserves against different warehouses do not contend on anything except
//!   the actor's mailbox.
//!
//! Nothing outside this module mutates stock. The ordering and reporting
//! paths only read.

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::framework::{ResourceActor, ResourceClient};
use crate::model::Warehouse;

/// Creates a new Warehouse actor and its generic client.
pub fn new() -> (ResourceActor<Warehouse>, ResourceClient<Warehouse>) {
    ResourceActor::new(32)
}
