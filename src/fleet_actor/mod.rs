//! # Fleet Actor
//!
//! Driver and vehicle management with race-free assignment. This actor is
//! hand-built rather than a [`ResourceActor`](crate::framework::ResourceActor)
//! because its central operation spans two entity collections: pairing a
//! driver with a vehicle must observe and mutate both under one exclusive
//! hold. The actor owns both maps, so two concurrent assignments contending
//! for the same driver or vehicle serialize on its mailbox and exactly one
//! wins.

pub mod actor;
pub mod error;
pub mod message;

pub use actor::FleetActor;
pub use error::FleetError;
pub use message::{FleetRequest, FleetResponse};

use crate::clients::FleetClient;

/// Creates a new Fleet actor and its client.
pub fn new() -> (FleetActor, FleetClient) {
    FleetActor::new(32)
}
