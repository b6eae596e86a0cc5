//! # System Lifecycle
//!
//! Startup, wiring, and graceful shutdown of the actor system, plus tracing
//! setup. Actors are created without dependencies, then started with their
//! dependencies injected into `run()`; shutdown drops every client and waits
//! for each actor task to drain and exit.

pub mod back_office;
pub mod tracing;

pub use back_office::BackOffice;
pub use tracing::setup_tracing;
