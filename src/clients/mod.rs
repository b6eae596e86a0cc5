//! # Resource Clients
//!
//! One thin, typed client per actor. Each wraps the generic channel plumbing
//! and exposes the operations that make sense for its resource, mapping
//! framework errors into the actor's own error type at the boundary.

pub mod customer_client;
pub mod fleet_client;
pub mod order_client;
pub mod product_client;
pub mod warehouse_client;

pub use customer_client::CustomerClient;
pub use fleet_client::FleetClient;
pub use order_client::OrderClient;
pub use product_client::ProductClient;
pub use warehouse_client::WarehouseClient;
