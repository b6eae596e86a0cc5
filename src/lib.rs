//! # Quick-Commerce Back Office
//!
//! An actor-based back office for a rapid grocery delivery service:
//! transactional order placement against a per-warehouse inventory ledger,
//! driver/vehicle fleet assignment, and sales reporting.
//!
//! ## Architecture
//!
//! Every mutable collection is owned by exactly one actor that processes its
//! mailbox sequentially; the sequential loop is the transaction mechanism.
//!
//! - **[framework]**: The generic [`ResourceActor`](framework::ResourceActor)
//!   / [`ResourceClient`](framework::ResourceClient) pair and the
//!   [`ActorEntity`](framework::ActorEntity) trait the domain types implement.
//! - **[model]**: Pure data structures — products, customers, warehouses,
//!   orders, drivers, vehicles — with typed ids and status enums.
//! - **[warehouse_actor]**: The inventory ledger; every stock mutation runs
//!   inside its loop, so a multi-line reserve is all-or-nothing.
//! - **[order_actor]**: Order placement as an `on_create` orchestration over
//!   the customer, product, and warehouse actors.
//! - **[fleet_actor]**: Drivers and vehicles in one actor, so an assignment
//!   checks and flips both sides atomically.
//! - **[clients]**: One typed client per actor.
//! - **[report]**: Read-only sales aggregation over the live actors.
//! - **[lifecycle]**: System startup, wiring, tracing, and graceful shutdown.
//!
//! ## Testing
//!
//! See [`framework::mock`] for utilities to test clients without spawning
//! full actors; the `tests/` directory exercises whole placement and
//! assignment flows against a running [`lifecycle::BackOffice`].

pub mod clients;
pub mod customer_actor;
pub mod fleet_actor;
pub mod framework;
pub mod lifecycle;
pub mod model;
pub mod order_actor;
pub mod product_actor;
pub mod report;
pub mod warehouse_actor;
