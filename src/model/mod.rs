//! Pure data structures (entities, ids, DTOs) managed by the actors.

pub mod customer;
pub mod fleet;
pub mod order;
pub mod product;
pub mod warehouse;

pub use customer::*;
pub use fleet::*;
pub use order::*;
pub use product::*;
pub use warehouse::*;
