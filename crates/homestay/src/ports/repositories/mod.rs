//! Repository Ports
//!
//! Abstract interfaces for data persistence operations, one per entity
//! collection. `find_all` always returns insertion order.

mod amenity_repository;
mod place_repository;
mod review_repository;
mod user_repository;

pub use amenity_repository::*;
pub use place_repository::*;
pub use review_repository::*;
pub use user_repository::*;
