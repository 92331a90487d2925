//! In-memory repository adapters
//!
//! Each store is an id map plus an insertion-order list behind an async
//! RwLock, so `find_all` preserves insertion order and writes are
//! serialized per collection. The user store additionally keeps a
//! normalized-email secondary index and enforces the unique-email
//! constraint inside `save`, making the facade's check-then-act sequence
//! safe under concurrent callers.

mod amenity_repository;
mod place_repository;
mod review_repository;
mod user_repository;

pub use amenity_repository::*;
pub use place_repository::*;
pub use review_repository::*;
pub use user_repository::*;
