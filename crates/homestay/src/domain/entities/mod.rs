//! Domain Entities
//!
//! Core domain models. Every entity is assigned a generated id and
//! creation timestamp at construction; whitelist updates go through the
//! per-entity patch structs, which always refresh the modification
//! timestamp (even when the patch is empty).

mod amenity;
mod place;
mod review;
mod user;

pub use amenity::*;
pub use place::*;
pub use review::*;
pub use user::*;
