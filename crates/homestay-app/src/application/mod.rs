//! Application Services (Use Cases)
//!
//! One facade service per entity type. Each wraps its repository port
//! plus the ports needed for cross-entity consistency checks, validates
//! input, and raises the typed `DomainError` signals; it never catches
//! its own validation failures.

mod amenity_service;
mod place_service;
mod review_service;
mod user_service;

pub use amenity_service::*;
pub use place_service::*;
pub use review_service::*;
pub use user_service::*;
