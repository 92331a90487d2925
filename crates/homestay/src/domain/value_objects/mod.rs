//! Value Objects
//!
//! Immutable value types with validation at construction.

mod email;
mod rating;

pub use email::*;
pub use rating::*;
