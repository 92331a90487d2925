//! Infrastructure adapters
//!
//! Concrete implementations of the domain ports.

pub mod email;
pub mod memory;
