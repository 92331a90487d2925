//! Ports
//!
//! Abstract interfaces the application layer depends on. Concrete
//! adapters live in the application crate.

pub mod repositories;
pub mod services;

pub use repositories::*;
pub use services::*;
