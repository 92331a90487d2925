//! Service Ports
//!
//! Abstract interfaces for external capabilities.

mod email_verifier;

pub use email_verifier::*;
