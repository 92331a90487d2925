//! Email Verifier Port
//!
//! External capability that checks a candidate address and yields its
//! normalized form. Implementations combine the syntactic check with a
//! deliverability check (DNS-level); both failure modes collapse to
//! `InvalidUserData` so the caller sees a single signal.

use async_trait::async_trait;

use crate::domain::{errors::DomainError, EmailAddress};

/// Verifies candidate email addresses
#[async_trait]
pub trait EmailVerifier: Send + Sync {
    /// Verify a candidate address, returning the normalized form to
    /// store. Fails with `InvalidUserData` on syntax or deliverability
    /// problems.
    async fn verify(&self, candidate: &str) -> Result<EmailAddress, DomainError>;
}
