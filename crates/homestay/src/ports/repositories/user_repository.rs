//! User Repository Port

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{errors::DomainError, EmailAddress, User};

/// Repository interface for User entities
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by ID
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError>;

    /// Find a user by normalized email. Backed by a secondary index in
    /// the in-memory adapter; this is the uniqueness-check accessor.
    async fn find_by_email(&self, email: &EmailAddress) -> Result<Option<User>, DomainError>;

    /// Find all users in insertion order
    async fn find_all(&self) -> Result<Vec<User>, DomainError>;

    /// Save a user (insert or update). Enforces the unique-email
    /// constraint atomically at the store level.
    async fn save(&self, user: &User) -> Result<User, DomainError>;

    /// Detach a review reference from a user's collection; returns the
    /// updated user, or `ReviewNotFound` when the user never held it.
    async fn remove_review(&self, user_id: Uuid, review_id: Uuid) -> Result<User, DomainError>;
}
