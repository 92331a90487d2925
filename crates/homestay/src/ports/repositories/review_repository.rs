//! Review Repository Port

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{errors::DomainError, Review};

/// Repository interface for Review entities
#[async_trait]
pub trait ReviewRepository: Send + Sync {
    /// Find a review by ID
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Review>, DomainError>;

    /// Find all reviews in insertion order
    async fn find_all(&self) -> Result<Vec<Review>, DomainError>;

    /// Save a review (insert or update)
    async fn save(&self, review: &Review) -> Result<Review, DomainError>;

    /// Delete a review by ID; true when it existed
    async fn delete(&self, id: Uuid) -> Result<bool, DomainError>;
}
