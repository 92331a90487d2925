//! Place Repository Port

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{errors::DomainError, Place};

/// Repository interface for Place entities
#[async_trait]
pub trait PlaceRepository: Send + Sync {
    /// Find a place by ID
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Place>, DomainError>;

    /// Find all places in insertion order
    async fn find_all(&self) -> Result<Vec<Place>, DomainError>;

    /// Save a place (insert or update)
    async fn save(&self, place: &Place) -> Result<Place, DomainError>;
}
