//! Amenity Repository Port

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{errors::DomainError, Amenity};

/// Repository interface for Amenity entities
#[async_trait]
pub trait AmenityRepository: Send + Sync {
    /// Find an amenity by ID
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Amenity>, DomainError>;

    /// Find an amenity by exact name match; the uniqueness-check accessor
    async fn find_by_name(&self, name: &str) -> Result<Option<Amenity>, DomainError>;

    /// Find all amenities in insertion order
    async fn find_all(&self) -> Result<Vec<Amenity>, DomainError>;

    /// Save an amenity (insert or update)
    async fn save(&self, amenity: &Amenity) -> Result<Amenity, DomainError>;
}
