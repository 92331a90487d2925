//! In-memory implementation of AmenityRepository

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use homestay::domain::{Amenity, DomainError};
use homestay::ports::AmenityRepository;

#[derive(Default)]
struct Inner {
    amenities: HashMap<Uuid, Amenity>,
    order: Vec<Uuid>,
}

/// In-memory amenity store
#[derive(Default)]
pub struct InMemoryAmenityRepository {
    inner: RwLock<Inner>,
}

impl InMemoryAmenityRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AmenityRepository for InMemoryAmenityRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Amenity>, DomainError> {
        let inner = self.inner.read().await;
        Ok(inner.amenities.get(&id).cloned())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Amenity>, DomainError> {
        let inner = self.inner.read().await;
        // Exact match, scanned in insertion order
        Ok(inner
            .order
            .iter()
            .filter_map(|id| inner.amenities.get(id))
            .find(|a| a.name == name)
            .cloned())
    }

    async fn find_all(&self) -> Result<Vec<Amenity>, DomainError> {
        let inner = self.inner.read().await;
        Ok(inner
            .order
            .iter()
            .filter_map(|id| inner.amenities.get(id))
            .cloned()
            .collect())
    }

    async fn save(&self, amenity: &Amenity) -> Result<Amenity, DomainError> {
        let mut inner = self.inner.write().await;
        if !inner.amenities.contains_key(&amenity.id) {
            inner.order.push(amenity.id);
        }
        inner.amenities.insert(amenity.id, amenity.clone());
        Ok(amenity.clone())
    }
}
