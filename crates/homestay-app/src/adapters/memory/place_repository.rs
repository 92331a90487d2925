//! In-memory implementation of PlaceRepository

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use homestay::domain::{DomainError, Place};
use homestay::ports::PlaceRepository;

#[derive(Default)]
struct Inner {
    places: HashMap<Uuid, Place>,
    order: Vec<Uuid>,
}

/// In-memory place store
#[derive(Default)]
pub struct InMemoryPlaceRepository {
    inner: RwLock<Inner>,
}

impl InMemoryPlaceRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PlaceRepository for InMemoryPlaceRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Place>, DomainError> {
        let inner = self.inner.read().await;
        Ok(inner.places.get(&id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Place>, DomainError> {
        let inner = self.inner.read().await;
        Ok(inner
            .order
            .iter()
            .filter_map(|id| inner.places.get(id))
            .cloned()
            .collect())
    }

    async fn save(&self, place: &Place) -> Result<Place, DomainError> {
        let mut inner = self.inner.write().await;
        if !inner.places.contains_key(&place.id) {
            inner.order.push(place.id);
        }
        inner.places.insert(place.id, place.clone());
        Ok(place.clone())
    }
}
