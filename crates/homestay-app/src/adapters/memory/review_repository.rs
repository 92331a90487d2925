//! In-memory implementation of ReviewRepository

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use homestay::domain::{DomainError, Review};
use homestay::ports::ReviewRepository;

#[derive(Default)]
struct Inner {
    reviews: HashMap<Uuid, Review>,
    order: Vec<Uuid>,
}

/// In-memory review store
#[derive(Default)]
pub struct InMemoryReviewRepository {
    inner: RwLock<Inner>,
}

impl InMemoryReviewRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ReviewRepository for InMemoryReviewRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Review>, DomainError> {
        let inner = self.inner.read().await;
        Ok(inner.reviews.get(&id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Review>, DomainError> {
        let inner = self.inner.read().await;
        Ok(inner
            .order
            .iter()
            .filter_map(|id| inner.reviews.get(id))
            .cloned()
            .collect())
    }

    async fn save(&self, review: &Review) -> Result<Review, DomainError> {
        let mut inner = self.inner.write().await;
        if !inner.reviews.contains_key(&review.id) {
            inner.order.push(review.id);
        }
        inner.reviews.insert(review.id, review.clone());
        Ok(review.clone())
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let mut inner = self.inner.write().await;
        let existed = inner.reviews.remove(&id).is_some();
        if existed {
            inner.order.retain(|rid| *rid != id);
        }
        Ok(existed)
    }
}
