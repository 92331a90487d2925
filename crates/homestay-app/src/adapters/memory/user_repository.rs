//! In-memory implementation of UserRepository

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use homestay::domain::{DomainError, EmailAddress, User};
use homestay::ports::UserRepository;

#[derive(Default)]
struct Inner {
    users: HashMap<Uuid, User>,
    order: Vec<Uuid>,
    /// normalized email -> user id
    email_index: HashMap<String, Uuid>,
}

/// In-memory user store with a unique-email index
#[derive(Default)]
pub struct InMemoryUserRepository {
    inner: RwLock<Inner>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError> {
        let inner = self.inner.read().await;
        Ok(inner.users.get(&id).cloned())
    }

    async fn find_by_email(&self, email: &EmailAddress) -> Result<Option<User>, DomainError> {
        let inner = self.inner.read().await;
        Ok(inner
            .email_index
            .get(email.as_str())
            .and_then(|id| inner.users.get(id))
            .cloned())
    }

    async fn find_all(&self) -> Result<Vec<User>, DomainError> {
        let inner = self.inner.read().await;
        Ok(inner
            .order
            .iter()
            .filter_map(|id| inner.users.get(id))
            .cloned()
            .collect())
    }

    async fn save(&self, user: &User) -> Result<User, DomainError> {
        let mut inner = self.inner.write().await;
        let email_key = user.email.as_str().to_string();

        // Unique-email constraint, checked under the write lock so a
        // concurrent create cannot slip between check and insert.
        if let Some(holder) = inner.email_index.get(&email_key) {
            if *holder != user.id {
                return Err(DomainError::EmailAlreadyExists(email_key));
            }
        }

        let previous_email = inner
            .users
            .get(&user.id)
            .map(|u| u.email.as_str().to_string());
        match previous_email {
            Some(old_key) => {
                if old_key != email_key {
                    inner.email_index.remove(&old_key);
                }
            }
            None => inner.order.push(user.id),
        }

        inner.email_index.insert(email_key, user.id);
        inner.users.insert(user.id, user.clone());
        Ok(user.clone())
    }

    async fn remove_review(&self, user_id: Uuid, review_id: Uuid) -> Result<User, DomainError> {
        let mut inner = self.inner.write().await;
        let user = inner
            .users
            .get_mut(&user_id)
            .ok_or(DomainError::UserNotFound(user_id))?;

        if !user.review_ids.contains(&review_id) {
            return Err(DomainError::ReviewNotFound(review_id));
        }
        user.review_ids.retain(|id| *id != review_id);
        Ok(user.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(email: &str) -> User {
        User::new(
            "Ada".to_string(),
            "Lovelace".to_string(),
            EmailAddress::parse(email).unwrap(),
            false,
        )
    }

    #[tokio::test]
    async fn test_save_enforces_unique_email() {
        let repo = InMemoryUserRepository::new();
        repo.save(&user("ada@example.com")).await.unwrap();

        let err = repo.save(&user("ada@example.com")).await.unwrap_err();
        assert!(matches!(err, DomainError::EmailAlreadyExists(_)));
    }

    #[tokio::test]
    async fn test_save_same_user_is_not_a_conflict() {
        let repo = InMemoryUserRepository::new();
        let mut stored = repo.save(&user("ada@example.com")).await.unwrap();
        stored.first_name = "Augusta".to_string();
        repo.save(&stored).await.unwrap();

        let found = repo.find_by_id(stored.id).await.unwrap().unwrap();
        assert_eq!(found.first_name, "Augusta");
    }

    #[tokio::test]
    async fn test_email_index_follows_address_change() {
        let repo = InMemoryUserRepository::new();
        let mut stored = repo.save(&user("old@example.com")).await.unwrap();
        stored.email = EmailAddress::parse("new@example.com").unwrap();
        repo.save(&stored).await.unwrap();

        let old = EmailAddress::parse("old@example.com").unwrap();
        let new = EmailAddress::parse("new@example.com").unwrap();
        assert!(repo.find_by_email(&old).await.unwrap().is_none());
        assert_eq!(
            repo.find_by_email(&new).await.unwrap().unwrap().id,
            stored.id
        );
    }

    #[tokio::test]
    async fn test_find_all_keeps_insertion_order() {
        let repo = InMemoryUserRepository::new();
        let a = repo.save(&user("a@example.com")).await.unwrap();
        let b = repo.save(&user("b@example.com")).await.unwrap();
        let c = repo.save(&user("c@example.com")).await.unwrap();

        let ids: Vec<Uuid> = repo.find_all().await.unwrap().iter().map(|u| u.id).collect();
        assert_eq!(ids, vec![a.id, b.id, c.id]);
    }

    #[tokio::test]
    async fn test_remove_review_requires_held_reference() {
        let repo = InMemoryUserRepository::new();
        let mut ada = user("ada@example.com");
        let review_id = Uuid::new_v4();
        ada.review_ids.push(review_id);
        repo.save(&ada).await.unwrap();

        let updated = repo.remove_review(ada.id, review_id).await.unwrap();
        assert!(updated.review_ids.is_empty());

        let err = repo.remove_review(ada.id, review_id).await.unwrap_err();
        assert!(matches!(err, DomainError::ReviewNotFound(_)));
    }
}
