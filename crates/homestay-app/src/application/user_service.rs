//! User Application Service (Use Case)
//!
//! Orchestrates user management: email verification and uniqueness,
//! name validation, whitelist updates, and the review-detach path the
//! user collection owns.

use std::sync::Arc;
use uuid::Uuid;

use homestay::domain::{
    DomainError, EmailAddress, NewUser, User, UserPatch, UserSummary, MAX_NAME_LEN, MIN_NAME_LEN,
};
use homestay::ports::{EmailVerifier, UserRepository};

/// Facade service for User operations
pub struct UserService<R: UserRepository, V: EmailVerifier> {
    repo: Arc<R>,
    verifier: Arc<V>,
}

impl<R: UserRepository, V: EmailVerifier> UserService<R, V> {
    pub fn new(repo: Arc<R>, verifier: Arc<V>) -> Self {
        Self { repo, verifier }
    }

    /// Create a new user. The stored email is the verifier's normalized
    /// form, never the raw input.
    pub async fn create_user(&self, input: NewUser) -> Result<User, DomainError> {
        let email = self.verifier.verify(&input.email).await?;

        if self.repo.find_by_email(&email).await?.is_some() {
            return Err(DomainError::EmailAlreadyExists(email.as_str().to_string()));
        }

        validate_name("first_name", &input.first_name)?;
        validate_name("last_name", &input.last_name)?;

        let user = User::new(input.first_name, input.last_name, email, input.is_admin);
        let saved = self.repo.save(&user).await?;

        tracing::info!("Created user: {}", saved.id);

        Ok(saved)
    }

    /// Get a user by ID
    pub async fn get_user(&self, id: Uuid) -> Result<User, DomainError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(DomainError::UserNotFound(id))
    }

    /// All users, projected to the public field subset, insertion order
    pub async fn get_all_users(&self) -> Result<Vec<UserSummary>, DomainError> {
        let users = self.repo.find_all().await?;
        Ok(users.iter().map(User::summary).collect())
    }

    /// Update a user through the whitelist. An email change is verified
    /// and re-checked for uniqueness against *other* users only.
    pub async fn update_user(&self, id: Uuid, patch: UserPatch) -> Result<User, DomainError> {
        let mut user = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or(DomainError::UserNotFound(id))?;

        let verified_email = match patch.email.as_deref() {
            Some(raw) => Some(self.check_email_free_for(raw, id).await?),
            None => None,
        };

        if let Some(first_name) = patch.first_name.as_deref() {
            validate_name("first_name", first_name)?;
        }
        if let Some(last_name) = patch.last_name.as_deref() {
            validate_name("last_name", last_name)?;
        }

        user.apply(patch, verified_email);
        self.repo.save(&user).await
    }

    /// Detach a review from a user's collection. Fails with
    /// `UserNotFound` or `ReviewNotFound` when either reference is absent.
    pub async fn delete_review(&self, user_id: Uuid, review_id: Uuid) -> Result<User, DomainError> {
        let user = self.repo.remove_review(user_id, review_id).await?;

        tracing::info!("Detached review {} from user {}", review_id, user_id);

        Ok(user)
    }

    async fn check_email_free_for(
        &self,
        raw: &str,
        user_id: Uuid,
    ) -> Result<EmailAddress, DomainError> {
        let email = self.verifier.verify(raw).await?;
        if let Some(holder) = self.repo.find_by_email(&email).await? {
            // A self-match is not a conflict.
            if holder.id != user_id {
                return Err(DomainError::EmailAlreadyExists(email.as_str().to_string()));
            }
        }
        Ok(email)
    }
}

fn validate_name(field: &str, value: &str) -> Result<(), DomainError> {
    let len = value.chars().count();
    if !(MIN_NAME_LEN..=MAX_NAME_LEN).contains(&len) {
        return Err(DomainError::invalid_user(format!(
            "{field} must be {MIN_NAME_LEN}-{MAX_NAME_LEN} characters"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    use crate::adapters::memory::InMemoryUserRepository;

    /// Verifier stub: syntax and normalization only, no DNS
    struct SyntaxVerifier;

    #[async_trait]
    impl EmailVerifier for SyntaxVerifier {
        async fn verify(&self, candidate: &str) -> Result<EmailAddress, DomainError> {
            EmailAddress::parse(candidate).map_err(|err| DomainError::invalid_user(err.to_string()))
        }
    }

    /// Verifier stub: every address is undeliverable
    struct RejectingVerifier;

    #[async_trait]
    impl EmailVerifier for RejectingVerifier {
        async fn verify(&self, _candidate: &str) -> Result<EmailAddress, DomainError> {
            Err(DomainError::invalid_user("domain does not accept mail"))
        }
    }

    fn service() -> UserService<InMemoryUserRepository, SyntaxVerifier> {
        UserService::new(
            Arc::new(InMemoryUserRepository::new()),
            Arc::new(SyntaxVerifier),
        )
    }

    fn new_user(first_name: &str, email: &str) -> NewUser {
        NewUser {
            first_name: first_name.to_string(),
            last_name: "Lovelace".to_string(),
            email: email.to_string(),
            is_admin: false,
        }
    }

    #[tokio::test]
    async fn test_create_stores_normalized_email() {
        let svc = service();
        let created = svc.create_user(new_user("Ada", "Ada@Example.COM")).await.unwrap();

        let fetched = svc.get_user(created.id).await.unwrap();
        assert_eq!(fetched.email.as_str(), "Ada@example.com");
    }

    #[tokio::test]
    async fn test_duplicate_email_rejected() {
        let svc = service();
        svc.create_user(new_user("Ada", "ada@example.com")).await.unwrap();

        let err = svc
            .create_user(new_user("Augusta", "ada@Example.com"))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::EmailAlreadyExists(_)));
    }

    #[tokio::test]
    async fn test_update_email_conflicts_with_other_user_only() {
        let svc = service();
        let ada = svc.create_user(new_user("Ada", "ada@example.com")).await.unwrap();
        svc.create_user(new_user("Grace", "grace@example.com")).await.unwrap();

        let err = svc
            .update_user(
                ada.id,
                UserPatch {
                    email: Some("grace@example.com".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::EmailAlreadyExists(_)));

        // Re-submitting the current address is a self-match, not a conflict.
        let updated = svc
            .update_user(
                ada.id,
                UserPatch {
                    email: Some("ada@example.com".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.email.as_str(), "ada@example.com");
    }

    #[tokio::test]
    async fn test_name_length_boundaries() {
        let svc = service();

        let err = svc.create_user(new_user("", "a@example.com")).await.unwrap_err();
        assert!(matches!(err, DomainError::InvalidUserData(_)));

        let too_long = "x".repeat(51);
        let err = svc
            .create_user(new_user(&too_long, "b@example.com"))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::InvalidUserData(_)));

        svc.create_user(new_user("x", "c@example.com")).await.unwrap();
        let max = "x".repeat(50);
        svc.create_user(new_user(&max, "d@example.com")).await.unwrap();
    }

    #[tokio::test]
    async fn test_undeliverable_email_is_invalid_user_data() {
        let svc = UserService::new(
            Arc::new(InMemoryUserRepository::new()),
            Arc::new(RejectingVerifier),
        );
        let err = svc.create_user(new_user("Ada", "ada@example.com")).await.unwrap_err();
        assert!(matches!(err, DomainError::InvalidUserData(_)));
    }

    #[tokio::test]
    async fn test_empty_patch_refreshes_timestamp_only() {
        let svc = service();
        let created = svc.create_user(new_user("Ada", "ada@example.com")).await.unwrap();

        std::thread::sleep(std::time::Duration::from_millis(2));
        let updated = svc.update_user(created.id, UserPatch::default()).await.unwrap();

        assert_eq!(updated.first_name, created.first_name);
        assert_eq!(updated.email, created.email);
        assert!(updated.updated_at > created.updated_at);
    }

    #[tokio::test]
    async fn test_update_unknown_user_not_found() {
        let svc = service();
        let err = svc
            .update_user(Uuid::new_v4(), UserPatch::default())
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::UserNotFound(_)));
    }

    #[tokio::test]
    async fn test_get_all_is_projection_in_insertion_order() {
        let svc = service();
        let ada = svc.create_user(new_user("Ada", "ada@example.com")).await.unwrap();
        let grace = svc.create_user(new_user("Grace", "grace@example.com")).await.unwrap();

        let summaries = svc.get_all_users().await.unwrap();
        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries[0], ada.summary());
        assert_eq!(summaries[1], grace.summary());
    }
}
