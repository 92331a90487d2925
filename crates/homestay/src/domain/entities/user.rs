//! User - Account holder, place owner, review author

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::value_objects::EmailAddress;

/// Bounds for first/last name length
pub const MIN_NAME_LEN: usize = 1;
pub const MAX_NAME_LEN: usize = 50;

/// User - account identity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    /// Normalized form; raw input never stored
    pub email: EmailAddress,
    pub is_admin: bool,
    /// Reviews authored by this user
    pub review_ids: Vec<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input payload for creating a user. The email is the raw candidate;
/// verification and normalization happen in the facade.
#[derive(Debug, Clone, Deserialize)]
pub struct NewUser {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub is_admin: bool,
}

/// Partial update for a user. Absent fields are left untouched; fields
/// outside this whitelist are inexpressible.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserPatch {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    /// Raw candidate; the facade verifies it before it is applied
    pub email: Option<String>,
    pub is_admin: Option<bool>,
}

/// Public projection returned by list operations
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct UserSummary {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: EmailAddress,
}

impl User {
    /// Create a new user with generated id and timestamps
    pub fn new(first_name: String, last_name: String, email: EmailAddress, is_admin: bool) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            first_name,
            last_name,
            email,
            is_admin,
            review_ids: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply a whitelist update. The email slot takes the already
    /// verified address, not the patch's raw candidate. Refreshes the
    /// modification timestamp unconditionally.
    pub fn apply(&mut self, patch: UserPatch, verified_email: Option<EmailAddress>) {
        if let Some(v) = patch.first_name {
            self.first_name = v;
        }
        if let Some(v) = patch.last_name {
            self.last_name = v;
        }
        if let Some(v) = verified_email {
            self.email = v;
        }
        if let Some(v) = patch.is_admin {
            self.is_admin = v;
        }
        self.updated_at = Utc::now();
    }

    pub fn summary(&self) -> UserSummary {
        UserSummary {
            id: self.id,
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            email: self.email.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn email(s: &str) -> EmailAddress {
        EmailAddress::parse(s).unwrap()
    }

    fn sample_user() -> User {
        User::new(
            "Ada".to_string(),
            "Lovelace".to_string(),
            email("ada@example.com"),
            false,
        )
    }

    #[test]
    fn test_new_assigns_identity_and_timestamps() {
        let user = sample_user();
        assert_eq!(user.created_at, user.updated_at);
        assert!(user.review_ids.is_empty());
    }

    #[test]
    fn test_empty_patch_only_touches_timestamp() {
        let mut user = sample_user();
        let before = user.clone();
        std::thread::sleep(std::time::Duration::from_millis(2));
        user.apply(UserPatch::default(), None);
        assert_eq!(user.first_name, before.first_name);
        assert_eq!(user.last_name, before.last_name);
        assert_eq!(user.email, before.email);
        assert_eq!(user.is_admin, before.is_admin);
        assert!(user.updated_at > before.updated_at);
    }

    #[test]
    fn test_patch_applies_present_fields() {
        let mut user = sample_user();
        let patch = UserPatch {
            first_name: Some("Grace".to_string()),
            is_admin: Some(true),
            ..Default::default()
        };
        user.apply(patch, Some(email("grace@example.com")));
        assert_eq!(user.first_name, "Grace");
        assert_eq!(user.last_name, "Lovelace");
        assert_eq!(user.email.as_str(), "grace@example.com");
        assert!(user.is_admin);
    }
}
