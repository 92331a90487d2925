//! Review - Rating and text left on a place by a user

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::value_objects::Rating;

/// Review - owned by both the place it rates and the user who wrote it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Review {
    pub id: Uuid,
    pub text: String,
    pub rating: Rating,
    /// Immutable after creation
    pub place_id: Uuid,
    /// Immutable after creation
    pub user_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input payload for creating a review. The rating arrives as a raw
/// integer; the facade bounds-checks it.
#[derive(Debug, Clone, Deserialize)]
pub struct NewReview {
    pub text: String,
    pub rating: i32,
    pub place_id: Uuid,
    pub user_id: Uuid,
}

/// Partial update for a review; only text and rating are mutable
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReviewPatch {
    pub text: Option<String>,
    pub rating: Option<i32>,
}

/// Public projection used in place details
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ReviewSummary {
    pub id: Uuid,
    pub text: String,
    pub rating: Rating,
    pub user_id: Uuid,
}

impl Review {
    /// Create a new review with generated id and timestamps
    pub fn new(text: String, rating: Rating, place_id: Uuid, user_id: Uuid) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            text,
            rating,
            place_id,
            user_id,
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply a whitelist update. The rating slot takes the already
    /// bounds-checked value. Refreshes the modification timestamp
    /// unconditionally.
    pub fn apply(&mut self, patch: ReviewPatch, rating: Option<Rating>) {
        if let Some(v) = patch.text {
            self.text = v;
        }
        if let Some(v) = rating {
            self.rating = v;
        }
        self.updated_at = Utc::now();
    }

    pub fn summary(&self) -> ReviewSummary {
        ReviewSummary {
            id: self.id,
            text: self.text.clone(),
            rating: self.rating,
            user_id: self.user_id,
        }
    }
}
