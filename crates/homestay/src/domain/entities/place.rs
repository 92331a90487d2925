//! Place - Rentable lodging listing

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Amenity, ReviewSummary, UserSummary};

/// Bounds for the title length
pub const MIN_TITLE_LEN: usize = 1;
pub const MAX_TITLE_LEN: usize = 100;

pub const MIN_LATITUDE: f64 = -90.0;
pub const MAX_LATITUDE: f64 = 90.0;
pub const MIN_LONGITUDE: f64 = -180.0;
pub const MAX_LONGITUDE: f64 = 180.0;

/// Place - a listing owned by a user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Place {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    /// Price per night, strictly positive
    pub price: f64,
    pub latitude: f64,
    pub longitude: f64,
    /// Immutable after creation
    pub owner_id: Uuid,
    pub amenity_ids: Vec<Uuid>,
    pub review_ids: Vec<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input payload for creating a place
#[derive(Debug, Clone, Deserialize)]
pub struct NewPlace {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: f64,
    pub latitude: f64,
    pub longitude: f64,
    pub owner_id: Uuid,
    #[serde(default)]
    pub amenity_ids: Vec<Uuid>,
}

/// Partial update for a place. `owner_id` is accepted in the payload so
/// the facade can reject an ownership change explicitly; it is never
/// applied by `apply`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlacePatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub owner_id: Option<Uuid>,
}

/// Public projection returned by list operations
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PlaceSummary {
    pub id: Uuid,
    pub title: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// Detail view with owner, amenities, and reviews inlined
#[derive(Debug, Clone, Serialize)]
pub struct PlaceDetails {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub price: f64,
    pub latitude: f64,
    pub longitude: f64,
    pub owner: UserSummary,
    pub amenities: Vec<Amenity>,
    pub reviews: Vec<ReviewSummary>,
}

impl Place {
    /// Create a new place with generated id and timestamps
    pub fn new(input: NewPlace) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            title: input.title,
            description: input.description,
            price: input.price,
            latitude: input.latitude,
            longitude: input.longitude,
            owner_id: input.owner_id,
            amenity_ids: input.amenity_ids,
            review_ids: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply a whitelist update. The owner reference is not part of the
    /// whitelist; ownership-consistency is enforced by the facade before
    /// this runs. Refreshes the modification timestamp unconditionally.
    pub fn apply(&mut self, patch: PlacePatch) {
        if let Some(v) = patch.title {
            self.title = v;
        }
        if let Some(v) = patch.description {
            self.description = Some(v);
        }
        if let Some(v) = patch.price {
            self.price = v;
        }
        if let Some(v) = patch.latitude {
            self.latitude = v;
        }
        if let Some(v) = patch.longitude {
            self.longitude = v;
        }
        self.updated_at = Utc::now();
    }

    pub fn summary(&self) -> PlaceSummary {
        PlaceSummary {
            id: self.id,
            title: self.title.clone(),
            latitude: self.latitude,
            longitude: self.longitude,
        }
    }

    /// Attach a review reference, keeping attachment order
    pub fn attach_review(&mut self, review_id: Uuid) {
        if !self.review_ids.contains(&review_id) {
            self.review_ids.push(review_id);
        }
    }

    /// Detach a review reference; true when it was present
    pub fn detach_review(&mut self, review_id: Uuid) -> bool {
        let before = self.review_ids.len();
        self.review_ids.retain(|id| *id != review_id);
        self.review_ids.len() != before
    }
}
