//! Amenity - Named feature attachable to places

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Bounds for the amenity name length
pub const MIN_AMENITY_NAME_LEN: usize = 1;
pub const MAX_AMENITY_NAME_LEN: usize = 50;

/// Amenity - unique by exact name match
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Amenity {
    pub id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input payload for creating an amenity
#[derive(Debug, Clone, Deserialize)]
pub struct NewAmenity {
    pub name: String,
}

/// Partial update for an amenity
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AmenityPatch {
    pub name: Option<String>,
}

impl Amenity {
    /// Create a new amenity with generated id and timestamps
    pub fn new(name: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name,
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply a whitelist update; refreshes the modification timestamp
    /// unconditionally.
    pub fn apply(&mut self, patch: AmenityPatch) {
        if let Some(v) = patch.name {
            self.name = v;
        }
        self.updated_at = Utc::now();
    }
}
