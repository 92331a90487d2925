//! Domain Errors
//!
//! Error types for domain operations. One variant per condition so the
//! boundary layer can map each signal to its own response code.

use thiserror::Error;
use uuid::Uuid;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("user not found: {0}")]
    UserNotFound(Uuid),

    #[error("place not found: {0}")]
    PlaceNotFound(Uuid),

    #[error("amenity not found: {0}")]
    AmenityNotFound(Uuid),

    #[error("review not found: {0}")]
    ReviewNotFound(Uuid),

    /// A place resolved but its owner reference did not. Indicates
    /// upstream data corruption and must propagate, never be masked.
    #[error("owner not found: {0}")]
    OwnerNotFound(Uuid),

    #[error("invalid user data: {0}")]
    InvalidUserData(String),

    #[error("invalid place data: {0}")]
    InvalidPlaceData(String),

    #[error("invalid amenity data: {0}")]
    InvalidAmenityData(String),

    #[error("invalid review data: {0}")]
    InvalidReviewData(String),

    #[error("email already registered: {0}")]
    EmailAlreadyExists(String),

    #[error("amenity name already exists: {0}")]
    AmenityAlreadyExists(String),

    #[error("place owner cannot be changed")]
    PlaceOwnerConsistency,

    #[error("repository error: {0}")]
    Repository(String),
}

impl DomainError {
    pub fn invalid_user<T: Into<String>>(reason: T) -> Self {
        Self::InvalidUserData(reason.into())
    }

    pub fn invalid_place<T: Into<String>>(reason: T) -> Self {
        Self::InvalidPlaceData(reason.into())
    }

    pub fn invalid_amenity<T: Into<String>>(reason: T) -> Self {
        Self::InvalidAmenityData(reason.into())
    }

    pub fn invalid_review<T: Into<String>>(reason: T) -> Self {
        Self::InvalidReviewData(reason.into())
    }
}
