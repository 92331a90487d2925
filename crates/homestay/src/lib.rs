//! Homestay Domain Library
//!
//! Core domain types and interfaces for the homestay lodging marketplace.
//!
//! # Architecture
//!
//! This crate follows Clean Architecture / Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain/`): Pure business entities and logic
//!   - `entities/`: Core domain models (User, Place, Amenity, Review)
//!   - `value_objects/`: Immutable value types (EmailAddress, Rating)
//!   - `errors/`: Domain-specific error types
//!
//! - **Ports** (`ports/`): Abstract interfaces (traits)
//!   - `repositories/`: Data access interfaces
//!   - `services/`: External service interfaces
//!
//! # Usage
//!
//! ```rust,ignore
//! use homestay::domain::{User, Place, Review};
//! use homestay::ports::{UserRepository, EmailVerifier};
//! ```

pub mod domain;
pub mod ports;

// Re-export commonly used types
pub use domain::{
    Amenity, AmenityPatch, DomainError, EmailAddress, NewAmenity, NewPlace, NewReview, NewUser,
    Place, PlaceDetails, PlacePatch, PlaceSummary, Rating, Review, ReviewPatch, ReviewSummary,
    User, UserPatch, UserSummary,
};
pub use ports::{
    AmenityRepository, EmailVerifier, PlaceRepository, ReviewRepository, UserRepository,
};
