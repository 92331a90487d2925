//! Homestay Application Layer
//!
//! Facade services, infrastructure adapters, and wiring for the homestay
//! lodging marketplace. An HTTP boundary consumes this crate: it builds
//! a [`Services`] once at process start and hands it to request handlers,
//! mapping the typed `DomainError` signals to response codes itself.

use std::sync::Arc;

pub mod adapters;
pub mod application;
pub mod auth;
pub mod config;
pub mod telemetry;

use adapters::email::DohEmailVerifier;
use adapters::memory::{
    InMemoryAmenityRepository, InMemoryPlaceRepository, InMemoryReviewRepository,
    InMemoryUserRepository,
};
use application::{AmenityService, PlaceService, ReviewService, UserService};
use config::AppConfig;

/// Type aliases for facade services with concrete adapter implementations
pub type AppUserService = UserService<InMemoryUserRepository, DohEmailVerifier>;
pub type AppPlaceService = PlaceService<
    InMemoryPlaceRepository,
    InMemoryUserRepository,
    InMemoryAmenityRepository,
    InMemoryReviewRepository,
>;
pub type AppAmenityService = AmenityService<InMemoryAmenityRepository>;
pub type AppReviewService = ReviewService<
    InMemoryReviewRepository,
    InMemoryUserRepository,
    InMemoryPlaceRepository,
>;

/// Dependency-injected aggregate of the facade services, constructed
/// once at process start. The services share the underlying stores.
#[derive(Clone)]
pub struct Services {
    pub users: Arc<AppUserService>,
    pub places: Arc<AppPlaceService>,
    pub amenities: Arc<AppAmenityService>,
    pub reviews: Arc<AppReviewService>,
}

impl Services {
    /// Wire the facades over fresh in-memory stores
    pub fn new(config: &AppConfig) -> Self {
        let users_repo = Arc::new(InMemoryUserRepository::new());
        let places_repo = Arc::new(InMemoryPlaceRepository::new());
        let amenities_repo = Arc::new(InMemoryAmenityRepository::new());
        let reviews_repo = Arc::new(InMemoryReviewRepository::new());
        let verifier = Arc::new(DohEmailVerifier::from_config(config));

        Self {
            users: Arc::new(UserService::new(users_repo.clone(), verifier)),
            places: Arc::new(PlaceService::new(
                places_repo.clone(),
                users_repo.clone(),
                amenities_repo.clone(),
                reviews_repo.clone(),
            )),
            amenities: Arc::new(AmenityService::new(amenities_repo)),
            reviews: Arc::new(ReviewService::new(reviews_repo, users_repo, places_repo)),
        }
    }
}
