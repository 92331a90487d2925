//! Place Application Service (Use Case)
//!
//! Orchestrates place management: field validation, owner and amenity
//! resolution, the ownership-consistency rule, and the detail projection
//! that inlines owner, amenities, and reviews.

use std::sync::Arc;
use uuid::Uuid;

use homestay::domain::{
    DomainError, NewPlace, Place, PlaceDetails, PlacePatch, PlaceSummary, MAX_LATITUDE,
    MAX_LONGITUDE, MAX_TITLE_LEN, MIN_LATITUDE, MIN_LONGITUDE, MIN_TITLE_LEN,
};
use homestay::ports::{AmenityRepository, PlaceRepository, ReviewRepository, UserRepository};

/// Facade service for Place operations
pub struct PlaceService<P, U, A, R>
where
    P: PlaceRepository,
    U: UserRepository,
    A: AmenityRepository,
    R: ReviewRepository,
{
    places: Arc<P>,
    users: Arc<U>,
    amenities: Arc<A>,
    reviews: Arc<R>,
}

impl<P, U, A, R> PlaceService<P, U, A, R>
where
    P: PlaceRepository,
    U: UserRepository,
    A: AmenityRepository,
    R: ReviewRepository,
{
    pub fn new(places: Arc<P>, users: Arc<U>, amenities: Arc<A>, reviews: Arc<R>) -> Self {
        Self {
            places,
            users,
            amenities,
            reviews,
        }
    }

    /// Create a new place. The owner and every referenced amenity must
    /// resolve; a missing owner is `OwnerNotFound`, not `UserNotFound`.
    pub async fn create_place(&self, input: NewPlace) -> Result<Place, DomainError> {
        validate_title(&input.title)?;
        validate_price(input.price)?;
        validate_coordinates(input.latitude, input.longitude)?;

        if self.users.find_by_id(input.owner_id).await?.is_none() {
            return Err(DomainError::OwnerNotFound(input.owner_id));
        }
        for amenity_id in &input.amenity_ids {
            if self.amenities.find_by_id(*amenity_id).await?.is_none() {
                return Err(DomainError::AmenityNotFound(*amenity_id));
            }
        }

        let place = Place::new(input);
        let saved = self.places.save(&place).await?;

        tracing::info!("Created place: {} (owner {})", saved.id, saved.owner_id);

        Ok(saved)
    }

    /// Get a place by ID
    pub async fn get_place(&self, id: Uuid) -> Result<Place, DomainError> {
        self.places
            .find_by_id(id)
            .await?
            .ok_or(DomainError::PlaceNotFound(id))
    }

    /// All places, projected to the public field subset, insertion order
    pub async fn get_all_places(&self) -> Result<Vec<PlaceSummary>, DomainError> {
        let places = self.places.find_all().await?;
        Ok(places.iter().map(Place::summary).collect())
    }

    /// Detail view with owner, amenities, and reviews inlined. A place
    /// whose owner no longer resolves is upstream corruption: the
    /// `OwnerNotFound` signal propagates instead of being masked.
    pub async fn get_place_details(&self, id: Uuid) -> Result<PlaceDetails, DomainError> {
        let place = self.get_place(id).await?;

        let owner = self
            .users
            .find_by_id(place.owner_id)
            .await?
            .ok_or(DomainError::OwnerNotFound(place.owner_id))?;

        let mut amenities = Vec::with_capacity(place.amenity_ids.len());
        for amenity_id in &place.amenity_ids {
            let amenity = self
                .amenities
                .find_by_id(*amenity_id)
                .await?
                .ok_or(DomainError::AmenityNotFound(*amenity_id))?;
            amenities.push(amenity);
        }

        let mut reviews = Vec::with_capacity(place.review_ids.len());
        for review_id in &place.review_ids {
            let review = self
                .reviews
                .find_by_id(*review_id)
                .await?
                .ok_or(DomainError::ReviewNotFound(*review_id))?;
            reviews.push(review.summary());
        }

        Ok(PlaceDetails {
            id: place.id,
            title: place.title,
            description: place.description,
            price: place.price,
            latitude: place.latitude,
            longitude: place.longitude,
            owner: owner.summary(),
            amenities,
            reviews,
        })
    }

    /// Update a place through the whitelist. A patch carrying an owner
    /// different from the stored one is an ownership-consistency
    /// violation; the stored owner is left untouched.
    pub async fn update_place(&self, id: Uuid, patch: PlacePatch) -> Result<Place, DomainError> {
        let mut place = self
            .places
            .find_by_id(id)
            .await?
            .ok_or(DomainError::PlaceNotFound(id))?;

        if let Some(owner_id) = patch.owner_id {
            if owner_id != place.owner_id {
                return Err(DomainError::PlaceOwnerConsistency);
            }
        }

        if let Some(title) = patch.title.as_deref() {
            validate_title(title)?;
        }
        if let Some(price) = patch.price {
            validate_price(price)?;
        }
        validate_coordinates(
            patch.latitude.unwrap_or(place.latitude),
            patch.longitude.unwrap_or(place.longitude),
        )?;

        place.apply(patch);
        self.places.save(&place).await
    }
}

fn validate_title(title: &str) -> Result<(), DomainError> {
    let len = title.chars().count();
    if !(MIN_TITLE_LEN..=MAX_TITLE_LEN).contains(&len) {
        return Err(DomainError::invalid_place(format!(
            "title must be {MIN_TITLE_LEN}-{MAX_TITLE_LEN} characters"
        )));
    }
    Ok(())
}

fn validate_price(price: f64) -> Result<(), DomainError> {
    if !price.is_finite() || price <= 0.0 {
        return Err(DomainError::invalid_place("price must be a positive number"));
    }
    Ok(())
}

fn validate_coordinates(latitude: f64, longitude: f64) -> Result<(), DomainError> {
    if !latitude.is_finite() || !(MIN_LATITUDE..=MAX_LATITUDE).contains(&latitude) {
        return Err(DomainError::invalid_place(
            "latitude must be within -90 and 90",
        ));
    }
    if !longitude.is_finite() || !(MIN_LONGITUDE..=MAX_LONGITUDE).contains(&longitude) {
        return Err(DomainError::invalid_place(
            "longitude must be within -180 and 180",
        ));
    }
    Ok(())
}
