//! Review Application Service (Use Case)
//!
//! Review ownership lives on both sides: creating a review attaches it
//! to the place it rates and to its author; deleting detaches both.

use std::sync::Arc;
use uuid::Uuid;

use homestay::domain::{
    DomainError, NewReview, Rating, Review, ReviewPatch, ReviewSummary,
};
use homestay::ports::{PlaceRepository, ReviewRepository, UserRepository};

/// Facade service for Review operations
pub struct ReviewService<R, U, P>
where
    R: ReviewRepository,
    U: UserRepository,
    P: PlaceRepository,
{
    reviews: Arc<R>,
    users: Arc<U>,
    places: Arc<P>,
}

impl<R, U, P> ReviewService<R, U, P>
where
    R: ReviewRepository,
    U: UserRepository,
    P: PlaceRepository,
{
    pub fn new(reviews: Arc<R>, users: Arc<U>, places: Arc<P>) -> Self {
        Self {
            reviews,
            users,
            places,
        }
    }

    /// Create a new review and attach it to its place and author
    pub async fn create_review(&self, input: NewReview) -> Result<Review, DomainError> {
        validate_text(&input.text)?;
        let rating = parse_rating(input.rating)?;

        let mut author = self
            .users
            .find_by_id(input.user_id)
            .await?
            .ok_or(DomainError::UserNotFound(input.user_id))?;
        let mut place = self
            .places
            .find_by_id(input.place_id)
            .await?
            .ok_or(DomainError::PlaceNotFound(input.place_id))?;

        let review = Review::new(input.text, rating, input.place_id, input.user_id);
        let saved = self.reviews.save(&review).await?;

        place.attach_review(saved.id);
        self.places.save(&place).await?;
        author.review_ids.push(saved.id);
        self.users.save(&author).await?;

        tracing::info!(
            "Created review: {} (place {}, user {})",
            saved.id,
            saved.place_id,
            saved.user_id
        );

        Ok(saved)
    }

    /// Get a review by ID
    pub async fn get_review(&self, id: Uuid) -> Result<Review, DomainError> {
        self.reviews
            .find_by_id(id)
            .await?
            .ok_or(DomainError::ReviewNotFound(id))
    }

    /// All reviews in insertion order
    pub async fn get_all_reviews(&self) -> Result<Vec<Review>, DomainError> {
        self.reviews.find_all().await
    }

    /// Reviews attached to a place, in attachment order
    pub async fn get_reviews_by_place(
        &self,
        place_id: Uuid,
    ) -> Result<Vec<ReviewSummary>, DomainError> {
        let place = self
            .places
            .find_by_id(place_id)
            .await?
            .ok_or(DomainError::PlaceNotFound(place_id))?;

        let mut summaries = Vec::with_capacity(place.review_ids.len());
        for review_id in &place.review_ids {
            let review = self
                .reviews
                .find_by_id(*review_id)
                .await?
                .ok_or(DomainError::ReviewNotFound(*review_id))?;
            summaries.push(review.summary());
        }
        Ok(summaries)
    }

    /// Update a review; only text and rating are mutable
    pub async fn update_review(&self, id: Uuid, patch: ReviewPatch) -> Result<Review, DomainError> {
        let mut review = self
            .reviews
            .find_by_id(id)
            .await?
            .ok_or(DomainError::ReviewNotFound(id))?;

        if let Some(text) = patch.text.as_deref() {
            validate_text(text)?;
        }
        let rating = match patch.rating {
            Some(raw) => Some(parse_rating(raw)?),
            None => None,
        };

        review.apply(patch, rating);
        self.reviews.save(&review).await
    }

    /// Delete a review, detaching it from its place and author first
    pub async fn delete_review(&self, id: Uuid) -> Result<(), DomainError> {
        let review = self
            .reviews
            .find_by_id(id)
            .await?
            .ok_or(DomainError::ReviewNotFound(id))?;

        self.users.remove_review(review.user_id, review.id).await?;

        let mut place = self
            .places
            .find_by_id(review.place_id)
            .await?
            .ok_or(DomainError::PlaceNotFound(review.place_id))?;
        place.detach_review(review.id);
        self.places.save(&place).await?;

        self.reviews.delete(id).await?;

        tracing::info!("Deleted review: {}", id);

        Ok(())
    }
}

fn validate_text(text: &str) -> Result<(), DomainError> {
    if text.trim().is_empty() {
        return Err(DomainError::invalid_review("text must not be empty"));
    }
    Ok(())
}

fn parse_rating(raw: i32) -> Result<Rating, DomainError> {
    Rating::new(raw).map_err(|err| DomainError::invalid_review(err.to_string()))
}
