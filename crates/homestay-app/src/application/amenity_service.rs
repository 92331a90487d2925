//! Amenity Application Service (Use Case)
//!
//! Name validation and exact-match uniqueness.

use std::sync::Arc;
use uuid::Uuid;

use homestay::domain::{
    Amenity, AmenityPatch, DomainError, NewAmenity, MAX_AMENITY_NAME_LEN, MIN_AMENITY_NAME_LEN,
};
use homestay::ports::AmenityRepository;

/// Facade service for Amenity operations
pub struct AmenityService<R: AmenityRepository> {
    repo: Arc<R>,
}

impl<R: AmenityRepository> AmenityService<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Create a new amenity; names are unique by exact match
    pub async fn create_amenity(&self, input: NewAmenity) -> Result<Amenity, DomainError> {
        validate_amenity_name(&input.name)?;

        if self.repo.find_by_name(&input.name).await?.is_some() {
            return Err(DomainError::AmenityAlreadyExists(input.name));
        }

        let amenity = Amenity::new(input.name);
        let saved = self.repo.save(&amenity).await?;

        tracing::info!("Created amenity: {} ({})", saved.name, saved.id);

        Ok(saved)
    }

    /// Get an amenity by ID
    pub async fn get_amenity(&self, id: Uuid) -> Result<Amenity, DomainError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(DomainError::AmenityNotFound(id))
    }

    /// All amenities in insertion order. Amenities carry no private
    /// fields, so the full entity is the public view.
    pub async fn get_all_amenities(&self) -> Result<Vec<Amenity>, DomainError> {
        self.repo.find_all().await
    }

    /// Rename an amenity; uniqueness is re-checked against the others
    pub async fn update_amenity(
        &self,
        id: Uuid,
        patch: AmenityPatch,
    ) -> Result<Amenity, DomainError> {
        let mut amenity = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or(DomainError::AmenityNotFound(id))?;

        if let Some(name) = patch.name.as_deref() {
            validate_amenity_name(name)?;
            if let Some(holder) = self.repo.find_by_name(name).await? {
                if holder.id != id {
                    return Err(DomainError::AmenityAlreadyExists(name.to_string()));
                }
            }
        }

        amenity.apply(patch);
        self.repo.save(&amenity).await
    }
}

fn validate_amenity_name(name: &str) -> Result<(), DomainError> {
    let len = name.chars().count();
    if !(MIN_AMENITY_NAME_LEN..=MAX_AMENITY_NAME_LEN).contains(&len) {
        return Err(DomainError::invalid_amenity(format!(
            "name must be {MIN_AMENITY_NAME_LEN}-{MAX_AMENITY_NAME_LEN} characters"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::adapters::memory::InMemoryAmenityRepository;

    fn service() -> AmenityService<InMemoryAmenityRepository> {
        AmenityService::new(Arc::new(InMemoryAmenityRepository::new()))
    }

    fn new_amenity(name: &str) -> NewAmenity {
        NewAmenity {
            name: name.to_string(),
        }
    }

    #[tokio::test]
    async fn test_duplicate_name_rejected() {
        let svc = service();
        svc.create_amenity(new_amenity("Wi-Fi")).await.unwrap();

        let err = svc.create_amenity(new_amenity("Wi-Fi")).await.unwrap_err();
        assert!(matches!(err, DomainError::AmenityAlreadyExists(_)));
    }

    #[tokio::test]
    async fn test_uniqueness_is_exact_match() {
        let svc = service();
        svc.create_amenity(new_amenity("Wi-Fi")).await.unwrap();
        // No name normalization: a case-different name is a different amenity.
        svc.create_amenity(new_amenity("wi-fi")).await.unwrap();

        assert_eq!(svc.get_all_amenities().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_rename_allows_self_match() {
        let svc = service();
        let wifi = svc.create_amenity(new_amenity("Wi-Fi")).await.unwrap();
        svc.create_amenity(new_amenity("Sauna")).await.unwrap();

        let renamed = svc
            .update_amenity(
                wifi.id,
                AmenityPatch {
                    name: Some("Wi-Fi".to_string()),
                },
            )
            .await
            .unwrap();
        assert_eq!(renamed.name, "Wi-Fi");

        let err = svc
            .update_amenity(
                wifi.id,
                AmenityPatch {
                    name: Some("Sauna".to_string()),
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::AmenityAlreadyExists(_)));
    }

    #[tokio::test]
    async fn test_name_validation() {
        let svc = service();
        let err = svc.create_amenity(new_amenity("")).await.unwrap_err();
        assert!(matches!(err, DomainError::InvalidAmenityData(_)));

        let too_long = "x".repeat(51);
        let err = svc.create_amenity(new_amenity(&too_long)).await.unwrap_err();
        assert!(matches!(err, DomainError::InvalidAmenityData(_)));
    }

    #[tokio::test]
    async fn test_get_unknown_amenity_not_found() {
        let svc = service();
        let err = svc.get_amenity(Uuid::new_v4()).await.unwrap_err();
        assert!(matches!(err, DomainError::AmenityNotFound(_)));
    }
}
