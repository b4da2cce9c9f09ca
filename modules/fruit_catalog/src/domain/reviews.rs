use std::sync::Arc;

use tracing::{debug, info, instrument};
use uuid::Uuid;

use crate::contract::model::{NewReview, Review};
use crate::domain::error::DomainError;
use crate::domain::repo::{FruitsRepository, ReviewsRepository};

/// Review service. Shares the store with the fruit service so it can
/// verify the target fruit exists before accepting a review.
#[derive(Clone)]
pub struct ReviewsService {
    repo: Arc<dyn ReviewsRepository>,
    fruits: Arc<dyn FruitsRepository>,
}

impl ReviewsService {
    pub fn new(repo: Arc<dyn ReviewsRepository>, fruits: Arc<dyn FruitsRepository>) -> Self {
        Self { repo, fruits }
    }

    /// Attach a review to an existing fruit. The fruit must exist at the
    /// time of the check; a fruit deleted afterwards leaves the review in
    /// place with a dangling `fruit_id`.
    #[instrument(
        name = "fruit_catalog.reviews.add",
        skip(self),
        fields(fruit_id = %new_review.fruit_id, rating = new_review.rating)
    )]
    pub async fn add(&self, new_review: NewReview) -> Result<Review, DomainError> {
        info!("Adding review");

        let exists = self
            .fruits
            .find_by_id(new_review.fruit_id)
            .await
            .map_err(|e| DomainError::database(e.to_string()))?
            .is_some();
        if !exists {
            return Err(DomainError::fruit_not_found(new_review.fruit_id));
        }

        let review = Review {
            id: Uuid::new_v4(),
            fruit_id: new_review.fruit_id,
            rating: new_review.rating,
            comment: new_review.comment,
        };

        self.repo
            .insert(review.clone())
            .await
            .map_err(|e| DomainError::database(e.to_string()))?;

        info!("Successfully added review with id={}", review.id);
        Ok(review)
    }

    #[instrument(
        name = "fruit_catalog.reviews.list_for_fruit",
        skip(self),
        fields(fruit_id = %fruit_id)
    )]
    pub async fn list_for_fruit(&self, fruit_id: Uuid) -> Result<Vec<Review>, DomainError> {
        debug!("Listing reviews for fruit");
        self.repo
            .list_for_fruit(fruit_id)
            .await
            .map_err(|e| DomainError::database(e.to_string()))
    }

    #[instrument(name = "fruit_catalog.reviews.list_all", skip(self))]
    pub async fn list_all(&self) -> Result<Vec<Review>, DomainError> {
        debug!("Listing all reviews");
        self.repo
            .list_all()
            .await
            .map_err(|e| DomainError::database(e.to_string()))
    }
}
