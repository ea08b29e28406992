use std::sync::Arc;

use gc_shared::types::{PaginatedResponse, Pagination};
use uuid::Uuid;

use crate::domain::entities::review::{NewReview, Review, MAX_RATING, MIN_RATING};
use crate::errors::{DomainError, ValidationError};
use crate::repositories::{CompanyRepository, ReviewRepository};

pub struct ReviewService<R, C>
where
    R: ReviewRepository,
    C: CompanyRepository,
{
    review_repository: Arc<R>,
    company_repository: Arc<C>,
}

impl<R, C> ReviewService<R, C>
where
    R: ReviewRepository,
    C: CompanyRepository,
{
    pub fn new(review_repository: Arc<R>, company_repository: Arc<C>) -> Self {
        Self {
            review_repository,
            company_repository,
        }
    }

    /// Store a rating for an existing company
    pub async fn create_review(&self, data: NewReview) -> Result<Review, DomainError> {
        if !(MIN_RATING..=MAX_RATING).contains(&data.rating) {
            return Err(ValidationError::OutOfRange {
                field: "rating".to_string(),
                min: MIN_RATING.to_string(),
                max: MAX_RATING.to_string(),
            }
            .into());
        }
        if self.company_repository.find_by_id(data.company_id).await?.is_none() {
            return Err(DomainError::not_found("Company"));
        }

        let review = self.review_repository.create(Review::new(data)).await?;
        tracing::info!(
            review_id = %review.review_id,
            company_id = %review.company_id,
            rating = review.rating,
            "Review created"
        );
        Ok(review)
    }

    pub async fn get_reviews_by_company(
        &self,
        company_id: Uuid,
        pagination: Pagination,
    ) -> Result<PaginatedResponse<Review>, DomainError> {
        self.review_repository.find_by_company(company_id, pagination).await
    }
}
