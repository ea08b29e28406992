//! Review repository trait.

use async_trait::async_trait;
use gc_shared::types::{PaginatedResponse, Pagination};
use uuid::Uuid;

use crate::domain::entities::review::{Review, ReviewSummary};
use crate::errors::DomainError;

#[async_trait]
pub trait ReviewRepository: Send + Sync {
    async fn create(&self, review: Review) -> Result<Review, DomainError>;

    /// Newest first
    async fn find_by_company(
        &self,
        company_id: Uuid,
        pagination: Pagination,
    ) -> Result<PaginatedResponse<Review>, DomainError>;

    /// Average rating, count and the newest comment
    ///
    /// Returns `Ok(None)` when the company has no reviews.
    async fn summary_for_company(&self, company_id: Uuid) -> Result<Option<ReviewSummary>, DomainError>;
}
