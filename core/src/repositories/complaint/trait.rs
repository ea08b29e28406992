//! Complaint repository trait.

use async_trait::async_trait;
use gc_shared::types::{PaginatedResponse, Pagination};
use uuid::Uuid;

use crate::domain::entities::complaint::{Complaint, ComplaintStatus, ComplaintView};
use crate::errors::DomainError;

/// All list queries are newest first and carry the author's name.
#[async_trait]
pub trait ComplaintRepository: Send + Sync {
    async fn create(&self, complaint: Complaint) -> Result<Complaint, DomainError>;

    async fn find_all(&self, pagination: Pagination) -> Result<PaginatedResponse<ComplaintView>, DomainError>;

    async fn find_by_id(&self, complaint_id: Uuid) -> Result<Option<ComplaintView>, DomainError>;

    async fn find_by_company(
        &self,
        company_id: Uuid,
        pagination: Pagination,
    ) -> Result<PaginatedResponse<ComplaintView>, DomainError>;

    async fn find_by_user(
        &self,
        user_id: Uuid,
        pagination: Pagination,
    ) -> Result<PaginatedResponse<ComplaintView>, DomainError>;

    /// Set the status; `Ok(None)` when the complaint does not exist
    async fn update_status(
        &self,
        complaint_id: Uuid,
        status: ComplaintStatus,
    ) -> Result<Option<Complaint>, DomainError>;
}
