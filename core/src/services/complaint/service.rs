//! Complaint queries and moderation

use std::sync::Arc;

use gc_shared::types::{PaginatedResponse, Pagination};
use gc_shared::utils::validation::not_blank;
use uuid::Uuid;

use crate::domain::entities::complaint::{Complaint, ComplaintStatus, ComplaintView, NewComplaint};
use crate::errors::{ComplaintError, DomainError, ValidationError};
use crate::repositories::{CompanyRepository, ComplaintRepository};

/// Every listing is paginated and reports the unpaginated `total`.
pub struct ComplaintService<Q, C>
where
    Q: ComplaintRepository,
    C: CompanyRepository,
{
    complaint_repository: Arc<Q>,
    company_repository: Arc<C>,
}

impl<Q, C> ComplaintService<Q, C>
where
    Q: ComplaintRepository,
    C: CompanyRepository,
{
    pub fn new(complaint_repository: Arc<Q>, company_repository: Arc<C>) -> Self {
        Self {
            complaint_repository,
            company_repository,
        }
    }

    pub async fn get_all_complaints(
        &self,
        pagination: Pagination,
    ) -> Result<PaginatedResponse<ComplaintView>, DomainError> {
        self.complaint_repository.find_all(pagination).await
    }

    /// Single complaint in page form; an unknown id yields an empty page
    pub async fn get_complaint_by_id(
        &self,
        complaint_id: Uuid,
        pagination: Pagination,
    ) -> Result<PaginatedResponse<ComplaintView>, DomainError> {
        let rows: Vec<ComplaintView> = self
            .complaint_repository
            .find_by_id(complaint_id)
            .await?
            .into_iter()
            .collect();
        let total = rows.len() as u64;

        Ok(PaginatedResponse::new(pagination.apply(&rows), pagination, total))
    }

    pub async fn get_complaints_by_company(
        &self,
        company_id: Uuid,
        pagination: Pagination,
    ) -> Result<PaginatedResponse<ComplaintView>, DomainError> {
        self.complaint_repository.find_by_company(company_id, pagination).await
    }

    pub async fn get_complaints_by_user(
        &self,
        user_id: Uuid,
        pagination: Pagination,
    ) -> Result<PaginatedResponse<ComplaintView>, DomainError> {
        self.complaint_repository.find_by_user(user_id, pagination).await
    }

    /// File a complaint against an existing company
    pub async fn create_complaint(&self, data: NewComplaint) -> Result<Complaint, DomainError> {
        if !not_blank(&data.complaint_description) {
            return Err(ValidationError::RequiredField {
                field: "complaintDescription".to_string(),
            }
            .into());
        }
        if self.company_repository.find_by_id(data.company_id).await?.is_none() {
            return Err(DomainError::not_found("Company"));
        }

        let complaint = self.complaint_repository.create(Complaint::new(data)).await?;
        tracing::info!(
            complaint_id = %complaint.complaint_id,
            company_id = %complaint.company_id,
            subject = complaint.complaint_subject.label(),
            "Complaint filed"
        );
        Ok(complaint)
    }

    pub async fn flag_complaint_as_inactive(&self, complaint_id: Uuid) -> Result<Complaint, DomainError> {
        self.set_status(complaint_id, ComplaintStatus::Inactive).await
    }

    pub async fn flag_complaint_as_invalid(&self, complaint_id: Uuid) -> Result<Complaint, DomainError> {
        self.set_status(complaint_id, ComplaintStatus::Invalid).await
    }

    async fn set_status(&self, complaint_id: Uuid, status: ComplaintStatus) -> Result<Complaint, DomainError> {
        let complaint = self
            .complaint_repository
            .update_status(complaint_id, status)
            .await?
            .ok_or(ComplaintError::NotFound)?;

        tracing::info!(complaint_id = %complaint_id, status = status.as_str(), "Complaint flagged");
        Ok(complaint)
    }
}
