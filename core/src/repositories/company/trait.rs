//! Company repository trait: listings, products, files and the user binding.

use async_trait::async_trait;
use gc_shared::types::{PaginatedResponse, Pagination};
use uuid::Uuid;

use crate::domain::entities::company::{Company, CompanyStatus};
use crate::domain::entities::company_file::CompanyFile;
use crate::domain::entities::product::{CompanyProduct, Product};
use crate::errors::DomainError;

/// Repository trait for Company persistence operations
///
/// `bind_user` and `unbind_user` write both the company row and the user row.
/// Implementations must perform each as a single atomic unit: either both
/// sides change or neither does.
#[async_trait]
pub trait CompanyRepository: Send + Sync {
    /// Page over every company regardless of status
    async fn find_all(&self, pagination: Pagination) -> Result<PaginatedResponse<Company>, DomainError>;

    /// Page over companies with the given status
    async fn find_by_status(
        &self,
        status: CompanyStatus,
        pagination: Pagination,
    ) -> Result<PaginatedResponse<Company>, DomainError>;

    async fn find_by_id(&self, company_id: Uuid) -> Result<Option<Company>, DomainError>;

    /// Company currently bound to the user, if any
    async fn find_by_user_id(&self, user_id: Uuid) -> Result<Option<Company>, DomainError>;

    async fn create(&self, company: Company) -> Result<Company, DomainError>;

    /// Persist all mutable profile fields and the status
    ///
    /// The owner (`user_id`) is never written here; use `bind_user`/`unbind_user`.
    async fn update(&self, company: Company) -> Result<Company, DomainError>;

    /// Bind `user_id` to `company_id` on both sides
    ///
    /// Both "unbound" preconditions are re-checked inside the unit of work.
    /// A lost race is reported as `AssignmentError::UserAlreadyAssigned` or
    /// `AssignmentError::CompanyAlreadyAssigned`; a missing row as the
    /// matching `*NotFound` variant.
    async fn bind_user(&self, company_id: Uuid, user_id: Uuid) -> Result<(), DomainError>;

    /// Clear the binding of `user_id` on both sides
    ///
    /// Returns the company with its owner cleared, or `None` when no company
    /// points at the user. Nothing is written in the `None` case.
    async fn unbind_user(&self, user_id: Uuid) -> Result<Option<Company>, DomainError>;

    async fn find_product_by_id(&self, product_id: Uuid) -> Result<Option<Product>, DomainError>;

    /// Insert a company/product association; duplicates are allowed
    async fn add_product(&self, company_product: CompanyProduct) -> Result<CompanyProduct, DomainError>;

    /// Products associated with a company
    async fn find_products(&self, company_id: Uuid) -> Result<Vec<Product>, DomainError>;

    async fn add_file(&self, file: CompanyFile) -> Result<CompanyFile, DomainError>;

    async fn find_files(&self, company_id: Uuid) -> Result<Vec<CompanyFile>, DomainError>;
}
