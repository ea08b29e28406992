//! In-memory repositories backed by a single lock over all tables.
//!
//! Multi-row writes (`bind_user`, `unbind_user`) stage their changes and
//! commit both rows only after every check passed, so callers observe the
//! same all-or-nothing behavior as the MySQL transaction.

mod token;


pub use token::InMemoryTokenRepository;

use async_trait::async_trait;
use chrono::Utc;
use gc_shared::types::{PaginatedResponse, Pagination};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::company::{Company, CompanyStatus};
use crate::domain::entities::company_file::CompanyFile;
use crate::domain::entities::complaint::{Complaint, ComplaintAuthor, ComplaintStatus, ComplaintView};
use crate::domain::entities::product::{CompanyProduct, Product};
use crate::domain::entities::review::{Review, ReviewSummary};
use crate::domain::entities::user::User;
use crate::errors::{AssignmentError, DomainError};
use crate::repositories::{
    CompanyRepository, ComplaintRepository, ReviewRepository, UserRepository,
};

#[derive(Default)]
struct Tables {
    companies: HashMap<Uuid, Company>,
    users: HashMap<Uuid, User>,
    products: HashMap<Uuid, Product>,
    company_products: Vec<CompanyProduct>,
    files: Vec<CompanyFile>,
    reviews: Vec<Review>,
    complaints: Vec<Complaint>,
}

impl Tables {
    fn author_of(&self, user_id: Uuid) -> Option<ComplaintAuthor> {
        self.users.get(&user_id).map(|user| ComplaintAuthor {
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
        })
    }

    fn complaint_page<F>(&self, pagination: Pagination, filter: F) -> PaginatedResponse<ComplaintView>
    where
        F: Fn(&Complaint) -> bool,
    {
        let mut matching: Vec<&Complaint> = self.complaints.iter().filter(|c| filter(c)).collect();
        matching.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        let views: Vec<ComplaintView> = matching
            .into_iter()
            .map(|complaint| ComplaintView {
                complaint: complaint.clone(),
                user: self.author_of(complaint.user_id),
            })
            .collect();
        let total = views.len() as u64;

        PaginatedResponse::new(pagination.apply(&views), pagination, total)
    }

    fn company_page<F>(&self, pagination: Pagination, filter: F) -> PaginatedResponse<Company>
    where
        F: Fn(&Company) -> bool,
    {
        let mut matching: Vec<Company> = self.companies.values().filter(|c| filter(c)).cloned().collect();
        matching.sort_by(|a, b| {
            a.created_at
                .cmp(&b.created_at)
                .then_with(|| a.company_id.cmp(&b.company_id))
        });
        let total = matching.len() as u64;

        PaginatedResponse::new(pagination.apply(&matching), pagination, total)
    }
}

/// In-memory implementation of the company, user, review and complaint repositories
#[derive(Clone, Default)]
pub struct InMemoryStore {
    tables: Arc<RwLock<Tables>>,
    fail_user_writes: Arc<AtomicBool>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent write to a user row fail with `DomainError::Internal`
    pub fn set_fail_user_writes(&self, fail: bool) {
        self.fail_user_writes.store(fail, Ordering::SeqCst);
    }

    fn check_user_write(&self) -> Result<(), DomainError> {
        if self.fail_user_writes.load(Ordering::SeqCst) {
            return Err(DomainError::internal("user write rejected by storage"));
        }
        Ok(())
    }

    /// Register a catalog product
    pub async fn insert_product(&self, product: Product) {
        self.tables.write().await.products.insert(product.product_id, product);
    }

    /// Insert or replace a company row as-is, including its owner
    pub async fn insert_company(&self, company: Company) {
        self.tables.write().await.companies.insert(company.company_id, company);
    }

    /// Insert or replace a user row as-is, including its company
    pub async fn insert_user(&self, user: User) {
        self.tables.write().await.users.insert(user.user_id, user);
    }
}

#[async_trait]
impl CompanyRepository for InMemoryStore {
    async fn find_all(&self, pagination: Pagination) -> Result<PaginatedResponse<Company>, DomainError> {
        Ok(self.tables.read().await.company_page(pagination, |_| true))
    }

    async fn find_by_status(
        &self,
        status: CompanyStatus,
        pagination: Pagination,
    ) -> Result<PaginatedResponse<Company>, DomainError> {
        Ok(self.tables.read().await.company_page(pagination, |c| c.status == status))
    }

    async fn find_by_id(&self, company_id: Uuid) -> Result<Option<Company>, DomainError> {
        Ok(self.tables.read().await.companies.get(&company_id).cloned())
    }

    async fn find_by_user_id(&self, user_id: Uuid) -> Result<Option<Company>, DomainError> {
        let tables = self.tables.read().await;
        Ok(tables
            .companies
            .values()
            .find(|c| c.user_id == Some(user_id))
            .cloned())
    }

    async fn create(&self, company: Company) -> Result<Company, DomainError> {
        let mut tables = self.tables.write().await;
        tables.companies.insert(company.company_id, company.clone());
        Ok(company)
    }

    async fn update(&self, company: Company) -> Result<Company, DomainError> {
        let mut tables = self.tables.write().await;
        let existing = tables
            .companies
            .get_mut(&company.company_id)
            .ok_or_else(|| DomainError::not_found("Company"))?;

        let owner = existing.user_id;
        *existing = company;
        existing.user_id = owner;
        Ok(existing.clone())
    }

    async fn bind_user(&self, company_id: Uuid, user_id: Uuid) -> Result<(), DomainError> {
        let mut tables = self.tables.write().await;

        let mut user = tables
            .users
            .get(&user_id)
            .cloned()
            .ok_or(AssignmentError::UserNotFound)?;
        if user.has_company() {
            return Err(AssignmentError::UserAlreadyAssigned.into());
        }

        let mut company = tables
            .companies
            .get(&company_id)
            .cloned()
            .ok_or(AssignmentError::CompanyNotFound)?;
        if company.has_owner() {
            return Err(AssignmentError::CompanyAlreadyAssigned.into());
        }

        let now = Utc::now();
        company.user_id = Some(user_id);
        company.updated_at = now;
        user.company_id = Some(company_id);
        user.updated_at = now;

        self.check_user_write()?;

        tables.companies.insert(company_id, company);
        tables.users.insert(user_id, user);
        Ok(())
    }

    async fn unbind_user(&self, user_id: Uuid) -> Result<Option<Company>, DomainError> {
        let mut tables = self.tables.write().await;

        let Some(mut company) = tables
            .companies
            .values()
            .find(|c| c.user_id == Some(user_id))
            .cloned()
        else {
            return Ok(None);
        };

        let now = Utc::now();
        company.user_id = None;
        company.updated_at = now;

        let staged_user = tables.users.get(&user_id).cloned().map(|mut user| {
            user.company_id = None;
            user.updated_at = now;
            user
        });
        if staged_user.is_some() {
            self.check_user_write()?;
        }

        tables.companies.insert(company.company_id, company.clone());
        if let Some(user) = staged_user {
            tables.users.insert(user.user_id, user);
        }
        Ok(Some(company))
    }

    async fn find_product_by_id(&self, product_id: Uuid) -> Result<Option<Product>, DomainError> {
        Ok(self.tables.read().await.products.get(&product_id).cloned())
    }

    async fn add_product(&self, company_product: CompanyProduct) -> Result<CompanyProduct, DomainError> {
        self.tables
            .write()
            .await
            .company_products
            .push(company_product.clone());
        Ok(company_product)
    }

    async fn find_products(&self, company_id: Uuid) -> Result<Vec<Product>, DomainError> {
        let tables = self.tables.read().await;
        Ok(tables
            .company_products
            .iter()
            .filter(|cp| cp.company_id == company_id)
            .filter_map(|cp| tables.products.get(&cp.product_id).cloned())
            .collect())
    }

    async fn add_file(&self, file: CompanyFile) -> Result<CompanyFile, DomainError> {
        self.tables.write().await.files.push(file.clone());
        Ok(file)
    }

    async fn find_files(&self, company_id: Uuid) -> Result<Vec<CompanyFile>, DomainError> {
        let tables = self.tables.read().await;
        Ok(tables
            .files
            .iter()
            .filter(|f| f.company_id == company_id)
            .cloned()
            .collect())
    }
}

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn find_by_id(&self, user_id: Uuid) -> Result<Option<User>, DomainError> {
        Ok(self.tables.read().await.users.get(&user_id).cloned())
    }

    async fn find_by_google_id(&self, google_id: &str) -> Result<Option<User>, DomainError> {
        let tables = self.tables.read().await;
        Ok(tables
            .users
            .values()
            .find(|u| u.google_id.as_deref() == Some(google_id))
            .cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let tables = self.tables.read().await;
        Ok(tables
            .users
            .values()
            .find(|u| u.email.eq_ignore_ascii_case(email))
            .cloned())
    }

    async fn create(&self, user: User) -> Result<User, DomainError> {
        self.check_user_write()?;
        let mut tables = self.tables.write().await;

        if tables.users.values().any(|u| u.email.eq_ignore_ascii_case(&user.email)) {
            return Err(DomainError::Validation {
                message: "Email already registered".to_string(),
            });
        }

        tables.users.insert(user.user_id, user.clone());
        Ok(user)
    }

    async fn update(&self, user: User) -> Result<User, DomainError> {
        self.check_user_write()?;
        let mut tables = self.tables.write().await;
        let existing = tables
            .users
            .get_mut(&user.user_id)
            .ok_or_else(|| DomainError::not_found("User"))?;

        let company_id = existing.company_id;
        *existing = user;
        existing.company_id = company_id;
        Ok(existing.clone())
    }
}

#[async_trait]
impl ReviewRepository for InMemoryStore {
    async fn create(&self, review: Review) -> Result<Review, DomainError> {
        self.tables.write().await.reviews.push(review.clone());
        Ok(review)
    }

    async fn find_by_company(
        &self,
        company_id: Uuid,
        pagination: Pagination,
    ) -> Result<PaginatedResponse<Review>, DomainError> {
        let tables = self.tables.read().await;
        let mut reviews: Vec<Review> = tables
            .reviews
            .iter()
            .filter(|r| r.company_id == company_id)
            .cloned()
            .collect();
        reviews.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        let total = reviews.len() as u64;

        Ok(PaginatedResponse::new(pagination.apply(&reviews), pagination, total))
    }

    async fn summary_for_company(&self, company_id: Uuid) -> Result<Option<ReviewSummary>, DomainError> {
        let tables = self.tables.read().await;
        let reviews: Vec<&Review> = tables
            .reviews
            .iter()
            .filter(|r| r.company_id == company_id)
            .collect();

        if reviews.is_empty() {
            return Ok(None);
        }

        let count = reviews.len() as u64;
        let sum: u64 = reviews.iter().map(|r| u64::from(r.rating)).sum();
        let comment = reviews
            .iter()
            .max_by_key(|r| r.created_at)
            .map(|r| r.comment.clone());

        Ok(Some(ReviewSummary {
            average: sum as f64 / count as f64,
            count,
            comment,
        }))
    }
}

#[async_trait]
impl ComplaintRepository for InMemoryStore {
    async fn create(&self, complaint: Complaint) -> Result<Complaint, DomainError> {
        self.tables.write().await.complaints.push(complaint.clone());
        Ok(complaint)
    }

    async fn find_all(&self, pagination: Pagination) -> Result<PaginatedResponse<ComplaintView>, DomainError> {
        Ok(self.tables.read().await.complaint_page(pagination, |_| true))
    }

    async fn find_by_id(&self, complaint_id: Uuid) -> Result<Option<ComplaintView>, DomainError> {
        let tables = self.tables.read().await;
        Ok(tables
            .complaints
            .iter()
            .find(|c| c.complaint_id == complaint_id)
            .map(|complaint| ComplaintView {
                complaint: complaint.clone(),
                user: tables.author_of(complaint.user_id),
            }))
    }

    async fn find_by_company(
        &self,
        company_id: Uuid,
        pagination: Pagination,
    ) -> Result<PaginatedResponse<ComplaintView>, DomainError> {
        Ok(self
            .tables
            .read()
            .await
            .complaint_page(pagination, |c| c.company_id == company_id))
    }

    async fn find_by_user(
        &self,
        user_id: Uuid,
        pagination: Pagination,
    ) -> Result<PaginatedResponse<ComplaintView>, DomainError> {
        Ok(self
            .tables
            .read()
            .await
            .complaint_page(pagination, |c| c.user_id == user_id))
    }

    async fn update_status(
        &self,
        complaint_id: Uuid,
        status: ComplaintStatus,
    ) -> Result<Option<Complaint>, DomainError> {
        let mut tables = self.tables.write().await;
        Ok(tables
            .complaints
            .iter_mut()
            .find(|c| c.complaint_id == complaint_id)
            .map(|complaint| {
                complaint.complaint_status = status;
                complaint.updated_at = Utc::now();
                complaint.clone()
            }))
    }
}
