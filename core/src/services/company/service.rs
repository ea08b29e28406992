//! Company service implementation

use std::sync::Arc;

use gc_shared::types::{PaginatedResponse, Pagination};
use uuid::Uuid;

use crate::domain::entities::company::{Company, CompanyStatus, CompanyUpdate, NewCompany};
use crate::domain::entities::company_file::{CompanyFile, NewCompanyFile};
use crate::domain::entities::notification::Notification;
use crate::domain::entities::product::CompanyProduct;
use crate::domain::value_objects::{CompanyDetail, CompanyWithFiles};
use crate::errors::{AssignmentError, DomainError};
use crate::repositories::{CompanyRepository, ReviewRepository, UserRepository};
use crate::services::notification::NotificationSender;

use super::config::CompanyServiceConfig;

pub struct CompanyService<C, U, R, N>
where
    C: CompanyRepository,
    U: UserRepository,
    R: ReviewRepository,
    N: NotificationSender,
{
    company_repository: Arc<C>,
    user_repository: Arc<U>,
    review_repository: Arc<R>,
    notifier: Arc<N>,
    config: CompanyServiceConfig,
}

impl<C, U, R, N> CompanyService<C, U, R, N>
where
    C: CompanyRepository,
    U: UserRepository,
    R: ReviewRepository,
    N: NotificationSender,
{
    pub fn new(
        company_repository: Arc<C>,
        user_repository: Arc<U>,
        review_repository: Arc<R>,
        notifier: Arc<N>,
        config: CompanyServiceConfig,
    ) -> Self {
        Self {
            company_repository,
            user_repository,
            review_repository,
            notifier,
            config,
        }
    }

    /// Page over every company, each with its files
    pub async fn get_all_companies(
        &self,
        pagination: Pagination,
    ) -> Result<PaginatedResponse<CompanyWithFiles>, DomainError> {
        let page = self.company_repository.find_all(pagination).await?;
        self.attach_files(page).await
    }

    pub async fn get_companies_by_status(
        &self,
        status: CompanyStatus,
        pagination: Pagination,
    ) -> Result<PaginatedResponse<CompanyWithFiles>, DomainError> {
        let page = self.company_repository.find_by_status(status, pagination).await?;
        self.attach_files(page).await
    }

    async fn attach_files(
        &self,
        page: PaginatedResponse<Company>,
    ) -> Result<PaginatedResponse<CompanyWithFiles>, DomainError> {
        let mut rows = Vec::with_capacity(page.rows.len());
        for company in &page.rows {
            let files = self.company_repository.find_files(company.company_id).await?;
            rows.push(CompanyWithFiles {
                company: company.clone(),
                files,
            });
        }

        Ok(PaginatedResponse {
            rows,
            start: page.start,
            page_size: page.page_size,
            total: page.total,
        })
    }

    /// Full profile with review score, one comment, products and files
    ///
    /// Returns `Ok(None)` only when the company does not exist.
    pub async fn get_company_by_id(&self, company_id: Uuid) -> Result<Option<CompanyDetail>, DomainError> {
        let Some(company) = self.company_repository.find_by_id(company_id).await? else {
            return Ok(None);
        };

        let (score, one_comment) = match self.review_repository.summary_for_company(company_id).await? {
            Some(summary) => (Some(summary.rounded_score()), summary.comment),
            None => (None, None),
        };

        let products = self.company_repository.find_products(company_id).await?;
        let files = self.company_repository.find_files(company_id).await?;

        Ok(Some(CompanyDetail {
            company,
            score,
            one_comment,
            products,
            files,
        }))
    }

    pub async fn get_company_by_user_id(&self, user_id: Uuid) -> Result<Option<Company>, DomainError> {
        self.company_repository.find_by_user_id(user_id).await
    }

    pub async fn get_company_files(&self, company_id: Uuid) -> Result<Vec<CompanyFile>, DomainError> {
        self.company_repository.find_files(company_id).await
    }

    pub async fn create_company(&self, data: NewCompany) -> Result<Company, DomainError> {
        let company = self.company_repository.create(Company::new(data)).await?;
        tracing::info!(company_id = %company.company_id, name = %company.name, "Company created");
        Ok(company)
    }

    /// Apply a partial update
    ///
    /// Moving the company to `approved` or `rejected` sends one notification
    /// after the update is stored. A failed send is logged and does not undo
    /// the update.
    pub async fn update_company_info(
        &self,
        company_id: Uuid,
        update: CompanyUpdate,
    ) -> Result<Option<Company>, DomainError> {
        let Some(mut company) = self.company_repository.find_by_id(company_id).await? else {
            return Ok(None);
        };

        let new_status = update.status;
        company.apply(update);
        let company = self.company_repository.update(company).await?;

        if let Some(status) = new_status {
            self.notify_status(status, company_id).await;
        }

        Ok(Some(company))
    }

    async fn notify_status(&self, status: CompanyStatus, company_id: Uuid) {
        let Some(target_arn) = self.config.notification_target_arn.as_deref() else {
            if status.notification_text().is_some() {
                tracing::warn!(company_id = %company_id, "No notification target configured, skipping");
            }
            return;
        };

        let Some(notification) = Notification::for_status(status, company_id, target_arn) else {
            return;
        };

        match self.notifier.send_notification(&notification).await {
            Ok(message_id) => tracing::info!(
                company_id = %company_id,
                status = status.as_str(),
                provider = self.notifier.provider_name(),
                message_id = %message_id,
                "Status notification sent"
            ),
            Err(e) => tracing::warn!(
                company_id = %company_id,
                provider = self.notifier.provider_name(),
                error = %e,
                "Failed to send status notification"
            ),
        }
    }

    /// Associate a catalog product with a company
    pub async fn add_product(&self, company_product: CompanyProduct) -> Result<CompanyProduct, DomainError> {
        if self.company_repository.find_by_id(company_product.company_id).await?.is_none() {
            return Err(DomainError::not_found("Company"));
        }
        if self
            .company_repository
            .find_product_by_id(company_product.product_id)
            .await?
            .is_none()
        {
            return Err(DomainError::not_found("Product"));
        }

        self.company_repository.add_product(company_product).await
    }

    pub async fn add_company_file(&self, data: NewCompanyFile) -> Result<CompanyFile, DomainError> {
        if self.company_repository.find_by_id(data.company_id).await?.is_none() {
            return Err(DomainError::not_found("Company"));
        }

        self.company_repository.add_file(CompanyFile::new(data)).await
    }

    pub async fn update_profile_picture(&self, company_id: Uuid, url: String) -> Result<Company, DomainError> {
        let update = CompanyUpdate {
            profile_picture: Some(url),
            ..Default::default()
        };

        self.update_company_info(company_id, update)
            .await?
            .ok_or_else(|| DomainError::not_found("Company"))
    }

    /// Bind a user to a company
    ///
    /// The checks run in a fixed order: user exists, user unbound, company
    /// exists, company unbound. The repository repeats the "unbound" checks
    /// inside its transaction, so a concurrent assignment still loses with
    /// the matching "already assigned" error.
    pub async fn assign_company_user(&self, company_id: Uuid, user_id: Uuid) -> Result<(), AssignmentError> {
        let user = self
            .user_repository
            .find_by_id(user_id)
            .await
            .map_err(|e| unexpected(e, company_id, user_id))?
            .ok_or(AssignmentError::UserNotFound)?;
        if user.has_company() {
            return Err(AssignmentError::UserAlreadyAssigned);
        }

        let company = self
            .company_repository
            .find_by_id(company_id)
            .await
            .map_err(|e| unexpected(e, company_id, user_id))?
            .ok_or(AssignmentError::CompanyNotFound)?;
        if company.has_owner() {
            return Err(AssignmentError::CompanyAlreadyAssigned);
        }

        match self.company_repository.bind_user(company_id, user_id).await {
            Ok(()) => {
                tracing::info!(company_id = %company_id, user_id = %user_id, "User assigned to company");
                Ok(())
            }
            Err(DomainError::Assignment(e)) => Err(e),
            Err(e) => Err(unexpected(e, company_id, user_id)),
        }
    }

    /// Clear the binding of a user on both sides
    ///
    /// Returns the company as it is after unbinding, or `None` if the user
    /// managed none.
    pub async fn unbind_user_from_company(&self, user_id: Uuid) -> Result<Option<Company>, DomainError> {
        let company = self.company_repository.unbind_user(user_id).await?;
        if let Some(company) = &company {
            tracing::info!(company_id = %company.company_id, user_id = %user_id, "User unbound from company");
        }
        Ok(company)
    }
}

fn unexpected(error: DomainError, company_id: Uuid, user_id: Uuid) -> AssignmentError {
    tracing::error!(
        company_id = %company_id,
        user_id = %user_id,
        error = %error,
        "Assignment failed"
    );
    AssignmentError::Unexpected
}
