//! MySQL implementation of the CompanyRepository trait.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::mysql::MySqlRow;
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use gc_core::domain::entities::company::{Company, CompanyStatus};
use gc_core::domain::entities::company_file::CompanyFile;
use gc_core::domain::entities::product::{CompanyProduct, Product};
use gc_core::errors::{AssignmentError, DomainError};
use gc_core::repositories::CompanyRepository;
use gc_shared::types::{PaginatedResponse, Pagination};

use super::{db_error, get, get_optional_uuid, get_parsed, get_uuid};

const COMPANY_COLUMNS: &str = r#"
    company_id, user_id, name, description, email, phone, web_page, street,
    street_number, city, state, zip_code, profile_picture, status, created_at, updated_at
"#;

/// MySQL implementation of CompanyRepository
///
/// `bind_user` and `unbind_user` lock both rows with `SELECT ... FOR UPDATE`
/// inside one transaction.
pub struct MySqlCompanyRepository {
    pool: MySqlPool,
}

impl MySqlCompanyRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_company(row: &MySqlRow) -> Result<Company, DomainError> {
        Ok(Company {
            company_id: get_uuid(row, "company_id")?,
            user_id: get_optional_uuid(row, "user_id")?,
            name: get(row, "name")?,
            description: get(row, "description")?,
            email: get(row, "email")?,
            phone: get(row, "phone")?,
            web_page: get(row, "web_page")?,
            street: get(row, "street")?,
            street_number: get(row, "street_number")?,
            city: get(row, "city")?,
            state: get(row, "state")?,
            zip_code: get(row, "zip_code")?,
            profile_picture: get(row, "profile_picture")?,
            status: get_parsed::<CompanyStatus>(row, "status")?,
            created_at: get(row, "created_at")?,
            updated_at: get(row, "updated_at")?,
        })
    }

    fn row_to_product(row: &MySqlRow) -> Result<Product, DomainError> {
        Ok(Product {
            product_id: get_uuid(row, "product_id")?,
            name: get(row, "name")?,
            description: get(row, "description")?,
            image_url: get(row, "image_url")?,
        })
    }

    fn row_to_file(row: &MySqlRow) -> Result<CompanyFile, DomainError> {
        Ok(CompanyFile {
            company_file_id: get_uuid(row, "company_file_id")?,
            company_id: get_uuid(row, "company_id")?,
            file_url: get(row, "file_url")?,
            file_description: get(row, "file_description")?,
            file_format: get(row, "file_format")?,
        })
    }

    async fn page(
        &self,
        status: Option<CompanyStatus>,
        pagination: Pagination,
    ) -> Result<PaginatedResponse<Company>, DomainError> {
        let filter = if status.is_some() { "WHERE status = ?" } else { "" };

        let count_sql = format!("SELECT COUNT(*) AS total FROM companies {}", filter);
        let mut count_query = sqlx::query(&count_sql);
        if let Some(status) = status {
            count_query = count_query.bind(status.as_str());
        }
        let total: i64 = count_query
            .fetch_one(&self.pool)
            .await
            .map_err(db_error("Failed to count companies"))?
            .try_get("total")
            .map_err(db_error("Failed to read company count"))?;

        let list_sql = format!(
            "SELECT {} FROM companies {} ORDER BY created_at ASC, company_id ASC LIMIT ? OFFSET ?",
            COMPANY_COLUMNS, filter
        );
        let mut list_query = sqlx::query(&list_sql);
        if let Some(status) = status {
            list_query = list_query.bind(status.as_str());
        }
        let rows = list_query
            .bind(pagination.limit_i64())
            .bind(pagination.offset_i64())
            .fetch_all(&self.pool)
            .await
            .map_err(db_error("Failed to list companies"))?;

        let companies = rows.iter().map(Self::row_to_company).collect::<Result<Vec<_>, _>>()?;
        Ok(PaginatedResponse::new(companies, pagination, total.max(0) as u64))
    }
}

#[async_trait]
impl CompanyRepository for MySqlCompanyRepository {
    async fn find_all(&self, pagination: Pagination) -> Result<PaginatedResponse<Company>, DomainError> {
        self.page(None, pagination).await
    }

    async fn find_by_status(
        &self,
        status: CompanyStatus,
        pagination: Pagination,
    ) -> Result<PaginatedResponse<Company>, DomainError> {
        self.page(Some(status), pagination).await
    }

    async fn find_by_id(&self, company_id: Uuid) -> Result<Option<Company>, DomainError> {
        let query = format!("SELECT {} FROM companies WHERE company_id = ? LIMIT 1", COMPANY_COLUMNS);

        let row = sqlx::query(&query)
            .bind(company_id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error("Failed to find company"))?;

        row.as_ref().map(Self::row_to_company).transpose()
    }

    async fn find_by_user_id(&self, user_id: Uuid) -> Result<Option<Company>, DomainError> {
        let query = format!("SELECT {} FROM companies WHERE user_id = ? LIMIT 1", COMPANY_COLUMNS);

        let row = sqlx::query(&query)
            .bind(user_id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error("Failed to find company by user"))?;

        row.as_ref().map(Self::row_to_company).transpose()
    }

    async fn create(&self, company: Company) -> Result<Company, DomainError> {
        let query = r#"
            INSERT INTO companies (
                company_id, user_id, name, description, email, phone, web_page, street,
                street_number, city, state, zip_code, profile_picture, status, created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(company.company_id.to_string())
            .bind(company.user_id.map(|id| id.to_string()))
            .bind(&company.name)
            .bind(&company.description)
            .bind(&company.email)
            .bind(&company.phone)
            .bind(&company.web_page)
            .bind(&company.street)
            .bind(&company.street_number)
            .bind(&company.city)
            .bind(&company.state)
            .bind(&company.zip_code)
            .bind(&company.profile_picture)
            .bind(company.status.as_str())
            .bind(company.created_at)
            .bind(company.updated_at)
            .execute(&self.pool)
            .await
            .map_err(db_error("Failed to create company"))?;

        Ok(company)
    }

    async fn update(&self, company: Company) -> Result<Company, DomainError> {
        let query = r#"
            UPDATE companies SET
                name = ?, description = ?, email = ?, phone = ?, web_page = ?, street = ?,
                street_number = ?, city = ?, state = ?, zip_code = ?, profile_picture = ?,
                status = ?, updated_at = ?
            WHERE company_id = ?
        "#;

        let result = sqlx::query(query)
            .bind(&company.name)
            .bind(&company.description)
            .bind(&company.email)
            .bind(&company.phone)
            .bind(&company.web_page)
            .bind(&company.street)
            .bind(&company.street_number)
            .bind(&company.city)
            .bind(&company.state)
            .bind(&company.zip_code)
            .bind(&company.profile_picture)
            .bind(company.status.as_str())
            .bind(company.updated_at)
            .bind(company.company_id.to_string())
            .execute(&self.pool)
            .await
            .map_err(db_error("Failed to update company"))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::not_found("Company"));
        }

        // Re-read so the owner column reflects the stored value
        self.find_by_id(company.company_id)
            .await?
            .ok_or_else(|| DomainError::not_found("Company"))
    }

    async fn bind_user(&self, company_id: Uuid, user_id: Uuid) -> Result<(), DomainError> {
        let mut tx = self.pool.begin().await.map_err(db_error("Failed to begin transaction"))?;

        let user_row = sqlx::query("SELECT company_id FROM users WHERE user_id = ? FOR UPDATE")
            .bind(user_id.to_string())
            .fetch_optional(&mut *tx)
            .await
            .map_err(db_error("Failed to lock user"))?
            .ok_or(AssignmentError::UserNotFound)?;
        if get_optional_uuid(&user_row, "company_id")?.is_some() {
            return Err(AssignmentError::UserAlreadyAssigned.into());
        }

        let company_row = sqlx::query("SELECT user_id FROM companies WHERE company_id = ? FOR UPDATE")
            .bind(company_id.to_string())
            .fetch_optional(&mut *tx)
            .await
            .map_err(db_error("Failed to lock company"))?
            .ok_or(AssignmentError::CompanyNotFound)?;
        if get_optional_uuid(&company_row, "user_id")?.is_some() {
            return Err(AssignmentError::CompanyAlreadyAssigned.into());
        }

        let now = Utc::now();

        let company_update = sqlx::query(
            "UPDATE companies SET user_id = ?, updated_at = ? WHERE company_id = ? AND user_id IS NULL",
        )
        .bind(user_id.to_string())
        .bind(now)
        .bind(company_id.to_string())
        .execute(&mut *tx)
        .await
        .map_err(db_error("Failed to bind company"))?;
        if company_update.rows_affected() != 1 {
            return Err(AssignmentError::CompanyAlreadyAssigned.into());
        }

        let user_update = sqlx::query(
            "UPDATE users SET company_id = ?, updated_at = ? WHERE user_id = ? AND company_id IS NULL",
        )
        .bind(company_id.to_string())
        .bind(now)
        .bind(user_id.to_string())
        .execute(&mut *tx)
        .await
        .map_err(db_error("Failed to bind user"))?;
        if user_update.rows_affected() != 1 {
            return Err(AssignmentError::UserAlreadyAssigned.into());
        }

        // Dropping `tx` on any early return rolls both updates back
        tx.commit().await.map_err(db_error("Failed to commit assignment"))?;
        Ok(())
    }

    async fn unbind_user(&self, user_id: Uuid) -> Result<Option<Company>, DomainError> {
        let mut tx = self.pool.begin().await.map_err(db_error("Failed to begin transaction"))?;

        let query = format!("SELECT {} FROM companies WHERE user_id = ? FOR UPDATE", COMPANY_COLUMNS);
        let owned = sqlx::query(&query)
            .bind(user_id.to_string())
            .fetch_optional(&mut *tx)
            .await
            .map_err(db_error("Failed to lock company"))?
            .as_ref()
            .map(Self::row_to_company)
            .transpose()?;

        // Nothing is written unless a company points back at the user
        let Some(mut company) = owned else {
            return Ok(None);
        };

        let now = Utc::now();

        sqlx::query("UPDATE companies SET user_id = NULL, updated_at = ? WHERE company_id = ?")
            .bind(now)
            .bind(company.company_id.to_string())
            .execute(&mut *tx)
            .await
            .map_err(db_error("Failed to unbind company"))?;

        sqlx::query("UPDATE users SET company_id = NULL, updated_at = ? WHERE user_id = ?")
            .bind(now)
            .bind(user_id.to_string())
            .execute(&mut *tx)
            .await
            .map_err(db_error("Failed to unbind user"))?;

        tx.commit().await.map_err(db_error("Failed to commit unbind"))?;

        company.user_id = None;
        company.updated_at = now;
        Ok(Some(company))
    }

    async fn find_product_by_id(&self, product_id: Uuid) -> Result<Option<Product>, DomainError> {
        let row = sqlx::query("SELECT product_id, name, description, image_url FROM products WHERE product_id = ?")
            .bind(product_id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error("Failed to find product"))?;

        row.as_ref().map(Self::row_to_product).transpose()
    }

    async fn add_product(&self, company_product: CompanyProduct) -> Result<CompanyProduct, DomainError> {
        sqlx::query(
            "INSERT INTO company_products (company_id, product_id, pdf_product_certification_url) VALUES (?, ?, ?)",
        )
        .bind(company_product.company_id.to_string())
        .bind(company_product.product_id.to_string())
        .bind(&company_product.pdf_product_certification_url)
        .execute(&self.pool)
        .await
        .map_err(db_error("Failed to add product to company"))?;

        Ok(company_product)
    }

    async fn find_products(&self, company_id: Uuid) -> Result<Vec<Product>, DomainError> {
        let query = r#"
            SELECT p.product_id, p.name, p.description, p.image_url
            FROM company_products cp
            INNER JOIN products p ON p.product_id = cp.product_id
            WHERE cp.company_id = ?
            ORDER BY cp.id ASC
        "#;

        let rows = sqlx::query(query)
            .bind(company_id.to_string())
            .fetch_all(&self.pool)
            .await
            .map_err(db_error("Failed to list company products"))?;

        rows.iter().map(Self::row_to_product).collect()
    }

    async fn add_file(&self, file: CompanyFile) -> Result<CompanyFile, DomainError> {
        sqlx::query(
            r#"
            INSERT INTO company_files (company_file_id, company_id, file_url, file_description, file_format)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(file.company_file_id.to_string())
        .bind(file.company_id.to_string())
        .bind(&file.file_url)
        .bind(&file.file_description)
        .bind(&file.file_format)
        .execute(&self.pool)
        .await
        .map_err(db_error("Failed to add company file"))?;

        Ok(file)
    }

    async fn find_files(&self, company_id: Uuid) -> Result<Vec<CompanyFile>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT company_file_id, company_id, file_url, file_description, file_format
            FROM company_files
            WHERE company_id = ?
            "#,
        )
        .bind(company_id.to_string())
        .fetch_all(&self.pool)
        .await
        .map_err(db_error("Failed to list company files"))?;

        rows.iter().map(Self::row_to_file).collect()
    }
}
