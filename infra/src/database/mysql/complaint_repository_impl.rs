//! MySQL implementation of the ComplaintRepository trait.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::mysql::MySqlRow;
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use gc_core::domain::entities::complaint::{
    Complaint, ComplaintAuthor, ComplaintStatus, ComplaintSubject, ComplaintView,
};
use gc_core::errors::DomainError;
use gc_core::repositories::ComplaintRepository;
use gc_shared::types::{PaginatedResponse, Pagination};

use super::{db_error, get, get_parsed, get_uuid};

const VIEW_SELECT: &str = r#"
    SELECT c.complaint_id, c.user_id, c.company_id, c.complaint_subject, c.complaint_description,
           c.complaint_status, c.created_at, c.updated_at,
           u.first_name AS author_first_name, u.last_name AS author_last_name
    FROM complaints c
    LEFT JOIN users u ON u.user_id = c.user_id
"#;

/// Filter applied to a complaint listing
#[derive(Clone, Copy)]
enum Scope {
    All,
    Company(Uuid),
    User(Uuid),
}

impl Scope {
    fn clause(&self) -> &'static str {
        match self {
            Scope::All => "",
            Scope::Company(_) => "WHERE c.company_id = ?",
            Scope::User(_) => "WHERE c.user_id = ?",
        }
    }

    fn value(&self) -> Option<String> {
        match self {
            Scope::All => None,
            Scope::Company(id) | Scope::User(id) => Some(id.to_string()),
        }
    }
}

pub struct MySqlComplaintRepository {
    pool: MySqlPool,
}

impl MySqlComplaintRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_complaint(row: &MySqlRow) -> Result<Complaint, DomainError> {
        Ok(Complaint {
            complaint_id: get_uuid(row, "complaint_id")?,
            user_id: get_uuid(row, "user_id")?,
            company_id: get_uuid(row, "company_id")?,
            complaint_subject: get_parsed::<ComplaintSubject>(row, "complaint_subject")?,
            complaint_description: get(row, "complaint_description")?,
            complaint_status: get_parsed::<ComplaintStatus>(row, "complaint_status")?,
            created_at: get(row, "created_at")?,
            updated_at: get(row, "updated_at")?,
        })
    }

    fn row_to_view(row: &MySqlRow) -> Result<ComplaintView, DomainError> {
        let first_name: Option<String> = get(row, "author_first_name")?;
        let last_name: Option<String> = get(row, "author_last_name")?;

        let user = match (first_name, last_name) {
            (Some(first_name), Some(last_name)) => Some(ComplaintAuthor {
                first_name,
                last_name,
            }),
            _ => None,
        };

        Ok(ComplaintView {
            complaint: Self::row_to_complaint(row)?,
            user,
        })
    }

    async fn page(&self, scope: Scope, pagination: Pagination) -> Result<PaginatedResponse<ComplaintView>, DomainError> {
        let count_sql = format!("SELECT COUNT(*) AS total FROM complaints c {}", scope.clause());
        let mut count_query = sqlx::query(&count_sql);
        if let Some(value) = scope.value() {
            count_query = count_query.bind(value);
        }
        let total: i64 = count_query
            .fetch_one(&self.pool)
            .await
            .map_err(db_error("Failed to count complaints"))?
            .try_get("total")
            .map_err(db_error("Failed to read complaint count"))?;

        let list_sql = format!(
            "{} {} ORDER BY c.created_at DESC LIMIT ? OFFSET ?",
            VIEW_SELECT,
            scope.clause()
        );
        let mut list_query = sqlx::query(&list_sql);
        if let Some(value) = scope.value() {
            list_query = list_query.bind(value);
        }
        let rows = list_query
            .bind(pagination.limit_i64())
            .bind(pagination.offset_i64())
            .fetch_all(&self.pool)
            .await
            .map_err(db_error("Failed to list complaints"))?;

        let views = rows.iter().map(Self::row_to_view).collect::<Result<Vec<_>, _>>()?;
        Ok(PaginatedResponse::new(views, pagination, total.max(0) as u64))
    }
}

#[async_trait]
impl ComplaintRepository for MySqlComplaintRepository {
    async fn create(&self, complaint: Complaint) -> Result<Complaint, DomainError> {
        sqlx::query(
            r#"
            INSERT INTO complaints (
                complaint_id, user_id, company_id, complaint_subject, complaint_description,
                complaint_status, created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(complaint.complaint_id.to_string())
        .bind(complaint.user_id.to_string())
        .bind(complaint.company_id.to_string())
        .bind(complaint.complaint_subject.label())
        .bind(&complaint.complaint_description)
        .bind(complaint.complaint_status.as_str())
        .bind(complaint.created_at)
        .bind(complaint.updated_at)
        .execute(&self.pool)
        .await
        .map_err(db_error("Failed to create complaint"))?;

        Ok(complaint)
    }

    async fn find_all(&self, pagination: Pagination) -> Result<PaginatedResponse<ComplaintView>, DomainError> {
        self.page(Scope::All, pagination).await
    }

    async fn find_by_id(&self, complaint_id: Uuid) -> Result<Option<ComplaintView>, DomainError> {
        let query = format!("{} WHERE c.complaint_id = ? LIMIT 1", VIEW_SELECT);

        let row = sqlx::query(&query)
            .bind(complaint_id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error("Failed to find complaint"))?;

        row.as_ref().map(Self::row_to_view).transpose()
    }

    async fn find_by_company(
        &self,
        company_id: Uuid,
        pagination: Pagination,
    ) -> Result<PaginatedResponse<ComplaintView>, DomainError> {
        self.page(Scope::Company(company_id), pagination).await
    }

    async fn find_by_user(
        &self,
        user_id: Uuid,
        pagination: Pagination,
    ) -> Result<PaginatedResponse<ComplaintView>, DomainError> {
        self.page(Scope::User(user_id), pagination).await
    }

    async fn update_status(
        &self,
        complaint_id: Uuid,
        status: ComplaintStatus,
    ) -> Result<Option<Complaint>, DomainError> {
        let result = sqlx::query("UPDATE complaints SET complaint_status = ?, updated_at = ? WHERE complaint_id = ?")
            .bind(status.as_str())
            .bind(Utc::now())
            .bind(complaint_id.to_string())
            .execute(&self.pool)
            .await
            .map_err(db_error("Failed to update complaint status"))?;

        if result.rows_affected() == 0 {
            // MySQL reports 0 affected rows when the value did not change
            let exists: Option<String> =
                sqlx::query_scalar("SELECT complaint_id FROM complaints WHERE complaint_id = ?")
                    .bind(complaint_id.to_string())
                    .fetch_optional(&self.pool)
                    .await
                    .map_err(db_error("Failed to find complaint"))?;
            if exists.is_none() {
                return Ok(None);
            }
        }

        Ok(self.find_by_id(complaint_id).await?.map(|view| view.complaint))
    }
}
