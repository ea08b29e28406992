//! MySQL implementation of the ReviewRepository trait.

use async_trait::async_trait;
use sqlx::mysql::MySqlRow;
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use gc_core::domain::entities::review::{Review, ReviewSummary};
use gc_core::errors::DomainError;
use gc_core::repositories::ReviewRepository;
use gc_shared::types::{PaginatedResponse, Pagination};

use super::{db_error, get, get_uuid};

pub struct MySqlReviewRepository {
    pool: MySqlPool,
}

impl MySqlReviewRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_review(row: &MySqlRow) -> Result<Review, DomainError> {
        Ok(Review {
            review_id: get_uuid(row, "review_id")?,
            user_id: get_uuid(row, "user_id")?,
            company_id: get_uuid(row, "company_id")?,
            rating: get(row, "rating")?,
            comment: get(row, "comment")?,
            created_at: get(row, "created_at")?,
            updated_at: get(row, "updated_at")?,
        })
    }
}

#[async_trait]
impl ReviewRepository for MySqlReviewRepository {
    async fn create(&self, review: Review) -> Result<Review, DomainError> {
        sqlx::query(
            r#"
            INSERT INTO reviews (review_id, user_id, company_id, rating, comment, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(review.review_id.to_string())
        .bind(review.user_id.to_string())
        .bind(review.company_id.to_string())
        .bind(review.rating)
        .bind(&review.comment)
        .bind(review.created_at)
        .bind(review.updated_at)
        .execute(&self.pool)
        .await
        .map_err(db_error("Failed to create review"))?;

        Ok(review)
    }

    async fn find_by_company(
        &self,
        company_id: Uuid,
        pagination: Pagination,
    ) -> Result<PaginatedResponse<Review>, DomainError> {
        let total: i64 = sqlx::query("SELECT COUNT(*) AS total FROM reviews WHERE company_id = ?")
            .bind(company_id.to_string())
            .fetch_one(&self.pool)
            .await
            .map_err(db_error("Failed to count reviews"))?
            .try_get("total")
            .map_err(db_error("Failed to read review count"))?;

        let rows = sqlx::query(
            r#"
            SELECT review_id, user_id, company_id, rating, comment, created_at, updated_at
            FROM reviews
            WHERE company_id = ?
            ORDER BY created_at DESC
            LIMIT ? OFFSET ?
            "#,
        )
        .bind(company_id.to_string())
        .bind(pagination.limit_i64())
        .bind(pagination.offset_i64())
        .fetch_all(&self.pool)
        .await
        .map_err(db_error("Failed to list reviews"))?;

        let reviews = rows.iter().map(Self::row_to_review).collect::<Result<Vec<_>, _>>()?;
        Ok(PaginatedResponse::new(reviews, pagination, total.max(0) as u64))
    }

    async fn summary_for_company(&self, company_id: Uuid) -> Result<Option<ReviewSummary>, DomainError> {
        // SUM/AVG come back as DECIMAL; cast to integers and average here
        let row = sqlx::query(
            r#"
            SELECT COUNT(*) AS review_count, CAST(COALESCE(SUM(rating), 0) AS SIGNED) AS rating_sum
            FROM reviews
            WHERE company_id = ?
            "#,
        )
        .bind(company_id.to_string())
        .fetch_one(&self.pool)
        .await
        .map_err(db_error("Failed to aggregate reviews"))?;

        let count: i64 = get(&row, "review_count")?;
        if count <= 0 {
            return Ok(None);
        }
        let sum: i64 = get(&row, "rating_sum")?;

        let comment: Option<String> = sqlx::query_scalar(
            "SELECT comment FROM reviews WHERE company_id = ? ORDER BY created_at DESC LIMIT 1",
        )
        .bind(company_id.to_string())
        .fetch_optional(&self.pool)
        .await
        .map_err(db_error("Failed to load latest review"))?;

        Ok(Some(ReviewSummary {
            average: sum as f64 / count as f64,
            count: count as u64,
            comment,
        }))
    }
}
