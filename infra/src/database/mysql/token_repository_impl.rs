//! MySQL implementation of the TokenRepository trait.
//!
//! Only SHA-256 hashes of refresh tokens reach this table; hashing happens
//! in the token service.

use async_trait::async_trait;
use sqlx::mysql::MySqlRow;
use sqlx::{MySqlPool, Row};

use gc_core::domain::entities::token::RefreshToken;
use gc_core::errors::DomainError;
use gc_core::repositories::TokenRepository;

use super::{db_error, get, get_uuid};

/// MySQL implementation of TokenRepository
pub struct MySqlTokenRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlTokenRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_token(row: &MySqlRow) -> Result<RefreshToken, DomainError> {
        Ok(RefreshToken {
            id: get_uuid(row, "id")?,
            user_id: get_uuid(row, "user_id")?,
            token_hash: get(row, "token_hash")?,
            token_family: get(row, "token_family")?,
            created_at: get(row, "created_at")?,
            expires_at: get(row, "expires_at")?,
            is_revoked: get(row, "is_revoked")?,
        })
    }
}

#[async_trait]
impl TokenRepository for MySqlTokenRepository {
    async fn save_refresh_token(&self, token: RefreshToken) -> Result<RefreshToken, DomainError> {
        let exists: i64 = sqlx::query("SELECT EXISTS(SELECT 1 FROM refresh_tokens WHERE token_hash = ?) AS found")
            .bind(&token.token_hash)
            .fetch_one(&self.pool)
            .await
            .map_err(db_error("Failed to check token existence"))?
            .try_get("found")
            .map_err(db_error("Failed to read token existence"))?;

        if exists == 1 {
            return Err(DomainError::Validation {
                message: "Token already exists".to_string(),
            });
        }

        let query = r#"
            INSERT INTO refresh_tokens (
                id, user_id, token_hash, token_family, created_at, expires_at, is_revoked
            ) VALUES (?, ?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(token.id.to_string())
            .bind(token.user_id.to_string())
            .bind(&token.token_hash)
            .bind(&token.token_family)
            .bind(token.created_at)
            .bind(token.expires_at)
            .bind(token.is_revoked)
            .execute(&self.pool)
            .await
            .map_err(db_error("Failed to save refresh token"))?;

        Ok(token)
    }

    async fn find_refresh_token(&self, token_hash: &str) -> Result<Option<RefreshToken>, DomainError> {
        let query = r#"
            SELECT id, user_id, token_hash, token_family, created_at, expires_at, is_revoked
            FROM refresh_tokens
            WHERE token_hash = ?
            LIMIT 1
        "#;

        let row = sqlx::query(query)
            .bind(token_hash)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error("Failed to find refresh token"))?;

        row.as_ref().map(Self::row_to_token).transpose()
    }

    async fn revoke_token(&self, token_hash: &str) -> Result<bool, DomainError> {
        let result = sqlx::query("UPDATE refresh_tokens SET is_revoked = TRUE WHERE token_hash = ? AND is_revoked = FALSE")
            .bind(token_hash)
            .execute(&self.pool)
            .await
            .map_err(db_error("Failed to revoke token"))?;

        Ok(result.rows_affected() > 0)
    }

    async fn revoke_token_family(&self, token_family: &str) -> Result<usize, DomainError> {
        let result = sqlx::query("UPDATE refresh_tokens SET is_revoked = TRUE WHERE token_family = ? AND is_revoked = FALSE")
            .bind(token_family)
            .execute(&self.pool)
            .await
            .map_err(db_error("Failed to revoke token family"))?;

        Ok(result.rows_affected() as usize)
    }
}
