//! MySQL repository implementations
//!
//! Identifiers are stored as `CHAR(36)` strings and parsed back on read.

mod company_repository_impl;
mod complaint_repository_impl;
mod review_repository_impl;
mod token_repository_impl;
mod user_repository_impl;

pub use company_repository_impl::MySqlCompanyRepository;
pub use complaint_repository_impl::MySqlComplaintRepository;
pub use review_repository_impl::MySqlReviewRepository;
pub use token_repository_impl::MySqlTokenRepository;
pub use user_repository_impl::MySqlUserRepository;

use gc_core::errors::DomainError;
use sqlx::mysql::MySqlRow;
use sqlx::Row;
use uuid::Uuid;

/// Wrap a driver error with the operation that failed
pub(crate) fn db_error(context: &'static str) -> impl Fn(sqlx::Error) -> DomainError {
    move |e| {
        tracing::error!(error = %e, "{}", context);
        DomainError::Internal {
            message: format!("{}: {}", context, e),
        }
    }
}

pub(crate) fn get_uuid(row: &MySqlRow, column: &str) -> Result<Uuid, DomainError> {
    let value: String = row
        .try_get(column)
        .map_err(|e| DomainError::internal(format!("Failed to get {}: {}", column, e)))?;
    Uuid::parse_str(&value).map_err(|e| DomainError::internal(format!("Invalid UUID in {}: {}", column, e)))
}

pub(crate) fn get_optional_uuid(row: &MySqlRow, column: &str) -> Result<Option<Uuid>, DomainError> {
    let value: Option<String> = row
        .try_get(column)
        .map_err(|e| DomainError::internal(format!("Failed to get {}: {}", column, e)))?;
    value
        .map(|v| Uuid::parse_str(&v))
        .transpose()
        .map_err(|e| DomainError::internal(format!("Invalid UUID in {}: {}", column, e)))
}

pub(crate) fn get<'r, T>(row: &'r MySqlRow, column: &str) -> Result<T, DomainError>
where
    T: sqlx::Decode<'r, sqlx::MySql> + sqlx::Type<sqlx::MySql>,
{
    row.try_get(column)
        .map_err(|e| DomainError::internal(format!("Failed to get {}: {}", column, e)))
}

/// Parse an enum column stored as its string form
pub(crate) fn get_parsed<T>(row: &MySqlRow, column: &str) -> Result<T, DomainError>
where
    T: std::str::FromStr<Err = String>,
{
    let value: String = get(row, column)?;
    value.parse().map_err(DomainError::internal)
}
