//! Domain-specific error types for authentication, assignment and complaints
//!
//! `Display` strings are the canonical messages returned by the API. The
//! presentation layer may localize them via the i18n tables.

use thiserror::Error;

/// Authentication-related errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("No google token provided")]
    MissingGoogleToken,

    #[error("No refresh token provided")]
    MissingRefreshToken,

    #[error("No auth token provided")]
    MissingAuthToken,

    /// Google rejected the token, or the account may not sign in
    #[error("Invalid user")]
    InvalidUser,

    #[error("Identity provider unavailable")]
    ProviderUnavailable,
}

/// Token-related errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("Token expired")]
    TokenExpired,

    #[error("Invalid token")]
    InvalidToken,

    #[error("Token not yet valid")]
    TokenNotYetValid,

    #[error("Token revoked")]
    TokenRevoked,

    #[error("Token generation failed")]
    TokenGenerationFailed,
}

/// Outcome of a failed user-company assignment
///
/// The messages are the literals the mobile and admin clients match on.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssignmentError {
    #[error("El usuario no existe")]
    UserNotFound,

    #[error("El usuario ya tiene una compañía asignada")]
    UserAlreadyAssigned,

    #[error("La companía no existe")]
    CompanyNotFound,

    #[error("La compañía ya tiene un usuario asignado")]
    CompanyAlreadyAssigned,

    #[error("Error no esperado")]
    Unexpected,
}

impl AssignmentError {
    /// Stable machine-readable code
    pub fn as_code(&self) -> &'static str {
        match self {
            AssignmentError::UserNotFound => "USER_NOT_FOUND",
            AssignmentError::UserAlreadyAssigned => "USER_ALREADY_ASSIGNED",
            AssignmentError::CompanyNotFound => "COMPANY_NOT_FOUND",
            AssignmentError::CompanyAlreadyAssigned => "COMPANY_ALREADY_ASSIGNED",
            AssignmentError::Unexpected => "ASSIGNMENT_FAILED",
        }
    }
}

/// Complaint workflow errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ComplaintError {
    #[error("Complaint not found.")]
    NotFound,
}

/// Input validation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Required field: {field}")]
    RequiredField { field: String },

    #[error("Out of range: {field} (min: {min}, max: {max})")]
    OutOfRange { field: String, min: String, max: String },
}
