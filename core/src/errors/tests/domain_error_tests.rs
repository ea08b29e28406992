//! Unit tests for domain error types

use crate::errors::{AssignmentError, AuthError, ComplaintError, DomainError, TokenError};

#[test]
fn test_assignment_messages_are_client_literals() {
    assert_eq!(AssignmentError::UserNotFound.to_string(), "El usuario no existe");
    assert_eq!(
        AssignmentError::UserAlreadyAssigned.to_string(),
        "El usuario ya tiene una compañía asignada"
    );
    assert_eq!(AssignmentError::CompanyNotFound.to_string(), "La companía no existe");
    assert_eq!(
        AssignmentError::CompanyAlreadyAssigned.to_string(),
        "La compañía ya tiene un usuario asignado"
    );
    assert_eq!(AssignmentError::Unexpected.to_string(), "Error no esperado");
}

#[test]
fn test_assignment_codes_are_distinct() {
    let codes = [
        AssignmentError::UserNotFound,
        AssignmentError::UserAlreadyAssigned,
        AssignmentError::CompanyNotFound,
        AssignmentError::CompanyAlreadyAssigned,
        AssignmentError::Unexpected,
    ]
    .map(|e| e.as_code());

    let mut unique = codes.to_vec();
    unique.sort();
    unique.dedup();
    assert_eq!(unique.len(), codes.len());
}

#[test]
fn test_auth_messages() {
    assert_eq!(AuthError::MissingGoogleToken.to_string(), "No google token provided");
    assert_eq!(AuthError::MissingRefreshToken.to_string(), "No refresh token provided");
    assert_eq!(AuthError::MissingAuthToken.to_string(), "No auth token provided");
    assert_eq!(AuthError::InvalidUser.to_string(), "Invalid user");
}

#[test]
fn test_bridged_errors_are_transparent() {
    let error: DomainError = ComplaintError::NotFound.into();
    assert_eq!(error.to_string(), "Complaint not found.");

    let error: DomainError = TokenError::InvalidToken.into();
    assert_eq!(error.to_string(), "Invalid token");
    assert!(matches!(error, DomainError::Token(TokenError::InvalidToken)));
}

#[test]
fn test_helpers() {
    let error = DomainError::not_found("company");
    assert_eq!(error.to_string(), "Resource not found: company");

    let error = DomainError::internal("pool closed");
    assert!(matches!(error, DomainError::Internal { ref message } if message == "pool closed"));
}
