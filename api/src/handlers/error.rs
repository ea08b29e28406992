use actix_web::{
    error::InternalError,
    http::{header, StatusCode},
    HttpRequest, HttpResponse,
};
use gc_core::errors::{AssignmentError, AuthError, ComplaintError, DomainError, TokenError, ValidationError};
use gc_shared::errors::{error_codes, ErrorResponse};
use std::collections::HashMap;
use std::fmt;

use crate::i18n::{translate, Language};

/// Pick the response language from `Accept-Language`, honoring q-values
pub fn detect_language(req: &HttpRequest) -> Language {
    let header_str = match req
        .headers()
        .get(header::ACCEPT_LANGUAGE)
        .and_then(|value| value.to_str().ok())
    {
        Some(value) => value,
        None => return Language::default(),
    };

    let mut preferred = Language::default();
    let mut max_quality = 0.0_f32;

    for entry in header_str.split(',') {
        let mut parts = entry.trim().split(';');
        let tag = parts.next().unwrap_or_default().trim().to_lowercase();
        let quality = parts
            .find_map(|part| part.trim().strip_prefix("q="))
            .and_then(|q| q.parse::<f32>().ok())
            .unwrap_or(1.0);

        let language = if tag.starts_with("es") {
            Language::Spanish
        } else if tag.starts_with("en") {
            Language::English
        } else {
            continue;
        };

        if quality > max_quality {
            preferred = language;
            max_quality = quality;
        }
    }

    preferred
}

/// Status, error code, message key and message parameters for a domain error
fn classify(error: &DomainError) -> (StatusCode, &'static str, &'static str, Vec<(&'static str, String)>) {
    match error {
        DomainError::Validation { message } => (
            StatusCode::BAD_REQUEST,
            error_codes::VALIDATION_ERROR,
            "validation_error",
            vec![("message", message.clone())],
        ),
        DomainError::NotFound { resource } => (
            StatusCode::NOT_FOUND,
            error_codes::NOT_FOUND,
            "not_found",
            vec![("resource", resource.clone())],
        ),
        DomainError::Internal { .. } => (
            StatusCode::INTERNAL_SERVER_ERROR,
            error_codes::INTERNAL_ERROR,
            "internal_error",
            vec![],
        ),
        DomainError::Auth(auth_error) => {
            let (status, code, key) = match auth_error {
                AuthError::MissingGoogleToken => {
                    (StatusCode::BAD_REQUEST, error_codes::MISSING_CREDENTIALS, "missing_google_token")
                }
                AuthError::MissingRefreshToken => {
                    (StatusCode::BAD_REQUEST, error_codes::MISSING_CREDENTIALS, "missing_refresh_token")
                }
                AuthError::MissingAuthToken => {
                    (StatusCode::BAD_REQUEST, error_codes::MISSING_CREDENTIALS, "missing_auth_token")
                }
                AuthError::InvalidUser => (StatusCode::UNAUTHORIZED, error_codes::INVALID_USER, "invalid_user"),
                AuthError::ProviderUnavailable => (
                    StatusCode::SERVICE_UNAVAILABLE,
                    error_codes::SERVICE_UNAVAILABLE,
                    "provider_unavailable",
                ),
            };
            (status, code, key, vec![])
        }
        DomainError::Token(token_error) => {
            let (status, code, key) = match token_error {
                TokenError::TokenExpired => (StatusCode::UNAUTHORIZED, error_codes::TOKEN_EXPIRED, "token_expired"),
                TokenError::InvalidToken => (StatusCode::UNAUTHORIZED, error_codes::TOKEN_INVALID, "token_invalid"),
                TokenError::TokenNotYetValid => {
                    (StatusCode::UNAUTHORIZED, error_codes::TOKEN_INVALID, "token_not_yet_valid")
                }
                TokenError::TokenRevoked => (StatusCode::UNAUTHORIZED, error_codes::TOKEN_INVALID, "token_revoked"),
                TokenError::TokenGenerationFailed => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    error_codes::INTERNAL_ERROR,
                    "internal_error",
                ),
            };
            (status, code, key, vec![])
        }
        DomainError::Assignment(assignment_error) => {
            let (status, key) = assignment_status(assignment_error);
            (status, assignment_error.as_code(), key, vec![])
        }
        DomainError::Complaint(ComplaintError::NotFound) => (
            StatusCode::NOT_FOUND,
            error_codes::COMPLAINT_NOT_FOUND,
            "complaint_not_found",
            vec![],
        ),
        DomainError::ValidationErr(validation_error) => {
            let (key, params) = match validation_error {
                ValidationError::RequiredField { field } => ("required_field", vec![("field", field.clone())]),
                ValidationError::OutOfRange { field, min, max } => (
                    "out_of_range",
                    vec![("field", field.clone()), ("min", min.clone()), ("max", max.clone())],
                ),
            };
            (StatusCode::BAD_REQUEST, error_codes::VALIDATION_ERROR, key, params)
        }
    }
}

fn assignment_status(error: &AssignmentError) -> (StatusCode, &'static str) {
    match error {
        AssignmentError::UserNotFound => (StatusCode::NOT_FOUND, "user_not_found"),
        AssignmentError::CompanyNotFound => (StatusCode::NOT_FOUND, "company_not_found"),
        AssignmentError::UserAlreadyAssigned => (StatusCode::CONFLICT, "user_already_assigned"),
        AssignmentError::CompanyAlreadyAssigned => (StatusCode::CONFLICT, "company_already_assigned"),
        AssignmentError::Unexpected => (StatusCode::INTERNAL_SERVER_ERROR, "assignment_failed"),
    }
}

/// Build a localized error body with an explicit status
pub fn build_error_response(
    status: StatusCode,
    code: &str,
    key: &str,
    params: &[(&str, &str)],
    lang: Language,
) -> HttpResponse {
    HttpResponse::build(status).json(ErrorResponse::new(code, translate(key, lang, params)))
}

/// Convert a domain error into its HTTP response
pub fn error_response(error: &DomainError, lang: Language) -> HttpResponse {
    let (status, code, key, params) = classify(error);
    let params: Vec<(&str, &str)> = params.iter().map(|(name, value)| (*name, value.as_str())).collect();
    build_error_response(status, code, key, &params, lang)
}

/// Log a domain error and respond in the caller's language
pub fn handle_domain_error(error: DomainError, req: &HttpRequest) -> HttpResponse {
    let response = error_response(&error, detect_language(req));
    if response.status().is_server_error() {
        log::error!("{} {} failed: {}", req.method(), req.path(), error);
    } else {
        log::debug!("{} {} rejected: {}", req.method(), req.path(), error);
    }
    response
}

/// 400 response listing each field that failed `validator` checks
pub fn validation_error_response(errors: &validator::ValidationErrors, req: &HttpRequest) -> HttpResponse {
    let lang = detect_language(req);

    let mut fields: Vec<&str> = errors.field_errors().keys().copied().collect();
    fields.sort_unstable();

    let details: HashMap<String, serde_json::Value> = errors
        .field_errors()
        .into_iter()
        .map(|(field, field_errors)| {
            let codes: Vec<String> = field_errors.iter().map(|e| e.code.to_string()).collect();
            (field.to_string(), serde_json::json!(codes))
        })
        .collect();

    let message = translate("validation_error", lang, &[("message", &fields.join(", "))]);
    HttpResponse::BadRequest().json(ErrorResponse::with_details(error_codes::VALIDATION_ERROR, message, details))
}

/// Error handler for the JSON, query and path extractors
pub fn payload_error_handler<E>(err: E, req: &HttpRequest) -> actix_web::Error
where
    E: fmt::Debug + fmt::Display + 'static,
{
    let detail = err.to_string();
    log::debug!("Rejected request payload on {}: {}", req.path(), detail);
    let response = build_error_response(
        StatusCode::BAD_REQUEST,
        error_codes::BAD_REQUEST,
        "validation_error",
        &[("message", &detail)],
        detect_language(req),
    );
    InternalError::from_response(err, response).into()
}

/// Default service for unknown routes
pub async fn not_found(req: HttpRequest) -> HttpResponse {
    build_error_response(
        StatusCode::NOT_FOUND,
        error_codes::NOT_FOUND,
        "not_found",
        &[("resource", req.path())],
        detect_language(&req),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    #[test]
    fn test_detect_language_uses_quality() {
        let req = TestRequest::default()
            .insert_header((header::ACCEPT_LANGUAGE, "es;q=0.4,en-US;q=0.9"))
            .to_http_request();
        assert_eq!(detect_language(&req), Language::English);

        let req = TestRequest::default()
            .insert_header((header::ACCEPT_LANGUAGE, "fr-FR"))
            .to_http_request();
        assert_eq!(detect_language(&req), Language::Spanish);

        let req = TestRequest::default().to_http_request();
        assert_eq!(detect_language(&req), Language::Spanish);
    }

    #[test]
    fn test_assignment_statuses() {
        let status = |e: AssignmentError| error_response(&e.into(), Language::Spanish).status();
        assert_eq!(status(AssignmentError::UserNotFound), StatusCode::NOT_FOUND);
        assert_eq!(status(AssignmentError::CompanyNotFound), StatusCode::NOT_FOUND);
        assert_eq!(status(AssignmentError::UserAlreadyAssigned), StatusCode::CONFLICT);
        assert_eq!(status(AssignmentError::CompanyAlreadyAssigned), StatusCode::CONFLICT);
        assert_eq!(status(AssignmentError::Unexpected), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_auth_and_token_statuses() {
        let status = |e: DomainError| error_response(&e, Language::English).status();
        assert_eq!(status(AuthError::MissingGoogleToken.into()), StatusCode::BAD_REQUEST);
        assert_eq!(status(AuthError::InvalidUser.into()), StatusCode::UNAUTHORIZED);
        assert_eq!(status(TokenError::InvalidToken.into()), StatusCode::UNAUTHORIZED);
        assert_eq!(status(ComplaintError::NotFound.into()), StatusCode::NOT_FOUND);
        assert_eq!(status(DomainError::internal("db down")), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
