//! Unit tests for token service

use chrono::{Duration, Utc};

use crate::domain::entities::token::Claims;
use crate::domain::entities::user::{NewUser, User, UserRole};
use crate::errors::{DomainError, TokenError};
use crate::repositories::{InMemoryTokenRepository, TokenRepository};
use crate::services::token::{JwtCodec, TokenService, TokenServiceConfig};

fn service() -> TokenService<InMemoryTokenRepository> {
    TokenService::new(
        InMemoryTokenRepository::new(),
        TokenServiceConfig {
            jwt_secret: "test-secret-key-with-enough-length".to_string(),
            ..Default::default()
        },
    )
}

fn user() -> User {
    User::new(NewUser {
        role: UserRole::Customer,
        first_name: "Ana".to_string(),
        last_name: "García".to_string(),
        email: "ana@example.com".to_string(),
        ..Default::default()
    })
}

#[tokio::test]
async fn test_generate_and_verify_access_token() {
    let service = service();
    let user = user();

    let pair = service.generate_tokens(&user).await.unwrap();
    let claims = service.verify_access_token(&pair.access_token).unwrap();

    assert_eq!(claims.user_id().unwrap(), user.user_id);
    assert_eq!(claims.role, UserRole::Customer);
    assert_eq!(pair.access_expires_in, 15 * 60);
    assert_eq!(pair.refresh_token.len(), 32);
}

#[tokio::test]
async fn test_refresh_token_is_stored_hashed() {
    let service = service();
    let pair = service.generate_tokens(&user()).await.unwrap();

    assert!(service.repository.find_refresh_token(&pair.refresh_token).await.unwrap().is_none());
    let hash = service.hash_token(&pair.refresh_token);
    assert_eq!(hash.len(), 64);
    assert!(service.repository.find_refresh_token(&hash).await.unwrap().is_some());
}

#[tokio::test]
async fn test_wrong_secret_is_rejected() {
    let service = service();
    let pair = service.generate_tokens(&user()).await.unwrap();

    let other = JwtCodec::new("another-secret-key-with-enough-length");
    let err = other.decode(&pair.access_token).unwrap_err();
    assert!(matches!(err, DomainError::Token(TokenError::InvalidToken)));
}

#[tokio::test]
async fn test_expired_access_token() {
    let service = service();
    let mut claims = Claims::new_access_token(&user(), Duration::minutes(15));
    claims.exp = Utc::now().timestamp() - 120;
    claims.iat = claims.exp - 900;
    claims.nbf = claims.iat;

    let token = service.codec().encode(&claims).unwrap();
    let err = service.verify_access_token(&token).unwrap_err();
    assert!(matches!(err, DomainError::Token(TokenError::TokenExpired)));
}

#[tokio::test]
async fn test_consume_rotates_and_detects_reuse() {
    let service = service();
    let user = user();
    let first = service.generate_tokens(&user).await.unwrap();

    let consumed = service.consume_refresh_token(&first.refresh_token).await.unwrap();
    assert_eq!(consumed.user_id, user.user_id);

    let second = service
        .generate_tokens_in_family(&user, &consumed.token_family)
        .await
        .unwrap();

    // Replaying the first token revokes the whole family, including the second
    let err = service.consume_refresh_token(&first.refresh_token).await.unwrap_err();
    assert!(matches!(err, DomainError::Token(TokenError::TokenRevoked)));

    let err = service.consume_refresh_token(&second.refresh_token).await.unwrap_err();
    assert!(matches!(err, DomainError::Token(TokenError::TokenRevoked)));
}

#[tokio::test]
async fn test_unknown_refresh_token() {
    let err = service().consume_refresh_token("not-a-real-token").await.unwrap_err();
    assert!(matches!(err, DomainError::Token(TokenError::InvalidToken)));
}
