//! Main token service implementation

use chrono::Duration;
use rand::distributions::Alphanumeric;
use rand::Rng;
use sha2::{Digest, Sha256};
use uuid::Uuid;

use crate::domain::entities::token::{Claims, RefreshToken, TokenPair};
use crate::domain::entities::user::User;
use crate::errors::{DomainError, TokenError};
use crate::repositories::TokenRepository;

use super::codec::JwtCodec;
use super::config::TokenServiceConfig;

const REFRESH_TOKEN_LENGTH: usize = 32;

/// Service for managing JWT access tokens and opaque refresh tokens
pub struct TokenService<R: TokenRepository> {
    pub(crate) repository: R,
    config: TokenServiceConfig,
    codec: JwtCodec,
}

impl<R: TokenRepository> TokenService<R> {
    pub fn new(repository: R, config: TokenServiceConfig) -> Self {
        let codec = JwtCodec::new(&config.jwt_secret);
        Self {
            repository,
            config,
            codec,
        }
    }

    /// Codec used to verify access tokens outside the service
    pub fn codec(&self) -> &JwtCodec {
        &self.codec
    }

    /// Generates a token pair starting a new rotation family
    pub async fn generate_tokens(&self, user: &User) -> Result<TokenPair, DomainError> {
        let family = Uuid::new_v4().to_string();
        self.generate_tokens_in_family(user, &family).await
    }

    /// Generates a token pair whose refresh token continues `token_family`
    pub async fn generate_tokens_in_family(
        &self,
        user: &User,
        token_family: &str,
    ) -> Result<TokenPair, DomainError> {
        let access_expiry = Duration::minutes(self.config.access_token_expiry_minutes);
        let refresh_expiry = Duration::days(self.config.refresh_token_expiry_days);

        let access_token = self.codec.encode(&Claims::new_access_token(user, access_expiry))?;
        let refresh_token = self
            .generate_refresh_token(user.user_id, token_family, refresh_expiry)
            .await?;

        Ok(TokenPair::new(
            access_token,
            refresh_token,
            access_expiry.num_seconds(),
            refresh_expiry.num_seconds(),
        ))
    }

    async fn generate_refresh_token(
        &self,
        user_id: Uuid,
        token_family: &str,
        expiry: Duration,
    ) -> Result<String, DomainError> {
        let token_string: String = rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(REFRESH_TOKEN_LENGTH)
            .map(char::from)
            .collect();

        let refresh_token = RefreshToken::new(
            user_id,
            self.hash_token(&token_string),
            token_family.to_string(),
            expiry,
        );

        self.repository
            .save_refresh_token(refresh_token)
            .await
            .map_err(|_| DomainError::Token(TokenError::TokenGenerationFailed))?;

        Ok(token_string)
    }

    /// Verifies an access token and returns the claims
    pub fn verify_access_token(&self, token: &str) -> Result<Claims, DomainError> {
        self.codec.decode(token)
    }

    /// Validates a refresh token and revokes it so it cannot be used again
    ///
    /// Presenting a token that was already revoked is treated as reuse and
    /// revokes the whole family.
    pub async fn consume_refresh_token(&self, token: &str) -> Result<RefreshToken, DomainError> {
        let token_hash = self.hash_token(token);

        let stored = self
            .repository
            .find_refresh_token(&token_hash)
            .await?
            .ok_or(DomainError::Token(TokenError::InvalidToken))?;

        if stored.is_revoked {
            let revoked = self.repository.revoke_token_family(&stored.token_family).await?;
            tracing::warn!(
                user_id = %stored.user_id,
                revoked,
                "Revoked refresh token presented again; family revoked"
            );
            return Err(DomainError::Token(TokenError::TokenRevoked));
        }

        if stored.is_expired() {
            return Err(DomainError::Token(TokenError::TokenExpired));
        }

        self.repository.revoke_token(&token_hash).await?;
        Ok(stored)
    }

    /// Hashes a token for storage
    pub(crate) fn hash_token(&self, token: &str) -> String {
        hex::encode(Sha256::digest(token.as_bytes()))
    }
}
