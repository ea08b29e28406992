//! Main authentication service implementation

use std::sync::Arc;

use crate::domain::entities::user::{NewUser, User, UserRole};
use crate::domain::value_objects::{AuthResponse, GoogleIdentity};
use crate::errors::{AuthError, DomainError, TokenError};
use crate::repositories::{TokenRepository, UserRepository};
use crate::services::token::TokenService;

use super::config::AuthServiceConfig;
use super::google::GoogleTokenVerifier;

/// Authentication service for Google sign-in and token refresh
pub struct AuthService<U, T, G>
where
    U: UserRepository,
    T: TokenRepository,
    G: GoogleTokenVerifier,
{
    user_repository: Arc<U>,
    token_service: Arc<TokenService<T>>,
    google_verifier: Arc<G>,
    config: AuthServiceConfig,
}

impl<U, T, G> AuthService<U, T, G>
where
    U: UserRepository,
    T: TokenRepository,
    G: GoogleTokenVerifier,
{
    pub fn new(
        user_repository: Arc<U>,
        token_service: Arc<TokenService<T>>,
        google_verifier: Arc<G>,
        config: AuthServiceConfig,
    ) -> Self {
        Self {
            user_repository,
            token_service,
            google_verifier,
            config,
        }
    }

    /// Sign in with a Google ID token
    ///
    /// The account is matched by Google subject first, then by email. A new
    /// customer account is created when none matches and registration is
    /// enabled.
    pub async fn google_login(&self, google_token: &str) -> Result<AuthResponse, DomainError> {
        let google_token = google_token.trim();
        if google_token.is_empty() {
            return Err(AuthError::MissingGoogleToken.into());
        }

        let identity = self.google_verifier.verify(google_token).await?;
        if !identity.email_verified {
            tracing::warn!(subject = %identity.subject, "Google account email is not verified");
            return Err(AuthError::InvalidUser.into());
        }

        let user = self.resolve_user(&identity).await?;
        let tokens = self.token_service.generate_tokens(&user).await?;

        tracing::info!(user_id = %user.user_id, role = user.role.as_str(), "User signed in with Google");
        Ok(AuthResponse::new(tokens, user))
    }

    async fn resolve_user(&self, identity: &GoogleIdentity) -> Result<User, DomainError> {
        if let Some(user) = self.user_repository.find_by_google_id(&identity.subject).await? {
            return Ok(user);
        }

        if let Some(mut user) = self.user_repository.find_by_email(&identity.email).await? {
            user.link_google_account(identity.subject.clone());
            return self.user_repository.update(user).await;
        }

        if !self.config.allow_registration {
            tracing::info!(subject = %identity.subject, "Sign-in rejected, registration disabled");
            return Err(AuthError::InvalidUser.into());
        }

        let user = User::new(NewUser {
            role: UserRole::Customer,
            google_id: Some(identity.subject.clone()),
            first_name: identity.given_name.clone().unwrap_or_default(),
            last_name: identity.family_name.clone().unwrap_or_default(),
            email: identity.email.clone(),
            profile_picture: identity.picture.clone(),
        });
        let user = self.user_repository.create(user).await?;

        tracing::info!(user_id = %user.user_id, "Registered new user from Google sign-in");
        Ok(user)
    }

    /// Exchange a refresh token for a new token pair
    ///
    /// Every failure of the presented token is reported as `InvalidToken`.
    pub async fn update_tokens(&self, refresh_token: &str) -> Result<AuthResponse, DomainError> {
        let refresh_token = refresh_token.trim();
        if refresh_token.is_empty() {
            return Err(AuthError::MissingRefreshToken.into());
        }

        let stored = self
            .token_service
            .consume_refresh_token(refresh_token)
            .await
            .map_err(|e| match e {
                DomainError::Token(_) => DomainError::Token(TokenError::InvalidToken),
                other => other,
            })?;

        let user = self
            .user_repository
            .find_by_id(stored.user_id)
            .await?
            .ok_or(DomainError::Token(TokenError::InvalidToken))?;

        let tokens = self
            .token_service
            .generate_tokens_in_family(&user, &stored.token_family)
            .await?;

        Ok(AuthResponse::new(tokens, user))
    }

    /// Re-issue tokens for the holder of a valid access token
    ///
    /// Used after an assignment so the new claims carry the company id.
    pub async fn update_user_tokens_data(&self, auth_token: &str) -> Result<AuthResponse, DomainError> {
        let auth_token = auth_token.trim();
        let auth_token = auth_token.strip_prefix("Bearer ").unwrap_or(auth_token);
        if auth_token.is_empty() {
            return Err(AuthError::MissingAuthToken.into());
        }

        let claims = self
            .token_service
            .verify_access_token(auth_token)
            .map_err(|_| DomainError::Token(TokenError::InvalidToken))?;
        let user_id = claims
            .user_id()
            .map_err(|_| DomainError::Token(TokenError::InvalidToken))?;

        let user = self
            .user_repository
            .find_by_id(user_id)
            .await?
            .ok_or(AuthError::InvalidUser)?;

        let tokens = self.token_service.generate_tokens(&user).await?;
        Ok(AuthResponse::new(tokens, user))
    }
}
