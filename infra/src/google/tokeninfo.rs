//! Google ID token verification through the tokeninfo endpoint
//!
//! Google checks the signature and expiry; we check that the token was issued
//! to one of our OAuth client ids and by a Google issuer.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::time::Duration;

use gc_core::domain::value_objects::GoogleIdentity;
use gc_core::errors::{AuthError, DomainError};
use gc_core::services::GoogleTokenVerifier;
use gc_shared::config::GoogleConfig;

use crate::InfrastructureError;

const GOOGLE_ISSUERS: [&str; 2] = ["accounts.google.com", "https://accounts.google.com"];

/// Subset of the tokeninfo response we rely on
///
/// Google encodes booleans as strings in this response.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenInfo {
    pub aud: String,
    pub sub: String,
    #[serde(default)]
    pub iss: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub email_verified: Option<serde_json::Value>,
    #[serde(default)]
    pub given_name: Option<String>,
    #[serde(default)]
    pub family_name: Option<String>,
    #[serde(default)]
    pub picture: Option<String>,
}

impl TokenInfo {
    fn email_verified(&self) -> bool {
        match &self.email_verified {
            Some(serde_json::Value::Bool(verified)) => *verified,
            Some(serde_json::Value::String(verified)) => verified == "true",
            _ => false,
        }
    }

    /// Check issuer and audience, then build the identity
    pub fn into_identity(self, client_ids: &[String]) -> Result<GoogleIdentity, DomainError> {
        if !client_ids.is_empty() && !client_ids.iter().any(|id| id == &self.aud) {
            tracing::warn!(aud = %self.aud, "Google token issued to an unknown client");
            return Err(AuthError::InvalidUser.into());
        }
        if let Some(iss) = &self.iss {
            if !GOOGLE_ISSUERS.contains(&iss.as_str()) {
                tracing::warn!(iss = %iss, "Google token has an unexpected issuer");
                return Err(AuthError::InvalidUser.into());
            }
        }

        let email_verified = self.email_verified();
        let email = self.email.ok_or(AuthError::InvalidUser)?;

        Ok(GoogleIdentity {
            subject: self.sub,
            email,
            email_verified,
            given_name: self.given_name,
            family_name: self.family_name,
            picture: self.picture,
        })
    }
}

/// Verifies ID tokens with `GET {tokeninfo_url}?id_token=...`
pub struct GoogleTokenInfoVerifier {
    client: Client,
    tokeninfo_url: String,
    client_ids: Vec<String>,
}

impl GoogleTokenInfoVerifier {
    pub fn new(config: &GoogleConfig) -> Result<Self, InfrastructureError> {
        if config.client_ids.is_empty() {
            tracing::warn!("GOOGLE_CLIENT_IDS is empty, any Google audience will be accepted");
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            tokeninfo_url: config.tokeninfo_url.clone(),
            client_ids: config.client_ids.clone(),
        })
    }
}

#[async_trait]
impl GoogleTokenVerifier for GoogleTokenInfoVerifier {
    async fn verify(&self, id_token: &str) -> Result<GoogleIdentity, DomainError> {
        let response = self
            .client
            .get(&self.tokeninfo_url)
            .query(&[("id_token", id_token)])
            .send()
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Google tokeninfo request failed");
                AuthError::ProviderUnavailable
            })?;

        match response.status() {
            status if status.is_success() => {}
            StatusCode::BAD_REQUEST | StatusCode::UNAUTHORIZED => {
                return Err(AuthError::InvalidUser.into());
            }
            status => {
                tracing::error!(status = %status, "Google tokeninfo returned an error");
                return Err(AuthError::ProviderUnavailable.into());
            }
        }

        let info: TokenInfo = response.json().await.map_err(|e| {
            tracing::error!(error = %e, "Malformed Google tokeninfo response");
            AuthError::ProviderUnavailable
        })?;

        info.into_identity(&self.client_ids)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn info(aud: &str) -> TokenInfo {
        serde_json::from_value(serde_json::json!({
            "aud": aud,
            "sub": "110169484474386276334",
            "iss": "https://accounts.google.com",
            "email": "lucia@example.com",
            "email_verified": "true",
            "given_name": "Lucía",
            "family_name": "Hernández",
            "picture": "https://lh3.googleusercontent.com/a/photo"
        }))
        .unwrap()
    }

    #[test]
    fn test_identity_for_known_client() {
        let identity = info("android-client").into_identity(&["android-client".to_string()]).unwrap();

        assert_eq!(identity.subject, "110169484474386276334");
        assert!(identity.email_verified);
        assert_eq!(identity.given_name.as_deref(), Some("Lucía"));
    }

    #[test]
    fn test_unknown_audience_is_rejected() {
        let err = info("someone-else").into_identity(&["android-client".to_string()]).unwrap_err();
        assert!(matches!(err, DomainError::Auth(AuthError::InvalidUser)));
    }

    #[test]
    fn test_boolean_email_verified() {
        let mut token = info("android-client");
        token.email_verified = Some(serde_json::Value::Bool(false));

        let identity = token.into_identity(&[]).unwrap();
        assert!(!identity.email_verified);
    }
}
