use async_trait::async_trait;

use crate::domain::value_objects::GoogleIdentity;
use crate::errors::DomainError;

/// Verifies Google ID tokens issued to one of our client ids
#[async_trait]
pub trait GoogleTokenVerifier: Send + Sync {
    /// Returns the identity carried by a valid token
    ///
    /// A rejected token is `AuthError::InvalidUser`; transport failures are
    /// `AuthError::ProviderUnavailable`.
    async fn verify(&self, id_token: &str) -> Result<GoogleIdentity, DomainError>;
}
