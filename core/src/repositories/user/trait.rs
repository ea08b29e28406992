//! User repository trait defining the interface for user data persistence.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::user::User;
use crate::errors::DomainError;

/// Repository trait for User entity persistence operations
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by their unique ID
    ///
    /// # Returns
    /// * `Ok(Some(User))` - User found
    /// * `Ok(None)` - No user found with given ID
    /// * `Err(DomainError)` - Database or other error occurred
    async fn find_by_id(&self, user_id: Uuid) -> Result<Option<User>, DomainError>;

    /// Find a user by the Google account subject
    async fn find_by_google_id(&self, google_id: &str) -> Result<Option<User>, DomainError>;

    /// Find a user by email (case-insensitive)
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError>;

    /// Create a new user
    ///
    /// Fails with `DomainError::Validation` if the email is already registered.
    async fn create(&self, user: User) -> Result<User, DomainError>;

    /// Update profile fields of an existing user
    ///
    /// `company_id` is not written here; the binding is owned by
    /// `CompanyRepository::bind_user`.
    async fn update(&self, user: User) -> Result<User, DomainError>;
}
