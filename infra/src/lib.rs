//! # Infrastructure Layer
//!
//! Concrete implementations of the `gc_core` ports:
//!
//! - **Database**: MySQL repositories using SQLx, embedded migrations and
//!   the bootstrap seed
//! - **Notification**: AWS SNS publisher and a log-only sender
//! - **Google**: ID token verification against Google's tokeninfo endpoint
//!
//! ## Features
//!
//! - `mysql`: Enable MySQL database support (default)
//! - `aws-sns`: Enable the AWS SNS notification sender (default)

// Re-export core types for convenience
pub use gc_core::errors::*;

/// Database module - MySQL implementations using SQLx
#[cfg(feature = "mysql")]
pub mod database;

/// Google sign-in verification
pub mod google;

/// Push notification senders
pub mod notification;

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Database connection error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Migration failure
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// HTTP request error for external services
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Notification provider error
    #[error("Notification error: {0}")]
    Notification(String),
}
