//! Configuration module with business-specific sub-modules
//!
//! - `auth` - JWT and Google sign-in configuration
//! - `database` - Database connection and pool configuration
//! - `environment` - Environment detection and logging configuration
//! - `notification` - Push notification dispatch (AWS SNS)
//! - `server` - HTTP server and CORS configuration

pub mod auth;
pub mod database;
pub mod environment;
pub mod notification;
pub mod server;

use serde::{Deserialize, Serialize};

pub use auth::{AuthConfig, GoogleConfig, JwtConfig};
pub use database::DatabaseConfig;
pub use environment::{Environment, LoggingConfig};
pub use notification::{NotificationConfig, NotificationProvider};
pub use server::{CorsConfig, ServerConfig};

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment configuration
    pub environment: Environment,

    /// Server configuration
    pub server: ServerConfig,

    /// Database configuration
    pub database: DatabaseConfig,

    /// Authentication configuration
    pub auth: AuthConfig,

    /// Notification configuration
    #[serde(default)]
    pub notification: NotificationConfig,

    /// CORS configuration
    #[serde(default)]
    pub cors: CorsConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Load the bootstrap companies and reviews on startup
    #[serde(default)]
    pub seed_database: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        let env = Environment::default();
        Self {
            environment: env,
            server: ServerConfig::default(),
            database: DatabaseConfig::default(),
            auth: AuthConfig::default(),
            notification: NotificationConfig::default(),
            cors: CorsConfig::default(),
            logging: LoggingConfig::for_environment(env),
            seed_database: false,
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let environment = Environment::from_env();
        let cors = if environment.is_production() {
            CorsConfig::from_env()
        } else {
            CorsConfig::development()
        };

        Self {
            environment,
            server: ServerConfig::from_env(),
            database: DatabaseConfig::from_env(),
            auth: AuthConfig::from_env(),
            notification: NotificationConfig::from_env(),
            cors,
            logging: LoggingConfig::for_environment(environment),
            seed_database: std::env::var("SEED_DATABASE")
                .map(|v| v.eq_ignore_ascii_case("true") || v == "1")
                .unwrap_or(false),
        }
    }

    /// Check the configuration for values that must never reach production
    pub fn validate(&self) -> Result<(), String> {
        if self.environment.is_production() && self.auth.jwt.is_using_default_secret() {
            return Err("JWT_SECRET must be set in production".to_string());
        }
        if self.auth.jwt.secret.len() < 32 && self.environment.is_production() {
            return Err("JWT_SECRET must be at least 32 characters".to_string());
        }
        if self.notification.provider == NotificationProvider::Sns
            && self.notification.target_arn.is_none()
        {
            return Err("AWS_ARN is required when the SNS notification provider is enabled".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
        assert!(!config.seed_database);
    }

    #[test]
    fn test_production_rejects_default_secret() {
        let config = AppConfig {
            environment: Environment::Production,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_sns_requires_target_arn() {
        let mut config = AppConfig::default();
        config.notification.provider = NotificationProvider::Sns;
        config.notification.target_arn = None;
        assert!(config.validate().is_err());

        config.notification.target_arn = Some("arn:aws:sns:us-east-1:123456789012:greencircle".to_string());
        assert!(config.validate().is_ok());
    }
}
