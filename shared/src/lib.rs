//! Shared utilities and common types for the GreenCircle server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types
//! - Error response structures
//! - Pagination and response wrappers
//! - Input validation helpers

pub mod config;
pub mod errors;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, AuthConfig, CorsConfig, DatabaseConfig, Environment, GoogleConfig, JwtConfig,
    LoggingConfig, NotificationConfig, NotificationProvider, ServerConfig,
};
pub use errors::{error_codes, ApiResult, ErrorResponse, IntoErrorResponse};
pub use types::{ApiResponse, Language, PaginatedResponse, Pagination};
pub use utils::validation;
