//! Type definitions module
//!
//! - `language` - Internationalization and language types
//! - `pagination` - Offset pagination for list endpoints
//! - `response` - API response wrappers and health checks

pub mod language;
pub mod pagination;
pub mod response;

pub use language::Language;
pub use pagination::{PaginatedResponse, Pagination, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
pub use response::{ApiResponse, HealthResponse, HealthStatus, MessageResponse};
