//! Shared handler helpers

pub mod error;

pub use error::{detect_language, handle_domain_error, validation_error_response};
