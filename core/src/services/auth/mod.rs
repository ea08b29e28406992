//! Authentication service module
//!
//! Handles Google sign-in, refresh token rotation and re-issuing tokens
//! after the user's role or company binding changed.

mod config;
mod google;
mod service;


pub use config::AuthServiceConfig;
pub use google::GoogleTokenVerifier;
pub use service::AuthService;
