//! Token service module for JWT management
//!
//! - HS256 access token generation and verification (`JwtCodec`)
//! - Opaque refresh tokens stored as SHA-256 hashes
//! - Refresh token rotation with family-wide revocation on reuse

mod codec;
mod config;
mod service;

#[cfg(test)]
mod tests;

pub use codec::JwtCodec;
pub use config::TokenServiceConfig;
pub use service::TokenService;
