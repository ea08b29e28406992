//! # GreenCircle Core
//!
//! Domain layer of the GreenCircle backend: entities, repository interfaces,
//! business services and the domain error types. Storage and external
//! providers live in `gc_infra`; HTTP lives in `gc_api`.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::entities;
pub use domain::value_objects;
pub use errors::{
    AssignmentError, AuthError, ComplaintError, DomainError, DomainResult, TokenError, ValidationError,
};
pub use repositories::{
    CompanyRepository, ComplaintRepository, InMemoryStore, InMemoryTokenRepository, ReviewRepository,
    TokenRepository, UserRepository,
};
pub use services::{
    AuthService, AuthServiceConfig, CompanyService, CompanyServiceConfig, ComplaintService, GoogleTokenVerifier,
    JwtCodec, NotificationSender, ReviewService, TokenService, TokenServiceConfig,
};
