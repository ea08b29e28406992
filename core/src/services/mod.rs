//! Business services containing domain logic and use cases.

pub mod auth;
pub mod company;
pub mod complaint;
pub mod notification;
pub mod review;
pub mod token;

pub use auth::{AuthService, AuthServiceConfig, GoogleTokenVerifier};
pub use company::{CompanyService, CompanyServiceConfig};
pub use complaint::ComplaintService;
pub use notification::NotificationSender;
pub use review::ReviewService;
pub use token::{JwtCodec, TokenService, TokenServiceConfig};
