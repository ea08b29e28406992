//! Value objects representing immutable domain concepts.

pub mod auth_response;
pub mod company_detail;
pub mod google_identity;

pub use auth_response::AuthResponse;
pub use company_detail::{CompanyDetail, CompanyWithFiles};
pub use google_identity::GoogleIdentity;
