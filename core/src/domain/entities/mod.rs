//! Domain entities representing core business objects.

pub mod company;
pub mod company_file;
pub mod complaint;
pub mod notification;
pub mod product;
pub mod review;
pub mod token;
pub mod user;

#[cfg(test)]
mod tests;

pub use company::{Company, CompanyStatus, CompanyUpdate, NewCompany};
pub use company_file::{CompanyFile, NewCompanyFile};
pub use complaint::{
    Complaint, ComplaintAuthor, ComplaintStatus, ComplaintSubject, ComplaintView, NewComplaint,
};
pub use notification::Notification;
pub use product::{CompanyProduct, Product};
pub use review::{NewReview, Review, ReviewSummary, MAX_RATING, MIN_RATING};
pub use token::{
    Claims, RefreshToken, TokenPair, ACCESS_TOKEN_EXPIRY_MINUTES, JWT_AUDIENCE, JWT_ISSUER,
    REFRESH_TOKEN_EXPIRY_DAYS,
};
pub use user::{NewUser, User, UserRole};
