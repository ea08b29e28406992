//! Request and response bodies
//!
//! Requests are validated with `validator` before they reach a service.
//! Responses reuse the domain types, which already serialize as camelCase.

pub mod auth;
pub mod company;
pub mod complaint;
pub mod review;

pub use auth::{GoogleLoginRequest, RefreshTokenRequest, UpdateUserTokensRequest};
pub use company::{
    AddProductRequest, AssignUserRequest, CompanyFilesQuery, CreateCompanyRequest, UpdateCompanyRequest,
    UploadFileRequest, UploadImageRequest,
};
pub use complaint::CreateComplaintRequest;
pub use review::CreateReviewRequest;
