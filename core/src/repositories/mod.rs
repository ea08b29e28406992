//! Repository interfaces implemented by the infrastructure layer.
//!
//! `memory` provides an in-process implementation of every trait, used by
//! tests and by the API when it runs without a database.

pub mod company;
pub mod complaint;
pub mod memory;
pub mod review;
pub mod token;
pub mod user;

pub use company::CompanyRepository;
pub use complaint::ComplaintRepository;
pub use memory::{InMemoryStore, InMemoryTokenRepository};
pub use review::ReviewRepository;
pub use token::TokenRepository;
pub use user::UserRepository;
