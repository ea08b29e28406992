//! Database module - MySQL implementations using SQLx
//!
//! - Connection pool management and embedded migrations
//! - Repository implementations for every `gc_core` repository trait
//! - Bootstrap seed for development databases

pub mod connection;
pub mod mysql;
pub mod seed;

#[cfg(test)]
mod tests;

// Re-export commonly used types
pub use connection::DatabasePool;
pub use mysql::{
    MySqlCompanyRepository, MySqlComplaintRepository, MySqlReviewRepository, MySqlTokenRepository,
    MySqlUserRepository,
};
pub use seed::seed_database;
