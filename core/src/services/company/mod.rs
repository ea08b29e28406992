//! Company directory service
//!
//! Listings, profile management with approval notifications, and the
//! user-company assignment workflow.

mod config;
mod service;


pub use config::CompanyServiceConfig;
pub use service::CompanyService;
