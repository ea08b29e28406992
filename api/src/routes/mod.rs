//! Route handlers, one module per resource
//!
//! Each module exposes `configure::<B>()` for [`crate::create_app`].

pub mod auth;
pub mod company;
pub mod complaint;
pub mod review;
pub mod user;
