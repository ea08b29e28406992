//! # GreenCircle API
//!
//! actix-web server exposing the company directory, complaints, reviews and
//! Google sign-in under `/api/v1`.

pub mod app;
pub mod backend;
pub mod config;
pub mod dto;
pub mod handlers;
pub mod i18n;
pub mod middleware;
pub mod routes;

pub use app::{create_app, AppState};
pub use backend::{seed_memory_store, Backend, BackendParts, MemoryBackend, MySqlBackend};
