//! Bookstore Backend - Author Management
//!
//! A Rust REST backend for the bookstore's author catalog, providing a JSON
//! API for registering, querying, updating and deleting authors.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub repository: repository::Repository,
}
