//! Shelf
//!
//! A small REST JSON API keeping books and library members in memory,
//! guarded by a single static token.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use api::create_router;
pub use config::AppConfig;
pub use error::{AppError, AppResult};

use repository::Repository;
use services::Services;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub services: Arc<Services>,
}

impl AppState {
    /// Build the stores and services described by `config`
    pub fn new(config: &AppConfig) -> Self {
        let repository = Repository::new(&config.store);
        let services = Services::new(repository, &config.auth);
        Self {
            services: Arc::new(services),
        }
    }
}
