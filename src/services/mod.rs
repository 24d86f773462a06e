//! Business logic services

pub mod auth;
pub mod books;
pub mod members;

use crate::{config::AuthConfig, repository::Repository};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub auth: auth::AuthService,
    pub books: books::BooksService,
    pub members: members::MembersService,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository, auth_config: &AuthConfig) -> Self {
        Self {
            auth: auth::AuthService::new(auth_config),
            books: books::BooksService::new(repository.clone()),
            members: members::MembersService::new(repository),
        }
    }
}
