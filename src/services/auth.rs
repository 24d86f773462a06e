//! Static token authentication

use std::sync::Arc;

use crate::{
    config::AuthConfig,
    error::{AppError, AppResult},
};

/// Checks the `Authorization` header against the configured token
#[derive(Clone)]
pub struct AuthService {
    token: Arc<str>,
}

impl AuthService {
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            token: Arc::from(config.token.as_str()),
        }
    }

    /// `Ok` only when `provided` is exactly the configured token.
    /// A missing or unreadable header is passed as `None`.
    pub fn check(&self, provided: Option<&str>) -> AppResult<()> {
        match provided {
            Some(token) if token == &*self.token => Ok(()),
            _ => Err(AppError::Authentication("Unauthorized".to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> AuthService {
        AuthService::new(&AuthConfig {
            token: "aaaaaa12".to_string(),
        })
    }

    #[test]
    fn test_exact_token_is_accepted() {
        assert!(service().check(Some("aaaaaa12")).is_ok());
    }

    #[test]
    fn test_anything_else_is_rejected() {
        let auth = service();
        for provided in [None, Some(""), Some("AAAAAA12"), Some("Bearer aaaaaa12"), Some("aaaaaa12 ")] {
            match auth.check(provided) {
                Err(AppError::Authentication(msg)) => assert_eq!(msg, "Unauthorized"),
                other => panic!("{provided:?} should be rejected, got {other:?}"),
            }
        }
    }
}
