//! API handlers for Shelf REST endpoints

pub mod books;
pub mod health;
pub mod members;
pub mod openapi;

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
    routing::{get, post, put},
    Router,
};
use serde::Serialize;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use utoipa::ToSchema;

use crate::{error::AppError, AppState};

/// Proof that the request carried the configured token.
///
/// Must come before any other extractor in a handler so a rejected request
/// never reaches a store.
pub struct Authorized;

#[async_trait]
impl FromRequestParts<AppState> for Authorized {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok());

        state.services.auth.check(token)?;
        Ok(Authorized)
    }
}

/// Plain confirmation body
#[derive(Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Create the application router with all routes
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Collection routes keep their trailing slash: `/books` is not `/books/`
    let api = Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Books
        .route("/books/", post(books::create_book).get(books::list_books))
        .route("/books/:id", put(books::update_book).delete(books::delete_book))
        // Members
        .route("/members/", post(members::create_member).get(members::list_members))
        .route(
            "/members/:id",
            put(members::update_member).delete(members::delete_member),
        )
        .with_state(state);

    Router::new()
        .merge(api)
        .merge(openapi::create_openapi_router())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
