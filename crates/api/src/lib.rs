//! HTTP API layer with Axum routes and middleware.
//!
//! This crate provides:
//! - REST API routes for auth, authors, and books
//! - Authentication middleware
//! - Response shaping: views out, field-level validation errors back

pub mod middleware;
pub mod routes;

#[cfg(test)]
pub(crate) mod test_support;

use axum::Router;
use librarium_core::AuthService;
use librarium_shared::JwtService;
use sea_orm::DatabaseConnection;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub db: Arc<DatabaseConnection>,
    /// JWT service for token validation.
    pub jwt_service: Arc<JwtService>,
    /// Auth service for credential checks and token issuance.
    pub auth_service: Arc<AuthService>,
    /// Optional maximum total number of books.
    pub max_books: Option<u64>,
}

/// Creates the main application router, versioned under `/api/v1.0`.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/api/v1.0", routes::api_routes_with_state(state.clone()))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
