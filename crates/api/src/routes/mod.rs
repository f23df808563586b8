//! API route definitions.

use axum::{Router, middleware};

use crate::{AppState, middleware::auth::auth_middleware};

pub mod auth;
pub mod authors;
pub mod books;
pub mod health;

/// Creates the API router, wiring the auth middleware onto protected
/// routes.
#[allow(clippy::needless_pass_by_value)]
pub fn api_routes_with_state(state: AppState) -> Router<AppState> {
    // Protected routes that require a valid bearer token
    let protected_routes = Router::new()
        .merge(auth::protected_routes())
        .merge(authors::routes())
        .merge(books::routes())
        .layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    // Combine public and protected routes
    Router::new()
        .merge(health::routes())
        .merge(auth::routes())
        .merge(protected_routes)
}
