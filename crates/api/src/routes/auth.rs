//! Authentication routes: login and current identity.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use serde_json::json;
use tracing::{error, info};
use validator::Validate;

use crate::{AppState, middleware::AuthUser};
use librarium_shared::auth::LoginRequest;

/// Creates the public auth router.
pub fn routes() -> Router<AppState> {
    Router::new().route("/auth/login", post(login))
}

/// Creates the auth routes that require a valid bearer token.
pub fn protected_routes() -> Router<AppState> {
    Router::new().route("/auth/me", get(me))
}

/// POST /auth/login - Validate credentials and return a token bundle.
async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> impl IntoResponse {
    let payload = match payload {
        Ok(Json(payload)) => payload,
        Err(rejection) => return super::authors::malformed_payload(&rejection),
    };
    if let Err(errors) = payload.validate() {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({
                "error": "validation_error",
                "message": "Username and password are required",
                "errors": errors
            })),
        )
            .into_response();
    }

    match state.auth_service.login(&payload.username, &payload.password) {
        Ok(Some(response)) => (StatusCode::OK, Json(response)).into_response(),
        Ok(None) => {
            info!(username = %payload.username, "Failed login attempt");
            (
                StatusCode::UNAUTHORIZED,
                Json(json!({
                    "error": "invalid_credentials",
                    "message": "Invalid username or password"
                })),
            )
                .into_response()
        }
        Err(e) => {
            error!(error = %e, "Failed to issue token");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "error": "internal_error",
                    "message": "An error occurred during login"
                })),
            )
                .into_response()
        }
    }
}

/// GET /auth/me - Return the authenticated identity.
async fn me(user: AuthUser) -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(json!({ "username": user.username() })),
    )
}
