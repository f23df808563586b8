//! Author CRUD routes (bearer token required).

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get, post, put},
};
use serde_json::json;
use tracing::{error, info};
use validator::Validate;

use crate::AppState;
use librarium_db::{AuthorError, AuthorService};
use librarium_shared::catalog::AuthorRequest;

/// Creates the authors router (auth middleware is applied externally).
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/authors", get(list_authors))
        .route("/authors", post(create_author))
        .route("/authors/{id}", get(get_author))
        .route("/authors/{id}", put(update_author))
        .route("/authors/{id}", delete(delete_author))
}

/// GET /authors - List all authors.
async fn list_authors(State(state): State<AppState>) -> impl IntoResponse {
    let service = AuthorService::new((*state.db).clone());

    match service.get_all().await {
        Ok(authors) => (StatusCode::OK, Json(authors)).into_response(),
        Err(e) => {
            error!(error = %e, "Database error listing authors");
            internal_error()
        }
    }
}

/// GET `/authors/{id}` - Get one author.
async fn get_author(State(state): State<AppState>, Path(id): Path<i32>) -> impl IntoResponse {
    let service = AuthorService::new((*state.db).clone());

    match service.get_by_id(id).await {
        Ok(Some(author)) => (StatusCode::OK, Json(author)).into_response(),
        Ok(None) => author_not_found(id),
        Err(e) => {
            error!(error = %e, author_id = id, "Database error fetching author");
            internal_error()
        }
    }
}

/// POST /authors - Create a new author.
async fn create_author(
    State(state): State<AppState>,
    payload: Result<Json<AuthorRequest>, JsonRejection>,
) -> impl IntoResponse {
    let payload = match payload {
        Ok(Json(payload)) => payload,
        Err(rejection) => return malformed_payload(&rejection),
    };
    if let Err(errors) = payload.validate() {
        return validation_error(&errors);
    }

    let service = AuthorService::new((*state.db).clone());

    match service.create(&payload).await {
        Ok(author) => {
            info!(author_id = author.id, "Author created");
            (StatusCode::CREATED, Json(author)).into_response()
        }
        Err(AuthorError::EmailTaken(email)) => {
            info!(email = %email, "Rejected author create: email already registered");
            (
                StatusCode::BAD_REQUEST,
                Json(json!({
                    "error": "email_taken",
                    "message": format!("The email {email} is already registered")
                })),
            )
                .into_response()
        }
        Err(e) => {
            error!(error = %e, "Failed to create author");
            internal_error()
        }
    }
}

/// PUT `/authors/{id}` - Update an existing author.
async fn update_author(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    payload: Result<Json<AuthorRequest>, JsonRejection>,
) -> impl IntoResponse {
    let payload = match payload {
        Ok(Json(payload)) => payload,
        Err(rejection) => return malformed_payload(&rejection),
    };
    if let Err(errors) = payload.validate() {
        return validation_error(&errors);
    }

    let service = AuthorService::new((*state.db).clone());

    match service.update(id, &payload).await {
        Ok(Some(author)) => {
            info!(author_id = id, "Author updated");
            (StatusCode::OK, Json(author)).into_response()
        }
        Ok(None) => author_not_found(id),
        Err(AuthorError::EmailTaken(email)) => {
            info!(author_id = id, email = %email, "Rejected author update: email belongs to another author");
            (
                StatusCode::BAD_REQUEST,
                Json(json!({
                    "error": "email_taken",
                    "message": format!("The email {email} is already registered to another author")
                })),
            )
                .into_response()
        }
        Err(e) => {
            error!(error = %e, author_id = id, "Failed to update author");
            internal_error()
        }
    }
}

/// DELETE `/authors/{id}` - Delete an author without books.
async fn delete_author(State(state): State<AppState>, Path(id): Path<i32>) -> impl IntoResponse {
    let service = AuthorService::new((*state.db).clone());

    match service.delete(id).await {
        Ok(true) => {
            info!(author_id = id, "Author deleted");
            (
                StatusCode::OK,
                Json(json!({ "message": format!("Author {id} deleted successfully") })),
            )
                .into_response()
        }
        Ok(false) => author_not_found(id),
        Err(AuthorError::HasBooks) => {
            info!(author_id = id, "Rejected author delete: has associated books");
            (
                StatusCode::BAD_REQUEST,
                Json(json!({
                    "error": "author_has_books",
                    "message": "Cannot delete the author because it has associated books"
                })),
            )
                .into_response()
        }
        Err(e) => {
            error!(error = %e, author_id = id, "Failed to delete author");
            internal_error()
        }
    }
}

/// 400 response for a body the JSON extractor rejected (missing keys,
/// type mismatches, malformed JSON). The extractor's own message names
/// the offending field.
pub(crate) fn malformed_payload(rejection: &JsonRejection) -> axum::response::Response {
    (
        StatusCode::BAD_REQUEST,
        Json(json!({
            "error": "validation_error",
            "message": rejection.body_text()
        })),
    )
        .into_response()
}

/// 400 response carrying the field-level validation error map.
pub(crate) fn validation_error(errors: &validator::ValidationErrors) -> axum::response::Response {
    (
        StatusCode::BAD_REQUEST,
        Json(json!({
            "error": "validation_error",
            "message": "One or more fields are invalid",
            "errors": errors
        })),
    )
        .into_response()
}

/// Generic 500 response; details stay server-side.
pub(crate) fn internal_error() -> axum::response::Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({
            "error": "internal_error",
            "message": "An error occurred"
        })),
    )
        .into_response()
}

fn author_not_found(id: i32) -> axum::response::Response {
    (
        StatusCode::NOT_FOUND,
        Json(json!({
            "error": "not_found",
            "message": format!("Author {id} not found")
        })),
    )
        .into_response()
}
