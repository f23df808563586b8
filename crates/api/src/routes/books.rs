//! Book CRUD routes (bearer token required).

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

use super::authors::{internal_error, malformed_payload, validation_error};
use crate::AppState;
use librarium_db::{BookError, BookService};
use librarium_shared::catalog::BookRequest;

/// Creates the books router (auth middleware is applied externally).
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/books", get(list_books))
        .route("/books", post(create_book))
        .route("/books/{id}", get(get_book))
        .route("/books/{id}", put(update_book))
        .route("/books/{id}", delete(delete_book))
}

/// GET /books - List all books with their author embedded.
async fn list_books(State(state): State<AppState>) -> impl IntoResponse {
    let service = BookService::new((*state.db).clone(), state.max_books);

    match service.get_all().await {
        Ok(books) => (StatusCode::OK, Json(books)).into_response(),
        Err(e) => {
            error!(error = %e, "Database error listing books");
            internal_error()
        }
    }
}

/// GET `/books/{id}` - Get one book with its author embedded.
async fn get_book(State(state): State<AppState>, Path(id): Path<i32>) -> impl IntoResponse {
    let service = BookService::new((*state.db).clone(), state.max_books);

    match service.get_by_id(id).await {
        Ok(Some(book)) => (StatusCode::OK, Json(book)).into_response(),
        Ok(None) => book_not_found(id),
        Err(e) => {
            error!(error = %e, book_id = id, "Database error fetching book");
            internal_error()
        }
    }
}

/// POST /books - Create a new book.
async fn create_book(
    State(state): State<AppState>,
    payload: Result<Json<BookRequest>, JsonRejection>,
) -> impl IntoResponse {
    let payload = match payload {
        Ok(Json(payload)) => payload,
        Err(rejection) => return malformed_payload(&rejection),
    };
    if let Err(errors) = payload.validate() {
        return validation_error(&errors);
    }

    let service = BookService::new((*state.db).clone(), state.max_books);

    match service.create(&payload).await {
        Ok(book) => {
            info!(book_id = book.id, author_id = book.author_id, "Book created");
            (StatusCode::CREATED, Json(book)).into_response()
        }
        Err(BookError::AuthorNotFound(author_id)) => author_conflict(author_id),
        Err(BookError::LimitReached(max)) => {
            info!(max_books = max, "Rejected book create: limit reached");
            (
                StatusCode::BAD_REQUEST,
                Json(json!({
                    "error": "max_books_reached",
                    "message": format!("Cannot create the book: the maximum of {max} books has been reached")
                })),
            )
                .into_response()
        }
        Err(e) => {
            error!(error = %e, "Failed to create book");
            internal_error()
        }
    }
}

/// PUT `/books/{id}` - Update an existing book.
async fn update_book(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    payload: Result<Json<BookRequest>, JsonRejection>,
) -> impl IntoResponse {
    let payload = match payload {
        Ok(Json(payload)) => payload,
        Err(rejection) => return malformed_payload(&rejection),
    };
    if let Err(errors) = payload.validate() {
        return validation_error(&errors);
    }

    let service = BookService::new((*state.db).clone(), state.max_books);

    match service.update(id, &payload).await {
        Ok(Some(book)) => {
            info!(book_id = id, "Book updated");
            (StatusCode::OK, Json(book)).into_response()
        }
        Ok(None) => book_not_found(id),
        Err(BookError::AuthorNotFound(author_id)) => author_conflict(author_id),
        Err(e) => {
            error!(error = %e, book_id = id, "Failed to update book");
            internal_error()
        }
    }
}

/// DELETE `/books/{id}` - Delete a book.
async fn delete_book(State(state): State<AppState>, Path(id): Path<i32>) -> impl IntoResponse {
    let service = BookService::new((*state.db).clone(), state.max_books);

    match service.delete(id).await {
        Ok(true) => {
            info!(book_id = id, "Book deleted");
            (
                StatusCode::OK,
                Json(json!({ "message": format!("Book {id} deleted successfully") })),
            )
                .into_response()
        }
        Ok(false) => book_not_found(id),
        Err(e) => {
            error!(error = %e, book_id = id, "Failed to delete book");
            internal_error()
        }
    }
}

fn book_not_found(id: i32) -> axum::response::Response {
    (
        StatusCode::NOT_FOUND,
        Json(json!({
            "error": "not_found",
            "message": format!("Book {id} not found")
        })),
    )
        .into_response()
}

fn author_conflict(author_id: i32) -> axum::response::Response {
    info!(author_id, "Rejected book write: author does not exist");
    (
        StatusCode::BAD_REQUEST,
        Json(json!({
            "error": "author_not_found",
            "message": format!("The author with id {author_id} does not exist")
        })),
    )
        .into_response()
}
