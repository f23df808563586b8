//! Shared helpers for router tests.
//!
//! Each test gets a full application router over a fresh in-memory
//! `SQLite` database, so requests exercise the real middleware, handlers,
//! and persistence stack.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, Response, header};
use http_body_util::BodyExt;
use sea_orm::{ConnectOptions, Database};

use librarium_core::AuthService;
use librarium_db::migration::{Migrator, MigratorTrait};
use librarium_shared::JwtService;
use librarium_shared::config::{AuthConfig, JwtConfig};

use crate::{AppState, create_router};

pub(crate) const TEST_USERNAME: &str = "admin";
pub(crate) const TEST_PASSWORD: &str = "hunter2";

/// Builds application state over a fresh in-memory database.
///
/// The pool is capped at one connection so the in-memory database outlives
/// individual requests.
pub(crate) async fn test_state(max_books: Option<u64>) -> AppState {
    let mut options = ConnectOptions::new("sqlite::memory:");
    options.max_connections(1);
    let db = Database::connect(options)
        .await
        .expect("in-memory database should connect");
    Migrator::up(&db, None)
        .await
        .expect("migrations should apply cleanly");

    let jwt_service = Arc::new(JwtService::new(JwtConfig {
        secret: "router-test-secret".to_string(),
        issuer: "librarium-tests".to_string(),
        audience: "librarium-clients".to_string(),
        expiration_secs: 600,
    }));
    let auth_service = Arc::new(AuthService::new(
        AuthConfig {
            username: TEST_USERNAME.to_string(),
            password: TEST_PASSWORD.to_string(),
        },
        Arc::clone(&jwt_service),
    ));

    AppState {
        db: Arc::new(db),
        jwt_service,
        auth_service,
        max_books,
    }
}

/// Builds the full router plus a valid bearer token for it.
pub(crate) async fn test_app(max_books: Option<u64>) -> (Router, String) {
    let state = test_state(max_books).await;
    let token = state
        .auth_service
        .login(TEST_USERNAME, TEST_PASSWORD)
        .expect("token issuance should succeed")
        .expect("configured credentials should match")
        .access_token;
    (create_router(state), token)
}

/// Builds a request with an optional bearer token and JSON body.
pub(crate) fn request(
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<serde_json::Value>,
) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .expect("request should build"),
        None => builder.body(Body::empty()).expect("request should build"),
    }
}

/// Collects a response body as JSON.
pub(crate) async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body should collect")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("body should be valid JSON")
}
