//! Librarium API Server
//!
//! Main entry point for the Librarium backend service.

use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use librarium_api::{AppState, create_router};
use librarium_core::AuthService;
use librarium_db::connect;
use librarium_shared::{AppConfig, JwtService};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Load configuration
    let config = AppConfig::load()?;

    // Initialize tracing; RUST_LOG wins over the configured level
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log.level.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Connect to database
    let db = connect(&config.database.url).await?;
    info!("Connected to database");

    // Create JWT and auth services
    let jwt_service = Arc::new(JwtService::new(config.jwt.clone()));
    let auth_service = Arc::new(AuthService::new(
        config.auth.clone(),
        Arc::clone(&jwt_service),
    ));

    // Create application state
    let state = AppState {
        db: Arc::new(db),
        jwt_service,
        auth_service,
        max_books: config.books.max_count,
    };

    // Create router
    let app = create_router(state);

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
