//! Shared helpers for database-backed tests.
//!
//! Tests run against a fresh in-memory `SQLite` database with the full
//! schema applied, so they exercise real SQL without external services.

use chrono::NaiveDate;
use sea_orm::{ConnectOptions, Database, DatabaseConnection, Set};
use sea_orm_migration::MigratorTrait;

use librarium_shared::catalog::{AuthorRequest, BookRequest};

use crate::entities::authors;
use crate::migration::Migrator;

/// Connects to a fresh in-memory database with all migrations applied.
///
/// The pool is capped at one connection: an in-memory `SQLite` database
/// lives exactly as long as its connection, and a second connection would
/// see an empty schema.
pub(crate) async fn connect_in_memory() -> DatabaseConnection {
    let mut options = ConnectOptions::new("sqlite::memory:");
    options.max_connections(1);
    let db = Database::connect(options)
        .await
        .expect("in-memory database should connect");
    Migrator::up(&db, None)
        .await
        .expect("migrations should apply cleanly");
    db
}

/// Builds a valid author request with the given email.
pub(crate) fn author_request(email: &str) -> AuthorRequest {
    AuthorRequest {
        name: "Jorge Luis Borges".to_string(),
        birth_city: "Buenos Aires".to_string(),
        email: email.to_string(),
        birth_date: NaiveDate::from_ymd_opt(1899, 8, 24).expect("valid date"),
    }
}

/// Builds a valid book request pointing at the given author.
pub(crate) fn book_request(author_id: i32) -> BookRequest {
    BookRequest {
        title: "Ficciones".to_string(),
        genre: "Cuentos".to_string(),
        year: 1944,
        pages: 203,
        author_id,
    }
}

/// Builds an author active model ready for a repository insert.
pub(crate) fn author_model(email: &str) -> authors::ActiveModel {
    authors::ActiveModel {
        name: Set("Jorge Luis Borges".to_string()),
        birth_city: Set("Buenos Aires".to_string()),
        email: Set(email.to_string()),
        birth_date: Set(NaiveDate::from_ymd_opt(1899, 8, 24).expect("valid date")),
        created_at: Set(chrono::Utc::now()),
        modified_at: Set(None),
        ..Default::default()
    }
}
