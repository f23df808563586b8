//! Database layer with `SeaORM` entities, repositories, and domain services.
//!
//! This crate provides:
//! - `SeaORM` entity definitions for authors and books
//! - A generic repository plus per-entity extensions
//! - The request-scoped unit of work
//! - Domain services enforcing catalog business rules
//! - Database migrations

pub mod entities;
pub mod migration;
pub mod repositories;
pub mod services;
pub mod unit_of_work;

#[cfg(test)]
pub(crate) mod test_support;

pub use services::{AuthorError, AuthorService, BookError, BookService};
pub use unit_of_work::UnitOfWork;

use sea_orm::{Database, DatabaseConnection, DbErr};

/// Establishes a connection to the database.
///
/// # Errors
///
/// Returns an error if the connection cannot be established.
pub async fn connect(database_url: &str) -> Result<DatabaseConnection, DbErr> {
    Database::connect(database_url).await
}
