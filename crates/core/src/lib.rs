//! Core business logic for Librarium.
//!
//! Pure, dependency-light rules: credential validation and token issuance.
//! Catalog invariants that need a persistence session live with the domain
//! services in the database crate.

pub mod auth;

pub use auth::AuthService;
