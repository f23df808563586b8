//! Shared types, errors, and configuration for Librarium.
//!
//! This crate provides common types used across all other crates:
//! - Application configuration management
//! - JWT token issuance and validation
//! - Authentication claims and DTOs
//! - Catalog (author/book) request and view DTOs

pub mod auth;
pub mod catalog;
pub mod config;
pub mod jwt;

pub use auth::{Claims, LoginRequest, LoginResponse};
pub use config::AppConfig;
pub use jwt::{JwtError, JwtService};
