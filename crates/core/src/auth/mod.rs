//! Authentication against the single configured identity.

mod service;

pub use service::AuthService;
