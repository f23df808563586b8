//! Domain services enforcing catalog business rules.
//!
//! Services open one unit of work per operation, validate business
//! invariants against the live transaction, and map entities to external
//! view shapes. Raw entities never leave this layer.

pub mod author;
pub mod book;

pub use author::{AuthorError, AuthorService};
pub use book::{BookError, BookService};
