//! Repository abstractions for data access.

pub mod author;
pub mod book;
pub mod generic;

pub use author::AuthorRepository;
pub use book::BookRepository;
pub use generic::Repository;
