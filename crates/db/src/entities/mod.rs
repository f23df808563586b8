//! `SeaORM` entity definitions.

pub mod authors;
pub mod books;
