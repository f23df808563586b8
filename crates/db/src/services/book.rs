//! Book domain service.

use sea_orm::{DatabaseConnection, DbErr, Set};
use thiserror::Error;

use librarium_shared::catalog::{BookRequest, BookView};

use super::author::author_view;
use crate::entities::{authors, books};
use crate::unit_of_work::UnitOfWork;

/// Book business-rule violations and infrastructure failures.
#[derive(Debug, Error)]
pub enum BookError {
    /// The referenced author does not exist.
    #[error("author with id {0} does not exist")]
    AuthorNotFound(i32),

    /// The configured maximum total number of books has been reached.
    #[error("cannot create the book: the maximum of {0} books has been reached")]
    LimitReached(u64),

    /// Database error.
    #[error(transparent)]
    Database(#[from] DbErr),
}

/// Book service for catalog operations.
#[derive(Debug, Clone)]
pub struct BookService {
    db: DatabaseConnection,
    max_books: Option<u64>,
}

impl BookService {
    /// Creates a new book service with an optional total-count limit.
    #[must_use]
    pub const fn new(db: DatabaseConnection, max_books: Option<u64>) -> Self {
        Self { db, max_books }
    }

    /// Returns all books as views with their author embedded.
    pub async fn get_all(&self) -> Result<Vec<BookView>, BookError> {
        let uow = UnitOfWork::begin(&self.db).await?;
        let rows = uow.books().get_all_with_authors().await?;
        Ok(rows.into_iter().map(book_view).collect())
    }

    /// Returns the book with the given identifier, if any, with its author
    /// embedded.
    pub async fn get_by_id(&self, id: i32) -> Result<Option<BookView>, BookError> {
        let uow = UnitOfWork::begin(&self.db).await?;
        let row = uow.books().get_by_id_with_author(id).await?;
        Ok(row.map(book_view))
    }

    /// Creates a book after checking the total-count limit and that the
    /// referenced author exists.
    ///
    /// # Errors
    ///
    /// Returns `BookError::LimitReached` when a limit is configured and the
    /// current total is at or over it.
    /// Returns `BookError::AuthorNotFound` when `author_id` does not
    /// reference an existing author.
    pub async fn create(&self, input: &BookRequest) -> Result<BookView, BookError> {
        let uow = UnitOfWork::begin(&self.db).await?;
        let books = uow.books();

        if let Some(max) = self.max_books {
            if books.total().await? >= max {
                return Err(BookError::LimitReached(max));
            }
        }

        if !uow.authors().exists(input.author_id).await? {
            return Err(BookError::AuthorNotFound(input.author_id));
        }

        let created = books
            .add(books::ActiveModel {
                title: Set(input.title.clone()),
                genre: Set(input.genre.clone()),
                year: Set(input.year),
                pages: Set(input.pages),
                author_id: Set(input.author_id),
                ..Default::default()
            })
            .await?;

        let view = read_back(&uow, created.id).await?;
        uow.save_changes().await?;
        Ok(view)
    }

    /// Overwrites all fields of an existing book, including re-pointing
    /// the author reference.
    ///
    /// Returns `None` when no such book exists.
    ///
    /// # Errors
    ///
    /// Returns `BookError::AuthorNotFound` when `author_id` does not
    /// reference an existing author.
    pub async fn update(
        &self,
        id: i32,
        input: &BookRequest,
    ) -> Result<Option<BookView>, BookError> {
        let uow = UnitOfWork::begin(&self.db).await?;
        let books = uow.books();

        let Some(existing) = books.get_by_id(id).await? else {
            return Ok(None);
        };

        if !uow.authors().exists(input.author_id).await? {
            return Err(BookError::AuthorNotFound(input.author_id));
        }

        let mut active: books::ActiveModel = existing.into();
        active.title = Set(input.title.clone());
        active.genre = Set(input.genre.clone());
        active.year = Set(input.year);
        active.pages = Set(input.pages);
        active.author_id = Set(input.author_id);

        let updated = books.update(active).await?;

        let view = read_back(&uow, updated.id).await?;
        uow.save_changes().await?;
        Ok(Some(view))
    }

    /// Deletes a book.
    ///
    /// Returns `false` when no such book exists.
    pub async fn delete(&self, id: i32) -> Result<bool, BookError> {
        let uow = UnitOfWork::begin(&self.db).await?;
        let books = uow.books();

        let Some(existing) = books.get_by_id(id).await? else {
            return Ok(false);
        };

        books.remove(existing).await?;

        uow.save_changes().await?;
        Ok(true)
    }
}

/// Re-reads a freshly written book with its author joined, within the same
/// unit of work.
async fn read_back(uow: &UnitOfWork, id: i32) -> Result<BookView, DbErr> {
    let row = uow.books().get_by_id_with_author(id).await?;
    row.map(book_view)
        .ok_or_else(|| DbErr::Custom(format!("book {id} vanished within its own transaction")))
}

/// Maps a book entity and its optionally resolved author to the external
/// view.
fn book_view((book, author): (books::Model, Option<authors::Model>)) -> BookView {
    BookView {
        id: book.id,
        title: book.title,
        genre: book.genre,
        year: book.year,
        pages: book.pages,
        author_id: book.author_id,
        author: author.map(author_view),
    }
}
