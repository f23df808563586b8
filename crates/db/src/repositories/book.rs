//! Book repository: generic CRUD plus the eager author join.

use std::sync::atomic::AtomicU64;

use sea_orm::{ColumnTrait, Condition, DatabaseTransaction, DbErr};

use super::generic::Repository;
use crate::entities::{authors, books};

/// Repository for book rows within one unit of work.
pub struct BookRepository<'uow> {
    inner: Repository<'uow, books::Entity>,
}

impl<'uow> BookRepository<'uow> {
    pub(crate) const fn new(txn: &'uow DatabaseTransaction, staged: &'uow AtomicU64) -> Self {
        Self {
            inner: Repository::new(txn, staged),
        }
    }

    /// Returns all books with their author eagerly resolved.
    pub async fn get_all_with_authors(
        &self,
    ) -> Result<Vec<(books::Model, Option<authors::Model>)>, DbErr> {
        self.inner.get_all_including::<authors::Entity>().await
    }

    /// Returns the book with the given identifier, if any.
    pub async fn get_by_id(&self, id: i32) -> Result<Option<books::Model>, DbErr> {
        self.inner.get_by_id(id).await
    }

    /// Returns the book with the given identifier and its author eagerly
    /// resolved, if any.
    pub async fn get_by_id_with_author(
        &self,
        id: i32,
    ) -> Result<Option<(books::Model, Option<authors::Model>)>, DbErr> {
        let mut rows = self
            .inner
            .find_including::<authors::Entity>(Condition::all().add(books::Column::Id.eq(id)))
            .await?;
        Ok(rows.pop())
    }

    /// Returns whether any book references the given author.
    pub async fn any_for_author(&self, author_id: i32) -> Result<bool, DbErr> {
        self.inner
            .any(Condition::all().add(books::Column::AuthorId.eq(author_id)))
            .await
    }

    /// Returns the total number of books.
    pub async fn total(&self) -> Result<u64, DbErr> {
        self.inner.count(Condition::all()).await
    }

    /// Stages a book for insert and returns the stored row.
    pub async fn add(&self, book: books::ActiveModel) -> Result<books::Model, DbErr> {
        self.inner.add(book).await
    }

    /// Stages a full overwrite of an existing book.
    pub async fn update(&self, book: books::ActiveModel) -> Result<books::Model, DbErr> {
        self.inner.update(book).await
    }

    /// Stages a book for delete.
    pub async fn remove(&self, book: books::Model) -> Result<u64, DbErr> {
        self.inner.remove(book).await
    }
}
