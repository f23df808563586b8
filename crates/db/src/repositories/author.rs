//! Author repository: generic CRUD plus author-specific lookups.

use std::sync::atomic::AtomicU64;

use sea_orm::{ColumnTrait, Condition, DatabaseTransaction, DbErr};

use super::generic::Repository;
use crate::entities::authors;

/// Repository for author rows within one unit of work.
pub struct AuthorRepository<'uow> {
    inner: Repository<'uow, authors::Entity>,
}

impl<'uow> AuthorRepository<'uow> {
    pub(crate) const fn new(txn: &'uow DatabaseTransaction, staged: &'uow AtomicU64) -> Self {
        Self {
            inner: Repository::new(txn, staged),
        }
    }

    /// Returns all authors.
    pub async fn get_all(&self) -> Result<Vec<authors::Model>, DbErr> {
        self.inner.get_all().await
    }

    /// Returns the author with the given identifier, if any.
    pub async fn get_by_id(&self, id: i32) -> Result<Option<authors::Model>, DbErr> {
        self.inner.get_by_id(id).await
    }

    /// Returns whether an author with the given identifier exists.
    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        self.inner
            .any(Condition::all().add(authors::Column::Id.eq(id)))
            .await
    }

    /// Returns whether the email belongs to any author, optionally
    /// excluding one author id (the row being updated).
    pub async fn email_in_use(&self, email: &str, exclude: Option<i32>) -> Result<bool, DbErr> {
        let mut condition = Condition::all().add(authors::Column::Email.eq(email));
        if let Some(id) = exclude {
            condition = condition.add(authors::Column::Id.ne(id));
        }
        self.inner.any(condition).await
    }

    /// Stages an author for insert and returns the stored row.
    pub async fn add(&self, author: authors::ActiveModel) -> Result<authors::Model, DbErr> {
        self.inner.add(author).await
    }

    /// Stages a full overwrite of an existing author.
    pub async fn update(&self, author: authors::ActiveModel) -> Result<authors::Model, DbErr> {
        self.inner.update(author).await
    }

    /// Stages an author for delete.
    pub async fn remove(&self, author: authors::Model) -> Result<u64, DbErr> {
        self.inner.remove(author).await
    }
}
