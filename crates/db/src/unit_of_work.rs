//! Request-scoped unit of work.
//!
//! One unit of work owns one database transaction; every repository handle
//! it hands out is bound to that same transaction, so all operations within
//! a request share one transaction scope.

use std::sync::atomic::{AtomicU64, Ordering};

use sea_orm::{DatabaseConnection, DatabaseTransaction, DbErr, EntityTrait, TransactionTrait};

use crate::repositories::{AuthorRepository, BookRepository, Repository};

/// Coordinator owning one persistence transaction shared by all
/// repositories used in a request.
///
/// `save_changes` consumes the unit of work and commits atomically; any
/// staged-operation failure aborts the whole transaction. Dropping without
/// committing rolls everything back, so double-commit and use-after-commit
/// are unrepresentable.
pub struct UnitOfWork {
    txn: DatabaseTransaction,
    staged: AtomicU64,
}

impl UnitOfWork {
    /// Opens a new transaction on the given connection.
    ///
    /// # Errors
    ///
    /// Returns an error if the transaction cannot be started.
    pub async fn begin(db: &DatabaseConnection) -> Result<Self, DbErr> {
        Ok(Self {
            txn: db.begin().await?,
            staged: AtomicU64::new(0),
        })
    }

    /// Returns the author repository bound to this transaction.
    #[must_use]
    pub const fn authors(&self) -> AuthorRepository<'_> {
        AuthorRepository::new(&self.txn, &self.staged)
    }

    /// Returns the book repository bound to this transaction.
    #[must_use]
    pub const fn books(&self) -> BookRepository<'_> {
        BookRepository::new(&self.txn, &self.staged)
    }

    /// Returns a generic repository for any entity, bound to this
    /// transaction.
    #[must_use]
    pub const fn repository<E: EntityTrait>(&self) -> Repository<'_, E> {
        Repository::new(&self.txn, &self.staged)
    }

    /// Commits all staged operations atomically and returns the number of
    /// rows affected since the unit of work was opened.
    ///
    /// # Errors
    ///
    /// Returns an error if the commit fails; nothing is persisted in that
    /// case.
    pub async fn save_changes(self) -> Result<u64, DbErr> {
        let staged = self.staged.load(Ordering::Relaxed);
        self.txn.commit().await?;
        Ok(staged)
    }

    /// Discards all staged operations.
    ///
    /// # Errors
    ///
    /// Returns an error if the rollback fails.
    pub async fn rollback(self) -> Result<(), DbErr> {
        self.txn.rollback().await
    }
}

#[cfg(test)]
mod tests {
    use sea_orm::Condition;

    use super::*;
    use crate::entities::authors;
    use crate::test_support::{author_model, connect_in_memory};

    #[tokio::test]
    async fn test_save_changes_returns_staged_count() {
        let db = connect_in_memory().await;

        let uow = UnitOfWork::begin(&db).await.expect("begin should succeed");
        let authors = uow.authors();
        authors
            .add(author_model("first@example.com"))
            .await
            .expect("add should succeed");
        authors
            .add(author_model("second@example.com"))
            .await
            .expect("add should succeed");

        let staged = uow.save_changes().await.expect("commit should succeed");
        assert_eq!(staged, 2);
    }

    #[tokio::test]
    async fn test_save_changes_counts_updates_and_removes() {
        let db = connect_in_memory().await;

        let uow = UnitOfWork::begin(&db).await.expect("begin should succeed");
        let created = uow
            .authors()
            .add(author_model("borges@example.com"))
            .await
            .expect("add should succeed");
        uow.save_changes().await.expect("commit should succeed");

        let uow = UnitOfWork::begin(&db).await.expect("begin should succeed");
        let mut active: authors::ActiveModel = created.into();
        active.name = sea_orm::Set("J. L. Borges".to_string());
        let updated = uow
            .authors()
            .update(active)
            .await
            .expect("update should succeed");
        uow.authors()
            .remove(updated)
            .await
            .expect("remove should succeed");

        let staged = uow.save_changes().await.expect("commit should succeed");
        assert_eq!(staged, 2);
    }

    #[tokio::test]
    async fn test_drop_without_commit_rolls_back() {
        let db = connect_in_memory().await;

        let uow = UnitOfWork::begin(&db).await.expect("begin should succeed");
        uow.authors()
            .add(author_model("borges@example.com"))
            .await
            .expect("add should succeed");
        drop(uow);

        let uow = UnitOfWork::begin(&db).await.expect("begin should succeed");
        let count = uow
            .repository::<authors::Entity>()
            .count(Condition::all())
            .await
            .expect("count should succeed");
        assert_eq!(count, 0);
    }

    #[tokio::test]
    async fn test_rollback_discards_staged_operations() {
        let db = connect_in_memory().await;

        let uow = UnitOfWork::begin(&db).await.expect("begin should succeed");
        uow.authors()
            .add(author_model("borges@example.com"))
            .await
            .expect("add should succeed");
        uow.rollback().await.expect("rollback should succeed");

        let uow = UnitOfWork::begin(&db).await.expect("begin should succeed");
        let rows = uow
            .authors()
            .get_all()
            .await
            .expect("get_all should succeed");
        assert!(rows.is_empty());
    }
}
