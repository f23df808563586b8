//! Author domain service.

use chrono::Utc;
use sea_orm::{DatabaseConnection, DbErr, Set};
use thiserror::Error;

use librarium_shared::catalog::{AuthorRequest, AuthorView};

use crate::entities::authors;
use crate::unit_of_work::UnitOfWork;

/// Author business-rule violations and infrastructure failures.
#[derive(Debug, Error)]
pub enum AuthorError {
    /// The email already belongs to another author.
    #[error("email {0} is already registered")]
    EmailTaken(String),

    /// The author still has books referencing it.
    #[error("cannot delete the author because it has associated books")]
    HasBooks,

    /// Database error.
    #[error(transparent)]
    Database(#[from] DbErr),
}

/// Author service for catalog operations.
#[derive(Debug, Clone)]
pub struct AuthorService {
    db: DatabaseConnection,
}

impl AuthorService {
    /// Creates a new author service.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Returns all authors as views.
    pub async fn get_all(&self) -> Result<Vec<AuthorView>, AuthorError> {
        let uow = UnitOfWork::begin(&self.db).await?;
        let rows = uow.authors().get_all().await?;
        Ok(rows.into_iter().map(author_view).collect())
    }

    /// Returns the author with the given identifier, if any.
    pub async fn get_by_id(&self, id: i32) -> Result<Option<AuthorView>, AuthorError> {
        let uow = UnitOfWork::begin(&self.db).await?;
        let row = uow.authors().get_by_id(id).await?;
        Ok(row.map(author_view))
    }

    /// Creates an author after checking email uniqueness.
    ///
    /// # Errors
    ///
    /// Returns `AuthorError::EmailTaken` if the email already belongs to
    /// any existing author.
    pub async fn create(&self, input: &AuthorRequest) -> Result<AuthorView, AuthorError> {
        let uow = UnitOfWork::begin(&self.db).await?;
        let authors = uow.authors();

        if authors.email_in_use(&input.email, None).await? {
            return Err(AuthorError::EmailTaken(input.email.clone()));
        }

        let created = authors
            .add(authors::ActiveModel {
                name: Set(input.name.clone()),
                birth_city: Set(input.birth_city.clone()),
                email: Set(input.email.clone()),
                birth_date: Set(input.birth_date),
                created_at: Set(Utc::now()),
                modified_at: Set(None),
                ..Default::default()
            })
            .await?;

        uow.save_changes().await?;
        Ok(author_view(created))
    }

    /// Overwrites all mutable fields of an existing author.
    ///
    /// Returns `None` when no such author exists.
    ///
    /// # Errors
    ///
    /// Returns `AuthorError::EmailTaken` if the email belongs to a
    /// *different* existing author; updating an author to its own current
    /// email succeeds.
    pub async fn update(
        &self,
        id: i32,
        input: &AuthorRequest,
    ) -> Result<Option<AuthorView>, AuthorError> {
        let uow = UnitOfWork::begin(&self.db).await?;
        let authors = uow.authors();

        let Some(existing) = authors.get_by_id(id).await? else {
            return Ok(None);
        };

        if authors.email_in_use(&input.email, Some(id)).await? {
            return Err(AuthorError::EmailTaken(input.email.clone()));
        }

        let mut active: authors::ActiveModel = existing.into();
        active.name = Set(input.name.clone());
        active.birth_city = Set(input.birth_city.clone());
        active.email = Set(input.email.clone());
        active.birth_date = Set(input.birth_date);
        active.modified_at = Set(Some(Utc::now()));

        let updated = authors.update(active).await?;

        uow.save_changes().await?;
        Ok(Some(author_view(updated)))
    }

    /// Deletes an author.
    ///
    /// Returns `false` when no such author exists.
    ///
    /// # Errors
    ///
    /// Returns `AuthorError::HasBooks` while any book references the
    /// author.
    pub async fn delete(&self, id: i32) -> Result<bool, AuthorError> {
        let uow = UnitOfWork::begin(&self.db).await?;
        let authors = uow.authors();

        let Some(existing) = authors.get_by_id(id).await? else {
            return Ok(false);
        };

        if uow.books().any_for_author(id).await? {
            return Err(AuthorError::HasBooks);
        }

        authors.remove(existing).await?;

        uow.save_changes().await?;
        Ok(true)
    }
}

/// Maps an author entity to its external view.
pub(crate) fn author_view(model: authors::Model) -> AuthorView {
    AuthorView {
        id: model.id,
        name: model.name,
        birth_city: model.birth_city,
        email: model.email,
        birth_date: model.birth_date,
        created_at_utc: model.created_at,
        modified_at_utc: model.modified_at,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::BookService;
    use crate::test_support::{author_request, book_request, connect_in_memory};

    #[tokio::test]
    async fn test_create_and_get_round_trip() {
        let db = connect_in_memory().await;
        let service = AuthorService::new(db);

        let created = service
            .create(&author_request("borges@example.com"))
            .await
            .expect("create should succeed");

        assert_eq!(created.name, "Jorge Luis Borges");
        assert_eq!(created.email, "borges@example.com");
        assert!(created.modified_at_utc.is_none());

        let fetched = service
            .get_by_id(created.id)
            .await
            .expect("get should succeed")
            .expect("author should exist");
        assert_eq!(fetched.id, created.id);
        assert_eq!(fetched.email, created.email);
        assert_eq!(fetched.created_at_utc, created.created_at_utc);
    }

    #[tokio::test]
    async fn test_get_all_lists_every_author() {
        let db = connect_in_memory().await;
        let service = AuthorService::new(db);

        service
            .create(&author_request("first@example.com"))
            .await
            .expect("create should succeed");
        service
            .create(&author_request("second@example.com"))
            .await
            .expect("create should succeed");

        let all = service.get_all().await.expect("get_all should succeed");
        assert_eq!(all.len(), 2);
    }

    #[tokio::test]
    async fn test_get_by_id_missing_returns_none() {
        let db = connect_in_memory().await;
        let service = AuthorService::new(db);

        let fetched = service.get_by_id(42).await.expect("get should succeed");
        assert!(fetched.is_none());
    }

    #[tokio::test]
    async fn test_create_duplicate_email_rejected() {
        let db = connect_in_memory().await;
        let service = AuthorService::new(db);

        service
            .create(&author_request("borges@example.com"))
            .await
            .expect("first create should succeed");

        let result = service.create(&author_request("borges@example.com")).await;
        assert!(matches!(result, Err(AuthorError::EmailTaken(email)) if email == "borges@example.com"));
    }

    #[tokio::test]
    async fn test_update_overwrites_fields_and_sets_modified() {
        let db = connect_in_memory().await;
        let service = AuthorService::new(db);

        let created = service
            .create(&author_request("borges@example.com"))
            .await
            .expect("create should succeed");

        let mut input = author_request("jlb@example.com");
        input.name = "J. L. Borges".to_string();
        input.birth_city = "Geneva".to_string();

        let updated = service
            .update(created.id, &input)
            .await
            .expect("update should succeed")
            .expect("author should exist");

        assert_eq!(updated.name, "J. L. Borges");
        assert_eq!(updated.birth_city, "Geneva");
        assert_eq!(updated.email, "jlb@example.com");
        assert!(updated.modified_at_utc.is_some());
        assert_eq!(updated.created_at_utc, created.created_at_utc);
    }

    #[tokio::test]
    async fn test_update_keeping_own_email_succeeds() {
        let db = connect_in_memory().await;
        let service = AuthorService::new(db);

        let created = service
            .create(&author_request("borges@example.com"))
            .await
            .expect("create should succeed");

        let updated = service
            .update(created.id, &author_request("borges@example.com"))
            .await
            .expect("update to own email should succeed");
        assert!(updated.is_some());
    }

    #[tokio::test]
    async fn test_update_to_other_authors_email_rejected() {
        let db = connect_in_memory().await;
        let service = AuthorService::new(db);

        service
            .create(&author_request("taken@example.com"))
            .await
            .expect("create should succeed");
        let second = service
            .create(&author_request("free@example.com"))
            .await
            .expect("create should succeed");

        let result = service
            .update(second.id, &author_request("taken@example.com"))
            .await;
        assert!(matches!(result, Err(AuthorError::EmailTaken(_))));
    }

    #[tokio::test]
    async fn test_update_missing_returns_none() {
        let db = connect_in_memory().await;
        let service = AuthorService::new(db);

        let updated = service
            .update(42, &author_request("ghost@example.com"))
            .await
            .expect("update should succeed");
        assert!(updated.is_none());
    }

    #[tokio::test]
    async fn test_delete_missing_returns_false() {
        let db = connect_in_memory().await;
        let service = AuthorService::new(db);

        let deleted = service.delete(42).await.expect("delete should succeed");
        assert!(!deleted);
    }

    #[tokio::test]
    async fn test_delete_blocked_while_books_reference_author() {
        let db = connect_in_memory().await;
        let authors = AuthorService::new(db.clone());
        let books = BookService::new(db, None);

        let author = authors
            .create(&author_request("borges@example.com"))
            .await
            .expect("create author should succeed");
        let book = books
            .create(&book_request(author.id))
            .await
            .expect("create book should succeed");

        let result = authors.delete(author.id).await;
        assert!(matches!(result, Err(AuthorError::HasBooks)));

        // Removing the last referencing book unblocks the delete.
        books
            .delete(book.id)
            .await
            .expect("delete book should succeed");
        let deleted = authors
            .delete(author.id)
            .await
            .expect("delete author should succeed");
        assert!(deleted);

        let fetched = authors
            .get_by_id(author.id)
            .await
            .expect("get should succeed");
        assert!(fetched.is_none());
    }
}
