//! Catalog request and view DTOs for authors and books.
//!
//! Requests carry field-level validation rules; views are the external
//! projections returned at the HTTP boundary, never raw entities.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Author payload for create and update operations.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AuthorRequest {
    /// Author name.
    #[validate(length(min = 1, max = 100, message = "name must be 1 to 100 characters"))]
    pub name: String,
    /// City of birth.
    #[validate(length(min = 1, max = 100, message = "birth city must be 1 to 100 characters"))]
    pub birth_city: String,
    /// Contact email, unique across all authors.
    #[validate(
        length(min = 1, max = 255, message = "email must be 1 to 255 characters"),
        email(message = "email format is not valid")
    )]
    pub email: String,
    /// Date of birth.
    pub birth_date: NaiveDate,
}

/// Book payload for create and update operations.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct BookRequest {
    /// Book title.
    #[validate(length(min = 1, max = 200, message = "title must be 1 to 200 characters"))]
    pub title: String,
    /// Literary genre.
    #[validate(length(min = 1, max = 100, message = "genre must be 1 to 100 characters"))]
    pub genre: String,
    /// Publication year.
    #[validate(range(min = 1900, max = 2026, message = "year must be between 1900 and 2026"))]
    pub year: i32,
    /// Page count.
    #[validate(range(min = 1, message = "pages must be greater than zero"))]
    pub pages: i32,
    /// Identifier of the owning author.
    pub author_id: i32,
}

/// External projection of an author.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorView {
    /// Author identifier.
    pub id: i32,
    /// Author name.
    pub name: String,
    /// City of birth.
    pub birth_city: String,
    /// Contact email.
    pub email: String,
    /// Date of birth.
    pub birth_date: NaiveDate,
    /// Creation instant, assigned on insert.
    pub created_at_utc: DateTime<Utc>,
    /// Last-modified instant, set on update.
    pub modified_at_utc: Option<DateTime<Utc>>,
}

/// External projection of a book with its author embedded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookView {
    /// Book identifier.
    pub id: i32,
    /// Book title.
    pub title: String,
    /// Literary genre.
    pub genre: String,
    /// Publication year.
    pub year: i32,
    /// Page count.
    pub pages: i32,
    /// Identifier of the owning author.
    pub author_id: i32,
    /// Embedded author view, absent if the reference is unresolved.
    pub author: Option<AuthorView>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn author_request() -> AuthorRequest {
        AuthorRequest {
            name: "Ana".to_string(),
            birth_city: "Lima".to_string(),
            email: "a@x.com".to_string(),
            birth_date: NaiveDate::from_ymd_opt(1990, 1, 1).unwrap(),
        }
    }

    fn book_request() -> BookRequest {
        BookRequest {
            title: "T".to_string(),
            genre: "G".to_string(),
            year: 2020,
            pages: 100,
            author_id: 1,
        }
    }

    #[test]
    fn test_valid_author_request() {
        assert!(author_request().validate().is_ok());
    }

    #[test]
    fn test_author_name_too_long() {
        let mut req = author_request();
        req.name = "x".repeat(101);
        let errors = req.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("name"));
    }

    #[test]
    fn test_author_email_format() {
        let mut req = author_request();
        req.email = "not-an-email".to_string();
        let errors = req.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("email"));
    }

    #[test]
    fn test_author_empty_fields() {
        let mut req = author_request();
        req.name = String::new();
        req.birth_city = String::new();
        let errors = req.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("name"));
        assert!(fields.contains_key("birth_city"));
    }

    #[test]
    fn test_valid_book_request() {
        assert!(book_request().validate().is_ok());
    }

    #[rstest]
    #[case(1899)]
    #[case(2027)]
    fn test_book_year_out_of_range(#[case] year: i32) {
        let mut req = book_request();
        req.year = year;
        let errors = req.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("year"));
    }

    #[rstest]
    #[case(1900)]
    #[case(2026)]
    fn test_book_year_bounds_accepted(#[case] year: i32) {
        let mut req = book_request();
        req.year = year;
        assert!(req.validate().is_ok());
    }

    #[rstest]
    #[case(0)]
    #[case(-5)]
    fn test_book_pages_must_be_positive(#[case] pages: i32) {
        let mut req = book_request();
        req.pages = pages;
        let errors = req.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("pages"));
    }

    #[test]
    fn test_book_title_too_long() {
        let mut req = book_request();
        req.title = "x".repeat(201);
        let errors = req.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("title"));
    }
}
