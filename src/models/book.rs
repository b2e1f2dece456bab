//! Book (catalog entry) model and related types.
//!
//! The wire format is camelCase JSON. Timestamps are ISO-8601 and managed
//! by the service layer: `inserted_at` is set once at creation,
//! `updated_at` on creation and on every successful edit.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// A stored catalog record.
///
/// `finished` is derived from `read_page == page_count` on every write and
/// is never taken from client input.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub id: String,
    pub name: String,
    pub year: i32,
    pub author: String,
    pub summary: String,
    pub publisher: String,
    pub page_count: u32,
    pub read_page: u32,
    pub finished: bool,
    pub reading: bool,
    pub inserted_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Client payload for create and update operations.
///
/// Every field is optional at the deserialization boundary so that absence
/// can be reported as a validation failure instead of a parse error. A
/// client-supplied `finished` value is ignored.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookPayload {
    #[validate(required, length(min = 1))]
    pub name: Option<String>,
    #[validate(required)]
    pub year: Option<i32>,
    #[validate(required)]
    pub author: Option<String>,
    #[validate(required)]
    pub summary: Option<String>,
    #[validate(required)]
    pub publisher: Option<String>,
    #[validate(required)]
    pub page_count: Option<u32>,
    #[validate(required)]
    pub read_page: Option<u32>,
    #[validate(required)]
    pub reading: Option<bool>,
}

impl BookPayload {
    /// True when the payload claims more pages read than the book has.
    /// Only meaningful once the presence check has passed.
    pub fn page_overflow(&self) -> bool {
        matches!(
            (self.read_page, self.page_count),
            (Some(read), Some(count)) if read > count
        )
    }

    /// Build a full record from a validated payload.
    ///
    /// Returns `None` when any required field is absent; callers are
    /// expected to have run the presence check first.
    pub fn into_book(self, id: String, now: DateTime<Utc>) -> Option<Book> {
        let page_count = self.page_count?;
        let read_page = self.read_page?;
        Some(Book {
            id,
            name: self.name?,
            year: self.year?,
            author: self.author?,
            summary: self.summary?,
            publisher: self.publisher?,
            page_count,
            read_page,
            finished: read_page == page_count,
            reading: self.reading?,
            inserted_at: now,
            updated_at: now,
        })
    }
}

/// List-operation query parameters. Flag values arrive as raw strings and
/// are parsed by the service layer.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct BookQuery {
    pub name: Option<String>,
    pub reading: Option<String>,
    pub finished: Option<String>,
}

/// Parsed list filters, applied in order by the store.
#[derive(Debug, Clone, Default)]
pub struct BookFilter {
    pub name: Option<String>,
    pub reading: Option<bool>,
    pub finished: Option<bool>,
}

/// Summary projection returned by the `/books` list operation
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct BookShort {
    pub id: String,
    pub name: String,
    pub publisher: String,
}

impl From<&Book> for BookShort {
    fn from(book: &Book) -> Self {
        Self {
            id: book.id.clone(),
            name: book.name.clone(),
            publisher: book.publisher.clone(),
        }
    }
}

/// Summary projection returned by the `/bookshelfs` list operation
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ShelfShort {
    pub id: String,
    pub name: String,
    pub publisher: String,
    pub year: i32,
}

impl From<&Book> for ShelfShort {
    fn from(book: &Book) -> Self {
        Self {
            id: book.id.clone(),
            name: book.name.clone(),
            publisher: book.publisher.clone(),
            year: book.year,
        }
    }
}
