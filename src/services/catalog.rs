//! Catalog management service
//!
//! Owns the write-path rules for a single resource variant: payload
//! validation order (field presence first, then the page relationship),
//! id and timestamp assignment, and derivation of the `finished` flag.

use chrono::Utc;
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::book::{Book, BookFilter, BookPayload, BookQuery},
    repository::books::BookStore,
};

/// Alphabet for generated record ids (URL-safe, nanoid style)
const ID_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789_-";

/// Length of generated record ids
const ID_LENGTH: usize = 16;

#[derive(Clone)]
pub struct CatalogService {
    store: BookStore,
}

impl CatalogService {
    pub fn new(store: BookStore) -> Self {
        Self { store }
    }

    /// Create a new book record.
    ///
    /// Validation runs before any mutation; on success the record is
    /// re-read by id as a post-condition check before the id is returned.
    pub async fn create_book(&self, payload: BookPayload) -> AppResult<Book> {
        payload.validate().map_err(|_| {
            AppError::Validation("Book has not been added. Some fields are empty".to_string())
        })?;
        if payload.page_overflow() {
            return Err(AppError::Validation(
                "Book has not been added. Page count is less than read page".to_string(),
            ));
        }

        let id = generate_id();
        let book = payload.into_book(id.clone(), Utc::now()).ok_or_else(|| {
            AppError::Validation("Book has not been added. Some fields are empty".to_string())
        })?;
        self.store.append(book).await;

        // The insert must be observable through a fresh lookup.
        let created = self
            .store
            .get(&id)
            .await
            .ok_or_else(|| AppError::Internal("Book has not been added".to_string()))?;

        tracing::info!("Catalog create: book {} added", created.id);
        Ok(created)
    }

    /// List books matching the query filters, in insertion order
    pub async fn list_books(&self, query: BookQuery) -> AppResult<Vec<Book>> {
        let filter = BookFilter {
            name: query.name,
            reading: parse_flag("reading", query.reading.as_deref())?,
            finished: parse_flag("finished", query.finished.as_deref())?,
        };
        Ok(self.store.search(&filter).await)
    }

    /// Get a book by id
    pub async fn get_book(&self, id: &str) -> AppResult<Book> {
        self.store
            .get(id)
            .await
            .ok_or_else(|| AppError::NotFound("Book has not been found".to_string()))
    }

    /// Replace the mutable fields of an existing book.
    ///
    /// The id and `inserted_at` are preserved; `updated_at` is refreshed
    /// and `finished` re-derived. Lookup happens before validation, so an
    /// unknown id reports 404 even for an invalid payload.
    pub async fn update_book(&self, id: &str, payload: BookPayload) -> AppResult<()> {
        if !self.store.contains(id).await {
            return Err(AppError::NotFound(
                "Book has not been updated. Id not found".to_string(),
            ));
        }

        payload.validate().map_err(|_| {
            AppError::Validation("Book has not been updated. Some fields are empty".to_string())
        })?;
        if payload.page_overflow() {
            return Err(AppError::Validation(
                "Book has not been updated. Page count is less than read page".to_string(),
            ));
        }

        let replacement = payload.into_book(id.to_string(), Utc::now()).ok_or_else(|| {
            AppError::Validation("Book has not been updated. Some fields are empty".to_string())
        })?;
        let found = self
            .store
            .update(id, |book| {
                *book = Book {
                    id: book.id.clone(),
                    inserted_at: book.inserted_at,
                    ..replacement
                };
            })
            .await;
        if !found {
            return Err(AppError::NotFound(
                "Book has not been updated. Id not found".to_string(),
            ));
        }

        tracing::info!("Catalog update: book {} updated", id);
        Ok(())
    }

    /// Delete a book by id
    pub async fn delete_book(&self, id: &str) -> AppResult<()> {
        if !self.store.remove(id).await {
            return Err(AppError::NotFound(
                "Book has not been deleted. Id not found".to_string(),
            ));
        }
        tracing::info!("Catalog delete: book {} removed", id);
        Ok(())
    }
}

/// Generate a random 16-character record id
fn generate_id() -> String {
    use rand::Rng;
    let mut rng = rand::thread_rng();
    (0..ID_LENGTH)
        .map(|_| ID_ALPHABET[rng.gen_range(0..ID_ALPHABET.len())] as char)
        .collect()
}

/// Parse an optional numeric flag from a query string.
///
/// Absent means no constraint. A numeric value of zero is false, any other
/// numeric value is true. Non-numeric values are rejected.
fn parse_flag(name: &str, raw: Option<&str>) -> AppResult<Option<bool>> {
    match raw {
        None => Ok(None),
        Some(value) => match value.trim().parse::<f64>() {
            Ok(number) => Ok(Some(number != 0.0)),
            Err(_) => Err(AppError::Validation(format!(
                "Query parameter '{}' must be a numeric value",
                name
            ))),
        },
    }
}
