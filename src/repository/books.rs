//! In-memory book store

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::models::book::{Book, BookFilter};

/// Ordered, insertion-order-preserving collection of books.
///
/// All access goes through a single read/write lock, so writers are
/// serialized and compound find-then-mutate operations run as one critical
/// section. Iteration order is insertion order and survives removals.
#[derive(Clone, Default)]
pub struct BookStore {
    books: Arc<RwLock<Vec<Book>>>,
}

impl BookStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record at the end of the collection
    pub async fn append(&self, book: Book) {
        self.books.write().await.push(book);
    }

    /// Get a record by id
    pub async fn get(&self, id: &str) -> Option<Book> {
        self.books
            .read()
            .await
            .iter()
            .find(|book| book.id == id)
            .cloned()
    }

    /// Whether a record with the given id exists
    pub async fn contains(&self, id: &str) -> bool {
        self.books.read().await.iter().any(|book| book.id == id)
    }

    /// List records matching the filter, in insertion order.
    ///
    /// Filters narrow the result in a fixed order: name substring
    /// (case-insensitive), then the reading flag, then the finished flag.
    /// An unset filter places no constraint.
    pub async fn search(&self, filter: &BookFilter) -> Vec<Book> {
        let needle = filter.name.as_deref().map(str::to_lowercase);
        self.books
            .read()
            .await
            .iter()
            .filter(|book| match &needle {
                Some(needle) => book.name.to_lowercase().contains(needle),
                None => true,
            })
            .filter(|book| match filter.reading {
                Some(reading) => book.reading == reading,
                None => true,
            })
            .filter(|book| match filter.finished {
                Some(finished) => book.finished == finished,
                None => true,
            })
            .cloned()
            .collect()
    }

    /// Apply `f` to the record with the given id, in place.
    /// Returns false when no such record exists.
    pub async fn update<F>(&self, id: &str, f: F) -> bool
    where
        F: FnOnce(&mut Book),
    {
        let mut books = self.books.write().await;
        match books.iter_mut().find(|book| book.id == id) {
            Some(book) => {
                f(book);
                true
            }
            None => false,
        }
    }

    /// Remove the record with the given id, preserving the order of the
    /// remaining records. Returns false when no such record exists.
    pub async fn remove(&self, id: &str) -> bool {
        let mut books = self.books.write().await;
        match books.iter().position(|book| book.id == id) {
            Some(index) => {
                books.remove(index);
                true
            }
            None => false,
        }
    }

    /// Number of stored records
    pub async fn len(&self) -> usize {
        self.books.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.books.read().await.is_empty()
    }
}
