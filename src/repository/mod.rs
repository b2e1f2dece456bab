//! Repository layer for in-memory collections

pub mod books;

use books::BookStore;

/// Main repository struct holding one store per resource variant.
/// The `/books` and `/bookshelfs` collections are independent.
#[derive(Clone, Default)]
pub struct Repository {
    pub books: BookStore,
    pub bookshelfs: BookStore,
}

impl Repository {
    /// Create a new repository with empty collections
    pub fn new() -> Self {
        Self::default()
    }
}
