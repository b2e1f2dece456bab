//! Business logic services

pub mod catalog;

use crate::repository::Repository;

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub books: catalog::CatalogService,
    pub bookshelfs: catalog::CatalogService,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository) -> Self {
        Self {
            books: catalog::CatalogService::new(repository.books),
            bookshelfs: catalog::CatalogService::new(repository.bookshelfs),
        }
    }
}
