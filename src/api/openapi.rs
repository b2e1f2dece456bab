//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{books, bookshelfs, health};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Bookshelf API",
        version = "1.0.0",
        description = "In-memory bookshelf catalog REST API",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Books
        books::list_books,
        books::get_book,
        books::create_book,
        books::update_book,
        books::delete_book,
        // Bookshelfs
        bookshelfs::list_bookshelfs,
        bookshelfs::get_bookshelf,
        bookshelfs::create_bookshelf,
        bookshelfs::update_bookshelf,
        bookshelfs::delete_bookshelf,
    ),
    components(
        schemas(
            // Models
            crate::models::book::Book,
            crate::models::book::BookPayload,
            crate::models::book::BookQuery,
            crate::models::book::BookShort,
            crate::models::book::ShelfShort,
            // Books
            books::BookId,
            books::AddBookResponse,
            books::BookList,
            books::ListBooksResponse,
            books::BookDetail,
            books::GetBookResponse,
            // Bookshelfs
            bookshelfs::BookShelfId,
            bookshelfs::AddBookShelfResponse,
            bookshelfs::BookShelfList,
            bookshelfs::ListBookShelfsResponse,
            bookshelfs::BookShelfDetail,
            bookshelfs::GetBookShelfResponse,
            // Shared
            crate::api::MessageResponse,
            // Health
            health::HealthResponse,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "books", description = "Book catalog management"),
        (name = "bookshelfs", description = "Bookshelf catalog management")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
