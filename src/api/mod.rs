//! API handlers for the bookshelf REST endpoints

pub mod books;
pub mod bookshelfs;
pub mod health;
pub mod openapi;

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use serde::Serialize;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use utoipa::ToSchema;

use crate::AppState;

/// Response body for mutations that carry no data
#[derive(Serialize, ToSchema)]
pub struct MessageResponse {
    pub status: String,
    pub message: String,
}

/// Create the application router with all routes
pub fn router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let routes = Router::new()
        // Health check
        .route("/health", get(health::health_check))
        .route("/ready", get(health::readiness_check))
        // Books
        .route("/books", get(books::list_books))
        .route("/books", post(books::create_book))
        .route("/books/:id", get(books::get_book))
        .route("/books/:id", put(books::update_book))
        .route("/books/:id", delete(books::delete_book))
        // Bookshelfs (parallel resource variant)
        .route("/bookshelfs", get(bookshelfs::list_bookshelfs))
        .route("/bookshelfs", post(bookshelfs::create_bookshelf))
        .route("/bookshelfs/:id", get(bookshelfs::get_bookshelf))
        .route("/bookshelfs/:id", put(bookshelfs::update_bookshelf))
        .route("/bookshelfs/:id", delete(bookshelfs::delete_bookshelf))
        .with_state(state);

    // OpenAPI documentation
    let openapi = openapi::create_openapi_router();

    Router::new()
        .merge(routes)
        .merge(openapi)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
