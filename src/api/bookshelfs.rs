//! Bookshelf endpoints
//!
//! Functionally identical to the book endpoints; only the response keys
//! differ, and the list summary additionally carries the year.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    error::{AppResult, ErrorResponse},
    models::book::{Book, BookPayload, BookQuery, ShelfShort},
};

use super::MessageResponse;

/// Id of a newly created bookshelf entry
#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookShelfId {
    pub book_shelf_id: String,
}

#[derive(Serialize, ToSchema)]
pub struct AddBookShelfResponse {
    pub status: String,
    pub message: String,
    pub data: BookShelfId,
}

#[derive(Serialize, ToSchema)]
pub struct BookShelfList {
    pub bookshelfs: Vec<ShelfShort>,
}

#[derive(Serialize, ToSchema)]
pub struct ListBookShelfsResponse {
    pub status: String,
    pub data: BookShelfList,
}

#[derive(Serialize, ToSchema)]
pub struct BookShelfDetail {
    pub bookshelf: Book,
}

#[derive(Serialize, ToSchema)]
pub struct GetBookShelfResponse {
    pub status: String,
    pub data: BookShelfDetail,
}

/// List bookshelf entries with optional filters
#[utoipa::path(
    get,
    path = "/bookshelfs",
    tag = "bookshelfs",
    params(
        ("name" = Option<String>, Query, description = "Case-insensitive substring match on the name"),
        ("reading" = Option<String>, Query, description = "Numeric flag: 0 selects books not being read, any other number those being read"),
        ("finished" = Option<String>, Query, description = "Numeric flag: 0 selects unfinished books, any other number finished ones")
    ),
    responses(
        (status = 200, description = "List of bookshelf summaries", body = ListBookShelfsResponse),
        (status = 400, description = "Non-numeric flag value", body = ErrorResponse)
    )
)]
pub async fn list_bookshelfs(
    State(state): State<crate::AppState>,
    Query(query): Query<BookQuery>,
) -> AppResult<Json<ListBookShelfsResponse>> {
    let books = state.services.bookshelfs.list_books(query).await?;

    Ok(Json(ListBookShelfsResponse {
        status: "success".to_string(),
        data: BookShelfList {
            bookshelfs: books.iter().map(ShelfShort::from).collect(),
        },
    }))
}

/// Get bookshelf entry details by id
#[utoipa::path(
    get,
    path = "/bookshelfs/{id}",
    tag = "bookshelfs",
    params(
        ("id" = String, Path, description = "Bookshelf entry id")
    ),
    responses(
        (status = 200, description = "Bookshelf entry details", body = GetBookShelfResponse),
        (status = 404, description = "Entry not found", body = ErrorResponse)
    )
)]
pub async fn get_bookshelf(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<GetBookShelfResponse>> {
    let book = state.services.bookshelfs.get_book(&id).await?;

    Ok(Json(GetBookShelfResponse {
        status: "success".to_string(),
        data: BookShelfDetail { bookshelf: book },
    }))
}

/// Add a new bookshelf entry
#[utoipa::path(
    post,
    path = "/bookshelfs",
    tag = "bookshelfs",
    request_body = BookPayload,
    responses(
        (status = 201, description = "Entry created", body = AddBookShelfResponse),
        (status = 400, description = "Missing fields or read page exceeds page count", body = ErrorResponse),
        (status = 500, description = "Insert could not be verified", body = ErrorResponse)
    )
)]
pub async fn create_bookshelf(
    State(state): State<crate::AppState>,
    Json(payload): Json<BookPayload>,
) -> AppResult<(StatusCode, Json<AddBookShelfResponse>)> {
    let created = state.services.bookshelfs.create_book(payload).await?;

    Ok((
        StatusCode::CREATED,
        Json(AddBookShelfResponse {
            status: "success".to_string(),
            message: "Book has been added".to_string(),
            data: BookShelfId {
                book_shelf_id: created.id,
            },
        }),
    ))
}

/// Update an existing bookshelf entry
#[utoipa::path(
    put,
    path = "/bookshelfs/{id}",
    tag = "bookshelfs",
    params(
        ("id" = String, Path, description = "Bookshelf entry id")
    ),
    request_body = BookPayload,
    responses(
        (status = 200, description = "Entry updated", body = MessageResponse),
        (status = 400, description = "Missing fields or read page exceeds page count", body = ErrorResponse),
        (status = 404, description = "Entry not found", body = ErrorResponse)
    )
)]
pub async fn update_bookshelf(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
    Json(payload): Json<BookPayload>,
) -> AppResult<Json<MessageResponse>> {
    state.services.bookshelfs.update_book(&id, payload).await?;

    Ok(Json(MessageResponse {
        status: "success".to_string(),
        message: "Book has been updated".to_string(),
    }))
}

/// Delete a bookshelf entry
#[utoipa::path(
    delete,
    path = "/bookshelfs/{id}",
    tag = "bookshelfs",
    params(
        ("id" = String, Path, description = "Bookshelf entry id")
    ),
    responses(
        (status = 200, description = "Entry deleted", body = MessageResponse),
        (status = 404, description = "Entry not found", body = ErrorResponse)
    )
)]
pub async fn delete_bookshelf(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    state.services.bookshelfs.delete_book(&id).await?;

    Ok(Json(MessageResponse {
        status: "success".to_string(),
        message: "Book has been deleted".to_string(),
    }))
}
