//! Book endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    error::{AppResult, ErrorResponse},
    models::book::{Book, BookPayload, BookQuery, BookShort},
};

use super::MessageResponse;

/// Id of a newly created book
#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookId {
    pub book_id: String,
}

#[derive(Serialize, ToSchema)]
pub struct AddBookResponse {
    pub status: String,
    pub message: String,
    pub data: BookId,
}

#[derive(Serialize, ToSchema)]
pub struct BookList {
    pub books: Vec<BookShort>,
}

#[derive(Serialize, ToSchema)]
pub struct ListBooksResponse {
    pub status: String,
    pub data: BookList,
}

#[derive(Serialize, ToSchema)]
pub struct BookDetail {
    pub book: Book,
}

#[derive(Serialize, ToSchema)]
pub struct GetBookResponse {
    pub status: String,
    pub data: BookDetail,
}

/// List books with optional filters
#[utoipa::path(
    get,
    path = "/books",
    tag = "books",
    params(
        ("name" = Option<String>, Query, description = "Case-insensitive substring match on the name"),
        ("reading" = Option<String>, Query, description = "Numeric flag: 0 selects books not being read, any other number those being read"),
        ("finished" = Option<String>, Query, description = "Numeric flag: 0 selects unfinished books, any other number finished ones")
    ),
    responses(
        (status = 200, description = "List of book summaries", body = ListBooksResponse),
        (status = 400, description = "Non-numeric flag value", body = ErrorResponse)
    )
)]
pub async fn list_books(
    State(state): State<crate::AppState>,
    Query(query): Query<BookQuery>,
) -> AppResult<Json<ListBooksResponse>> {
    let books = state.services.books.list_books(query).await?;

    Ok(Json(ListBooksResponse {
        status: "success".to_string(),
        data: BookList {
            books: books.iter().map(BookShort::from).collect(),
        },
    }))
}

/// Get book details by id
#[utoipa::path(
    get,
    path = "/books/{id}",
    tag = "books",
    params(
        ("id" = String, Path, description = "Book id")
    ),
    responses(
        (status = 200, description = "Book details", body = GetBookResponse),
        (status = 404, description = "Book not found", body = ErrorResponse)
    )
)]
pub async fn get_book(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<GetBookResponse>> {
    let book = state.services.books.get_book(&id).await?;

    Ok(Json(GetBookResponse {
        status: "success".to_string(),
        data: BookDetail { book },
    }))
}

/// Add a new book
#[utoipa::path(
    post,
    path = "/books",
    tag = "books",
    request_body = BookPayload,
    responses(
        (status = 201, description = "Book created", body = AddBookResponse),
        (status = 400, description = "Missing fields or read page exceeds page count", body = ErrorResponse),
        (status = 500, description = "Insert could not be verified", body = ErrorResponse)
    )
)]
pub async fn create_book(
    State(state): State<crate::AppState>,
    Json(payload): Json<BookPayload>,
) -> AppResult<(StatusCode, Json<AddBookResponse>)> {
    let created = state.services.books.create_book(payload).await?;

    Ok((
        StatusCode::CREATED,
        Json(AddBookResponse {
            status: "success".to_string(),
            message: "Book has been added".to_string(),
            data: BookId { book_id: created.id },
        }),
    ))
}

/// Update an existing book
#[utoipa::path(
    put,
    path = "/books/{id}",
    tag = "books",
    params(
        ("id" = String, Path, description = "Book id")
    ),
    request_body = BookPayload,
    responses(
        (status = 200, description = "Book updated", body = MessageResponse),
        (status = 400, description = "Missing fields or read page exceeds page count", body = ErrorResponse),
        (status = 404, description = "Book not found", body = ErrorResponse)
    )
)]
pub async fn update_book(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
    Json(payload): Json<BookPayload>,
) -> AppResult<Json<MessageResponse>> {
    state.services.books.update_book(&id, payload).await?;

    Ok(Json(MessageResponse {
        status: "success".to_string(),
        message: "Book has been updated".to_string(),
    }))
}

/// Delete a book
#[utoipa::path(
    delete,
    path = "/books/{id}",
    tag = "books",
    params(
        ("id" = String, Path, description = "Book id")
    ),
    responses(
        (status = 200, description = "Book deleted", body = MessageResponse),
        (status = 404, description = "Book not found", body = ErrorResponse)
    )
)]
pub async fn delete_book(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    state.services.books.delete_book(&id).await?;

    Ok(Json(MessageResponse {
        status: "success".to_string(),
        message: "Book has been deleted".to_string(),
    }))
}
