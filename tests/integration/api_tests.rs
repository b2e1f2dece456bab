//! API integration tests
//!
//! These run against a live server instance.

use reqwest::Client;
use serde_json::{json, Value};

const BASE_URL: &str = "http://localhost:9000";

fn sample_book() -> Value {
    json!({
        "name": "Dune",
        "year": 1965,
        "author": "Herbert",
        "summary": "s",
        "publisher": "p",
        "pageCount": 500,
        "readPage": 500,
        "reading": false
    })
}

#[tokio::test]
#[ignore] // Run with: cargo test -- --ignored
async fn test_health_check() {
    let client = Client::new();

    let response = client
        .get(format!("{}/health", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
#[ignore]
async fn test_create_get_and_delete_book() {
    let client = Client::new();

    // Create book
    let response = client
        .post(format!("{}/books", BASE_URL))
        .json(&sample_book())
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 201);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "success");
    let book_id = body["data"]["bookId"].as_str().expect("No book id").to_string();

    // Fetch it back
    let response = client
        .get(format!("{}/books/{}", BASE_URL, book_id))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["book"]["finished"], true);

    // Delete it
    let response = client
        .delete(format!("{}/books/{}", BASE_URL, book_id))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 200);
}

#[tokio::test]
#[ignore]
async fn test_create_book_with_read_page_overflow() {
    let client = Client::new();

    let mut payload = sample_book();
    payload["readPage"] = json!(600);

    let response = client
        .post(format!("{}/books", BASE_URL))
        .json(&payload)
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "fail");
}

#[tokio::test]
#[ignore]
async fn test_list_books_with_finished_filter() {
    let client = Client::new();

    let response = client
        .post(format!("{}/books", BASE_URL))
        .json(&sample_book())
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 201);
    let body: Value = response.json().await.expect("Failed to parse response");
    let book_id = body["data"]["bookId"].as_str().expect("No book id").to_string();

    let response = client
        .get(format!("{}/books?finished=1", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    let books = body["data"]["books"].as_array().expect("No book list");
    assert!(books.iter().any(|b| b["id"] == book_id.as_str()));

    // Cleanup
    let _ = client
        .delete(format!("{}/books/{}", BASE_URL, book_id))
        .send()
        .await;
}

#[tokio::test]
#[ignore]
async fn test_bookshelf_variant() {
    let client = Client::new();

    let response = client
        .post(format!("{}/bookshelfs", BASE_URL))
        .json(&sample_book())
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 201);

    let body: Value = response.json().await.expect("Failed to parse response");
    let shelf_id = body["data"]["bookShelfId"]
        .as_str()
        .expect("No bookshelf id")
        .to_string();

    let response = client
        .get(format!("{}/bookshelfs/{}", BASE_URL, shelf_id))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["bookshelf"]["id"], shelf_id.as_str());

    // Cleanup
    let _ = client
        .delete(format!("{}/bookshelfs/{}", BASE_URL, shelf_id))
        .send()
        .await;
}

#[tokio::test]
#[ignore]
async fn test_unknown_book_returns_not_found() {
    let client = Client::new();

    let response = client
        .get(format!("{}/books/0000000000000000", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 404);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "fail");
}
