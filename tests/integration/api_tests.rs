//! API integration tests
//!
//! End-to-end tests against a running server and database.
//! Run with: cargo test -- --ignored

use reqwest::Client;
use serde_json::Value;

const BASE_URL: &str = "http://localhost:8080/api";

/// Total number of books in the catalog, counted through the embedded
/// collections of the author listing
async fn total_book_count(client: &Client) -> usize {
    let response = client
        .get(format!("{}/authors", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    let authors: Value = response.json().await.expect("Failed to parse response");
    authors
        .as_array()
        .expect("Expected array")
        .iter()
        .map(|a| a["books"].as_array().map_or(0, |books| books.len()))
        .sum()
}

async fn create_author(client: &Client, name: &str) -> Value {
    let response = client
        .post(format!("{}/authors", BASE_URL))
        .query(&[("name", name)])
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 201);
    response.json().await.expect("Failed to parse response")
}

#[tokio::test]
#[ignore]
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
async fn test_readiness_check() {
    let client = Client::new();

    let response = client
        .get(format!("{}/ready", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "ready");
}

#[tokio::test]
#[ignore]
async fn test_create_author_form_encoded() {
    let client = Client::new();

    let response = client
        .post(format!("{}/authors", BASE_URL))
        .form(&[("name", "Form Author")])
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 201);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["name"], "Form Author");
}

#[tokio::test]
#[ignore]
async fn test_create_author() {
    let client = Client::new();

    let response = client
        .post(format!("{}/authors", BASE_URL))
        .query(&[("name", "Test Author")])
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 201);

    let location = response
        .headers()
        .get("location")
        .and_then(|v| v.to_str().ok())
        .expect("No Location header")
        .to_string();

    let body: Value = response.json().await.expect("Failed to parse response");
    let id = body["id"].as_i64().expect("No author ID");
    assert_eq!(location, format!("/api/authors/{}", id));
    assert_eq!(body["name"], "Test Author");
    assert_eq!(body["books"], serde_json::json!([]));
}

#[tokio::test]
#[ignore]
async fn test_add_book_and_fetch_it_back() {
    let client = Client::new();
    let author = create_author(&client, "Test Author").await;
    let author_id = author["id"].as_i64().expect("No author ID");

    let response = client
        .post(format!("{}/authors/{}/books", BASE_URL, author_id))
        .query(&[("title", "Test Book")])
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 201);

    let book: Value = response.json().await.expect("Failed to parse response");
    let book_id = book["id"].as_i64().expect("No book ID");
    assert_eq!(book["title"], "Test Book");
    assert_eq!(book["author_id"].as_i64(), Some(author_id));

    // Fetch the book standalone
    let response = client
        .get(format!("{}/books/{}", BASE_URL, book_id))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let fetched: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(fetched["title"], "Test Book");

    // The author listing embeds the book exactly once, without the owner
    let response = client
        .get(format!("{}/authors", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    let authors: Value = response.json().await.expect("Failed to parse response");
    let author = authors
        .as_array()
        .expect("Expected array")
        .iter()
        .find(|a| a["id"].as_i64() == Some(author_id))
        .expect("Created author missing from listing");

    let matching: Vec<_> = author["books"]
        .as_array()
        .expect("Expected books array")
        .iter()
        .filter(|b| b["id"].as_i64() == Some(book_id))
        .collect();
    assert_eq!(matching.len(), 1);
    assert!(matching[0].get("author_id").is_none());
}

#[tokio::test]
#[ignore]
async fn test_add_book_is_not_idempotent() {
    let client = Client::new();
    let author = create_author(&client, "Prolific Author").await;
    let author_id = author["id"].as_i64().expect("No author ID");

    let mut ids = Vec::new();
    for _ in 0..2 {
        let response = client
            .post(format!("{}/authors/{}/books", BASE_URL, author_id))
            .query(&[("title", "Same Title")])
            .send()
            .await
            .expect("Failed to send request");

        assert_eq!(response.status(), 201);
        let book: Value = response.json().await.expect("Failed to parse response");
        ids.push(book["id"].as_i64().expect("No book ID"));
    }

    // Two calls with identical arguments create two distinct books
    assert_ne!(ids[0], ids[1]);
}

#[tokio::test]
#[ignore]
async fn test_add_book_unknown_author_creates_nothing() {
    let client = Client::new();
    let count_before = total_book_count(&client).await;

    let response = client
        .post(format!("{}/authors/999999/books", BASE_URL))
        .query(&[("title", "No Author Book")])
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 404);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["error"], "NotFound");

    // The failed attach left no book behind
    let count_after = total_book_count(&client).await;
    assert_eq!(count_after, count_before);
}

#[tokio::test]
#[ignore]
async fn test_get_unknown_book() {
    let client = Client::new();

    let response = client
        .get(format!("{}/books/999999", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 404);
}

#[tokio::test]
#[ignore]
async fn test_create_author_blank_name() {
    let client = Client::new();

    let response = client
        .post(format!("{}/authors", BASE_URL))
        .query(&[("name", "   ")])
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);
}

#[tokio::test]
#[ignore]
async fn test_add_book_blank_title() {
    let client = Client::new();
    let author = create_author(&client, "Test Author").await;
    let author_id = author["id"].as_i64().expect("No author ID");

    let response = client
        .post(format!("{}/authors/{}/books", BASE_URL, author_id))
        .query(&[("title", "")])
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);
}
