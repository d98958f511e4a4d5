//! Integration tests for the Bookscout Server API

use async_trait::async_trait;
use axum::http::StatusCode;
use axum_test::TestServer;
use bookscout_core::transport::TransportResult;
use bookscout_core::{Catalog, CatalogConfig, CatalogResponse, CatalogTransport};
use bookscout_server::routes::create_router;
use bookscout_server::state::AppState;
use serde_json::{json, Value};
use std::sync::Arc;

/// Fake catalog answering by URL
struct FakeCatalog;

#[async_trait]
impl CatalogTransport for FakeCatalog {
    async fn get(&self, url: &str) -> TransportResult<CatalogResponse> {
        let (status, body) = if url.contains("title=broken") {
            (500, json!({ "error": "boom" }))
        } else if url.contains("title=dune") || url.contains("author=herbert") {
            (
                200,
                json!({
                    "docs": [
                        {
                            "key": "/works/OL893415W",
                            "cover_i": 12345,
                            "title": "Dune",
                            "author_name": ["Frank Herbert"],
                            "publisher": ["Chilton Books", "Ace"]
                        },
                        { "key": "/works/OL2W", "title": "Dune Messiah" }
                    ]
                }),
            )
        } else if url.contains("search.json") {
            (200, json!({ "docs": [] }))
        } else if url.contains("ISBN:0451526538") {
            (
                200,
                json!({ "ISBN:0451526538": { "title": "Nineteen Eighty-Four", "number_of_pages": 328 } }),
            )
        } else if url.contains("ISBN:1111111111") {
            (503, json!({}))
        } else {
            (200, json!({}))
        };
        Ok(CatalogResponse::new(status, body.to_string()))
    }
}

/// Create a test server over the fake catalog
fn create_test_server() -> (TestServer, AppState) {
    let catalog = Catalog::with_transport(CatalogConfig::default(), Arc::new(FakeCatalog));
    let state = AppState::new(catalog);
    let app = create_router(state.clone());
    let server = TestServer::new(app).expect("Failed to create test server");
    (server, state)
}

#[tokio::test]
async fn test_health_check() {
    let (server, _state) = create_test_server();

    let response = server.get("/health").await;

    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["status"], "ok");
    assert!(body["version"].is_string());
}

#[tokio::test]
async fn test_search_results() {
    let (server, _state) = create_test_server();

    let response = server
        .get("/api/v1/search")
        .add_query_param("q", "dune")
        .await;

    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["state"], "results");
    let books = body["books"].as_array().unwrap();
    assert_eq!(books.len(), 2);
    assert_eq!(books[0]["title"], "Dune");
    assert_eq!(
        books[0]["coverUrl"],
        "https://covers.openlibrary.org/b/id/12345-M.jpg"
    );
    assert_eq!(books[0]["publisher"], "Chilton Books");
    assert_eq!(books[1]["authors"], "Unknown");
    assert_eq!(books[1]["coverUrl"], "https://via.placeholder.com/150");
}

#[tokio::test]
async fn test_search_by_author() {
    let (server, _state) = create_test_server();

    let response = server
        .get("/api/v1/search")
        .add_query_param("q", "herbert")
        .add_query_param("mode", "author")
        .await;

    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["books"][0]["authors"], "Frank Herbert");
}

#[tokio::test]
async fn test_search_empty() {
    let (server, _state) = create_test_server();

    let response = server
        .get("/api/v1/search")
        .add_query_param("q", "nothing at all")
        .await;

    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body, json!({ "state": "empty" }));
}

#[tokio::test]
async fn test_search_blank_query() {
    let (server, _state) = create_test_server();

    let response = server
        .get("/api/v1/search")
        .add_query_param("q", "   ")
        .await;

    response.assert_status_bad_request();

    let body: Value = response.json();
    assert_eq!(body["state"], "error");
    assert_eq!(body["message"], "Please enter a valid search query.");
}

#[tokio::test]
async fn test_search_missing_query() {
    let (server, _state) = create_test_server();

    let response = server.get("/api/v1/search").await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_search_unknown_mode() {
    let (server, _state) = create_test_server();

    let response = server
        .get("/api/v1/search")
        .add_query_param("q", "dune")
        .add_query_param("mode", "isbn")
        .await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_search_upstream_failure() {
    let (server, _state) = create_test_server();

    let response = server
        .get("/api/v1/search")
        .add_query_param("q", "broken")
        .await;

    response.assert_status(StatusCode::BAD_GATEWAY);

    let body: Value = response.json();
    assert_eq!(
        body["message"],
        "Failed to fetch books. Please check your network connection or try again."
    );
}

#[tokio::test]
async fn test_book_details() {
    let (server, _state) = create_test_server();

    let response = server.get("/api/v1/books/0451526538").await;

    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["title"], "Nineteen Eighty-Four");
    assert_eq!(body["number_of_pages"], 328);
}

#[tokio::test]
async fn test_book_details_not_found() {
    let (server, _state) = create_test_server();

    let response = server.get("/api/v1/books/9999999999").await;

    response.assert_status_not_found();

    let body: Value = response.json();
    assert_eq!(body["message"], "No details found for ISBN 9999999999");
}

#[tokio::test]
async fn test_book_details_blank_isbn() {
    let (server, _state) = create_test_server();

    let response = server.get("/api/v1/books/%20").await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_book_details_upstream_failure() {
    let (server, _state) = create_test_server();

    let response = server.get("/api/v1/books/1111111111").await;

    response.assert_status(StatusCode::BAD_GATEWAY);
}

#[tokio::test]
async fn test_session_starts_idle() {
    let (server, _state) = create_test_server();

    let response = server.get("/api/v1/session").await;

    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["generation"], 0);
    assert_eq!(body["outcome"]["state"], "idle");
}

#[tokio::test]
async fn test_session_search_updates_session() {
    let (server, state) = create_test_server();

    let response = server
        .post("/api/v1/session/search")
        .json(&json!({ "query": "dune" }))
        .await;

    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["generation"], 1);
    assert_eq!(body["applied"], true);
    assert_eq!(body["snapshot"]["outcome"]["state"], "results");

    let current = state.session.current();
    assert_eq!(current.books().len(), 2);

    let response = server
        .post("/api/v1/session/search")
        .json(&json!({ "query": "  ", "mode": "author" }))
        .await;

    let body: Value = response.json();
    assert_eq!(body["generation"], 2);
    assert_eq!(body["snapshot"]["outcome"]["state"], "error");
    assert!(state.session.current().books().is_empty());
}
