//! Handler tests for the Brands domain
//!
//! These drive the brands router with `oneshot` against the in-memory
//! repository and check status codes and response envelopes.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use domain_brands::*;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt; // For oneshot()

fn app(repo: InMemoryBrandRepository) -> Router {
    handlers::router(BrandService::new(repo))
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

async fn seed(repo: &InMemoryBrandRepository, names: &[&str]) {
    for name in names {
        repo.create(CreateBrand {
            name: name.to_string(),
        })
        .await
        .unwrap();
    }
}

#[tokio::test]
async fn test_create_then_get_brand() {
    let repo = InMemoryBrandRepository::new();

    let (status, body) = send(
        app(repo.clone()),
        json_request("POST", "/", json!({"name": "Acme"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body, json!({"message": "Brand created", "data": null}));

    let (status, body) = send(app(repo), get("/1")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Get brand success");
    assert_eq!(body["data"]["id"], 1);
    assert_eq!(body["data"]["name"], "Acme");
    assert_eq!(body["data"]["created_at"].as_str().unwrap().len(), 19);
    assert_eq!(body["data"]["updated_at"].as_str().unwrap().len(), 19);
}

#[tokio::test]
async fn test_create_brand_validates_name() {
    let (status, body) = send(
        app(InMemoryBrandRepository::new()),
        json_request("POST", "/", json!({"name": ""})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["errors"]["name"], "Name must be between 1 and 255 characters");
}

#[tokio::test]
async fn test_create_brand_rejects_malformed_json() {
    let request = Request::builder()
        .method("POST")
        .uri("/")
        .header("content-type", "application/json")
        .body(Body::from("{\"name\":"))
        .unwrap();

    let (status, body) = send(app(InMemoryBrandRepository::new()), request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].is_string());
}

#[tokio::test]
async fn test_list_brands_paginates() {
    let repo = InMemoryBrandRepository::new();
    seed(&repo, &["Alpha", "Bravo", "Charlie"]).await;

    let (status, body) = send(
        app(repo),
        get("/?PerPage=2&Page=2&Sort=asc&SortBy=name"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "success");
    assert_eq!(body["total_page"], 2);
    assert_eq!(body["items_per_page"], 2);
    assert_eq!(body["current_page"], 2);
    assert_eq!(body["total_items"], 3);
    assert_eq!(body["data"].as_array().unwrap().len(), 1);
    assert_eq!(body["data"][0]["name"], "Charlie");
}

#[tokio::test]
async fn test_list_brands_rejects_non_numeric_per_page() {
    let (status, _) = send(
        app(InMemoryBrandRepository::new()),
        get("/?PerPage=abc&Page=1&Sort=desc&SortBy=created_at"),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_list_brands_rejects_page_beyond_offset_range() {
    let repo = InMemoryBrandRepository::new();
    seed(&repo, &["Acme"]).await;

    let (status, body) = send(
        app(repo),
        get("/?PerPage=10&Page=2000000000000000000&Sort=desc"),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["errors"].as_object().unwrap().len(), 1);
}

#[tokio::test]
async fn test_list_brands_caps_per_page() {
    let (status, body) = send(
        app(InMemoryBrandRepository::new()),
        get("/?PerPage=101&Page=1&Sort=desc"),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["errors"].as_object().unwrap().len(), 1);

    let (status, _) = send(
        app(InMemoryBrandRepository::new()),
        get("/?PerPage=100&Page=1&Sort=desc"),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_list_brands_requires_pagination_params() {
    let (status, body) = send(app(InMemoryBrandRepository::new()), get("/")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["errors"].as_object().unwrap().len(), 3);
}

#[tokio::test]
async fn test_list_brands_rejects_unknown_sort_key() {
    let (status, body) = send(
        app(InMemoryBrandRepository::new()),
        get("/?PerPage=10&Page=1&Sort=desc&SortBy=price"),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let errors = body["errors"].as_object().unwrap();
    let message = errors.values().next().unwrap();
    assert_eq!(message, "SortBy must be one of [id name created_at updated_at]");
}

#[tokio::test]
async fn test_get_brand_invalid_id() {
    let (status, _) = send(app(InMemoryBrandRepository::new()), get("/abc")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_get_missing_brand_returns_404() {
    let (status, body) = send(app(InMemoryBrandRepository::new()), get("/42")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Brand 42 not found");
    assert!(body["errors"].is_null());
}

#[tokio::test]
async fn test_update_brand() {
    let repo = InMemoryBrandRepository::new();
    seed(&repo, &["Acme"]).await;

    let (status, body) = send(
        app(repo.clone()),
        json_request("PATCH", "/1", json!({"name": "Acme Corp"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"message": "Brand updated", "data": null}));

    let stored = repo.find_by_id(1).await.unwrap().unwrap();
    assert_eq!(stored.name, "Acme Corp");
}

#[tokio::test]
async fn test_update_missing_brand_returns_404() {
    let (status, _) = send(
        app(InMemoryBrandRepository::new()),
        json_request("PATCH", "/7", json!({"name": "Ghost"})),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_brand_is_soft() {
    let repo = InMemoryBrandRepository::new();
    seed(&repo, &["Acme"]).await;

    let delete = Request::builder()
        .method("DELETE")
        .uri("/1")
        .body(Body::empty())
        .unwrap();
    let (status, body) = send(app(repo.clone()), delete).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Brand deleted");

    let (status, _) = send(app(repo.clone()), get("/1")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let stored = repo.find_by_id(1).await.unwrap().unwrap();
    assert!(stored.is_deleted());
    assert_eq!(repo.count().await.unwrap(), 0);
}
