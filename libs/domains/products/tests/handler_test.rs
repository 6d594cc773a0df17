//! Handler tests for the Products domain
//!
//! Both repositories are in-memory so brand lookups, soft deletes and
//! enrichment run end to end through the router.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use domain_brands::{Brand, BrandRepository, CreateBrand, InMemoryBrandRepository};
use domain_products::*;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt; // For oneshot()

struct Fixture {
    products: InMemoryProductRepository,
    brands: InMemoryBrandRepository,
}

impl Fixture {
    fn new() -> Self {
        Self {
            products: InMemoryProductRepository::new(),
            brands: InMemoryBrandRepository::new(),
        }
    }

    fn app(&self) -> Router {
        handlers::router(ProductService::new(
            self.products.clone(),
            self.brands.clone(),
        ))
    }

    async fn brand(&self, name: &str) -> Brand {
        self.brands
            .create(CreateBrand {
                name: name.to_string(),
            })
            .await
            .unwrap()
    }

    async fn product(&self, name: &str, price: i64, brand_id: i64) -> Product {
        self.products
            .create(CreateProduct {
                name: name.to_string(),
                price,
                qty: 1,
                brand_id,
            })
            .await
            .unwrap()
    }
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

fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

#[tokio::test]
async fn test_create_product_returns_201() {
    let fx = Fixture::new();
    let brand = fx.brand("Acme").await;

    let (status, body) = send(
        fx.app(),
        json_request(
            "POST",
            "/",
            json!({"name": "Anvil", "price": 4999, "qty": 3, "brand_id": brand.id}),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body, json!({"message": "Product created", "data": null}));
    assert_eq!(fx.products.count().await.unwrap(), 1);
}

#[tokio::test]
async fn test_create_product_with_unknown_brand_is_422() {
    let fx = Fixture::new();

    let (status, body) = send(
        fx.app(),
        json_request(
            "POST",
            "/",
            json!({"name": "Anvil", "price": 4999, "qty": 3, "brand_id": 404}),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["message"], "Brand 404 does not exist");
    assert_eq!(fx.products.count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_create_product_validates_fields() {
    let fx = Fixture::new();

    let (status, body) = send(
        fx.app(),
        json_request(
            "POST",
            "/",
            json!({"name": "", "price": -5, "qty": 1, "brand_id": 1}),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["errors"]["name"].is_string());
    assert!(body["errors"]["price"].is_string());
}

#[tokio::test]
async fn test_get_product_embeds_brand() {
    let fx = Fixture::new();
    let brand = fx.brand("Acme").await;
    let product = fx.product("Anvil", 4999, brand.id).await;

    let (status, body) = send(fx.app(), empty_request("GET", &format!("/{}", product.id))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Get product success");
    assert_eq!(body["data"]["name"], "Anvil");
    assert_eq!(body["data"]["price"], 4999);
    assert_eq!(body["data"]["brand"]["id"], brand.id);
    assert_eq!(body["data"]["brand"]["name"], "Acme");
}

#[tokio::test]
async fn test_get_product_with_vanished_brand_is_500() {
    let fx = Fixture::new();
    let product = fx.product("Orphan", 100, 999).await;

    let (status, body) = send(fx.app(), empty_request("GET", &format!("/{}", product.id))).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["message"], "An internal server error occurred");
}

#[tokio::test]
async fn test_list_products_sorted_by_price() {
    let fx = Fixture::new();
    let brand = fx.brand("Acme").await;
    fx.product("Cheap", 100, brand.id).await;
    fx.product("Pricey", 900, brand.id).await;
    fx.product("Middle", 500, brand.id).await;

    let (status, body) = send(
        fx.app(),
        empty_request("GET", "/?PerPage=2&Page=1&Sort=asc&SortBy=price&Search=ignored"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "success");
    assert_eq!(body["total_items"], 3);
    assert_eq!(body["total_page"], 2);
    assert_eq!(body["items_per_page"], 2);
    assert_eq!(body["current_page"], 1);
    assert_eq!(body["data"][0]["name"], "Cheap");
    assert_eq!(body["data"][1]["name"], "Middle");
    assert_eq!(body["data"][0]["brand"]["name"], "Acme");
}

#[tokio::test]
async fn test_list_products_rejects_bad_sort() {
    let fx = Fixture::new();

    let (status, _) = send(
        fx.app(),
        empty_request("GET", "/?PerPage=10&Page=1&Sort=sideways"),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_list_products_rejects_huge_page() {
    let fx = Fixture::new();
    let brand = fx.brand("Acme").await;
    fx.product("Anvil", 100, brand.id).await;

    let (status, body) = send(
        fx.app(),
        empty_request("GET", "/?PerPage=10&Page=2000000000000000000&Sort=desc"),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["errors"].as_object().unwrap().len(), 1);
}

#[tokio::test]
async fn test_patch_keeps_absent_fields() {
    let fx = Fixture::new();
    let brand = fx.brand("Acme").await;
    let product = fx.product("Anvil", 4999, brand.id).await;

    let (status, body) = send(
        fx.app(),
        json_request("PATCH", &format!("/{}", product.id), json!({"qty": 12})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Product updated");

    let stored = fx.products.find_by_id(product.id).await.unwrap().unwrap();
    assert_eq!(stored.qty, 12);
    assert_eq!(stored.price, 4999);
    assert_eq!(stored.name, "Anvil");
}

#[tokio::test]
async fn test_patch_to_deleted_brand_is_422() {
    let fx = Fixture::new();
    let keep = fx.brand("Acme").await;
    let gone = fx.brand("Globex").await;
    fx.brands.delete(&gone).await.unwrap();
    let product = fx.product("Anvil", 4999, keep.id).await;

    let (status, _) = send(
        fx.app(),
        json_request(
            "PATCH",
            &format!("/{}", product.id),
            json!({"brand_id": gone.id}),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    let stored = fx.products.find_by_id(product.id).await.unwrap().unwrap();
    assert_eq!(stored.brand_id, keep.id);
}

#[tokio::test]
async fn test_delete_product_keeps_brand() {
    let fx = Fixture::new();
    let brand = fx.brand("Acme").await;
    let product = fx.product("Anvil", 4999, brand.id).await;

    let (status, body) =
        send(fx.app(), empty_request("DELETE", &format!("/{}", product.id))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Product deleted");

    let (status, _) = send(fx.app(), empty_request("GET", &format!("/{}", product.id))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let brand = fx.brands.find_by_id(brand.id).await.unwrap().unwrap();
    assert!(!brand.is_deleted());
}

#[tokio::test]
async fn test_deleted_brand_still_renders_on_products() {
    let fx = Fixture::new();
    let brand = fx.brand("Acme").await;
    let product = fx.product("Anvil", 4999, brand.id).await;
    fx.brands.delete(&brand).await.unwrap();

    let (status, body) = send(fx.app(), empty_request("GET", &format!("/{}", product.id))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["brand"]["name"], "Acme");
}
