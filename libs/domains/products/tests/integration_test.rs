//! Integration tests for the Products domain
//!
//! Products reference brands through a foreign key, so every test seeds a
//! brand first. They need Docker: `cargo test -- --ignored`.

use database::{PageRequest, SortDirection};
use domain_brands::{BrandRepository, CreateBrand, PgBrandRepository};
use domain_products::*;
use test_utils::{TestDataBuilder, TestDatabase, assertions::*};

async fn seed_brand(db: &TestDatabase, name: &str) -> i64 {
    PgBrandRepository::new(db.connection())
        .create(CreateBrand {
            name: name.to_string(),
        })
        .await
        .unwrap()
        .id
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_create_and_find_product() {
    let db = TestDatabase::new().await;
    let brand_id = seed_brand(&db, "Acme").await;
    let repo = PgProductRepository::new(db.connection());
    let builder = TestDataBuilder::from_test_name("create_and_find_product");

    let created = repo
        .create(CreateProduct {
            name: builder.name("product", "anvil"),
            price: builder.price(),
            qty: builder.qty(),
            brand_id,
        })
        .await
        .unwrap();

    let fetched = assert_some(repo.find_by_id(created.id).await.unwrap(), "product should exist");
    assert_id_eq(fetched.id, created.id, "fetched product id");
    assert_eq!(fetched.brand_id, brand_id);
    assert_eq!(fetched.price, created.price);
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_find_all_sorted_by_price() {
    let db = TestDatabase::new().await;
    let brand_id = seed_brand(&db, "Acme").await;
    let repo = PgProductRepository::new(db.connection());

    for (name, price) in [("mid", 500), ("low", 100), ("high", 900)] {
        repo.create(CreateProduct {
            name: name.to_string(),
            price,
            qty: 1,
            brand_id,
        })
        .await
        .unwrap();
    }

    let page = PageRequest::with_defaults(
        Some(1),
        Some(10),
        Some(SortDirection::Desc),
        Some(ProductSortField::Price),
    );
    let names: Vec<_> = repo
        .find_all(&page)
        .await
        .unwrap()
        .into_iter()
        .map(|p| p.name)
        .collect();
    assert_eq!(names, ["high", "mid", "low"]);
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_service_embeds_brand_and_soft_deletes() {
    let db = TestDatabase::new().await;
    let brand_id = seed_brand(&db, "Acme").await;
    let service = ProductService::new(
        PgProductRepository::new(db.connection()),
        PgBrandRepository::new(db.connection()),
    );

    let created = service
        .create_product(CreateProduct {
            name: "Anvil".to_string(),
            price: 4999,
            qty: 3,
            brand_id,
        })
        .await
        .unwrap();
    assert_eq!(created.brand.name, "Acme");

    service.delete_product(created.id).await.unwrap();

    assert!(matches!(
        service.find_by_id(created.id).await,
        Err(ProductError::NotFound(_))
    ));
    assert_eq!(
        PgProductRepository::new(db.connection()).count().await.unwrap(),
        0
    );
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_service_rejects_unknown_brand() {
    let db = TestDatabase::new().await;
    let service = ProductService::new(
        PgProductRepository::new(db.connection()),
        PgBrandRepository::new(db.connection()),
    );

    let result = service
        .create_product(CreateProduct {
            name: "Orphan".to_string(),
            price: 1,
            qty: 1,
            brand_id: 12_345,
        })
        .await;

    assert!(matches!(result, Err(ProductError::BrandNotFound(12_345))));
}
