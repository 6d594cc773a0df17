use async_trait::async_trait;
use chrono::Utc;
use database::{PageRequest, SortDirection};
use std::cmp::Ordering;
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering as AtomicOrdering};
use tokio::sync::RwLock;

use crate::error::{ProductError, ProductResult};
use crate::models::{CreateProduct, Product, ProductSortField};

/// Repository trait for Product persistence
///
/// Same contract as the brand repository: listing and counting skip
/// soft-deleted rows, `find_by_id` does not.
#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn count(&self) -> ProductResult<u64>;

    async fn find_all(&self, page: &PageRequest<ProductSortField>)
    -> ProductResult<Vec<Product>>;

    async fn find_by_id(&self, id: i64) -> ProductResult<Option<Product>>;

    async fn create(&self, input: CreateProduct) -> ProductResult<Product>;

    /// Persist name, price, qty and brand_id, refreshing `updated_at`
    async fn update(&self, product: Product) -> ProductResult<Product>;

    /// Soft-delete by setting `deleted_at`
    async fn delete(&self, product: &Product) -> ProductResult<()>;
}

/// In-memory implementation of ProductRepository (for development/testing)
#[derive(Debug, Default, Clone)]
pub struct InMemoryProductRepository {
    products: Arc<RwLock<HashMap<i64, Product>>>,
    last_id: Arc<AtomicI64>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

fn compare(a: &Product, b: &Product, field: ProductSortField) -> Ordering {
    let ordering = match field {
        ProductSortField::Id => a.id.cmp(&b.id),
        ProductSortField::Name => a.name.cmp(&b.name),
        ProductSortField::Price => a.price.cmp(&b.price),
        ProductSortField::Qty => a.qty.cmp(&b.qty),
        ProductSortField::BrandId => a.brand_id.cmp(&b.brand_id),
        ProductSortField::CreatedAt => a.created_at.cmp(&b.created_at),
        ProductSortField::UpdatedAt => a.updated_at.cmp(&b.updated_at),
    };
    ordering.then_with(|| a.id.cmp(&b.id))
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn count(&self) -> ProductResult<u64> {
        let products = self.products.read().await;
        Ok(products.values().filter(|p| !p.is_deleted()).count() as u64)
    }

    async fn find_all(
        &self,
        page: &PageRequest<ProductSortField>,
    ) -> ProductResult<Vec<Product>> {
        let products = self.products.read().await;

        let mut result: Vec<Product> = products
            .values()
            .filter(|p| !p.is_deleted())
            .cloned()
            .collect();

        result.sort_by(|a, b| match page.sort {
            SortDirection::Asc => compare(a, b, page.sort_by),
            SortDirection::Desc => compare(b, a, page.sort_by),
        });

        Ok(result
            .into_iter()
            .skip(page.offset() as usize)
            .take(page.limit() as usize)
            .collect())
    }

    async fn find_by_id(&self, id: i64) -> ProductResult<Option<Product>> {
        let products = self.products.read().await;
        Ok(products.get(&id).cloned())
    }

    async fn create(&self, input: CreateProduct) -> ProductResult<Product> {
        let mut products = self.products.write().await;

        let now = Utc::now();
        let product = Product {
            id: self.last_id.fetch_add(1, AtomicOrdering::SeqCst) + 1,
            name: input.name,
            price: input.price,
            qty: input.qty,
            brand_id: input.brand_id,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        };
        products.insert(product.id, product.clone());

        tracing::info!(product_id = %product.id, brand_id = %product.brand_id, "Created product");
        Ok(product)
    }

    async fn update(&self, product: Product) -> ProductResult<Product> {
        let mut products = self.products.write().await;

        let stored = products
            .get_mut(&product.id)
            .ok_or(ProductError::NotFound(product.id))?;
        stored.name = product.name;
        stored.price = product.price;
        stored.qty = product.qty;
        stored.brand_id = product.brand_id;
        stored.updated_at = Utc::now();

        tracing::info!(product_id = %product.id, "Updated product");
        Ok(stored.clone())
    }

    async fn delete(&self, product: &Product) -> ProductResult<()> {
        let mut products = self.products.write().await;

        let stored = products
            .get_mut(&product.id)
            .ok_or(ProductError::NotFound(product.id))?;
        let now = Utc::now();
        stored.deleted_at = Some(now);
        stored.updated_at = now;

        tracing::info!(product_id = %product.id, "Soft-deleted product");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(name: &str, price: i64, brand_id: i64) -> CreateProduct {
        CreateProduct {
            name: name.to_string(),
            price,
            qty: 1,
            brand_id,
        }
    }

    #[tokio::test]
    async fn test_create_assigns_sequential_ids() {
        let repo = InMemoryProductRepository::new();
        let first = repo.create(input("Anvil", 100, 1)).await.unwrap();
        let second = repo.create(input("Rocket", 200, 1)).await.unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(repo.find_by_id(2).await.unwrap(), Some(second));
    }

    #[tokio::test]
    async fn test_sort_by_price_desc() {
        let repo = InMemoryProductRepository::new();
        repo.create(input("Cheap", 100, 1)).await.unwrap();
        repo.create(input("Pricey", 900, 1)).await.unwrap();
        repo.create(input("Middle", 500, 2)).await.unwrap();

        let page = PageRequest::with_defaults(
            None,
            None,
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
        assert_eq!(names, ["Pricey", "Middle", "Cheap"]);
    }

    #[tokio::test]
    async fn test_soft_delete() {
        let repo = InMemoryProductRepository::new();
        let product = repo.create(input("Anvil", 100, 1)).await.unwrap();

        repo.delete(&product).await.unwrap();

        assert_eq!(repo.count().await.unwrap(), 0);
        assert!(repo.find_all(&PageRequest::default()).await.unwrap().is_empty());
        assert!(repo.find_by_id(product.id).await.unwrap().unwrap().is_deleted());
    }
}
