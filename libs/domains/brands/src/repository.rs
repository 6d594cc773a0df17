use async_trait::async_trait;
use chrono::Utc;
use database::{PageRequest, SortDirection};
use std::cmp::Ordering;
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering as AtomicOrdering};
use tokio::sync::RwLock;

use crate::error::{BrandError, BrandResult};
use crate::models::{Brand, BrandSortField, CreateBrand};

/// Repository trait for Brand persistence
///
/// Listing and counting skip soft-deleted rows; `find_by_id` does not.
#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait]
pub trait BrandRepository: Send + Sync {
    /// Number of brands that are not soft-deleted
    async fn count(&self) -> BrandResult<u64>;

    /// One page of non-deleted brands in the requested order
    async fn find_all(&self, page: &PageRequest<BrandSortField>) -> BrandResult<Vec<Brand>>;

    /// Get a brand by ID, including soft-deleted ones
    async fn find_by_id(&self, id: i64) -> BrandResult<Option<Brand>>;

    async fn create(&self, input: CreateBrand) -> BrandResult<Brand>;

    /// Persist the brand's mutable fields and refresh `updated_at`
    async fn update(&self, brand: Brand) -> BrandResult<Brand>;

    /// Soft-delete by setting `deleted_at`
    async fn delete(&self, brand: &Brand) -> BrandResult<()>;
}

/// In-memory implementation of BrandRepository (for development/testing)
#[derive(Debug, Default, Clone)]
pub struct InMemoryBrandRepository {
    brands: Arc<RwLock<HashMap<i64, Brand>>>,
    last_id: Arc<AtomicI64>,
}

impl InMemoryBrandRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

fn compare(a: &Brand, b: &Brand, field: BrandSortField) -> Ordering {
    let ordering = match field {
        BrandSortField::Id => a.id.cmp(&b.id),
        BrandSortField::Name => a.name.cmp(&b.name),
        BrandSortField::CreatedAt => a.created_at.cmp(&b.created_at),
        BrandSortField::UpdatedAt => a.updated_at.cmp(&b.updated_at),
    };
    ordering.then_with(|| a.id.cmp(&b.id))
}

#[async_trait]
impl BrandRepository for InMemoryBrandRepository {
    async fn count(&self) -> BrandResult<u64> {
        let brands = self.brands.read().await;
        Ok(brands.values().filter(|b| !b.is_deleted()).count() as u64)
    }

    async fn find_all(&self, page: &PageRequest<BrandSortField>) -> BrandResult<Vec<Brand>> {
        let brands = self.brands.read().await;

        let mut result: Vec<Brand> = brands
            .values()
            .filter(|b| !b.is_deleted())
            .cloned()
            .collect();

        result.sort_by(|a, b| {
            let ordering = compare(a, b, page.sort_by);
            match page.sort {
                SortDirection::Asc => ordering,
                SortDirection::Desc => ordering.reverse(),
            }
        });

        Ok(result
            .into_iter()
            .skip(page.offset() as usize)
            .take(page.limit() as usize)
            .collect())
    }

    async fn find_by_id(&self, id: i64) -> BrandResult<Option<Brand>> {
        let brands = self.brands.read().await;
        Ok(brands.get(&id).cloned())
    }

    async fn create(&self, input: CreateBrand) -> BrandResult<Brand> {
        let mut brands = self.brands.write().await;

        let now = Utc::now();
        let brand = Brand {
            id: self.last_id.fetch_add(1, AtomicOrdering::SeqCst) + 1,
            name: input.name,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        };
        brands.insert(brand.id, brand.clone());

        tracing::info!(brand_id = %brand.id, "Created brand");
        Ok(brand)
    }

    async fn update(&self, brand: Brand) -> BrandResult<Brand> {
        let mut brands = self.brands.write().await;

        let stored = brands
            .get_mut(&brand.id)
            .ok_or(BrandError::NotFound(brand.id))?;
        stored.name = brand.name;
        stored.updated_at = Utc::now();

        tracing::info!(brand_id = %brand.id, "Updated brand");
        Ok(stored.clone())
    }

    async fn delete(&self, brand: &Brand) -> BrandResult<()> {
        let mut brands = self.brands.write().await;

        let stored = brands
            .get_mut(&brand.id)
            .ok_or(BrandError::NotFound(brand.id))?;
        let now = Utc::now();
        stored.deleted_at = Some(now);
        stored.updated_at = now;

        tracing::info!(brand_id = %brand.id, "Soft-deleted brand");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn seed(repo: &InMemoryBrandRepository, names: &[&str]) -> Vec<Brand> {
        let mut created = Vec::new();
        for name in names {
            let brand = repo
                .create(CreateBrand {
                    name: name.to_string(),
                })
                .await
                .unwrap();
            created.push(brand);
        }
        created
    }

    #[tokio::test]
    async fn test_create_and_find_brand() {
        let repo = InMemoryBrandRepository::new();
        let created = seed(&repo, &["Acme"]).await.remove(0);

        assert_eq!(created.id, 1);
        assert_eq!(created.name, "Acme");
        assert!(created.deleted_at.is_none());

        let fetched = repo.find_by_id(created.id).await.unwrap();
        assert_eq!(fetched, Some(created));
        assert!(repo.find_by_id(99).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_soft_delete_hides_from_listing_but_not_lookup() {
        let repo = InMemoryBrandRepository::new();
        let brands = seed(&repo, &["Acme", "Globex"]).await;

        repo.delete(&brands[0]).await.unwrap();

        assert_eq!(repo.count().await.unwrap(), 1);
        let page = repo.find_all(&PageRequest::default()).await.unwrap();
        assert_eq!(page.len(), 1);
        assert_eq!(page[0].name, "Globex");

        let deleted = repo.find_by_id(brands[0].id).await.unwrap().unwrap();
        assert!(deleted.is_deleted());
    }

    #[tokio::test]
    async fn test_find_all_sorts_and_paginates() {
        let repo = InMemoryBrandRepository::new();
        seed(&repo, &["Delta", "Alpha", "Charlie", "Bravo"]).await;

        let page = PageRequest::with_defaults(
            Some(1),
            Some(3),
            Some(SortDirection::Asc),
            Some(BrandSortField::Name),
        );
        let names: Vec<_> = repo
            .find_all(&page)
            .await
            .unwrap()
            .into_iter()
            .map(|b| b.name)
            .collect();
        assert_eq!(names, ["Alpha", "Bravo", "Charlie"]);

        let page = PageRequest::with_defaults(
            Some(2),
            Some(3),
            Some(SortDirection::Asc),
            Some(BrandSortField::Name),
        );
        let rest = repo.find_all(&page).await.unwrap();
        assert_eq!(rest.len(), 1);
        assert_eq!(rest[0].name, "Delta");

        let page = PageRequest::with_defaults(
            None,
            None,
            Some(SortDirection::Desc),
            Some(BrandSortField::Id),
        );
        let ids: Vec<_> = repo
            .find_all(&page)
            .await
            .unwrap()
            .into_iter()
            .map(|b| b.id)
            .collect();
        assert_eq!(ids, [4, 3, 2, 1]);
    }

    #[tokio::test]
    async fn test_update_missing_brand() {
        let repo = InMemoryBrandRepository::new();
        let mut ghost = seed(&repo, &["Acme"]).await.remove(0);
        ghost.id = 42;

        let result = repo.update(ghost).await;
        assert!(matches!(result, Err(BrandError::NotFound(42))));
    }
}
