use database::total_pages;
use std::sync::Arc;
use tracing::instrument;
use validator::Validate;

use crate::error::{BrandError, BrandResult};
use crate::models::{Brand, BrandListQuery, BrandResponse, CreateBrand, UpdateBrand};
use crate::repository::BrandRepository;

/// One page of brands plus the counters the list envelope needs.
#[derive(Debug, Clone, PartialEq)]
pub struct BrandPage {
    pub total_items: u64,
    pub total_pages: u64,
    pub page: u64,
    pub per_page: u64,
    pub items: Vec<BrandResponse>,
}

/// Service layer for Brand business logic
#[derive(Clone)]
pub struct BrandService<R: BrandRepository> {
    repository: Arc<R>,
}

impl<R: BrandRepository> BrandService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// List non-deleted brands, filling in pagination defaults
    #[instrument(skip(self))]
    pub async fn find_all(&self, query: &BrandListQuery) -> BrandResult<BrandPage> {
        let page = query.to_page_request()?;

        let (brands, count) =
            tokio::try_join!(self.repository.find_all(&page), self.repository.count())?;

        Ok(BrandPage {
            total_items: count,
            total_pages: total_pages(count, page.per_page),
            page: page.page,
            per_page: page.per_page,
            items: brands.iter().map(BrandResponse::from).collect(),
        })
    }

    #[instrument(skip(self))]
    pub async fn find_by_id(&self, id: i64) -> BrandResult<BrandResponse> {
        let brand = self.find_active(id).await?;
        Ok(brand.into())
    }

    #[instrument(skip(self))]
    pub async fn create_brand(&self, input: CreateBrand) -> BrandResult<BrandResponse> {
        input
            .validate()
            .map_err(|e| BrandError::Validation(e.to_string()))?;

        let brand = self.repository.create(input).await?;
        Ok(brand.into())
    }

    /// Update a brand; absent fields are left untouched
    #[instrument(skip(self))]
    pub async fn update_brand(&self, id: i64, input: UpdateBrand) -> BrandResult<BrandResponse> {
        input
            .validate()
            .map_err(|e| BrandError::Validation(e.to_string()))?;

        let mut brand = self.find_active(id).await?;
        brand.apply_update(input);

        let updated = self.repository.update(brand).await?;
        Ok(updated.into())
    }

    /// Soft-delete a brand. Its products are left in place.
    #[instrument(skip(self))]
    pub async fn delete_brand(&self, id: i64) -> BrandResult<()> {
        let brand = self.find_active(id).await?;
        self.repository.delete(&brand).await
    }

    /// A soft-deleted brand counts as missing here.
    async fn find_active(&self, id: i64) -> BrandResult<Brand> {
        self.repository
            .find_by_id(id)
            .await?
            .filter(|brand| !brand.is_deleted())
            .ok_or(BrandError::NotFound(id))
    }
}
