//! Product Service - Business logic layer

use database::total_pages;
use domain_brands::{BrandRepository, BrandResponse};
use futures::future::try_join_all;
use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;
use tracing::instrument;
use validator::Validate;

use crate::error::{ProductError, ProductResult};
use crate::models::{
    CreateProduct, Product, ProductListQuery, ProductResponse, UpdateProduct,
};
use crate::repository::ProductRepository;

/// One page of products plus the counters the list envelope needs.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductPage {
    pub total_items: u64,
    pub total_pages: u64,
    pub page: u64,
    pub per_page: u64,
    pub items: Vec<ProductResponse>,
}

/// Product service providing business logic operations
///
/// Reads go through the brand repository to embed each product's brand.
/// Writes check that the referenced brand exists and is not deleted; the
/// check and the write are separate round trips.
pub struct ProductService<P: ProductRepository, B: BrandRepository> {
    products: Arc<P>,
    brands: Arc<B>,
}

impl<P: ProductRepository, B: BrandRepository> ProductService<P, B> {
    pub fn new(products: P, brands: B) -> Self {
        Self {
            products: Arc::new(products),
            brands: Arc::new(brands),
        }
    }

    /// List non-deleted products, each with its brand
    #[instrument(skip(self))]
    pub async fn find_all(&self, query: &ProductListQuery) -> ProductResult<ProductPage> {
        let page = query.to_page_request()?;

        let (products, count) =
            tokio::try_join!(self.products.find_all(&page), self.products.count())?;

        let items = self.enrich_all(&products).await?;

        Ok(ProductPage {
            total_items: count,
            total_pages: total_pages(count, page.per_page),
            page: page.page,
            per_page: page.per_page,
            items,
        })
    }

    #[instrument(skip(self))]
    pub async fn find_by_id(&self, id: i64) -> ProductResult<ProductResponse> {
        let product = self.find_active(id).await?;
        self.enrich(&product).await
    }

    #[instrument(skip(self, input), fields(product_name = %input.name, brand_id = input.brand_id))]
    pub async fn create_product(&self, input: CreateProduct) -> ProductResult<ProductResponse> {
        input
            .validate()
            .map_err(|e| ProductError::Validation(e.to_string()))?;

        self.ensure_brand(input.brand_id).await?;

        let product = self.products.create(input).await?;
        self.enrich(&product).await
    }

    /// Update a product; absent fields keep their stored values
    #[instrument(skip(self))]
    pub async fn update_product(
        &self,
        id: i64,
        input: UpdateProduct,
    ) -> ProductResult<ProductResponse> {
        input
            .validate()
            .map_err(|e| ProductError::Validation(e.to_string()))?;

        let mut product = self.find_active(id).await?;

        if let Some(brand_id) = input.brand_id {
            self.ensure_brand(brand_id).await?;
        }

        product.apply_update(input);
        let updated = self.products.update(product).await?;
        self.enrich(&updated).await
    }

    /// Soft-delete a product. The brand is untouched.
    #[instrument(skip(self))]
    pub async fn delete_product(&self, id: i64) -> ProductResult<()> {
        let product = self.find_active(id).await?;
        self.products.delete(&product).await
    }

    async fn find_active(&self, id: i64) -> ProductResult<Product> {
        self.products
            .find_by_id(id)
            .await?
            .filter(|product| !product.is_deleted())
            .ok_or(ProductError::NotFound(id))
    }

    async fn ensure_brand(&self, brand_id: i64) -> ProductResult<()> {
        match self.brands.find_by_id(brand_id).await? {
            Some(brand) if !brand.is_deleted() => Ok(()),
            _ => Err(ProductError::BrandNotFound(brand_id)),
        }
    }

    /// Attach the product's brand. Soft-deleted brands still resolve.
    async fn enrich(&self, product: &Product) -> ProductResult<ProductResponse> {
        let brand = self
            .brands
            .find_by_id(product.brand_id)
            .await?
            .ok_or_else(|| missing_brand(product))?;

        Ok(ProductResponse::new(product, BrandResponse::from(&brand)))
    }

    /// Same as [`Self::enrich`] for a whole page, one lookup per distinct brand.
    async fn enrich_all(&self, products: &[Product]) -> ProductResult<Vec<ProductResponse>> {
        let brand_ids: BTreeSet<i64> = products.iter().map(|p| p.brand_id).collect();

        let found = try_join_all(brand_ids.into_iter().map(|id| self.brands.find_by_id(id))).await?;
        let brands: HashMap<i64, BrandResponse> = found
            .into_iter()
            .flatten()
            .map(|brand| (brand.id, BrandResponse::from(&brand)))
            .collect();

        products
            .iter()
            .map(|product| {
                brands
                    .get(&product.brand_id)
                    .map(|brand| ProductResponse::new(product, brand.clone()))
                    .ok_or_else(|| missing_brand(product))
            })
            .collect()
    }
}

fn missing_brand(product: &Product) -> ProductError {
    tracing::error!(
        product_id = product.id,
        brand_id = product.brand_id,
        "Product references a brand that does not exist"
    );
    ProductError::MissingBrand {
        product_id: product.id,
        brand_id: product.brand_id,
    }
}
