use chrono::{DateTime, Utc};
use database::{PageRequest, SortDirection};
use domain_brands::BrandResponse;
use domain_brands::models::{format_timestamp, sort_by_message, validate_sort};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::str::FromStr;
use strum::{Display, EnumString, VariantNames};
use utoipa::{IntoParams, ToSchema};
use validator::{Validate, ValidationError};

use crate::error::{ProductError, ProductResult};

/// Product as stored. `deleted_at` marks a soft-deleted row.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub price: i64,
    pub qty: i32,
    pub brand_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Product {
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }

    /// Apply a partial update. Absent fields keep their current value.
    pub fn apply_update(&mut self, update: UpdateProduct) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(price) = update.price {
            self.price = price;
        }
        if let Some(qty) = update.qty {
            self.qty = qty;
        }
        if let Some(brand_id) = update.brand_id {
            self.brand_id = brand_id;
        }
    }
}

/// Columns a product listing can be ordered by.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display, EnumString, VariantNames)]
#[strum(serialize_all = "snake_case")]
pub enum ProductSortField {
    Id,
    Name,
    Price,
    Qty,
    BrandId,
    #[default]
    CreatedAt,
    UpdatedAt,
}

/// Input for creating a product
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateProduct {
    #[serde(default)]
    #[validate(length(min = 1, max = 255))]
    #[schema(example = "Road Runner Trap")]
    pub name: String,

    /// Price in minor currency units
    #[validate(range(min = 0))]
    #[schema(example = 1999)]
    pub price: i64,

    #[validate(range(min = 0))]
    pub qty: i32,

    #[validate(range(min = 1))]
    pub brand_id: i64,
}

/// Input for updating a product. Omitted fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateProduct {
    #[validate(length(min = 1, max = 255))]
    pub name: Option<String>,

    #[validate(range(min = 0))]
    pub price: Option<i64>,

    #[validate(range(min = 0))]
    pub qty: Option<i32>,

    #[validate(range(min = 1))]
    pub brand_id: Option<i64>,
}

/// Product as returned by the API, with its brand embedded
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProductResponse {
    pub id: i64,
    pub name: String,
    pub price: i64,
    pub qty: i32,
    pub brand: BrandResponse,
    #[schema(example = "2025-01-01 12:00:00")]
    pub created_at: String,
    #[schema(example = "2025-01-01 12:00:00")]
    pub updated_at: String,
}

impl ProductResponse {
    pub fn new(product: &Product, brand: BrandResponse) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            price: product.price,
            qty: product.qty,
            brand,
            created_at: format_timestamp(&product.created_at),
            updated_at: format_timestamp(&product.updated_at),
        }
    }
}

/// Query string of `GET /products`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ProductListQuery {
    /// Items per page (1 to 100)
    #[serde(rename = "PerPage")]
    #[validate(required, range(min = 1, max = 100))]
    pub per_page: Option<u64>,

    /// 1-based page number (at most 1000000)
    #[serde(rename = "Page")]
    #[validate(required, range(min = 1, max = 1000000))]
    pub page: Option<u64>,

    /// `asc` or `desc`
    #[serde(rename = "Sort")]
    #[validate(required, custom(function = "validate_sort"))]
    pub sort: Option<String>,

    /// One of `id`, `name`, `price`, `qty`, `brand_id`, `created_at`, `updated_at`
    #[serde(rename = "SortBy")]
    #[validate(custom(function = "validate_product_sort_by"))]
    pub sort_by: Option<String>,

    /// Accepted for compatibility; not applied
    #[serde(rename = "Search")]
    pub search: Option<String>,
}

impl ProductListQuery {
    pub fn to_page_request(&self) -> ProductResult<PageRequest<ProductSortField>> {
        let sort = self
            .sort
            .as_deref()
            .map(SortDirection::from_str)
            .transpose()
            .map_err(|_| ProductError::Validation("Sort must be one of [asc desc]".to_string()))?;

        let sort_by = self
            .sort_by
            .as_deref()
            .map(ProductSortField::from_str)
            .transpose()
            .map_err(|_| ProductError::Validation(sort_by_message(ProductSortField::VARIANTS)))?;

        Ok(PageRequest::with_defaults(
            self.page,
            self.per_page,
            sort,
            sort_by,
        ))
    }
}

fn validate_product_sort_by(sort_by: &str) -> Result<(), ValidationError> {
    ProductSortField::from_str(sort_by).map(|_| ()).map_err(|_| {
        ValidationError::new("one_of")
            .with_message(Cow::Owned(sort_by_message(ProductSortField::VARIANTS)))
    })
}
