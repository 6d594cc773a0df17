use chrono::{DateTime, Utc};
use database::{PageRequest, SortDirection};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::str::FromStr;
use strum::{Display, EnumString, VariantNames};
use utoipa::{IntoParams, ToSchema};
use validator::{Validate, ValidationError};

use crate::error::{BrandError, BrandResult};

/// Timestamp layout used in every API response (always UTC).
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.format(TIMESTAMP_FORMAT).to_string()
}

/// Brand as stored. `deleted_at` marks a soft-deleted row.
#[derive(Debug, Clone, PartialEq)]
pub struct Brand {
    pub id: i64,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Brand {
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }

    /// Apply a partial update. Absent fields keep their current value.
    pub fn apply_update(&mut self, update: UpdateBrand) {
        if let Some(name) = update.name {
            self.name = name;
        }
    }
}

/// Columns a brand listing can be ordered by.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display, EnumString, VariantNames)]
#[strum(serialize_all = "snake_case")]
pub enum BrandSortField {
    Id,
    Name,
    #[default]
    CreatedAt,
    UpdatedAt,
}

/// Input for creating a brand
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateBrand {
    #[serde(default)]
    #[validate(length(min = 1, max = 255))]
    #[schema(example = "Acme")]
    pub name: String,
}

/// Input for updating a brand
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateBrand {
    #[validate(length(min = 1, max = 255))]
    pub name: Option<String>,
}

/// Brand as returned by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct BrandResponse {
    pub id: i64,
    pub name: String,
    #[schema(example = "2025-01-01 12:00:00")]
    pub created_at: String,
    #[schema(example = "2025-01-01 12:00:00")]
    pub updated_at: String,
}

impl From<&Brand> for BrandResponse {
    fn from(brand: &Brand) -> Self {
        Self {
            id: brand.id,
            name: brand.name.clone(),
            created_at: format_timestamp(&brand.created_at),
            updated_at: format_timestamp(&brand.updated_at),
        }
    }
}

impl From<Brand> for BrandResponse {
    fn from(brand: Brand) -> Self {
        Self::from(&brand)
    }
}

/// Query string of `GET /brands`.
///
/// `PerPage`, `Page` and `Sort` are required. `Search` is accepted and ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct BrandListQuery {
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

    /// One of `id`, `name`, `created_at`, `updated_at` (default `created_at`)
    #[serde(rename = "SortBy")]
    #[validate(custom(function = "validate_brand_sort_by"))]
    pub sort_by: Option<String>,

    #[serde(rename = "Search")]
    pub search: Option<String>,
}

impl BrandListQuery {
    /// Resolve into a typed page request, filling in defaults.
    pub fn to_page_request(&self) -> BrandResult<PageRequest<BrandSortField>> {
        let sort = self
            .sort
            .as_deref()
            .map(SortDirection::from_str)
            .transpose()
            .map_err(|_| BrandError::Validation("Sort must be one of [asc desc]".to_string()))?;

        let sort_by = self
            .sort_by
            .as_deref()
            .map(BrandSortField::from_str)
            .transpose()
            .map_err(|_| BrandError::Validation(sort_by_message(BrandSortField::VARIANTS)))?;

        Ok(PageRequest::with_defaults(
            self.page,
            self.per_page,
            sort,
            sort_by,
        ))
    }
}

/// Checks the `Sort` query value.
pub fn validate_sort(sort: &str) -> Result<(), ValidationError> {
    SortDirection::from_str(sort)
        .map(|_| ())
        .map_err(|_| {
            ValidationError::new("one_of").with_message(Cow::from("Sort must be one of [asc desc]"))
        })
}

fn validate_brand_sort_by(sort_by: &str) -> Result<(), ValidationError> {
    BrandSortField::from_str(sort_by).map(|_| ()).map_err(|_| {
        ValidationError::new("one_of")
            .with_message(Cow::Owned(sort_by_message(BrandSortField::VARIANTS)))
    })
}

/// `"SortBy must be one of [a b c]"` for the given allowlist.
pub fn sort_by_message(allowed: &[&str]) -> String {
    format!("SortBy must be one of [{}]", allowed.join(" "))
}
