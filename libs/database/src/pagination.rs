//! Offset pagination primitives shared by the domain repositories.
//!
//! Domains pair [`PageRequest`] with their own sort-key enum so that only
//! allowlisted columns ever reach `ORDER BY`.

use sea_orm::Order;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use utoipa::ToSchema;

pub const DEFAULT_PAGE: u64 = 1;
pub const DEFAULT_PER_PAGE: u64 = 10;

/// Largest `PerPage` a list query accepts.
pub const MAX_PER_PAGE: u64 = 100;

/// Largest `Page` a list query accepts. With [`MAX_PER_PAGE`] the offset stays far below `i64::MAX`.
pub const MAX_PAGE: u64 = 1_000_000;

/// Postgres binds LIMIT and OFFSET as BIGINT.
const MAX_BIND: u64 = i64::MAX as u64;

/// Sort direction accepted in the `Sort` query parameter.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, ToSchema,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

impl From<SortDirection> for Order {
    fn from(direction: SortDirection) -> Self {
        match direction {
            SortDirection::Asc => Order::Asc,
            SortDirection::Desc => Order::Desc,
        }
    }
}

/// A resolved page request: every field is set and `page`/`per_page` are at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest<S> {
    pub page: u64,
    pub per_page: u64,
    pub sort: SortDirection,
    pub sort_by: S,
}

impl<S: Default> PageRequest<S> {
    /// Builds a request, substituting defaults for unset values.
    ///
    /// `None` and `0` both count as unset for `page` and `per_page`.
    pub fn with_defaults(
        page: Option<u64>,
        per_page: Option<u64>,
        sort: Option<SortDirection>,
        sort_by: Option<S>,
    ) -> Self {
        Self {
            page: page.filter(|p| *p > 0).unwrap_or(DEFAULT_PAGE),
            per_page: per_page.filter(|p| *p > 0).unwrap_or(DEFAULT_PER_PAGE),
            sort: sort.unwrap_or_default(),
            sort_by: sort_by.unwrap_or_default(),
        }
    }
}

impl<S: Default> Default for PageRequest<S> {
    fn default() -> Self {
        Self::with_defaults(None, None, None, None)
    }
}

impl<S> PageRequest<S> {
    /// Never exceeds `i64::MAX`, whatever the request holds.
    pub fn limit(&self) -> u64 {
        self.per_page.min(MAX_BIND)
    }

    /// Never exceeds `i64::MAX`, whatever the request holds.
    pub fn offset(&self) -> u64 {
        self.per_page
            .saturating_mul(self.page.saturating_sub(1))
            .min(MAX_BIND)
    }
}

/// Number of pages needed to show `count` items at `per_page` items each.
pub fn total_pages(count: u64, per_page: u64) -> u64 {
    if per_page == 0 {
        return 0;
    }
    count.div_ceil(per_page)
}
