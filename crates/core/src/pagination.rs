//! Page/limit pagination shared by every list endpoint.
//!
//! Pages are 1-based and clamped to `[1, MAX_PAGE]`. Limits are clamped to
//! `[1, MAX_PAGE_LIMIT]`.

use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE_LIMIT: i64 = 10;
pub const MAX_PAGE_LIMIT: i64 = 100;

/// Highest page number accepted; its offset still fits in an `i64`.
pub const MAX_PAGE: i64 = i64::MAX / MAX_PAGE_LIMIT;

/// Raw `?page=&limit=` query parameters.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct PageRequest {
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

/// Clamped pagination parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageParams {
    pub page: i64,
    pub limit: i64,
}

impl PageParams {
    pub fn new(page: i64, limit: i64) -> Self {
        Self {
            page: page.clamp(1, MAX_PAGE),
            limit: limit.clamp(1, MAX_PAGE_LIMIT),
        }
    }

    /// Row offset for `LIMIT/OFFSET` queries.
    pub fn offset(&self) -> i64 {
        (self.page - 1).saturating_mul(self.limit)
    }
}

impl Default for PageParams {
    fn default() -> Self {
        Self::new(1, DEFAULT_PAGE_LIMIT)
    }
}

impl From<PageRequest> for PageParams {
    fn from(req: PageRequest) -> Self {
        Self::new(
            req.page.unwrap_or(1),
            req.limit.unwrap_or(DEFAULT_PAGE_LIMIT),
        )
    }
}

/// Position of a page within the full result set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageInfo {
    pub page: i64,
    pub limit: i64,
    pub total: i64,
    pub total_pages: i64,
    pub has_previous: bool,
    pub has_next: bool,
}

impl PageInfo {
    pub fn new(params: PageParams, total: i64) -> Self {
        let total = total.max(0);
        let total_pages = total / params.limit + i64::from(total % params.limit != 0);
        Self {
            page: params.page,
            limit: params.limit,
            total,
            total_pages,
            has_previous: params.page > 1,
            has_next: params.page < total_pages,
        }
    }
}

/// A page of rows together with its [`PageInfo`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    pub data: Vec<T>,
    pub pagination: PageInfo,
}

impl<T> Page<T> {
    pub fn new(data: Vec<T>, params: PageParams, total: i64) -> Self {
        Self {
            data,
            pagination: PageInfo::new(params, total),
        }
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            data: self.data.into_iter().map(f).collect(),
            pagination: self.pagination,
        }
    }
}
