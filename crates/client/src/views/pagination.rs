//! Server-side paginated list views.

use std::future::Future;

use logistica_core::pagination::{Page, PageInfo, DEFAULT_PAGE_LIMIT};

use crate::error::ClientResult;
use crate::http::PageQuery;

/// One page of rows plus the controls around it.
///
/// The page is fetched through a closure so the same view serves every list
/// endpoint. `next`/`previous` do nothing at the bounds.
#[derive(Debug, Clone)]
pub struct PagedList<T> {
    page: i64,
    limit: i64,
    rows: Vec<T>,
    info: Option<PageInfo>,
    error: Option<String>,
}

impl<T> Default for PagedList<T> {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_LIMIT)
    }
}

impl<T> PagedList<T> {
    pub fn new(limit: i64) -> Self {
        Self {
            page: 1,
            limit,
            rows: Vec::new(),
            info: None,
            error: None,
        }
    }

    pub fn page(&self) -> i64 {
        self.page
    }

    pub fn rows(&self) -> &[T] {
        &self.rows
    }

    pub fn info(&self) -> Option<&PageInfo> {
        self.info.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn has_next(&self) -> bool {
        self.info.is_some_and(|i| i.has_next)
    }

    pub fn has_previous(&self) -> bool {
        self.info.is_some_and(|i| i.has_previous)
    }

    /// Fetch `page`. On failure the previous rows stay and the error is kept
    /// for display.
    pub async fn load<F, Fut>(&mut self, page: i64, fetch: F)
    where
        F: FnOnce(PageQuery) -> Fut,
        Fut: Future<Output = ClientResult<Page<T>>>,
    {
        let query = PageQuery::new(page.max(1), self.limit);
        match fetch(query).await {
            Ok(result) => {
                self.page = result.pagination.page;
                self.rows = result.data;
                self.info = Some(result.pagination);
                self.error = None;
            }
            Err(e) => {
                tracing::warn!(page = query.page, error = %e, "Page load failed");
                self.error = Some(e.user_message());
            }
        }
    }

    /// Load the next page. Returns `false` without a request at the last page.
    pub async fn next<F, Fut>(&mut self, fetch: F) -> bool
    where
        F: FnOnce(PageQuery) -> Fut,
        Fut: Future<Output = ClientResult<Page<T>>>,
    {
        if !self.has_next() {
            return false;
        }
        self.load(self.page + 1, fetch).await;
        true
    }

    /// Load the previous page. Returns `false` without a request on page 1.
    pub async fn previous<F, Fut>(&mut self, fetch: F) -> bool
    where
        F: FnOnce(PageQuery) -> Fut,
        Fut: Future<Output = ClientResult<Page<T>>>,
    {
        if !self.has_previous() {
            return false;
        }
        self.load(self.page - 1, fetch).await;
        true
    }
}
