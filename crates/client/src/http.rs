//! Thin wrapper over [`reqwest`] for the logistics API.
//!
//! Every call issues exactly one request: no retries, caching or batching.
//! Non-2xx responses become [`ClientError`] via [`ClientError::from_response`].

use std::time::Duration;

use logistica_core::pagination::{Page, PageInfo, PageParams, DEFAULT_PAGE_LIMIT};
use reqwest::{Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};

/// `?page=&limit=` query for list endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageQuery {
    pub page: i64,
    pub limit: i64,
}

impl PageQuery {
    pub fn new(page: i64, limit: i64) -> Self {
        Self { page, limit }
    }

    /// An empty page positioned at this query, for lookups that treat 404
    /// as "nothing yet".
    pub fn empty_page<T>(self) -> Page<T> {
        let params = PageParams::new(self.page, self.limit);
        Page {
            data: Vec::new(),
            pagination: PageInfo::new(params, 0),
        }
    }
}

impl Default for PageQuery {
    fn default() -> Self {
        Self::new(1, DEFAULT_PAGE_LIMIT)
    }
}

/// HTTP client bound to one API base URL and, optionally, a bearer token.
///
/// Cloning is cheap; the underlying connection pool is shared.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
    token: Option<String>,
    timeout: Option<Duration>,
}

impl ApiClient {
    /// * `base_url` - API root including the version prefix, e.g.
    ///   `http://localhost:3000/api/v1`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// Reuse an existing [`reqwest::Client`] (shared connection pool).
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            token: None,
            timeout: None,
        }
    }

    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(config.api_url.clone())
    }

    /// A copy of this client that sends `Authorization: Bearer <token>`.
    pub fn with_token(&self, token: impl Into<String>) -> Self {
        Self {
            token: Some(token.into()),
            ..self.clone()
        }
    }

    /// A copy of this client without credentials.
    pub fn anonymous(&self) -> Self {
        Self {
            token: None,
            ..self.clone()
        }
    }

    /// A copy of this client that applies `timeout` to every request.
    pub fn with_timeout(&self, timeout: Duration) -> Self {
        Self {
            timeout: Some(timeout),
            ..self.clone()
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    // ---- request helpers used by the api modules ----

    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        Self::send_json(self.request(Method::GET, path)).await
    }

    /// `GET` a paginated list. `filter` fields that are `None` are omitted.
    pub(crate) async fn get_page<T, F>(
        &self,
        path: &str,
        page: PageQuery,
        filter: &F,
    ) -> ClientResult<Page<T>>
    where
        T: DeserializeOwned,
        F: Serialize + ?Sized,
    {
        let builder = self.request(Method::GET, path).query(&page).query(filter);
        Self::send_json(builder).await
    }

    pub(crate) async fn post<B, T>(&self, path: &str, body: &B) -> ClientResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        Self::send_json(self.request(Method::POST, path).json(body)).await
    }

    pub(crate) async fn put<B, T>(&self, path: &str, body: &B) -> ClientResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        Self::send_json(self.request(Method::PUT, path).json(body)).await
    }

    /// `DELETE`, discarding the (usually empty) body.
    pub(crate) async fn delete(&self, path: &str) -> ClientResult<()> {
        let response = self
            .request(Method::DELETE, path)
            .send()
            .await
            .map_err(ClientError::Transport)?;
        Self::ensure_success(response).await?;
        Ok(())
    }

    // ---- private helpers ----

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(method = %method, url = %url, "API request");

        let mut builder = self.client.request(method, url);
        if let Some(token) = &self.token {
            builder = builder.bearer_auth(token);
        }
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        builder
    }

    async fn send_json<T: DeserializeOwned>(builder: RequestBuilder) -> ClientResult<T> {
        let response = builder.send().await.map_err(ClientError::Transport)?;
        let response = Self::ensure_success(response).await?;
        let bytes = response.bytes().await.map_err(ClientError::Transport)?;
        serde_json::from_slice(&bytes).map_err(|e| ClientError::Decode(e.to_string()))
    }

    /// Return the response unchanged on 2xx, otherwise the mapped error.
    async fn ensure_success(response: Response) -> ClientResult<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        let err = ClientError::from_response(status.as_u16(), &body);
        tracing::debug!(status = status.as_u16(), error = %err, "API request failed");
        Err(err)
    }
}

/// Treat a 404 as an empty result. Other errors pass through.
pub(crate) fn empty_on_not_found<T>(
    result: ClientResult<T>,
    empty: impl FnOnce() -> T,
) -> ClientResult<T> {
    match result {
        Err(ClientError::NotFound(message)) => {
            tracing::debug!(%message, "Lookup returned 404, using an empty result");
            Ok(empty())
        }
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builders_keep_the_base_url() {
        let client = ApiClient::new("http://localhost:3000/api/v1/");
        assert_eq!(client.base_url(), "http://localhost:3000/api/v1");

        let authed = client.with_token("abc").with_timeout(Duration::from_secs(10));
        assert_eq!(authed.token(), Some("abc"));
        assert_eq!(authed.timeout(), Some(Duration::from_secs(10)));
        assert_eq!(authed.anonymous().token(), None);
        assert_eq!(client.token(), None);
    }

    #[test]
    fn empty_page_keeps_the_requested_position() {
        let page: Page<u8> = PageQuery::new(2, 10).empty_page();
        assert!(page.data.is_empty());
        assert_eq!(page.pagination.page, 2);
        assert_eq!(page.pagination.total, 0);
        assert!(!page.pagination.has_next);
    }

    #[test]
    fn not_found_becomes_empty() {
        let result: ClientResult<Vec<u8>> = Err(ClientError::NotFound("gone".into()));
        assert_eq!(empty_on_not_found(result, Vec::new).unwrap(), Vec::<u8>::new());

        let result: ClientResult<Vec<u8>> = Err(ClientError::Forbidden("no".into()));
        assert!(empty_on_not_found(result, Vec::new).is_err());
    }
}
