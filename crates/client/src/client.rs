//! HTTP transport for the inventory backend.

use std::sync::Arc;

use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue};
use secrecy::ExposeSecret;
use serde::de::DeserializeOwned;

use crate::config::ClientConfig;
use crate::error::ApiError;

/// Inventory backend REST client.
///
/// Cheap to clone; all state lives behind an `Arc`. One method per backend
/// operation - see the `products`, `stock`, `movements`, and `export`
/// modules for the typed surface.
#[derive(Clone)]
pub struct InventoryClient {
    inner: Arc<InventoryClientInner>,
}

struct InventoryClientInner {
    client: reqwest::Client,
    base_url: String,
}

/// Error body shape the backend uses for rejections.
#[derive(Debug, serde::Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

impl InventoryClient {
    /// Create a new client.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to build or the configured
    /// token is not a valid header value.
    pub fn new(config: &ClientConfig) -> Result<Self, ApiError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        if let Some(token) = &config.api_token {
            let value = format!("Bearer {}", token.expose_secret());
            let mut value = HeaderValue::from_str(&value)
                .map_err(|e| ApiError::Parse(format!("Invalid API token format: {e}")))?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()?;

        Ok(Self {
            inner: Arc::new(InventoryClientInner {
                client,
                base_url: config.base_url.clone(),
            }),
        })
    }

    /// The configured backend base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.inner.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.inner.base_url)
    }

    /// Execute a GET request and decode the JSON payload.
    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        let response = self
            .inner
            .client
            .get(self.url(path))
            .query(query)
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Execute a GET request and return the raw body bytes.
    pub(crate) async fn get_bytes(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<Vec<u8>, ApiError> {
        let response = self
            .inner
            .client
            .get(self.url(path))
            .query(query)
            .send()
            .await?;

        if response.status().is_success() {
            return Ok(response.bytes().await?.to_vec());
        }

        Err(Self::parse_error(response).await)
    }

    /// Execute a POST request with a JSON body and decode the JSON payload.
    pub(crate) async fn post<T: DeserializeOwned, B: serde::Serialize + Sync>(
        &self,
        path: &str,
        query: &[(&str, String)],
        body: &B,
    ) -> Result<T, ApiError> {
        let response = self
            .inner
            .client
            .post(self.url(path))
            .query(query)
            .json(body)
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Execute a PUT request with a JSON body and decode the JSON payload.
    pub(crate) async fn put<T: DeserializeOwned, B: serde::Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let response = self
            .inner
            .client
            .put(self.url(path))
            .json(body)
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Execute a PUT request and discard the response body.
    pub(crate) async fn put_unit<B: serde::Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<(), ApiError> {
        let response = self
            .inner
            .client
            .put(self.url(path))
            .json(body)
            .send()
            .await?;
        Self::check_status(response).await
    }

    /// Execute a PATCH request and discard the response body.
    ///
    /// Stock mutations return server state we intentionally ignore: callers
    /// re-fetch for authoritative data.
    pub(crate) async fn patch_unit<B: serde::Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<(), ApiError> {
        let response = self
            .inner
            .client
            .patch(self.url(path))
            .json(body)
            .send()
            .await?;
        Self::check_status(response).await
    }

    /// Handle a response and parse the JSON payload.
    async fn handle_response<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, ApiError> {
        if response.status().is_success() {
            return response
                .json()
                .await
                .map_err(|e| ApiError::Parse(format!("Failed to parse response: {e}")));
        }

        Err(Self::parse_error(response).await)
    }

    /// Check a response status, discarding any body on success.
    async fn check_status(response: reqwest::Response) -> Result<(), ApiError> {
        if response.status().is_success() {
            return Ok(());
        }

        Err(Self::parse_error(response).await)
    }

    /// Map a non-2xx response to an [`ApiError`].
    async fn parse_error(response: reqwest::Response) -> ApiError {
        let status = response.status().as_u16();

        if status == 401 || status == 403 {
            return ApiError::Unauthorized;
        }

        let body = response.text().await.unwrap_or_default();

        if status == 404 {
            return ApiError::NotFound(extract_message(&body).unwrap_or_else(|| {
                "Resource not found".to_string()
            }));
        }

        let message = extract_message(&body).unwrap_or(body);
        ApiError::Api { status, message }
    }
}

/// Pull the `message` field out of a structured error body, if present.
fn extract_message(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|e| e.message)
        .filter(|m| !m.trim().is_empty())
}

impl std::fmt::Debug for InventoryClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InventoryClient")
            .field("base_url", &self.inner.base_url)
            .finish_non_exhaustive()
    }
}
