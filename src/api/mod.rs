//! HTTP client wrapper for the backend REST API.
//!
//! [`ApiClient`] is a thin call to the configured base URL: no retry, no
//! interceptors, no request deduplication. Every resource gets its own module
//! with free functions taking the client, mirroring the backend's path layout.
//! All paths use the single unversioned form (`orders`, `products`, ...).
//!
//! Most responses arrive wrapped in a `{ "data": ... }` envelope; the helpers
//! here strip it and map non-success statuses to typed errors at the boundary,
//! so callers never inspect raw payload shape.

use crate::config::AppConfig;
use crate::errors::{Error, Result};
use reqwest::{Response, StatusCode};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::warn;

/// Category endpoints (`categories`)
pub mod categories;
/// Order and order-item endpoints (`orders`, `order-item`)
pub mod orders;
/// Payment-proof endpoints (`payment-proof`)
pub mod payments;
/// Product catalog endpoints (`products`)
pub mod products;
/// Production-progress endpoints (`progress`)
pub mod progress;
/// Review endpoints (`reviews`)
pub mod reviews;
/// User endpoints (`users`)
pub mod users;

#[derive(Debug, Deserialize)]
struct ApiEnvelope<T> {
    data: T,
}

/// Handle to the backend REST API.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Creates a client for the given base URL. A trailing slash is added
    /// when missing so path joins stay predictable.
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    /// Creates a client from the resolved application configuration.
    #[must_use]
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.api_base_url.clone())
    }

    /// The configured base URL, always with a trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path.trim_start_matches('/'))
    }

    pub(crate) fn http(&self) -> &reqwest::Client {
        &self.http
    }
}

/// Unwraps a `{ "data": ... }` envelope, mapping 404 to [`Error::NotFound`]
/// and other non-success statuses to [`Error::Api`].
pub(crate) async fn read_data<T: DeserializeOwned>(response: Response, resource: &str) -> Result<T> {
    let response = check_status(response, resource).await?;
    let envelope: ApiEnvelope<T> = response.json().await?;
    Ok(envelope.data)
}

/// Reads a response body that is not wrapped in a data envelope.
pub(crate) async fn read_body<T: DeserializeOwned>(response: Response, resource: &str) -> Result<T> {
    let response = check_status(response, resource).await?;
    Ok(response.json().await?)
}

/// Discards the body, keeping only the success/failure outcome.
pub(crate) async fn expect_success(response: Response, resource: &str) -> Result<()> {
    check_status(response, resource).await.map(|_| ())
}

async fn check_status(response: Response, resource: &str) -> Result<Response> {
    let status = response.status();
    if status == StatusCode::NOT_FOUND {
        return Err(Error::NotFound {
            resource: resource.to_string(),
        });
    }
    if !status.is_success() {
        let message = response.text().await.unwrap_or_default();
        warn!(%status, resource, "API request failed.");
        return Err(Error::Api {
            status: status.as_u16(),
            message,
        });
    }
    Ok(response)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joins_with_trailing_slash() {
        let client = ApiClient::new("https://api.example.com/");
        assert_eq!(client.url("products"), "https://api.example.com/products");
    }

    #[test]
    fn test_url_adds_missing_trailing_slash() {
        let client = ApiClient::new("https://api.example.com");
        assert_eq!(
            client.url("orders/abc123"),
            "https://api.example.com/orders/abc123"
        );
    }

    #[test]
    fn test_url_strips_leading_slash_from_path() {
        let client = ApiClient::new("https://api.example.com/");
        assert_eq!(client.url("/categories"), "https://api.example.com/categories");
    }

    #[test]
    fn test_base_url_is_normalized() {
        let client = ApiClient::new("http://localhost:8080");
        assert_eq!(client.base_url(), "http://localhost:8080/");
    }
}
