//! [`RestClient`] implementation.

use std::collections::HashMap;

use crate::clients::rest::RestError;
use crate::clients::{HttpClient, HttpMethod, HttpRequest, HttpResponse};
use crate::config::{ApiVersion, ShopifyConfig};

/// Client for the Admin REST API of one shop.
///
/// `RestClient` is `Send + Sync`; share it behind an `Arc` so that every
/// resource service uses the same connection pool.
#[derive(Debug)]
pub struct RestClient {
    http_client: HttpClient,
    api_version: ApiVersion,
}

const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<RestClient>();
};

impl RestClient {
    /// Creates a client using the configured API version.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::Http`] if the HTTP client cannot be built.
    pub fn new(config: &ShopifyConfig) -> Result<Self, RestError> {
        Self::with_version(config, *config.api_version())
    }

    /// Creates a client pinned to `version`, overriding the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::Http`] if the HTTP client cannot be built.
    pub fn with_version(config: &ShopifyConfig, version: ApiVersion) -> Result<Self, RestError> {
        if &version != config.api_version() {
            tracing::debug!(
                "Rest client overriding default API version {} with {}",
                config.api_version(),
                version
            );
        }

        let base_path = format!("/admin/api/{version}");
        let http_client = HttpClient::new(base_path, config)?;

        Ok(Self {
            http_client,
            api_version: version,
        })
    }

    /// The API version in the request path.
    #[must_use]
    pub const fn api_version(&self) -> &ApiVersion {
        &self.api_version
    }

    /// The underlying HTTP client.
    #[must_use]
    pub const fn http_client(&self) -> &HttpClient {
        &self.http_client
    }

    /// Sends a GET request.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::InvalidPath`] for an empty path and
    /// [`RestError::Http`] for transport or status failures.
    pub async fn get(
        &self,
        path: &str,
        query: Option<HashMap<String, String>>,
    ) -> Result<HttpResponse, RestError> {
        self.make_request(HttpMethod::Get, path, None, query).await
    }

    /// Sends a POST request with a JSON body.
    ///
    /// # Errors
    ///
    /// Same as [`get`](Self::get).
    pub async fn post(
        &self,
        path: &str,
        body: serde_json::Value,
        query: Option<HashMap<String, String>>,
    ) -> Result<HttpResponse, RestError> {
        self.make_request(HttpMethod::Post, path, Some(body), query)
            .await
    }

    /// Sends a PUT request with a JSON body.
    ///
    /// # Errors
    ///
    /// Same as [`get`](Self::get).
    pub async fn put(
        &self,
        path: &str,
        body: serde_json::Value,
        query: Option<HashMap<String, String>>,
    ) -> Result<HttpResponse, RestError> {
        self.make_request(HttpMethod::Put, path, Some(body), query)
            .await
    }

    /// Sends a DELETE request.
    ///
    /// # Errors
    ///
    /// Same as [`get`](Self::get).
    pub async fn delete(
        &self,
        path: &str,
        query: Option<HashMap<String, String>>,
    ) -> Result<HttpResponse, RestError> {
        self.make_request(HttpMethod::Delete, path, None, query)
            .await
    }

    async fn make_request(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<serde_json::Value>,
        query: Option<HashMap<String, String>>,
    ) -> Result<HttpResponse, RestError> {
        let normalized_path = normalize_path(path)?;

        let mut builder = HttpRequest::builder(method, normalized_path);
        if let Some(body) = body {
            builder = builder.body(body);
        }
        if let Some(query) = query {
            builder = builder.query(query);
        }

        let request = builder.build().map_err(|e| RestError::Http(e.into()))?;

        Ok(self.http_client.request(request).await?)
    }
}

/// Strips leading slashes and appends `.json` exactly once.
fn normalize_path(path: &str) -> Result<String, RestError> {
    let trimmed = path.trim_start_matches('/');
    let trimmed = trimmed.strip_suffix(".json").unwrap_or(trimmed);

    if trimmed.is_empty() {
        return Err(RestError::InvalidPath {
            path: path.to_string(),
        });
    }

    Ok(format!("{trimmed}.json"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AccessToken, ShopDomain};

    fn create_test_config() -> ShopifyConfig {
        ShopifyConfig::builder()
            .shop(ShopDomain::new("test-shop").unwrap())
            .access_token(AccessToken::new("test-access-token").unwrap())
            .build()
            .unwrap()
    }

    #[test]
    fn test_normalize_path_variants() {
        assert_eq!(normalize_path("shop").unwrap(), "shop.json");
        assert_eq!(normalize_path("/shop").unwrap(), "shop.json");
        assert_eq!(normalize_path("shop.json").unwrap(), "shop.json");
        assert_eq!(normalize_path("//shop.json").unwrap(), "shop.json");
        assert_eq!(
            normalize_path("products/1/metafields/count").unwrap(),
            "products/1/metafields/count.json"
        );
    }

    #[test]
    fn test_normalize_path_rejects_empty() {
        for bad in ["", "/", ".json", "/.json"] {
            assert!(
                matches!(normalize_path(bad), Err(RestError::InvalidPath { .. })),
                "{bad:?}"
            );
        }
    }

    #[test]
    fn test_base_path_uses_configured_version() {
        let client = RestClient::new(&create_test_config()).unwrap();

        assert_eq!(client.api_version(), &ApiVersion::latest());
        assert_eq!(client.http_client().base_path(), "/admin/api/2025-10");
    }

    #[test]
    fn test_with_version_overrides_config() {
        let client = RestClient::with_version(&create_test_config(), ApiVersion::Unstable).unwrap();

        assert_eq!(client.api_version(), &ApiVersion::Unstable);
        assert_eq!(client.http_client().base_path(), "/admin/api/unstable");
    }

    #[test]
    fn test_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<RestClient>();
    }
}
