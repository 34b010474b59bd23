//! Authenticated HTTP transport.

use std::collections::HashMap;

use crate::clients::errors::{HttpError, HttpResponseError};
use crate::clients::http_request::{HttpMethod, HttpRequest};
use crate::clients::http_response::HttpResponse;
use crate::config::ShopifyConfig;

/// Crate version, reported in the `User-Agent` header.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP client bound to one shop.
///
/// Holds the reqwest connection pool, the shop origin, the versioned base
/// path and the default headers (`User-Agent`, `Accept`,
/// `X-Shopify-Access-Token`). Each call to [`request`](Self::request) sends
/// exactly one HTTP request; nothing is retried.
///
/// ```rust
/// use shopify_rest::clients::HttpClient;
/// use shopify_rest::{AccessToken, ShopDomain, ShopifyConfig};
///
/// let config = ShopifyConfig::builder()
///     .shop(ShopDomain::new("my-store").unwrap())
///     .access_token(AccessToken::new("shpat_123").unwrap())
///     .build()
///     .unwrap();
///
/// let client = HttpClient::new("/admin/api/2025-10", &config).unwrap();
/// assert_eq!(client.base_uri(), "https://my-store.myshopify.com");
/// ```
#[derive(Debug)]
pub struct HttpClient {
    client: reqwest::Client,
    base_uri: String,
    base_path: String,
    default_headers: HashMap<String, String>,
}

const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a client for the shop in `config`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the TLS backend cannot be initialized.
    pub fn new(base_path: impl Into<String>, config: &ShopifyConfig) -> Result<Self, HttpError> {
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent = format!(
            "{user_agent_prefix}Shopify REST Resources v{SDK_VERSION} | Rust {rust_version}"
        );

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());
        default_headers.insert(
            "X-Shopify-Access-Token".to_string(),
            config.access_token().as_ref().to_string(),
        );

        let mut builder = reqwest::Client::builder().use_rustls_tls();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            base_uri: config.origin(),
            base_path: base_path.into(),
            default_headers,
        })
    }

    /// The origin requests are sent to.
    #[must_use]
    pub fn base_uri(&self) -> &str {
        &self.base_uri
    }

    /// The path prefix, e.g. `/admin/api/2025-10`.
    #[must_use]
    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    /// Headers sent with every request.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Sends one request.
    ///
    /// # Errors
    ///
    /// - [`HttpError::InvalidRequest`] if the request fails verification
    /// - [`HttpError::Network`] on transport failure
    /// - [`HttpError::Response`] on any non-2xx status
    /// - [`HttpError::Decode`] when a 2xx body is not JSON
    pub async fn request(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        request.verify()?;

        let url = format!("{}{}/{}", self.base_uri, self.base_path, request.path);

        let mut builder = match request.http_method {
            HttpMethod::Get => self.client.get(&url),
            HttpMethod::Post => self.client.post(&url),
            HttpMethod::Put => self.client.put(&url),
            HttpMethod::Delete => self.client.delete(&url),
        };
        for (key, value) in &self.default_headers {
            builder = builder.header(key, value);
        }
        if let Some(query) = &request.query {
            builder = builder.query(query);
        }
        if let Some(body) = &request.body {
            builder = builder
                .header("Content-Type", "application/json")
                .body(body.to_string());
        }

        let res = builder.send().await?;

        let code = res.status().as_u16();
        let headers = Self::parse_response_headers(res.headers());
        let text = res.text().await?;

        tracing::debug!(
            method = %request.http_method,
            path = %request.path,
            status = code,
            "Shopify REST request completed"
        );

        let is_success = (200..=299).contains(&code);
        let body = match Self::parse_body(&text) {
            Ok(body) => body,
            Err(source) if is_success => return Err(HttpError::Decode { code, source }),
            Err(_) => serde_json::json!({ "raw_body": text }),
        };

        let response = HttpResponse::new(code, headers, body);

        if let Some(reason) = response.deprecation_reason() {
            tracing::warn!(
                "Deprecated request to Shopify API at {}, received reason: {}",
                request.path,
                reason
            );
        }

        if response.is_ok() {
            return Ok(response);
        }

        Err(HttpError::Response(HttpResponseError {
            code,
            message: Self::serialize_error(&response),
            error_reference: response.request_id().map(String::from),
            body: response.body,
        }))
    }

    fn parse_body(text: &str) -> Result<serde_json::Value, serde_json::Error> {
        if text.trim().is_empty() {
            Ok(serde_json::json!({}))
        } else {
            serde_json::from_str(text)
        }
    }

    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }

    /// Summarizes an error body as compact JSON.
    fn serialize_error(response: &HttpResponse) -> String {
        let mut error_body = serde_json::Map::new();

        for key in ["errors", "error", "error_description"] {
            if let Some(value) = response.body.get(key) {
                error_body.insert(key.to_string(), value.clone());
            }
        }

        if let Some(request_id) = response.request_id() {
            error_body.insert(
                "error_reference".to_string(),
                serde_json::json!(format!(
                    "If you report this error, please include this id: {request_id}."
                )),
            );
        }

        serde_json::Value::Object(error_body).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AccessToken, HostUrl, ShopDomain};
    use serde_json::json;

    fn create_test_config() -> ShopifyConfig {
        ShopifyConfig::builder()
            .shop(ShopDomain::new("test-shop").unwrap())
            .access_token(AccessToken::new("test-access-token").unwrap())
            .build()
            .unwrap()
    }

    #[test]
    fn test_client_construction() {
        let client = HttpClient::new("/admin/api/2025-10", &create_test_config()).unwrap();

        assert_eq!(client.base_uri(), "https://test-shop.myshopify.com");
        assert_eq!(client.base_path(), "/admin/api/2025-10");
    }

    #[test]
    fn test_default_headers() {
        let client = HttpClient::new("/admin/api/2025-10", &create_test_config()).unwrap();
        let headers = client.default_headers();

        assert_eq!(
            headers.get("X-Shopify-Access-Token"),
            Some(&"test-access-token".to_string())
        );
        assert_eq!(headers.get("Accept"), Some(&"application/json".to_string()));

        let user_agent = headers.get("User-Agent").unwrap();
        assert!(user_agent.contains("Shopify REST Resources v"));
        assert!(user_agent.contains("Rust"));
    }

    #[test]
    fn test_user_agent_with_prefix() {
        let config = ShopifyConfig::builder()
            .shop(ShopDomain::new("test-shop").unwrap())
            .access_token(AccessToken::new("token").unwrap())
            .user_agent_prefix("MyApp/1.0")
            .build()
            .unwrap();
        let client = HttpClient::new("/admin/api/2025-10", &config).unwrap();

        let user_agent = client.default_headers().get("User-Agent").unwrap();
        assert!(user_agent.starts_with("MyApp/1.0 | "));
    }

    #[test]
    fn test_base_url_override() {
        let config = ShopifyConfig::builder()
            .shop(ShopDomain::new("test-shop").unwrap())
            .access_token(AccessToken::new("token").unwrap())
            .base_url(HostUrl::new("http://127.0.0.1:4010/").unwrap())
            .build()
            .unwrap();
        let client = HttpClient::new("/admin/api/2025-10", &config).unwrap();

        assert_eq!(client.base_uri(), "http://127.0.0.1:4010");
    }

    #[test]
    fn test_parse_body_treats_empty_as_object() {
        assert_eq!(HttpClient::parse_body("").unwrap(), json!({}));
        assert_eq!(HttpClient::parse_body("  \n").unwrap(), json!({}));
        assert_eq!(HttpClient::parse_body(r#"{"count":3}"#).unwrap(), json!({"count": 3}));
        assert!(HttpClient::parse_body("<html>").is_err());
    }

    #[test]
    fn test_serialize_error_collects_known_fields() {
        let mut headers = HashMap::new();
        headers.insert("x-request-id".to_string(), vec!["req-42".to_string()]);
        let response = HttpResponse::new(
            422,
            headers,
            json!({"errors": {"title": ["can't be blank"]}, "ignored": true}),
        );

        let message = HttpClient::serialize_error(&response);
        let parsed: serde_json::Value = serde_json::from_str(&message).unwrap();

        assert_eq!(parsed["errors"]["title"][0], "can't be blank");
        assert!(parsed.get("ignored").is_none());
        assert!(parsed["error_reference"].as_str().unwrap().contains("req-42"));
    }
}
