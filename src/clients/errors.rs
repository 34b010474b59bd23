//! HTTP-level error types.
//!
//! - [`HttpResponseError`]: the server answered with a non-2xx status
//! - [`InvalidHttpRequestError`]: a request failed validation before sending
//! - [`HttpError`]: the unified error returned by [`HttpClient`](crate::clients::HttpClient)
//!
//! # Example
//!
//! ```rust,ignore
//! use shopify_rest::clients::HttpError;
//!
//! match client.request(request).await {
//!     Ok(response) => println!("{}", response.body),
//!     Err(HttpError::Response(e)) => println!("API error {}: {}", e.code, e.message),
//!     Err(HttpError::Decode { code, .. }) => println!("status {code} with a non-JSON body"),
//!     Err(HttpError::InvalidRequest(e)) => println!("Invalid request: {e}"),
//!     Err(HttpError::Network(e)) => println!("Network error: {e}"),
//! }
//! ```

use thiserror::Error;

/// A non-2xx response from the API.
///
/// `message` is a compact JSON object holding the `errors`, `error` and
/// `error_description` fields of the response plus an `error_reference`
/// built from `X-Request-Id`. `body` is the full decoded response body, so
/// higher layers can read field-level validation errors.
///
/// ```rust
/// use shopify_rest::clients::HttpResponseError;
/// use serde_json::json;
///
/// let error = HttpResponseError {
///     code: 404,
///     message: r#"{"errors":"Not Found"}"#.to_string(),
///     body: json!({"errors": "Not Found"}),
///     error_reference: Some("abc-123".to_string()),
/// };
/// assert_eq!(error.to_string(), r#"{"errors":"Not Found"}"#);
/// ```
#[derive(Debug, Error)]
#[error("{message}")]
pub struct HttpResponseError {
    /// The HTTP status code.
    pub code: u16,
    /// Serialized error summary in JSON format.
    pub message: String,
    /// The decoded response body. Non-JSON bodies are wrapped as `{"raw_body": "..."}`.
    pub body: serde_json::Value,
    /// The `X-Request-Id` of the failed request, if the server sent one.
    pub error_reference: Option<String>,
}

/// A request that cannot be sent as built.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// A POST or PUT request was built without a body.
    #[error("Cannot use {method} without specifying data.")]
    MissingBody {
        /// The HTTP method that requires a body.
        method: String,
    },

    /// A GET or DELETE request was built with a body.
    #[error("Cannot send a body with {method}.")]
    UnexpectedBody {
        /// The HTTP method that must not carry a body.
        method: String,
    },
}

/// Unified error type for HTTP operations.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Non-2xx status code.
    #[error(transparent)]
    Response(#[from] HttpResponseError),

    /// Request validation failed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// A 2xx response whose body is not JSON.
    #[error("Response with status {code} is not valid JSON: {source}")]
    Decode {
        /// The HTTP status code.
        code: u16,
        /// The JSON parse failure.
        #[source]
        source: serde_json::Error,
    },

    /// Transport failure: connection, TLS, timeout.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl HttpError {
    /// The HTTP status code, if a response was received.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Response(e) => Some(e.code),
            Self::Decode { code, .. } => Some(*code),
            Self::InvalidRequest(_) | Self::Network(_) => None,
        }
    }
}
