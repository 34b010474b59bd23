//! Resource-level errors.
//!
//! HTTP statuses that carry meaning for a resource are lifted out of the
//! transport error:
//!
//! - **404**: [`ResourceError::NotFound`]
//! - **422**: [`ResourceError::ValidationFailed`], with field-level messages
//! - **anything else**: [`ResourceError::Rest`], wrapping the original error
//!
//! # Example
//!
//! ```rust,ignore
//! use shopify_rest::rest::ResourceError;
//!
//! match client.price_rules().get(507328175, None).await {
//!     Ok(rule) => println!("{:?}", rule.title),
//!     Err(ResourceError::NotFound { resource, id }) => println!("no {resource} {id}"),
//!     Err(ResourceError::ValidationFailed { errors, .. }) => {
//!         for (field, messages) in errors {
//!             println!("{field}: {messages:?}");
//!         }
//!     }
//!     Err(e) => println!("{e}"),
//! }
//! ```

use std::collections::HashMap;

use crate::clients::{HttpError, RestError};
use thiserror::Error;

/// Error type for resource operations.
///
/// ```rust
/// use shopify_rest::rest::ResourceError;
///
/// let error = ResourceError::NotFound {
///     resource: "PriceRule",
///     id: "123".to_string(),
/// };
/// assert_eq!(error.to_string(), "PriceRule with id 123 not found");
/// ```
#[derive(Debug, Error)]
pub enum ResourceError {
    /// The resource does not exist (HTTP 404).
    #[error("{resource} with id {id} not found")]
    NotFound {
        /// Resource type name.
        resource: &'static str,
        /// The requested id, or `unknown` for collection paths.
        id: String,
    },

    /// The API rejected the payload (HTTP 422).
    #[error("Validation failed: {errors:?}")]
    ValidationFailed {
        /// Field name to messages. Unkeyed messages are stored under `base`.
        errors: HashMap<String, Vec<String>>,
        /// `X-Request-Id` of the failed request.
        request_id: Option<String>,
    },

    /// The operation needs an id the caller did not provide.
    #[error("Cannot {operation} {resource} without an id")]
    MissingId {
        /// Resource type name.
        resource: &'static str,
        /// The attempted operation.
        operation: &'static str,
    },

    /// The response body lacks the expected envelope key.
    #[error("Missing key '{key}' in {resource} response body")]
    MissingEnvelopeKey {
        /// Resource type name.
        resource: &'static str,
        /// The expected top-level key.
        key: String,
    },

    /// The enveloped value does not match the resource schema.
    #[error("Failed to decode {resource}: {source}")]
    Decode {
        /// Resource type name.
        resource: &'static str,
        /// The serde failure.
        #[source]
        source: serde_json::Error,
    },

    /// The resource could not be encoded as a request body.
    #[error("Failed to encode {resource}: {source}")]
    Encode {
        /// Resource type name.
        resource: &'static str,
        /// The serde failure.
        #[source]
        source: serde_json::Error,
    },

    /// Options did not serialize to a flat query string.
    #[error("Invalid query options: {message}")]
    InvalidOptions {
        /// What went wrong.
        message: String,
    },

    /// A transport-level error.
    #[error(transparent)]
    Http(#[from] HttpError),

    /// A REST-client error without resource meaning.
    #[error(transparent)]
    Rest(#[from] RestError),
}

impl ResourceError {
    /// Lifts 404 and 422 responses out of a [`RestError`].
    ///
    /// ```rust
    /// use shopify_rest::clients::{HttpError, HttpResponseError};
    /// use shopify_rest::rest::ResourceError;
    /// use shopify_rest::RestError;
    /// use serde_json::json;
    ///
    /// let error = RestError::Http(HttpError::Response(HttpResponseError {
    ///     code: 404,
    ///     message: r#"{"errors":"Not Found"}"#.to_string(),
    ///     body: json!({"errors": "Not Found"}),
    ///     error_reference: None,
    /// }));
    ///
    /// let error = ResourceError::from_rest_error(error, "Metafield", Some("1"));
    /// assert!(matches!(error, ResourceError::NotFound { resource: "Metafield", .. }));
    /// ```
    #[must_use]
    pub fn from_rest_error(error: RestError, resource: &'static str, id: Option<&str>) -> Self {
        match error {
            RestError::Http(HttpError::Response(response)) => match response.code {
                404 => Self::NotFound {
                    resource,
                    id: id.unwrap_or("unknown").to_string(),
                },
                422 => Self::ValidationFailed {
                    errors: parse_validation_errors(&response.body),
                    request_id: response.error_reference,
                },
                _ => Self::Rest(RestError::Http(HttpError::Response(response))),
            },
            other => Self::Rest(other),
        }
    }

    /// The `X-Request-Id` of the failed request, if known.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        match self {
            Self::ValidationFailed { request_id, .. } => request_id.as_deref(),
            Self::Http(HttpError::Response(e)) | Self::Rest(RestError::Http(HttpError::Response(e))) => {
                e.error_reference.as_deref()
            }
            _ => None,
        }
    }

    /// The HTTP status code, if the error came from a response.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::NotFound { .. } => Some(404),
            Self::ValidationFailed { .. } => Some(422),
            Self::Http(e) => e.status(),
            Self::Rest(e) => e.status(),
            _ => None,
        }
    }
}

/// Reads `errors` in any of the shapes the API uses.
///
/// ```json
/// {"errors": {"title": ["can't be blank"]}}
/// {"errors": ["Title can't be blank"]}
/// {"errors": "Not Found"}
/// ```
fn parse_validation_errors(body: &serde_json::Value) -> HashMap<String, Vec<String>> {
    use serde_json::Value;

    fn messages(value: &Value) -> Vec<String> {
        match value {
            Value::Array(items) => items
                .iter()
                .map(|v| v.as_str().map_or_else(|| v.to_string(), ToString::to_string))
                .collect(),
            Value::String(s) => vec![s.clone()],
            other => vec![other.to_string()],
        }
    }

    let mut result = HashMap::new();
    match body.get("errors") {
        Some(Value::Object(map)) => {
            for (field, value) in map {
                result.insert(field.clone(), messages(value));
            }
        }
        Some(value @ (Value::Array(_) | Value::String(_))) => {
            let base = messages(value);
            if !base.is_empty() {
                result.insert("base".to_string(), base);
            }
        }
        _ => {}
    }
    result
}

const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ResourceError>();
};
