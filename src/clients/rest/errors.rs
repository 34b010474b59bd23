//! REST-layer errors.

use crate::clients::HttpError;
use thiserror::Error;

/// Error type for [`RestClient`](super::RestClient) calls.
///
/// ```rust
/// use shopify_rest::RestError;
///
/// let error = RestError::InvalidPath { path: String::new() };
/// assert_eq!(error.to_string(), "Invalid REST API path: ");
/// ```
#[derive(Debug, Error)]
pub enum RestError {
    /// The path is empty after normalization.
    #[error("Invalid REST API path: {path}")]
    InvalidPath {
        /// The rejected path.
        path: String,
    },

    /// The HTTP layer failed.
    #[error(transparent)]
    Http(#[from] HttpError),
}

impl RestError {
    /// The HTTP status code, if a response was received.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Http(e) => e.status(),
            Self::InvalidPath { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::HttpResponseError;
    use serde_json::json;

    fn not_found() -> HttpError {
        HttpError::Response(HttpResponseError {
            code: 404,
            message: r#"{"errors":"Not Found"}"#.to_string(),
            body: json!({"errors": "Not Found"}),
            error_reference: Some("abc-123".to_string()),
        })
    }

    #[test]
    fn test_invalid_path_message_includes_path() {
        let error = RestError::InvalidPath {
            path: "/bad".to_string(),
        };
        assert_eq!(error.to_string(), "Invalid REST API path: /bad");
        assert_eq!(error.status(), None);
    }

    #[test]
    fn test_http_error_is_transparent() {
        let error: RestError = not_found().into();
        assert!(matches!(error, RestError::Http(_)));
        assert!(error.to_string().contains("Not Found"));
        assert_eq!(error.status(), Some(404));
    }
}
