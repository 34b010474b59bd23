//! Configuration errors.
//!
//! Every validated newtype and the [`ShopifyConfigBuilder`](crate::ShopifyConfigBuilder)
//! report problems through [`ConfigError`], so a misconfigured client fails
//! at construction instead of on the first request.
//!
//! # Example
//!
//! ```rust
//! use shopify_rest::{AccessToken, ConfigError};
//!
//! let result = AccessToken::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyAccessToken)));
//! ```

use thiserror::Error;

/// Errors raised while building a client configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The access token was empty.
    #[error("Access token cannot be empty. Please provide an Admin API access token.")]
    EmptyAccessToken,

    /// The shop domain is not a `*.myshopify.com` domain or bare shop name.
    #[error("Invalid shop domain '{domain}'. Expected format: 'shop-name' or 'shop-name.myshopify.com'.")]
    InvalidShopDomain {
        /// The rejected domain.
        domain: String,
    },

    /// The API version string could not be parsed.
    #[error("Invalid API version '{version}'. Expected format: 'YYYY-MM' with a quarterly month (01, 04, 07, 10) or 'unstable'.")]
    InvalidApiVersion {
        /// The rejected version string.
        version: String,
    },

    /// A base URL override was malformed.
    #[error("Invalid base URL '{url}'. Please provide a URL with scheme and host (e.g., 'https://proxy.example.com').")]
    InvalidHostUrl {
        /// The rejected URL.
        url: String,
    },

    /// A required builder field was never set.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// Name of the missing field.
        field: &'static str,
    },
}
