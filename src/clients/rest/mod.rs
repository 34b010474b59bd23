//! Admin REST API client.
//!
//! [`RestClient`] wraps [`HttpClient`](crate::clients::HttpClient) with the
//! versioned base path `/admin/api/{version}` and four verb methods.
//!
//! # Path Normalization
//!
//! - Leading slashes are stripped: `/shop` -> `shop.json`
//! - `.json` is appended exactly once: `shop.json` -> `shop.json`
//! - Empty paths are rejected with [`RestError::InvalidPath`]
//!
//! # Example
//!
//! ```rust,ignore
//! use shopify_rest::{AccessToken, RestClient, ShopDomain, ShopifyConfig};
//!
//! let config = ShopifyConfig::builder()
//!     .shop(ShopDomain::new("my-store").unwrap())
//!     .access_token(AccessToken::new("shpat_123").unwrap())
//!     .build()?;
//!
//! let client = RestClient::new(&config)?;
//! let response = client.get("shop", None).await?;
//! println!("{}", response.body["shop"]["name"]);
//! ```

mod client;
mod errors;

pub use client::RestClient;
pub use errors::RestError;
