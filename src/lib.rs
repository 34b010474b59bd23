//! # Shopify Admin REST resources
//!
//! Typed services for the Shopify Admin REST API: the shop and its shipping
//! zones, price rules, metafields and collection listings.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`ShopifyConfig`] and [`ShopifyConfigBuilder`]
//! - Validated newtypes for the shop domain, access token and base URL
//! - An async HTTP transport that decodes pagination and rate-limit headers
//! - Serde resource types mirroring the API's JSON, with exact decimals for money
//! - One service per resource exposing only the operations the API supports
//!
//! ## Quick Start
//!
//! ```rust
//! use shopify_rest::{AccessToken, ApiVersion, ShopDomain, ShopifyClient, ShopifyConfig};
//!
//! let config = ShopifyConfig::builder()
//!     .shop(ShopDomain::new("my-store").unwrap())
//!     .access_token(AccessToken::new("shpat_example").unwrap())
//!     .api_version(ApiVersion::latest())
//!     .build()
//!     .unwrap();
//!
//! let client = ShopifyClient::new(&config).unwrap();
//! ```
//!
//! ## Making API Requests
//!
//! ```rust,ignore
//! use shopify_rest::rest::CountOptions;
//! use shopify_rest::rest::resources::{Metafield, MetafieldOwner};
//!
//! let shop = client.shop().get(None).await?;
//! println!("{:?}", shop.name);
//!
//! let rules = client.price_rules().list(None).await?;
//! for rule in rules.iter() {
//!     println!("{:?}: {:?}", rule.title, rule.value);
//! }
//!
//! let product_fields = client.metafields_for(MetafieldOwner::Product, 632_910_392);
//! let total = product_fields.count(None).await?;
//! ```
//!
//! ## Errors
//!
//! Each layer has its own error type: [`ConfigError`] for configuration,
//! [`HttpError`] for transport and status failures, [`RestError`] for path
//! problems and [`ResourceError`](rest::ResourceError) for resource-level
//! failures such as not found (404) or validation (422). Nothing is retried.
//!
//! ## Design Principles
//!
//! - **No global state**: the client is built from a configuration and passed explicitly
//! - **Fail-fast validation**: all newtypes validate on construction
//! - **Thread-safe**: clients and services are `Send + Sync` and cheap to clone
//! - **One request per call**: services keep no state between calls

mod client;
pub mod clients;
pub mod config;
pub mod error;
pub mod rest;

pub use client::ShopifyClient;
pub use config::{
    AccessToken, ApiVersion, HostUrl, ShopDomain, ShopifyConfig, ShopifyConfigBuilder,
};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{
    ApiCallLimit, HttpError, HttpMethod, HttpResponseError, PaginationInfo, RestClient, RestError,
};

// Re-export resource layer types
pub use rest::{ResourceError, ResourceResponse, ResourceService};
