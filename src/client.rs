//! Entry point handing out resource services for one shop.

use std::sync::Arc;

use crate::clients::{RestClient, RestError};
use crate::config::{ApiVersion, ShopifyConfig};
use crate::rest::resources::{CollectionListing, Metafield, MetafieldOwner, PriceRule, ShopService};
use crate::rest::ResourceService;

/// Admin REST client for one shop.
///
/// Every service it returns shares the same [`RestClient`] and therefore the
/// same connection pool. Cloning is cheap.
///
/// ```rust
/// use shopify_rest::{AccessToken, ShopDomain, ShopifyClient, ShopifyConfig};
///
/// let config = ShopifyConfig::builder()
///     .shop(ShopDomain::new("my-store").unwrap())
///     .access_token(AccessToken::new("shpat_example").unwrap())
///     .build()
///     .unwrap();
///
/// let client = ShopifyClient::new(&config).unwrap();
/// let rules = client.price_rules();
/// assert!(rules.prefix().is_none());
/// ```
#[derive(Debug, Clone)]
pub struct ShopifyClient {
    rest: Arc<RestClient>,
}

const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ShopifyClient>();
};

impl ShopifyClient {
    /// Creates a client for the configured shop and API version.
    ///
    /// # Errors
    ///
    /// Returns [`RestError`] if the HTTP client cannot be built.
    pub fn new(config: &ShopifyConfig) -> Result<Self, RestError> {
        Ok(Self::from_rest_client(RestClient::new(config)?))
    }

    /// Creates a client pinned to `version` instead of the configured one.
    ///
    /// # Errors
    ///
    /// Returns [`RestError`] if the HTTP client cannot be built.
    pub fn with_version(config: &ShopifyConfig, version: ApiVersion) -> Result<Self, RestError> {
        Ok(Self::from_rest_client(RestClient::with_version(
            config, version,
        )?))
    }

    /// Wraps an existing REST client.
    #[must_use]
    pub fn from_rest_client(rest: RestClient) -> Self {
        Self {
            rest: Arc::new(rest),
        }
    }

    /// The shared REST client, for endpoints without a typed service.
    #[must_use]
    pub const fn rest(&self) -> &Arc<RestClient> {
        &self.rest
    }

    /// The shop and its shipping zones.
    #[must_use]
    pub fn shop(&self) -> ShopService {
        ShopService::new(Arc::clone(&self.rest))
    }

    /// Price rules.
    #[must_use]
    pub fn price_rules(&self) -> ResourceService<PriceRule> {
        ResourceService::new(Arc::clone(&self.rest))
    }

    /// Shop-level metafields.
    #[must_use]
    pub fn metafields(&self) -> ResourceService<Metafield> {
        ResourceService::new(Arc::clone(&self.rest))
    }

    /// Metafields of one owner, e.g. a product.
    ///
    /// [`MetafieldOwner::Shop`] yields the same service as [`Self::metafields`].
    #[must_use]
    pub fn metafields_for(&self, owner: MetafieldOwner, owner_id: u64) -> ResourceService<Metafield> {
        let client = Arc::clone(&self.rest);
        match owner.prefix(owner_id) {
            Some(prefix) => ResourceService::with_prefix(client, prefix),
            None => ResourceService::new(client),
        }
    }

    /// Collections published to the app's sales channel.
    #[must_use]
    pub fn collection_listings(&self) -> ResourceService<CollectionListing> {
        ResourceService::new(Arc::clone(&self.rest))
    }
}
