//! Shop resource and service.
//!
//! The shop is a singleton: it is read with `GET shop.json` and has no
//! list, count or write operations. Its shipping zones are read through the
//! same service.
//!
//! # Example
//!
//! ```rust,ignore
//! let shop = client.shop().get(None).await?;
//! println!("{:?} ({:?})", shop.name, shop.currency);
//!
//! for zone in client.shop().shipping_zones(None).await?.iter() {
//!     println!("{:?}: {} countries", zone.name, zone.countries.len());
//! }
//! ```

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::RestClient;
use crate::rest::options::optional_query;
use crate::rest::resources::shipping_zone::{ShippingZone, ShippingZoneListOptions};
use crate::rest::{FieldsOptions, Resource, ResourceError, ResourceResponse, ResourceService};

/// Store settings and contact details.
///
/// Every field is optional; `fields` filtering and API version changes can
/// drop any of them from a response.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Shop {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shop_owner: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub address1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address2: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub province: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub province_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zip: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,

    /// ISO 4217 code of the shop's default currency.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub enabled_presentment_currencies: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub money_format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub money_with_currency_format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub money_in_emails_format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub money_with_currency_in_emails_format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight_unit: Option<String>,

    /// The shop's primary domain.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub myshopify_domain: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan_display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_locale: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_location_id: Option<u64>,
    /// Display timezone, e.g. `(GMT-05:00) Eastern Time (US & Canada)`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iana_timezone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub google_apps_domain: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub password_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub force_ssl: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_shipping: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub taxes_included: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub county_taxes: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_storefront: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_discounts: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_gift_cards: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub setup_required: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checkout_api_supported: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub google_apps_login_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eligible_for_payments: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requires_extra_payments_agreement: Option<bool>,
}

impl Resource for Shop {
    type Id = u64;

    const NAME: &'static str = "Shop";
    const KEY: &'static str = "shop";
    const PLURAL: &'static str = "shop";
    const PATH: &'static str = "shop";

    fn id(&self) -> Option<u64> {
        self.id
    }
}

/// Read access to the shop singleton and its shipping zones.
#[derive(Debug, Clone)]
pub struct ShopService {
    shop: ResourceService<Shop>,
    shipping_zones: ResourceService<ShippingZone>,
}

impl ShopService {
    /// Creates the service.
    #[must_use]
    pub fn new(client: Arc<RestClient>) -> Self {
        Self {
            shipping_zones: ResourceService::new(Arc::clone(&client)),
            shop: ResourceService::new(client),
        }
    }

    /// Fetches the shop.
    ///
    /// # Errors
    ///
    /// Returns any transport or decode error.
    pub async fn get(
        &self,
        options: Option<&FieldsOptions>,
    ) -> Result<ResourceResponse<Shop>, ResourceError> {
        let query = optional_query(options)?;
        self.shop.fetch(Shop::PATH, Shop::KEY, query, None).await
    }

    /// Lists the shop's shipping zones.
    ///
    /// # Errors
    ///
    /// Returns any transport or decode error.
    pub async fn shipping_zones(
        &self,
        options: Option<&ShippingZoneListOptions>,
    ) -> Result<ResourceResponse<Vec<ShippingZone>>, ResourceError> {
        self.shipping_zones.list(options).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_default_shop_serializes_to_empty_object() {
        assert_eq!(serde_json::to_value(Shop::default()).unwrap(), json!({}));
    }

    #[test]
    fn test_shop_deserializes_partial_payload() {
        let shop: Shop = serde_json::from_value(json!({
            "id": 690933842,
            "name": "Apple Computers",
            "currency": "USD",
            "latitude": 45.45,
            "taxes_included": false,
            "created_at": "2007-12-31T19:00:00-05:00",
            "enabled_presentment_currencies": ["USD", "EUR"],
            "some_future_field": {"ignored": true}
        }))
        .unwrap();

        assert_eq!(shop.id, Some(690_933_842));
        assert_eq!(shop.name.as_deref(), Some("Apple Computers"));
        assert_eq!(shop.latitude, Some(45.45));
        assert_eq!(shop.taxes_included, Some(false));
        assert_eq!(
            shop.created_at.unwrap().to_rfc3339(),
            "2008-01-01T00:00:00+00:00"
        );
        assert_eq!(shop.enabled_presentment_currencies, vec!["USD", "EUR"]);
        assert!(shop.email.is_none());
    }

    #[test]
    fn test_shop_resource_constants() {
        assert_eq!(Shop::KEY, "shop");
        assert_eq!(Shop::PATH, "shop");
        assert_eq!(Shop { id: Some(1), ..Default::default() }.id(), Some(1));
    }
}
