//! Shipping zones, read through the shop service.
//!
//! Tax rates, prices and subtotals are exact decimals; weights stay floating
//! point.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::rest::{FieldsOptions, Listable, Resource};

/// A set of countries or regions sharing the same shipping rates.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ShippingZone {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Global id of the delivery profile, e.g. `gid://shopify/DeliveryProfile/1`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_group_id: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub countries: Vec<ShippingCountry>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub provinces: Vec<ShippingProvince>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub price_based_shipping_rates: Vec<PriceBasedShippingRate>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub weight_based_shipping_rates: Vec<WeightBasedShippingRate>,
}

/// A country within a shipping zone.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShippingCountry {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_zone_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Country-level tax rate as a fraction, e.g. `0.2`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax: Option<Decimal>,
    /// ISO 3166-1 alpha-2 code, or `*` for rest of world.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_name: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub provinces: Vec<ShippingProvince>,
}

/// A province or state within a shipping country.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShippingProvince {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_zone_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_name: Option<String>,
    /// `normal`, `harmonized` or `compounded`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_percentage: Option<Decimal>,
}

/// A rate applied when the order subtotal falls in a range.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PriceBasedShippingRate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_zone_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_order_subtotal: Option<Decimal>,
    /// `None` means no upper bound.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_order_subtotal: Option<Decimal>,
}

/// A rate applied when the order weight falls in a range.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct WeightBasedShippingRate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_zone_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight_low: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight_high: Option<f64>,
}

/// Query options for listing shipping zones.
pub type ShippingZoneListOptions = FieldsOptions;

impl Resource for ShippingZone {
    type Id = u64;

    const NAME: &'static str = "ShippingZone";
    const KEY: &'static str = "shipping_zone";
    const PLURAL: &'static str = "shipping_zones";
    const PATH: &'static str = "shipping_zones";

    fn id(&self) -> Option<u64> {
        self.id
    }
}

impl Listable for ShippingZone {
    type ListParams = ShippingZoneListOptions;
}
