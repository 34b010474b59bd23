//! Admin REST resources.
//!
//! | Resource              | get | list | count | create | update | delete |
//! |-----------------------|-----|------|-------|--------|--------|--------|
//! | [`Shop`]              | yes |      |       |        |        |        |
//! | [`ShippingZone`]      |     | yes  |       |        |        |        |
//! | [`PriceRule`]         | yes | yes  | yes   | yes    | yes    | yes    |
//! | [`Metafield`]         | yes | yes  | yes   | yes    | yes    | yes    |
//! | [`CollectionListing`] | yes | yes  |       |        |        |        |
//!
//! Shop and its shipping zones are read through [`ShopService`]. Metafields
//! can be scoped to an owner with [`MetafieldOwner`]; collection listings also
//! expose their product ids.

mod collection_listing;
mod metafield;
mod price_rule;
mod shipping_zone;
mod shop;

pub use collection_listing::{CollectionImage, CollectionListing};
pub use metafield::{Metafield, MetafieldCountOptions, MetafieldListOptions, MetafieldOwner};
pub use price_rule::{
    PrerequisiteRange, PrerequisiteToEntitlementQuantityRatio, PriceRule,
    PriceRuleAllocationMethod, PriceRuleCustomerSelection, PriceRuleListOptions,
    PriceRuleTargetSelection, PriceRuleTargetType, PriceRuleValueType,
};
pub use shipping_zone::{
    PriceBasedShippingRate, ShippingCountry, ShippingProvince, ShippingZone,
    ShippingZoneListOptions, WeightBasedShippingRate,
};
pub use shop::{Shop, ShopService};
