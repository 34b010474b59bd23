//! PriceRule resource.
//!
//! A price rule holds the discount logic (value, targets, prerequisites and
//! entitlements) that discount codes point at. Discount values are signed:
//! `-10.0` is ten off.
//!
//! # Example
//!
//! ```rust,ignore
//! use rust_decimal::Decimal;
//! use shopify_rest::rest::resources::{
//!     PriceRule, PriceRuleAllocationMethod, PriceRuleCustomerSelection, PriceRuleTargetSelection,
//!     PriceRuleTargetType, PriceRuleValueType,
//! };
//!
//! let rule = PriceRule {
//!     title: Some("SUMMERSALE10OFF".to_string()),
//!     value_type: Some(PriceRuleValueType::FixedAmount),
//!     value: Some(Decimal::new(-100, 1)),
//!     customer_selection: Some(PriceRuleCustomerSelection::All),
//!     target_type: Some(PriceRuleTargetType::LineItem),
//!     target_selection: Some(PriceRuleTargetSelection::All),
//!     allocation_method: Some(PriceRuleAllocationMethod::Across),
//!     starts_at: Some(chrono::Utc::now()),
//!     ..Default::default()
//! };
//!
//! let saved = client.price_rules().create(&rule).await?;
//! println!("created price rule {:?}", saved.id);
//! ```

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::rest::{
    Countable, CountOptions, Creatable, Deletable, FieldsOptions, Findable, ListOptions, Listable,
    Resource, Updatable,
};

/// Whether `value` is an amount or a percentage.
///
/// Values this crate does not know are kept in `Unknown` and sent back
/// unchanged on update.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum PriceRuleValueType {
    FixedAmount,
    Percentage,
    #[serde(untagged)]
    Unknown(String),
}

/// Which customers the rule applies to.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum PriceRuleCustomerSelection {
    All,
    /// Only customers listed in `prerequisite_customer_ids` or matched by
    /// `prerequisite_saved_search_ids`.
    Prerequisite,
    #[serde(untagged)]
    Unknown(String),
}

/// What the discount is taken from.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum PriceRuleTargetType {
    LineItem,
    ShippingLine,
    #[serde(untagged)]
    Unknown(String),
}

/// Which targets the discount applies to.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum PriceRuleTargetSelection {
    All,
    /// Only the `entitled_*` products, variants, collections or countries.
    Entitled,
    #[serde(untagged)]
    Unknown(String),
}

/// How the value is spread over the targets.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum PriceRuleAllocationMethod {
    /// Applied to each entitled item.
    Each,
    /// Split across all entitled items.
    Across,
    #[serde(untagged)]
    Unknown(String),
}

/// An inclusive range a prerequisite must fall in.
///
/// Subtotal and shipping ranges are amounts; quantity ranges are whole
/// numbers sent the same way.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PrerequisiteRange {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub greater_than_or_equal_to: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub less_than_or_equal_to: Option<Decimal>,
}

/// Buy X get Y ratio.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PrerequisiteToEntitlementQuantityRatio {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prerequisite_quantity: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entitled_quantity: Option<u32>,
}

/// Discount logic shared by one or more discount codes.
///
/// `id`, `times_used`, `created_at`, `updated_at` and `admin_graphql_api_id`
/// are read only and never sent.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PriceRule {
    #[serde(skip_serializing)]
    pub id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_type: Option<PriceRuleValueType>,
    /// Negative for a discount, e.g. `-10.0`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_selection: Option<PriceRuleCustomerSelection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_type: Option<PriceRuleTargetType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_selection: Option<PriceRuleTargetSelection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allocation_method: Option<PriceRuleAllocationMethod>,
    /// Times the discount can be applied per order. Only meaningful for buy
    /// X get Y rules.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allocation_limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub once_per_customer: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage_limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub starts_at: Option<DateTime<Utc>>,
    /// `None` means the rule never expires.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ends_at: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub entitled_product_ids: Vec<u64>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub entitled_variant_ids: Vec<u64>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub entitled_collection_ids: Vec<u64>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub entitled_country_ids: Vec<u64>,

    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub prerequisite_product_ids: Vec<u64>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub prerequisite_variant_ids: Vec<u64>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub prerequisite_collection_ids: Vec<u64>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub prerequisite_saved_search_ids: Vec<u64>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub prerequisite_customer_ids: Vec<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prerequisite_subtotal_range: Option<PrerequisiteRange>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prerequisite_quantity_range: Option<PrerequisiteRange>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prerequisite_shipping_price_range: Option<PrerequisiteRange>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prerequisite_to_entitlement_quantity_ratio: Option<PrerequisiteToEntitlementQuantityRatio>,

    #[serde(skip_serializing)]
    pub times_used: Option<u64>,
    #[serde(skip_serializing)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing)]
    pub admin_graphql_api_id: Option<String>,
}

impl Resource for PriceRule {
    type Id = u64;

    const NAME: &'static str = "PriceRule";
    const KEY: &'static str = "price_rule";
    const PLURAL: &'static str = "price_rules";
    const PATH: &'static str = "price_rules";

    fn id(&self) -> Option<u64> {
        self.id
    }
}

/// Filters for listing price rules.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRuleListOptions {
    #[serde(flatten)]
    pub list: ListOptions,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub starts_at_min: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub starts_at_max: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ends_at_min: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ends_at_max: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub times_used: Option<u64>,
}

impl Findable for PriceRule {
    type FindParams = FieldsOptions;
}

impl Listable for PriceRule {
    type ListParams = PriceRuleListOptions;
}

impl Countable for PriceRule {
    type CountParams = CountOptions;
}

impl Creatable for PriceRule {}

impl Updatable for PriceRule {}

impl Deletable for PriceRule {}
