//! Metafield resource.
//!
//! Metafields attach namespaced custom data to the shop or to another
//! resource. Shop-level metafields live at `metafields`; owned ones are
//! nested under the owner, e.g. `products/632910392/metafields`.
//!
//! # Example
//!
//! ```rust,ignore
//! use shopify_rest::rest::resources::{Metafield, MetafieldListOptions, MetafieldOwner};
//!
//! let product_fields = client.metafields_for(MetafieldOwner::Product, 632_910_392);
//!
//! let options = MetafieldListOptions {
//!     namespace: Some("inventory".to_string()),
//!     ..Default::default()
//! };
//! for field in product_fields.list(Some(&options)).await?.iter() {
//!     println!("{:?}.{:?} = {:?}", field.namespace, field.key, field.value);
//! }
//!
//! let created = client
//!     .metafields()
//!     .create(&Metafield {
//!         namespace: Some("inventory".to_string()),
//!         key: Some("warehouse".to_string()),
//!         value: Some(25.into()),
//!         metafield_type: Some("number_integer".to_string()),
//!         ..Default::default()
//!     })
//!     .await?;
//! ```

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::rest::{
    Countable, CountOptions, Creatable, Deletable, FieldsOptions, Findable, ListOptions, Listable,
    Resource, Updatable,
};

/// A piece of namespaced custom data.
///
/// `value` is kept as raw JSON: depending on `type` the API returns a
/// string, a number or a JSON document.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Metafield {
    #[serde(skip_serializing)]
    pub id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<serde_json::Value>,
    /// Content type such as `single_line_text_field` or `number_integer`.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub metafield_type: Option<String>,
    /// Pre-2021 type name (`string`, `integer`, `json_string`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<u64>,
    /// Owner kind in singular form, e.g. `product` or `shop`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_resource: Option<String>,
    #[serde(skip_serializing)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing)]
    pub admin_graphql_api_id: Option<String>,
}

impl Resource for Metafield {
    type Id = u64;

    const NAME: &'static str = "Metafield";
    const KEY: &'static str = "metafield";
    const PLURAL: &'static str = "metafields";
    const PATH: &'static str = "metafields";

    fn id(&self) -> Option<u64> {
        self.id
    }
}

/// The kind of resource a metafield belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetafieldOwner {
    /// Global metafields, not nested under any path.
    Shop,
    Product,
    Variant,
    Customer,
    Order,
    /// Custom or smart collection.
    Collection,
    Page,
    Blog,
    Article,
}

impl MetafieldOwner {
    /// Collection path of the owner, empty for [`MetafieldOwner::Shop`].
    ///
    /// ```rust
    /// use shopify_rest::rest::resources::MetafieldOwner;
    ///
    /// assert_eq!(MetafieldOwner::Variant.path_segment(), "variants");
    /// assert_eq!(MetafieldOwner::Shop.path_segment(), "");
    /// ```
    #[must_use]
    pub const fn path_segment(self) -> &'static str {
        match self {
            Self::Shop => "",
            Self::Product => "products",
            Self::Variant => "variants",
            Self::Customer => "customers",
            Self::Order => "orders",
            Self::Collection => "collections",
            Self::Page => "pages",
            Self::Blog => "blogs",
            Self::Article => "articles",
        }
    }

    /// Path prefix for metafields of the owner `owner_id`, `None` for the shop.
    #[must_use]
    pub fn prefix(self, owner_id: u64) -> Option<String> {
        match self {
            Self::Shop => None,
            owner => Some(format!("{}/{owner_id}", owner.path_segment())),
        }
    }
}

impl fmt::Display for MetafieldOwner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Shop => "shop",
            Self::Product => "product",
            Self::Variant => "variant",
            Self::Customer => "customer",
            Self::Order => "order",
            Self::Collection => "collection",
            Self::Page => "page",
            Self::Blog => "blog",
            Self::Article => "article",
        };
        f.write_str(name)
    }
}

/// Filters for listing metafields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetafieldListOptions {
    #[serde(flatten)]
    pub list: ListOptions,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub metafield_type: Option<String>,
}

/// Filters for counting metafields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetafieldCountOptions {
    #[serde(flatten)]
    pub count: CountOptions,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
}

impl Findable for Metafield {
    type FindParams = FieldsOptions;
}

impl Listable for Metafield {
    type ListParams = MetafieldListOptions;
}

impl Countable for Metafield {
    type CountParams = MetafieldCountOptions;
}

impl Creatable for Metafield {}

impl Updatable for Metafield {}

impl Deletable for Metafield {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rest::serialize_to_query;
    use serde_json::json;

    #[test]
    fn test_default_metafield_serializes_to_empty_object() {
        assert_eq!(
            serde_json::to_value(Metafield::default()).unwrap(),
            json!({})
        );
    }

    #[test]
    fn test_type_is_renamed_and_read_only_fields_dropped() {
        let metafield = Metafield {
            id: Some(1),
            namespace: Some("inventory".to_string()),
            key: Some("warehouse".to_string()),
            value: Some(json!(25)),
            metafield_type: Some("number_integer".to_string()),
            admin_graphql_api_id: Some("gid://shopify/Metafield/1".to_string()),
            ..Default::default()
        };

        let value = serde_json::to_value(&metafield).unwrap();
        assert_eq!(
            value,
            json!({
                "namespace": "inventory",
                "key": "warehouse",
                "value": 25,
                "type": "number_integer"
            })
        );
    }

    #[test]
    fn test_value_keeps_its_json_shape() {
        let metafield: Metafield = serde_json::from_value(json!({
            "id": 721389482,
            "value": "{\"a\":1}",
            "type": "json",
            "owner_resource": "shop",
            "created_at": "2024-01-01T10:00:00-05:00"
        }))
        .unwrap();

        assert_eq!(metafield.value, Some(json!("{\"a\":1}")));
        assert_eq!(metafield.metafield_type.as_deref(), Some("json"));
        assert_eq!(metafield.owner_resource.as_deref(), Some("shop"));
        assert!(metafield.created_at.is_some());
    }

    #[test]
    fn test_owner_prefixes() {
        assert_eq!(
            MetafieldOwner::Product.prefix(632_910_392).as_deref(),
            Some("products/632910392")
        );
        assert_eq!(
            MetafieldOwner::Article.prefix(1).as_deref(),
            Some("articles/1")
        );
        assert!(MetafieldOwner::Shop.prefix(1).is_none());
        assert_eq!(MetafieldOwner::Collection.to_string(), "collection");
    }

    #[test]
    fn test_filters_render_as_query() {
        let options = MetafieldListOptions {
            namespace: Some("inventory".to_string()),
            metafield_type: Some("number_integer".to_string()),
            ..Default::default()
        };
        let query = serialize_to_query(&options).unwrap();
        assert_eq!(query.len(), 2);
        assert_eq!(query.get("namespace").unwrap(), "inventory");
        assert_eq!(query.get("type").unwrap(), "number_integer");

        let count = MetafieldCountOptions {
            key: Some("warehouse".to_string()),
            ..Default::default()
        };
        let query = serialize_to_query(&count).unwrap();
        assert_eq!(query.get("key").unwrap(), "warehouse");
        assert_eq!(query.len(), 1);
    }
}
