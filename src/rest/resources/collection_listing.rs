//! CollectionListing resource.
//!
//! Collections published to the calling app's sales channel. Listings are
//! read only and identified by `collection_id`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::rest::options::optional_query;
use crate::rest::{
    FieldsOptions, Findable, ListOptions, Listable, Resource, ResourceError, ResourceResponse,
    ResourceService,
};

/// An image attached to a collection listing.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CollectionImage {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub src: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

/// A collection as seen by a sales channel.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CollectionListing {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collection_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_html: Option<String>,
    /// Image of the first product in the collection. Accepted as a single
    /// object or a list.
    #[serde(
        skip_serializing_if = "Vec::is_empty",
        default,
        deserialize_with = "one_or_many"
    )]
    pub default_product_image: Vec<CollectionImage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<CollectionImage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub handle: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// e.g. `manual`, `best-selling`, `price-ascending`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

fn one_or_many<'de, D>(deserializer: D) -> Result<Vec<CollectionImage>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        Many(Vec<CollectionImage>),
        One(CollectionImage),
    }

    Ok(match Option::<OneOrMany>::deserialize(deserializer)? {
        None => Vec::new(),
        Some(OneOrMany::One(image)) => vec![image],
        Some(OneOrMany::Many(images)) => images,
    })
}

impl Resource for CollectionListing {
    type Id = u64;

    const NAME: &'static str = "CollectionListing";
    const KEY: &'static str = "collection_listing";
    const PLURAL: &'static str = "collection_listings";
    const PATH: &'static str = "collection_listings";

    fn id(&self) -> Option<u64> {
        self.collection_id
    }
}

impl Findable for CollectionListing {
    type FindParams = FieldsOptions;
}

impl Listable for CollectionListing {
    type ListParams = ListOptions;
}

impl ResourceService<CollectionListing> {
    /// Lists the ids of products in a published collection, in the
    /// collection's sort order.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if the collection is not published
    /// to the channel, or any transport or decode error.
    pub async fn product_ids(
        &self,
        collection_id: u64,
        options: Option<&ListOptions>,
    ) -> Result<ResourceResponse<Vec<u64>>, ResourceError> {
        let path = self.member_path(&collection_id, "product_ids")?;
        let query = optional_query(options)?;
        self.fetch(&path, "product_ids", query, Some(&collection_id.to_string()))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_default_listing_serializes_to_empty_object() {
        assert_eq!(
            serde_json::to_value(CollectionListing::default()).unwrap(),
            json!({})
        );
    }

    #[test]
    fn test_default_product_image_accepts_object_or_list() {
        let single: CollectionListing = serde_json::from_value(json!({
            "collection_id": 1,
            "default_product_image": {"src": "https://cdn.example/a.png", "width": 110}
        }))
        .unwrap();
        assert_eq!(single.default_product_image.len(), 1);
        assert_eq!(single.default_product_image[0].width, Some(110));

        let many: CollectionListing = serde_json::from_value(json!({
            "collection_id": 1,
            "default_product_image": [{"src": "a"}, {"src": "b"}]
        }))
        .unwrap();
        assert_eq!(many.default_product_image.len(), 2);

        let none: CollectionListing = serde_json::from_value(json!({
            "collection_id": 1,
            "default_product_image": null
        }))
        .unwrap();
        assert!(none.default_product_image.is_empty());
    }

    #[test]
    fn test_collection_id_is_the_identifier() {
        let listing: CollectionListing = serde_json::from_value(json!({
            "collection_id": 482865238,
            "handle": "smartphones",
            "title": "Smartphones",
            "sort_order": "manual",
            "published_at": "2017-08-31T20:00:00-04:00"
        }))
        .unwrap();

        assert_eq!(listing.id(), Some(482_865_238));
        assert_eq!(listing.handle.as_deref(), Some("smartphones"));
    }
}
