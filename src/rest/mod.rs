//! Typed resource layer over the Admin REST client.
//!
//! - **[`Resource`]**: names, envelope keys and base path of one entity type
//! - **Capability traits** ([`Findable`], [`Listable`], [`Countable`],
//!   [`Creatable`], [`Updatable`], [`Deletable`]): the operations the API
//!   offers for that type
//! - **[`ResourceService<R>`]**: issues those operations over a shared
//!   [`RestClient`](crate::clients::RestClient)
//! - **[`ResourceResponse<T>`]**: decoded data with pagination and rate-limit
//!   metadata, deref'ing to `T`
//! - **[`ResourceError`]**: not found, validation and decode failures
//!
//! # Example
//!
//! ```rust,ignore
//! use shopify_rest::rest::{CountOptions, ResourceService};
//! use shopify_rest::rest::resources::PriceRule;
//!
//! let rules: ResourceService<PriceRule> = client.price_rules();
//!
//! let rule = rules.get(507_328_175, None).await?;
//! println!("{:?}", rule.title);
//!
//! let total = rules.count(None).await?;
//! let page = rules.list(None).await?;
//! assert!(page.len() as u64 <= total);
//!
//! rules.delete(507_328_175).await?;
//! ```

mod errors;
pub(crate) mod options;
mod path;
mod response;
mod service;

pub mod resources;

pub use errors::ResourceError;
pub use options::{serialize_to_query, CountOptions, FieldsOptions, ListOptions};
pub use path::{build_path, ResourceOperation};
pub use response::ResourceResponse;
pub use service::{
    Countable, Creatable, Deletable, Findable, Listable, Resource, ResourceService, Updatable,
};
