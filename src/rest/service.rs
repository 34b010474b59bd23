//! Resource traits and the generic resource service.
//!
//! A resource is a serde type implementing [`Resource`] plus one capability
//! trait per operation the API offers for it. [`ResourceService`] exposes an
//! operation only when the capability is implemented, so calling an
//! unsupported operation does not compile.
//!
//! # Implementing a Resource
//!
//! ```rust,ignore
//! use serde::{Deserialize, Serialize};
//! use shopify_rest::rest::{CountOptions, Countable, Findable, FieldsOptions, Resource};
//!
//! #[derive(Debug, Clone, Default, Serialize, Deserialize)]
//! pub struct Redirect {
//!     #[serde(skip_serializing_if = "Option::is_none")]
//!     pub id: Option<u64>,
//!     #[serde(skip_serializing_if = "Option::is_none")]
//!     pub path: Option<String>,
//! }
//!
//! impl Resource for Redirect {
//!     type Id = u64;
//!     const NAME: &'static str = "Redirect";
//!     const KEY: &'static str = "redirect";
//!     const PLURAL: &'static str = "redirects";
//!     const PATH: &'static str = "redirects";
//!
//!     fn id(&self) -> Option<u64> {
//!         self.id
//!     }
//! }
//!
//! impl Findable for Redirect {
//!     type FindParams = FieldsOptions;
//! }
//!
//! impl Countable for Redirect {
//!     type CountParams = CountOptions;
//! }
//! ```

use std::collections::HashMap;
use std::fmt::{self, Display};
use std::marker::PhantomData;
use std::sync::Arc;

use serde::{de::DeserializeOwned, Serialize};

use crate::clients::{HttpMethod, HttpResponse, RestClient};
use crate::rest::options::optional_query;
use crate::rest::{build_path, ResourceError, ResourceOperation, ResourceResponse};

/// A JSON entity exposed by the Admin REST API.
pub trait Resource: Serialize + DeserializeOwned + Clone + Send + Sync + Sized {
    /// The identifier type, rendered into paths with `Display`.
    type Id: Display + Clone + Send + Sync;

    /// Type name used in error messages, e.g. `PriceRule`.
    const NAME: &'static str;

    /// Envelope key for one entity, e.g. `price_rule`.
    const KEY: &'static str;

    /// Envelope key for a collection, e.g. `price_rules`.
    const PLURAL: &'static str;

    /// Collection path relative to the API root, e.g. `price_rules`.
    const PATH: &'static str;

    /// The entity's id, `None` before it is created.
    fn id(&self) -> Option<Self::Id>;
}

/// `GET {path}/{id}`.
pub trait Findable: Resource {
    /// Query options for a single read.
    type FindParams: Serialize + Send + Sync;
}

/// `GET {path}`.
pub trait Listable: Resource {
    /// Query options for a list.
    type ListParams: Serialize + Send + Sync;
}

/// `GET {path}/count`.
pub trait Countable: Resource {
    /// Query options for a count.
    type CountParams: Serialize + Send + Sync;
}

/// `POST {path}`.
pub trait Creatable: Resource {}

/// `PUT {path}/{id}`.
pub trait Updatable: Resource {}

/// `DELETE {path}/{id}`.
pub trait Deletable: Resource {}

/// Service for one resource type, optionally scoped under an owner path.
///
/// Holds a shared [`RestClient`]; cloning the service shares the same
/// connection pool. Each method issues exactly one request and keeps no
/// state between calls.
pub struct ResourceService<R> {
    client: Arc<RestClient>,
    prefix: Option<String>,
    _resource: PhantomData<fn() -> R>,
}

impl<R> Clone for ResourceService<R> {
    fn clone(&self) -> Self {
        Self {
            client: Arc::clone(&self.client),
            prefix: self.prefix.clone(),
            _resource: PhantomData,
        }
    }
}

impl<R> fmt::Debug for ResourceService<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResourceService")
            .field("resource", &std::any::type_name::<R>())
            .field("prefix", &self.prefix)
            .finish_non_exhaustive()
    }
}

const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ResourceService<serde_json::Value>>();
};

impl<R: Resource> ResourceService<R> {
    /// Creates an unscoped service.
    #[must_use]
    pub const fn new(client: Arc<RestClient>) -> Self {
        Self {
            client,
            prefix: None,
            _resource: PhantomData,
        }
    }

    /// Creates a service whose paths start with `prefix`, e.g. `products/632910392`.
    #[must_use]
    pub fn with_prefix(client: Arc<RestClient>, prefix: impl Into<String>) -> Self {
        Self {
            client,
            prefix: Some(prefix.into()),
            _resource: PhantomData,
        }
    }

    /// The owner path prefix, if scoped.
    #[must_use]
    pub fn prefix(&self) -> Option<&str> {
        self.prefix.as_deref()
    }

    /// The shared REST client.
    #[must_use]
    pub const fn client(&self) -> &Arc<RestClient> {
        &self.client
    }

    /// Resolves the path for `operation`, relative to the API root.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingId`] if the operation needs an id.
    pub fn path(
        &self,
        operation: ResourceOperation,
        id: Option<&R::Id>,
    ) -> Result<String, ResourceError> {
        let id = id.map(ToString::to_string);
        build_path(self.prefix(), R::PATH, operation, id.as_deref()).ok_or(
            ResourceError::MissingId {
                resource: R::NAME,
                operation: operation.as_str(),
            },
        )
    }

    /// Resolves a custom sub-path, e.g. `{path}/{id}/product_ids`.
    pub(crate) fn member_path(&self, id: &R::Id, suffix: &str) -> Result<String, ResourceError> {
        let base = self.path(ResourceOperation::Find, Some(id))?;
        Ok(format!("{base}/{suffix}"))
    }

    /// Sends one request and lifts 404/422 into resource errors.
    pub(crate) async fn send(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<serde_json::Value>,
        query: Option<HashMap<String, String>>,
        id: Option<&str>,
    ) -> Result<HttpResponse, ResourceError> {
        let result = match (method, body) {
            (HttpMethod::Get, _) => self.client.get(path, query).await,
            (HttpMethod::Delete, _) => self.client.delete(path, query).await,
            (HttpMethod::Post, body) => {
                self.client
                    .post(path, body.unwrap_or_default(), query)
                    .await
            }
            (HttpMethod::Put, body) => {
                self.client
                    .put(path, body.unwrap_or_default(), query)
                    .await
            }
        };
        result.map_err(|e| ResourceError::from_rest_error(e, R::NAME, id))
    }

    /// GETs `path` and decodes the value under `key`.
    pub(crate) async fn fetch<T: DeserializeOwned>(
        &self,
        path: &str,
        key: &str,
        query: Option<HashMap<String, String>>,
        id: Option<&str>,
    ) -> Result<ResourceResponse<T>, ResourceError> {
        let response = self.send(HttpMethod::Get, path, None, query, id).await?;
        ResourceResponse::from_http_response(response, R::NAME, key)
    }

    async fn write(
        &self,
        operation: ResourceOperation,
        resource: &R,
    ) -> Result<R, ResourceError> {
        let id = resource.id();
        let path = self.path(operation, id.as_ref())?;
        let id = id.map(|id| id.to_string());

        let mut envelope = serde_json::Map::new();
        envelope.insert(
            R::KEY.to_string(),
            serde_json::to_value(resource).map_err(|source| ResourceError::Encode {
                resource: R::NAME,
                source,
            })?,
        );

        let response = self
            .send(
                operation.http_method(),
                &path,
                Some(serde_json::Value::Object(envelope)),
                None,
                id.as_deref(),
            )
            .await?;

        ResourceResponse::from_http_response(response, R::NAME, R::KEY)
            .map(ResourceResponse::into_inner)
    }
}

impl<R: Findable> ResourceService<R> {
    /// Fetches one entity by id.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] on 404, or any transport or decode error.
    pub async fn get(
        &self,
        id: R::Id,
        params: Option<&R::FindParams>,
    ) -> Result<ResourceResponse<R>, ResourceError> {
        let path = self.path(ResourceOperation::Find, Some(&id))?;
        let query = optional_query(params)?;
        self.fetch(&path, R::KEY, query, Some(&id.to_string()))
            .await
    }
}

impl<R: Listable> ResourceService<R> {
    /// Lists entities in the order the API returns them.
    ///
    /// # Errors
    ///
    /// Returns any transport or decode error.
    pub async fn list(
        &self,
        params: Option<&R::ListParams>,
    ) -> Result<ResourceResponse<Vec<R>>, ResourceError> {
        let path = self.path(ResourceOperation::All, None)?;
        let query = optional_query(params)?;
        self.fetch(&path, R::PLURAL, query, None).await
    }
}

impl<R: Countable> ResourceService<R> {
    /// Counts entities matching `params`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingEnvelopeKey`] if the body lacks
    /// `count`, or any transport or decode error.
    pub async fn count(&self, params: Option<&R::CountParams>) -> Result<u64, ResourceError> {
        let path = self.path(ResourceOperation::Count, None)?;
        let query = optional_query(params)?;
        let response: ResourceResponse<u64> = self.fetch(&path, "count", query, None).await?;
        Ok(response.into_inner())
    }
}

impl<R: Creatable> ResourceService<R> {
    /// Creates an entity and returns the server's copy.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::ValidationFailed`] on 422, or any transport or decode error.
    pub async fn create(&self, resource: &R) -> Result<R, ResourceError> {
        self.write(ResourceOperation::Create, resource).await
    }
}

impl<R: Updatable> ResourceService<R> {
    /// Updates an entity by its id and returns the server's copy.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingId`] if `resource` has no id,
    /// [`ResourceError::NotFound`] on 404 and
    /// [`ResourceError::ValidationFailed`] on 422.
    pub async fn update(&self, resource: &R) -> Result<R, ResourceError> {
        self.write(ResourceOperation::Update, resource).await
    }
}

impl<R: Deletable> ResourceService<R> {
    /// Deletes an entity by id.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] on 404 and any other non-2xx as an error.
    pub async fn delete(&self, id: R::Id) -> Result<(), ResourceError> {
        let path = self.path(ResourceOperation::Delete, Some(&id))?;
        self.send(HttpMethod::Delete, &path, None, None, Some(&id.to_string()))
            .await?;
        Ok(())
    }
}
