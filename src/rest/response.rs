//! Typed response wrapper.
//!
//! [`ResourceResponse<T>`] pairs decoded data with the response metadata
//! (pagination cursors, rate limit, request id) and derefs to `T`:
//!
//! ```rust,ignore
//! let rules = client.price_rules().list(None).await?;
//!
//! for rule in rules.iter() {
//!     println!("{:?}", rule.title);
//! }
//!
//! if let Some(cursor) = rules.next_page_info() {
//!     // pass `cursor` as `page_info` to fetch the next page
//! }
//! ```

use std::ops::{Deref, DerefMut};

use serde::de::DeserializeOwned;

use crate::clients::{ApiCallLimit, HttpResponse, PaginationInfo};
use crate::rest::ResourceError;

/// Decoded data plus response metadata.
///
/// ```rust
/// use shopify_rest::clients::{ApiCallLimit, PaginationInfo};
/// use shopify_rest::rest::ResourceResponse;
///
/// let response = ResourceResponse::new(
///     vec![1_u64, 2, 3],
///     PaginationInfo {
///         prev_page_info: None,
///         next_page_info: Some("eyJsYXN0X2lkIjo0fQ".to_string()),
///     },
///     Some(ApiCallLimit { request_count: 1, bucket_size: 40 }),
///     Some("req-123".to_string()),
/// );
///
/// assert_eq!(response.len(), 3);
/// assert!(response.has_next_page());
/// assert_eq!(response.request_id(), Some("req-123"));
/// ```
#[derive(Debug, Clone)]
pub struct ResourceResponse<T> {
    data: T,
    pagination: PaginationInfo,
    rate_limit: Option<ApiCallLimit>,
    request_id: Option<String>,
}

impl<T> ResourceResponse<T> {
    /// Creates a response from parts.
    #[must_use]
    pub const fn new(
        data: T,
        pagination: PaginationInfo,
        rate_limit: Option<ApiCallLimit>,
        request_id: Option<String>,
    ) -> Self {
        Self {
            data,
            pagination,
            rate_limit,
            request_id,
        }
    }

    /// Consumes the response and returns the data.
    #[must_use]
    pub fn into_inner(self) -> T {
        self.data
    }

    /// Borrows the data.
    #[must_use]
    pub const fn data(&self) -> &T {
        &self.data
    }

    /// Returns `true` if a next page exists.
    #[must_use]
    pub const fn has_next_page(&self) -> bool {
        self.pagination.has_next_page()
    }

    /// Returns `true` if a previous page exists.
    #[must_use]
    pub const fn has_prev_page(&self) -> bool {
        self.pagination.has_prev_page()
    }

    /// Cursor for the next page.
    #[must_use]
    pub fn next_page_info(&self) -> Option<&str> {
        self.pagination.next_page_info.as_deref()
    }

    /// Cursor for the previous page.
    #[must_use]
    pub fn prev_page_info(&self) -> Option<&str> {
        self.pagination.prev_page_info.as_deref()
    }

    /// Both cursors.
    #[must_use]
    pub const fn pagination(&self) -> &PaginationInfo {
        &self.pagination
    }

    /// Rate-limit state reported with this response.
    #[must_use]
    pub const fn rate_limit(&self) -> Option<&ApiCallLimit> {
        self.rate_limit.as_ref()
    }

    /// The `X-Request-Id` header.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.request_id.as_deref()
    }

    /// Maps the data, keeping the metadata.
    #[must_use]
    pub fn map<U, F>(self, f: F) -> ResourceResponse<U>
    where
        F: FnOnce(T) -> U,
    {
        ResourceResponse {
            data: f(self.data),
            pagination: self.pagination,
            rate_limit: self.rate_limit,
            request_id: self.request_id,
        }
    }
}

impl<T: DeserializeOwned> ResourceResponse<T> {
    /// Decodes the value under `key` in the response body.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingEnvelopeKey`] if `key` is absent and
    /// [`ResourceError::Decode`] if the value does not match `T`.
    pub fn from_http_response(
        response: HttpResponse,
        resource: &'static str,
        key: &str,
    ) -> Result<Self, ResourceError> {
        let request_id = response.request_id().map(ToString::to_string);

        let HttpResponse {
            mut body,
            pagination,
            api_call_limit,
            ..
        } = response;

        let value = body
            .get_mut(key)
            .map(serde_json::Value::take)
            .ok_or_else(|| ResourceError::MissingEnvelopeKey {
                resource,
                key: key.to_string(),
            })?;

        let data = serde_json::from_value(value)
            .map_err(|source| ResourceError::Decode { resource, source })?;

        Ok(Self {
            data,
            pagination,
            rate_limit: api_call_limit,
            request_id,
        })
    }
}

impl<T> Deref for ResourceResponse<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.data
    }
}

impl<T> DerefMut for ResourceResponse<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.data
    }
}

const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ResourceResponse<String>>();
    assert_send_sync::<ResourceResponse<Vec<String>>>();
};
