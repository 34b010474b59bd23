//! HTTP transport and the Admin REST client.
//!
//! - [`HttpClient`]: authenticated transport for one shop
//! - [`HttpRequest`]: a request relative to the versioned base path
//! - [`HttpResponse`]: decoded body plus pagination and rate-limit headers
//! - [`RestClient`]: verb methods with path normalization
//!
//! Every call sends exactly one request. Non-2xx statuses surface as
//! [`HttpError::Response`] carrying the decoded body; there is no automatic
//! retry or throttling.

mod errors;
mod http_client;
mod http_request;
mod http_response;
pub mod rest;

pub use errors::{HttpError, HttpResponseError, InvalidHttpRequestError};
pub use http_client::{HttpClient, SDK_VERSION};
pub use http_request::{HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::{ApiCallLimit, HttpResponse, PaginationInfo};

pub use rest::{RestClient, RestError};
