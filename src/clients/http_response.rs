//! Decoded responses and the Shopify headers that travel with them.

use std::collections::HashMap;

/// Rate-limit state from `X-Shopify-Shop-Api-Call-Limit` (`"used/bucket"`).
///
/// ```rust
/// use shopify_rest::clients::ApiCallLimit;
///
/// let limit = ApiCallLimit::parse("39/40").unwrap();
/// assert_eq!(limit.request_count, 39);
/// assert_eq!(limit.remaining(), 1);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ApiCallLimit {
    /// Requests currently counted against the bucket.
    pub request_count: u32,
    /// Bucket capacity.
    pub bucket_size: u32,
}

impl ApiCallLimit {
    /// Parses a header value of the form `"X/Y"`.
    #[must_use]
    pub fn parse(header_value: &str) -> Option<Self> {
        let (used, size) = header_value.trim().split_once('/')?;
        Some(Self {
            request_count: used.trim().parse().ok()?,
            bucket_size: size.trim().parse().ok()?,
        })
    }

    /// Requests left before the bucket is full.
    #[must_use]
    pub const fn remaining(&self) -> u32 {
        self.bucket_size.saturating_sub(self.request_count)
    }
}

/// Cursor pagination parsed from the `Link` header.
///
/// Pass a cursor back through `ListOptions::page_info` to fetch the
/// neighbouring page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PaginationInfo {
    /// Cursor of the previous page.
    pub prev_page_info: Option<String>,
    /// Cursor of the next page.
    pub next_page_info: Option<String>,
}

impl PaginationInfo {
    /// Parses `<url>; rel="next", <url>; rel="previous"`.
    #[must_use]
    pub fn parse_link_header(header_value: &str) -> Self {
        let mut result = Self::default();

        for link in header_value.split(',') {
            let mut parts = link.split(';').map(str::trim);
            let Some(url) = parts
                .next()
                .map(|s| s.trim_start_matches('<').trim_end_matches('>'))
            else {
                continue;
            };
            let rel = parts.find_map(|part| part.strip_prefix("rel=").map(|r| r.trim_matches('"')));

            let page_info = Self::extract_page_info(url);
            match rel {
                Some("next") => result.next_page_info = page_info,
                Some("previous") => result.prev_page_info = page_info,
                _ => {}
            }
        }

        result
    }

    /// Returns `true` when another page follows.
    #[must_use]
    pub const fn has_next_page(&self) -> bool {
        self.next_page_info.is_some()
    }

    /// Returns `true` when a page precedes this one.
    #[must_use]
    pub const fn has_prev_page(&self) -> bool {
        self.prev_page_info.is_some()
    }

    fn extract_page_info(url: &str) -> Option<String> {
        let (_, query) = url.split_once('?')?;
        query
            .split('&')
            .filter_map(|pair| pair.split_once('='))
            .find(|(key, _)| *key == "page_info")
            .map(|(_, value)| value.to_string())
    }
}

/// A successful response from the API.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers, keyed by lowercase name.
    pub headers: HashMap<String, Vec<String>>,
    /// The decoded JSON body. An empty body decodes as `{}`.
    pub body: serde_json::Value,
    /// Cursors from the `Link` header.
    pub pagination: PaginationInfo,
    /// Rate-limit state, if reported.
    pub api_call_limit: Option<ApiCallLimit>,
}

impl HttpResponse {
    /// Builds a response and parses the `Link` and call-limit headers.
    #[must_use]
    pub fn new(code: u16, headers: HashMap<String, Vec<String>>, body: serde_json::Value) -> Self {
        let first = |name: &str| headers.get(name).and_then(|values| values.first());

        let pagination = first("link")
            .map(|link| PaginationInfo::parse_link_header(link))
            .unwrap_or_default();
        let api_call_limit =
            first("x-shopify-shop-api-call-limit").and_then(|value| ApiCallLimit::parse(value));

        Self {
            code,
            headers,
            body,
            pagination,
            api_call_limit,
        }
    }

    /// Returns `true` for 2xx status codes.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// The `X-Request-Id` header, for support requests.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.header("x-request-id")
    }

    /// The `X-Shopify-API-Deprecated-Reason` header.
    #[must_use]
    pub fn deprecation_reason(&self) -> Option<&str> {
        self.header("x-shopify-api-deprecated-reason")
    }

    fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(name)
            .and_then(|values| values.first())
            .map(String::as_str)
    }
}
