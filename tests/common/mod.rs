//! Shared setup for the resource integration tests.

#![allow(dead_code)]

use shopify_rest::{AccessToken, ApiVersion, HostUrl, ShopDomain, ShopifyClient, ShopifyConfig};
use wiremock::{MockServer, Request, ResponseTemplate};

pub const ACCESS_TOKEN: &str = "shpat_test_token";

/// Starts a mock server and a client pointed at it.
pub async fn setup() -> (MockServer, ShopifyClient) {
    let server = MockServer::start().await;

    let config = ShopifyConfig::builder()
        .shop(ShopDomain::new("fooshop").unwrap())
        .access_token(AccessToken::new(ACCESS_TOKEN).unwrap())
        .base_url(HostUrl::new(server.uri()).unwrap())
        .build()
        .unwrap();

    let client = ShopifyClient::new(&config).unwrap();
    (server, client)
}

/// Full request path for `resource`, e.g. `price_rules/1.json`.
pub fn api_path(resource: &str) -> String {
    format!("/admin/api/{}/{resource}", ApiVersion::latest())
}

/// A 200 response carrying a JSON fixture.
pub fn json_response(body: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_raw(body.as_bytes().to_vec(), "application/json")
}

/// Matches requests without a query string.
pub struct NoQuery;

impl wiremock::Match for NoQuery {
    fn matches(&self, request: &Request) -> bool {
        request.url.query().map_or(true, str::is_empty)
    }
}
