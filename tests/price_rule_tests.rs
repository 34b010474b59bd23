//! Integration tests for the price rule service.
//!
//! Each test mounts the expected endpoint on a mock server and checks the
//! request shape and the decoded result.

mod common;

use std::str::FromStr;

use chrono::{TimeZone, Utc};
use rust_decimal::Decimal;
use serde_json::json;
use shopify_rest::rest::resources::{
    PriceRule, PriceRuleAllocationMethod, PriceRuleCustomerSelection, PriceRuleListOptions,
    PriceRuleTargetSelection, PriceRuleTargetType, PriceRuleValueType,
};
use shopify_rest::rest::{CountOptions, FieldsOptions, ListOptions};
use shopify_rest::ResourceError;
use tokio_test::{assert_err, assert_ok};
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

use common::{api_path, json_response, setup, NoQuery, ACCESS_TOKEN};

const PRICE_RULE: &str = include_str!("fixtures/price_rule.json");
const PRICE_RULES: &str = include_str!("fixtures/price_rules.json");

#[tokio::test]
async fn test_get_decodes_price_rule() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path(api_path("price_rules/507328175.json")))
        .and(header("X-Shopify-Access-Token", ACCESS_TOKEN))
        .respond_with(json_response(PRICE_RULE))
        .expect(1)
        .mount(&server)
        .await;

    let rule = client.price_rules().get(507_328_175, None).await.unwrap();

    assert_eq!(rule.id, Some(507_328_175));
    assert_eq!(rule.title.as_deref(), Some("SUMMERSALE10OFF"));
    assert_eq!(rule.value_type, Some(PriceRuleValueType::FixedAmount));
    assert_eq!(rule.value, Some(Decimal::from_str("-10.0").unwrap()));
    assert_eq!(rule.value.unwrap().to_string(), "-10.0");
    assert_eq!(rule.allocation_method, Some(PriceRuleAllocationMethod::Across));
    assert_eq!(
        rule.starts_at,
        Some(Utc.with_ymd_and_hms(2018, 3, 22, 0, 0, 0).unwrap())
    );
    assert!(rule.entitled_product_ids.is_empty());
    assert!(rule.prerequisite_subtotal_range.is_none());
}

#[tokio::test]
async fn test_get_forwards_fields() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path(api_path("price_rules/507328175.json")))
        .and(query_param("fields", "id,title"))
        .respond_with(json_response(
            r#"{"price_rule": {"id": 507328175, "title": "SUMMERSALE10OFF"}}"#,
        ))
        .expect(1)
        .mount(&server)
        .await;

    let options = FieldsOptions {
        fields: vec!["id".to_string(), "title".to_string()],
    };
    let rule = client
        .price_rules()
        .get(507_328_175, Some(&options))
        .await
        .unwrap();

    assert_eq!(rule.id, Some(507_328_175));
    assert!(rule.value.is_none());
}

#[tokio::test]
async fn test_get_missing_rule_is_not_found() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path(api_path("price_rules/1.json")))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"errors": "Not Found"})))
        .mount(&server)
        .await;

    let error = client.price_rules().get(1, None).await.unwrap_err();

    assert!(matches!(
        error,
        ResourceError::NotFound { resource: "PriceRule", ref id } if id == "1"
    ));
    assert_eq!(error.status(), Some(404));
}

#[tokio::test]
async fn test_list_keeps_response_order() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path(api_path("price_rules.json")))
        .respond_with(json_response(PRICE_RULES).insert_header(
            "Link",
            r#"<https://fooshop.myshopify.com/admin/api/2025-10/price_rules.json?limit=2&page_info=eyJsYXN0X2lkIjo1MDd9>; rel="next""#,
        ))
        .mount(&server)
        .await;

    let rules = client.price_rules().list(None).await.unwrap();

    let ids: Vec<_> = rules.iter().map(|rule| rule.id).collect();
    assert_eq!(ids, vec![Some(996_341_478), Some(507_328_175)]);
    assert!(rules.has_next_page());
    assert_eq!(rules.next_page_info(), Some("eyJsYXN0X2lkIjo1MDd9"));

    let first = &rules[0];
    assert_eq!(first.customer_selection, Some(PriceRuleCustomerSelection::Prerequisite));
    assert_eq!(first.target_type, Some(PriceRuleTargetType::ShippingLine));
    assert_eq!(first.target_selection, Some(PriceRuleTargetSelection::Entitled));
    assert_eq!(first.prerequisite_saved_search_ids, vec![789_629_109]);
    assert_eq!(
        first
            .prerequisite_subtotal_range
            .and_then(|range| range.greater_than_or_equal_to),
        Some(Decimal::from_str("50.0").unwrap())
    );
    assert_eq!(first.times_used, Some(3));
}

#[tokio::test]
async fn test_list_sends_filters() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path(api_path("price_rules.json")))
        .and(query_param("limit", "2"))
        .and(query_param("starts_at_min", "2024-01-01T00:00:00Z"))
        .respond_with(json_response(PRICE_RULES))
        .expect(1)
        .mount(&server)
        .await;

    let options = PriceRuleListOptions {
        list: ListOptions {
            limit: Some(2),
            ..Default::default()
        },
        starts_at_min: Some(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()),
        ..Default::default()
    };
    let rules = client.price_rules().list(Some(&options)).await.unwrap();

    assert_eq!(rules.len(), 2);
}

#[tokio::test]
async fn test_count_forwards_filters() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path(api_path("price_rules/count.json")))
        .and(NoQuery)
        .respond_with(json_response(r#"{"count": 3}"#))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(api_path("price_rules/count.json")))
        .and(query_param("created_at_min", "2016-01-01T00:00:00Z"))
        .respond_with(json_response(r#"{"count": 2}"#))
        .mount(&server)
        .await;

    let rules = client.price_rules();
    assert_eq!(rules.count(None).await.unwrap(), 3);

    let options = CountOptions {
        created_at_min: Some(Utc.with_ymd_and_hms(2016, 1, 1, 0, 0, 0).unwrap()),
        ..Default::default()
    };
    assert_eq!(rules.count(Some(&options)).await.unwrap(), 2);
}

#[tokio::test]
async fn test_create_returns_server_copy() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path(api_path("price_rules.json")))
        .and(header("Content-Type", "application/json"))
        .and(body_json(json!({
            "price_rule": {
                "title": "SUMMERSALE10OFF",
                "value_type": "fixed_amount",
                "value": "-10.0",
                "customer_selection": "all",
                "target_type": "line_item",
                "target_selection": "all",
                "allocation_method": "across",
                "starts_at": "2018-03-22T00:00:00Z"
            }
        })))
        .respond_with(ResponseTemplate::new(201).set_body_raw(PRICE_RULE, "application/json"))
        .expect(1)
        .mount(&server)
        .await;

    let rule = PriceRule {
        title: Some("SUMMERSALE10OFF".to_string()),
        value_type: Some(PriceRuleValueType::FixedAmount),
        value: Some(Decimal::from_str("-10.0").unwrap()),
        customer_selection: Some(PriceRuleCustomerSelection::All),
        target_type: Some(PriceRuleTargetType::LineItem),
        target_selection: Some(PriceRuleTargetSelection::All),
        allocation_method: Some(PriceRuleAllocationMethod::Across),
        starts_at: Some(Utc.with_ymd_and_hms(2018, 3, 22, 0, 0, 0).unwrap()),
        ..Default::default()
    };

    let created = client.price_rules().create(&rule).await.unwrap();

    assert_eq!(created.id, Some(507_328_175));
    assert_eq!(
        created.admin_graphql_api_id.as_deref(),
        Some("gid://shopify/PriceRule/507328175")
    );
    assert!(created.created_at.is_some());
}

#[tokio::test]
async fn test_create_validation_errors_are_lifted() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path(api_path("price_rules.json")))
        .respond_with(
            ResponseTemplate::new(422)
                .insert_header("X-Request-Id", "req-422")
                .set_body_json(json!({
                    "errors": {
                        "title": ["can't be blank"],
                        "starts_at": ["can't be blank", "is invalid"]
                    }
                })),
        )
        .mount(&server)
        .await;

    let error = client
        .price_rules()
        .create(&PriceRule::default())
        .await
        .unwrap_err();

    match error {
        ResourceError::ValidationFailed { errors, request_id } => {
            assert_eq!(errors["title"], vec!["can't be blank"]);
            assert_eq!(errors["starts_at"].len(), 2);
            assert_eq!(request_id.as_deref(), Some("req-422"));
        }
        other => panic!("expected ValidationFailed, got {other:?}"),
    }
}

#[tokio::test]
async fn test_update_puts_to_member_path() {
    let (server, client) = setup().await;

    Mock::given(method("PUT"))
        .and(path(api_path("price_rules/507328175.json")))
        .and(body_json(json!({"price_rule": {"title": "WINTERSALE20OFF"}})))
        .respond_with(json_response(PRICE_RULE))
        .expect(1)
        .mount(&server)
        .await;

    let rule = PriceRule {
        id: Some(507_328_175),
        title: Some("WINTERSALE20OFF".to_string()),
        ..Default::default()
    };

    let updated = client.price_rules().update(&rule).await.unwrap();

    // the server's copy wins over the input
    assert_eq!(updated.title.as_deref(), Some("SUMMERSALE10OFF"));
}

#[tokio::test]
async fn test_update_without_id_sends_nothing() {
    let (server, client) = setup().await;

    Mock::given(method("PUT"))
        .respond_with(json_response(PRICE_RULE))
        .expect(0)
        .mount(&server)
        .await;

    let error = client
        .price_rules()
        .update(&PriceRule::default())
        .await
        .unwrap_err();

    assert!(matches!(
        error,
        ResourceError::MissingId {
            resource: "PriceRule",
            operation: "update"
        }
    ));
}

#[tokio::test]
async fn test_delete_success_and_failures() {
    let (server, client) = setup().await;

    Mock::given(method("DELETE"))
        .and(path(api_path("price_rules/507328175.json")))
        .respond_with(json_response("{}"))
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path(api_path("price_rules/1.json")))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"errors": "Not Found"})))
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path(api_path("price_rules/2.json")))
        .respond_with(ResponseTemplate::new(500).set_body_string("internal error"))
        .mount(&server)
        .await;

    let rules = client.price_rules();

    assert_ok!(rules.delete(507_328_175).await);

    let not_found = assert_err!(rules.delete(1).await);
    assert!(matches!(not_found, ResourceError::NotFound { .. }));

    let server_error = assert_err!(rules.delete(2).await);
    assert!(matches!(server_error, ResourceError::Rest(_)));
    assert_eq!(server_error.status(), Some(500));
}
