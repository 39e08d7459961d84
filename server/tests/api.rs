//! Integration tests for the relay's HTTP surface
//!
//! Each test drives the full router with `tower::ServiceExt::oneshot`,
//! pointing the upstream client at a wiremock server whenever an outbound
//! call is expected.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)] // Test code can use unwrap/expect/panic

use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
    Router,
};
use order_status_server::config::{Config, ServerConfig, ShopifyConfig};
use order_status_server::{build_router, AppState};
use order_status_shopify::ShopifyClient;
use serde_json::{json, Value};
use tower::ServiceExt;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ============================================================================
// Test Fixtures
// ============================================================================

const API_VERSION: &str = "2024-01";
const TOKEN: &str = "shpat_test_token";
const ORDERS_PATH: &str = "/admin/api/2024-01/orders.json";

fn configured() -> Config {
    Config {
        shopify: ShopifyConfig {
            shop: Some("test-shop.myshopify.com".to_string()),
            admin_token: Some(TOKEN.to_string()),
            api_version: API_VERSION.to_string(),
        },
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
        },
    }
}

fn unconfigured() -> Config {
    Config {
        shopify: ShopifyConfig {
            shop: None,
            admin_token: None,
            api_version: API_VERSION.to_string(),
        },
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
        },
    }
}

/// Router wired to a mock upstream server.
fn app_with_upstream(upstream: &MockServer) -> Router {
    let client = ShopifyClient::with_base_url(upstream.uri(), TOKEN, API_VERSION);
    build_router(AppState::with_client(configured(), client))
}

async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = serde_json::from_slice(&bytes).unwrap();
    (status, body)
}

async fn get_text(app: Router, uri: &str) -> (StatusCode, String) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

// ============================================================================
// Parameter Validation
// ============================================================================

#[tokio::test]
async fn missing_order_param_is_rejected() {
    let upstream = MockServer::start().await;

    let (status, body) = get_json(app_with_upstream(&upstream), "/order-status").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("order"));
}

#[tokio::test]
async fn blank_order_param_is_rejected() {
    let upstream = MockServer::start().await;

    let (status, body) =
        get_json(app_with_upstream(&upstream), "/order-status?order=%20%20").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("order"));
    assert!(upstream.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn duplicated_order_params_get_a_json_error() {
    let upstream = MockServer::start().await;

    let (status, body) = get_json(
        app_with_upstream(&upstream),
        "/order-status?order=1001&order=1002",
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("query"));
    assert!(upstream.received_requests().await.unwrap().is_empty());
}

// ============================================================================
// Configuration Errors
// ============================================================================

#[tokio::test]
async fn unconfigured_relay_names_missing_settings_without_calling_upstream() {
    let upstream = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&upstream)
        .await;

    let app = build_router(AppState::new(unconfigured()));
    let (status, body) = get_json(app, "/order-status?order=1001").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    let message = body["error"].as_str().unwrap();
    assert!(message.contains("SHOPIFY_SHOP"));
    assert!(message.contains("SHOPIFY_ADMIN_TOKEN"));
    assert!(upstream.received_requests().await.unwrap().is_empty());
}

// ============================================================================
// Upstream Query and Reshaping
// ============================================================================

#[tokio::test]
async fn order_number_is_normalized_and_authenticated_upstream() {
    let upstream = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(ORDERS_PATH))
        .and(query_param("name", "#1001"))
        .and(query_param("status", "any"))
        .and(header("X-Shopify-Access-Token", TOKEN))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "orders": [{
                "name": "#1001",
                "financial_status": "paid",
                "fulfillment_status": "fulfilled",
                "created_at": "2024-03-01T10:00:00-05:00"
            }]
        })))
        .expect(1)
        .mount(&upstream)
        .await;

    let (status, body) =
        get_json(app_with_upstream(&upstream), "/order-status?order=1001").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["order_number"], "#1001");
}

#[tokio::test]
async fn fulfilled_order_reports_the_complete_stage() {
    let upstream = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(ORDERS_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "orders": [{
                "name": "#1001",
                "financial_status": "paid",
                "fulfillment_status": "fulfilled",
                "created_at": "2024-03-01T10:00:00-05:00"
            }]
        })))
        .mount(&upstream)
        .await;

    let (status, body) =
        get_json(app_with_upstream(&upstream), "/order-status?order=%231001").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["order_number"], "#1001");
    assert_eq!(body["financial_status"], "paid");
    assert_eq!(body["fulfillment_status"], "fulfilled");
    assert_eq!(body["created_at"], "2024-03-01T10:00:00-05:00");
    assert_eq!(body["stage"], 2);
    assert_eq!(body["stage_label"], "Complete");
    assert_eq!(body["handling_label"], "Shipped");
}

#[tokio::test]
async fn unfulfilled_order_reports_the_preparation_stage() {
    let upstream = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(ORDERS_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "orders": [{
                "name": "#1002",
                "financial_status": "pending",
                "fulfillment_status": null,
                "created_at": "2024-03-02T09:00:00-05:00"
            }]
        })))
        .mount(&upstream)
        .await;

    let (status, body) =
        get_json(app_with_upstream(&upstream), "/order-status?order=1002").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["fulfillment_status"], Value::Null);
    assert_eq!(body["stage"], 1);
    assert_eq!(body["stage_label"], "In preparation");
    assert_eq!(body["handling_label"], "Being prepared");
}

#[tokio::test]
async fn first_match_wins_when_upstream_returns_several() {
    let upstream = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(ORDERS_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "orders": [
                {"name": "#1001", "fulfillment_status": "fulfilled"},
                {"name": "#1001-duplicate", "fulfillment_status": null}
            ]
        })))
        .mount(&upstream)
        .await;

    let (status, body) =
        get_json(app_with_upstream(&upstream), "/order-status?order=1001").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["order_number"], "#1001");
    assert_eq!(body["stage"], 2);
}

// ============================================================================
// Upstream Failures
// ============================================================================

#[tokio::test]
async fn unknown_order_returns_not_found() {
    let upstream = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(ORDERS_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"orders": []})))
        .mount(&upstream)
        .await;

    let (status, body) =
        get_json(app_with_upstream(&upstream), "/order-status?order=9999").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "order not found");
}

#[tokio::test]
async fn null_orders_body_returns_not_found() {
    let upstream = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(ORDERS_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"orders": null})))
        .mount(&upstream)
        .await;

    let (status, body) =
        get_json(app_with_upstream(&upstream), "/order-status?order=1001").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "order not found");
}

#[tokio::test]
async fn upstream_rejection_surfaces_status_and_detail() {
    let upstream = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(ORDERS_PATH))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "errors": "[API] Invalid API key or access token"
        })))
        .mount(&upstream)
        .await;

    let (status, body) =
        get_json(app_with_upstream(&upstream), "/order-status?order=1001").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["error"].as_str().unwrap().contains("401"));
    assert_eq!(body["upstream_status"], 401);
    assert!(body["detail"]["errors"]
        .as_str()
        .unwrap()
        .contains("Invalid API key"));
}

#[tokio::test]
async fn unparseable_upstream_body_is_a_generic_server_error() {
    let upstream = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(ORDERS_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>billing page</html>"))
        .mount(&upstream)
        .await;

    let (status, body) =
        get_json(app_with_upstream(&upstream), "/order-status?order=1001").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "error querying the upstream platform");
    assert!(body.get("upstream_status").is_none());
}

// ============================================================================
// Health and Banner
// ============================================================================

#[tokio::test]
async fn health_reports_configuration_flags() {
    let app = build_router(AppState::new(configured()));
    let (status, body) = get_json(app, "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["shop_configured"], true);
    assert_eq!(body["token_configured"], true);
    assert_eq!(body["api_version"], API_VERSION);
}

#[tokio::test]
async fn health_stays_200_when_unconfigured() {
    let app = build_router(AppState::new(unconfigured()));
    let (status, body) = get_json(app, "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["shop_configured"], false);
    assert_eq!(body["token_configured"], false);
}

#[tokio::test]
async fn root_banner_names_the_service() {
    let app = build_router(AppState::new(unconfigured()));
    let (status, banner) = get_text(app, "/").await;

    assert_eq!(status, StatusCode::OK);
    assert!(banner.contains("order-status-server"));
}

// ============================================================================
// CORS
// ============================================================================

#[tokio::test]
async fn preflight_requests_are_answered() {
    let app = build_router(AppState::new(unconfigured()));

    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/order-status")
        .header("Origin", "https://storefront.example")
        .header("Access-Control-Request-Method", "GET")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response
        .headers()
        .contains_key("access-control-allow-origin"));
}

#[tokio::test]
async fn lookup_responses_carry_cors_headers() {
    let upstream = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(ORDERS_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"orders": []})))
        .mount(&upstream)
        .await;

    let request = Request::builder()
        .uri("/order-status?order=1001")
        .header("Origin", "https://storefront.example")
        .body(Body::empty())
        .unwrap();

    let response = app_with_upstream(&upstream).oneshot(request).await.unwrap();

    // Even the 404 carries the CORS header so the widget can read it.
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(response
        .headers()
        .contains_key("access-control-allow-origin"));
}
