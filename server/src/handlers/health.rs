//! Health and banner endpoints.

use crate::state::AppState;
use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Service status, `ok` whenever the process is serving requests
    pub status: String,
    /// Whether the shop domain is configured
    pub shop_configured: bool,
    /// Whether the admin token is configured
    pub token_configured: bool,
    /// Admin API version in use
    pub api_version: String,
}

/// Health check endpoint.
///
/// Always answers 200 so platform liveness checks keep the process alive;
/// the flags make a misconfigured deploy visible without exposing any
/// secret values.
///
/// ```bash
/// curl http://localhost:3000/health
/// ```
#[allow(clippy::unused_async)]
pub async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "ok".to_string(),
            shop_configured: state.config.shopify.shop.is_some(),
            token_configured: state.config.shopify.admin_token.is_some(),
            api_version: state.config.shopify.api_version.clone(),
        }),
    )
}

/// Plain-text banner for the root path.
///
/// Confirms at a glance that the right service answered, nothing more.
#[allow(clippy::unused_async)]
pub async fn index() -> String {
    format!(
        "order-status-server {} ready",
        env!("CARGO_PKG_VERSION")
    )
}
