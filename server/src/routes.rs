//! Router configuration for the relay.

use crate::handlers::{health, order_status};
use crate::state::AppState;
use axum::{routing::get, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Build the complete Axum router.
///
/// Routes:
/// - `GET /` - plain-text banner
/// - `GET /health` - configuration-aware health report
/// - `GET /order-status` - the order lookup
///
/// The storefront widget runs on shop domains the relay cannot enumerate,
/// so CORS is wide open; the layer also answers preflight `OPTIONS`
/// requests before they reach routing.
#[must_use]
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::index))
        .route("/health", get(health::health_check))
        .route("/order-status", get(order_status::order_status))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
