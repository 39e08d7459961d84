//! Order status lookup endpoint.
//!
//! The resolver behind `GET /order-status`: validates the caller-supplied
//! identifier, queries the upstream orders search, and reshapes the first
//! match into the summary the storefront tracker renders.

use crate::error::AppError;
use crate::state::AppState;
use crate::ApiResult;
use axum::{
    async_trait,
    extract::{FromRequestParts, Query, State},
    http::request::Parts,
    Json,
};
use order_status_shopify::Order;
use serde::{Deserialize, Serialize};

/// Query parameters accepted by the lookup endpoint.
///
/// Extracted via [`Query`] with the rejection folded into [`AppError`], so
/// a malformed query string (a duplicated `order` parameter, for example)
/// answers with the same JSON error shape as every other failure.
#[derive(Debug, Deserialize)]
pub struct OrderStatusParams {
    /// Caller-supplied order identifier, with or without the leading `#`
    pub order: Option<String>,
}

#[async_trait]
impl<S> FromRequestParts<S> for OrderStatusParams
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<Self>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::InvalidQuery(e.body_text()))?;

        Ok(params)
    }
}

/// Two-bucket fulfillment classification for the tracker UI.
///
/// The upstream reports `fulfillment_status` as `null` until items ship, so
/// presence alone separates "still being prepared" from "done".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FulfillmentStage {
    /// Numeric progress step: 1 while preparing, 2 once fulfilled
    pub stage: u8,
    /// Label shown as the order's overall state
    pub stage_label: &'static str,
    /// Label describing how the order is being handled
    pub handling_label: &'static str,
}

/// Classify an order into one of the two tracker stages.
#[must_use]
pub const fn classify_fulfillment(fulfillment_status: Option<&str>) -> FulfillmentStage {
    match fulfillment_status {
        Some(_) => FulfillmentStage {
            stage: 2,
            stage_label: "Complete",
            handling_label: "Shipped",
        },
        None => FulfillmentStage {
            stage: 1,
            stage_label: "In preparation",
            handling_label: "Being prepared",
        },
    }
}

/// Storefront-facing order summary.
#[derive(Debug, Serialize)]
pub struct OrderStatusResponse {
    /// Display name of the matched order, e.g. `#1001`
    pub order_number: Option<String>,
    /// Payment state, passed through verbatim
    pub financial_status: Option<String>,
    /// Shipping state, passed through verbatim (`null` until fulfilled)
    pub fulfillment_status: Option<String>,
    /// Creation timestamp, passed through verbatim
    pub created_at: Option<String>,
    /// Numeric progress step for the tracker UI
    pub stage: u8,
    /// Label for the current stage
    pub stage_label: &'static str,
    /// Label for how the order is being handled
    pub handling_label: &'static str,
}

impl OrderStatusResponse {
    /// Build the storefront payload from an upstream order record.
    #[must_use]
    pub fn from_order(order: Order) -> Self {
        let stage = classify_fulfillment(order.fulfillment_status.as_deref());
        Self {
            order_number: order.name,
            financial_status: order.financial_status,
            fulfillment_status: order.fulfillment_status,
            created_at: order.created_at,
            stage: stage.stage,
            stage_label: stage.stage_label,
            handling_label: stage.handling_label,
        }
    }
}

/// Look up one order and reshape it for the storefront tracker.
///
/// The identifier is accepted with or without the leading `#`, so `1001`
/// and `#1001` resolve to the same order.
///
/// ```bash
/// curl "http://localhost:3000/order-status?order=1001"
/// ```
///
/// # Errors
///
/// - 400 when `order` is missing, blank, or the query string is malformed
/// - 404 when the upstream search matches nothing
/// - 500 when required settings are absent or the upstream call fails
pub async fn order_status(
    State(state): State<AppState>,
    params: OrderStatusParams,
) -> ApiResult<Json<OrderStatusResponse>> {
    let order = params.order.as_deref().map(str::trim).unwrap_or_default();
    if order.is_empty() {
        return Err(AppError::MissingOrderNumber);
    }

    let Some(client) = &state.shopify else {
        return Err(AppError::MissingConfig(
            state.config.shopify.missing_vars().join(", "),
        ));
    };

    let found = client.find_order_by_name(order).await?;

    // Several records can share a name; the first entry wins.
    let Some(first) = found.orders.into_iter().next() else {
        return Err(AppError::OrderNotFound);
    };

    tracing::debug!(order_number = ?first.name, "order resolved");

    Ok(Json(OrderStatusResponse::from_order(first)))
}
