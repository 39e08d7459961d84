//! Error handling for the relay.
//!
//! A closed set of failure kinds, each mapped to exactly one HTTP status in
//! [`AppError::status_code`]. Adding a kind without deciding its status is a
//! compile error, which keeps the error taxonomy and the HTTP surface in
//! lockstep.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use order_status_shopify::ShopifyError;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

/// Application error for the relay's handlers.
///
/// Every kind renders as a JSON body with at least an `error` field;
/// upstream rejections additionally carry the upstream status and body so a
/// storefront developer can see what the platform said.
#[derive(Debug, Error)]
pub enum AppError {
    /// Caller omitted the order identifier, or sent only whitespace
    #[error("missing order number: pass ?order=<number>")]
    MissingOrderNumber,

    /// Query string did not deserialize, e.g. a duplicated parameter
    #[error("invalid query string: {0}")]
    InvalidQuery(String),

    /// Required upstream settings are absent
    #[error("server configuration incomplete: {0} not set")]
    MissingConfig(String),

    /// Upstream could not be reached, or its body could not be read
    #[error("error querying the upstream platform")]
    UpstreamTransport(#[source] ShopifyError),

    /// Upstream answered with a non-success status
    #[error("upstream platform returned status {status}")]
    UpstreamProtocol {
        /// HTTP status code from the upstream response
        status: u16,
        /// Raw upstream response body
        body: String,
    },

    /// No order matched the identifier
    #[error("order not found")]
    OrderNotFound,
}

impl AppError {
    /// Map each error kind to its HTTP status code.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::MissingOrderNumber | Self::InvalidQuery(_) => StatusCode::BAD_REQUEST,
            Self::OrderNotFound => StatusCode::NOT_FOUND,
            Self::MissingConfig(_)
            | Self::UpstreamTransport(_)
            | Self::UpstreamProtocol { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ShopifyError> for AppError {
    fn from(err: ShopifyError) -> Self {
        match err {
            ShopifyError::ApiError { status, body } => Self::UpstreamProtocol { status, body },
            other => Self::UpstreamTransport(other),
        }
    }
}

/// JSON body rendered for every error response.
#[derive(Debug, Serialize)]
struct ErrorBody {
    /// Human-readable description of what went wrong
    error: String,
    /// Upstream HTTP status, present for upstream rejections
    #[serde(skip_serializing_if = "Option::is_none")]
    upstream_status: Option<u16>,
    /// Upstream response body, parsed as JSON when possible
    #[serde(skip_serializing_if = "Option::is_none")]
    detail: Option<Value>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        // Client mistakes stay quiet; server-side failures go to the log.
        if status.is_server_error() {
            match &self {
                Self::UpstreamTransport(source) => {
                    tracing::error!(cause = %source, "upstream query failed");
                }
                Self::UpstreamProtocol { status: upstream, body } => {
                    tracing::error!(
                        upstream_status = *upstream,
                        body = %body,
                        "upstream rejected the query"
                    );
                }
                other => {
                    tracing::error!(error = %other, "request failed");
                }
            }
        }

        let message = self.to_string();
        let (upstream_status, detail) = match self {
            Self::UpstreamProtocol { status, body } => {
                (Some(status), Some(parse_detail(&body)))
            }
            _ => (None, None),
        };

        let body = ErrorBody {
            error: message,
            upstream_status,
            detail,
        };

        (status, Json(body)).into_response()
    }
}

/// Keep upstream diagnostics structured when they are JSON, raw otherwise.
fn parse_detail(body: &str) -> Value {
    serde_json::from_str(body).unwrap_or_else(|_| Value::String(body.to_string()))
}
