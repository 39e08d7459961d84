//! Order payload types for the Admin API orders search.

use serde::{Deserialize, Deserializer};

/// One order record as returned by the Admin API.
///
/// Only the fields the status lookup consumes are modeled. Every field is
/// optional because the upstream contract treats all of them as nullable;
/// in particular `fulfillment_status` stays `null` until items ship.
#[derive(Debug, Clone, Deserialize)]
pub struct Order {
    /// Display name of the order, e.g. `#1001`
    #[serde(default)]
    pub name: Option<String>,

    /// Payment state, e.g. `paid`, `pending`, `refunded`
    #[serde(default)]
    pub financial_status: Option<String>,

    /// Shipping state, e.g. `fulfilled` or `partial`
    #[serde(default)]
    pub fulfillment_status: Option<String>,

    /// Creation timestamp, passed through verbatim
    #[serde(default)]
    pub created_at: Option<String>,

    /// Last-update timestamp, passed through verbatim
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Envelope for the orders search endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct OrdersResponse {
    /// Matching orders; `null` and an absent key both mean none matched
    #[serde(default, deserialize_with = "null_as_empty")]
    pub orders: Vec<Order>,
}

/// Deserialize a nullable list as empty, so `"orders": null` classifies
/// the same as an absent key.
fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<Order>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::deserialize(deserializer)?.unwrap_or_default())
}

/// Normalize a caller-supplied identifier into the upstream `name` format.
///
/// Trims surrounding whitespace and prepends `#` unless one is already
/// present, so `1001` and `#1001` refer to the same order.
#[must_use]
pub fn normalize_order_name(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.starts_with('#') {
        trimmed.to_string()
    } else {
        format!("#{trimmed}")
    }
}
