//! HTTP client for the Admin API orders search.

use crate::error::ShopifyError;
use crate::orders::{normalize_order_name, OrdersResponse};
use reqwest::Client;

/// Authentication header expected by the Admin API.
const ACCESS_TOKEN_HEADER: &str = "X-Shopify-Access-Token";

/// Client for the Shopify Admin REST API.
///
/// Cheap to clone; the inner connection pool is shared between clones.
#[derive(Clone)]
pub struct ShopifyClient {
    client: Client,
    base_url: String,
    token: String,
    api_version: String,
}

impl ShopifyClient {
    /// Create a client for a shop domain, e.g. `my-shop.myshopify.com`.
    #[must_use]
    pub fn new(
        shop: &str,
        token: impl Into<String>,
        api_version: impl Into<String>,
    ) -> Self {
        Self::with_base_url(format!("https://{shop}"), token, api_version)
    }

    /// Create a client against an explicit base URL.
    ///
    /// Used by tests to point the client at a mock server.
    #[must_use]
    pub fn with_base_url(
        base_url: impl Into<String>,
        token: impl Into<String>,
        api_version: impl Into<String>,
    ) -> Self {
        let base_url = base_url.into();
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.into(),
            api_version: api_version.into(),
        }
    }

    /// Search for orders whose display name matches the given identifier.
    ///
    /// The identifier is normalized first (trimmed, `#` prefixed), then sent
    /// as the `name` query parameter with `status=any` so closed and
    /// cancelled orders still resolve. The `#` is percent-encoded on the
    /// wire; sent raw it would start a URL fragment and truncate the query.
    ///
    /// # Errors
    ///
    /// Returns [`ShopifyError::RequestFailed`] when the request never
    /// produces a response, [`ShopifyError::ApiError`] when the API answers
    /// with a non-success status, and [`ShopifyError::ResponseParseFailed`]
    /// when a success body does not parse as an orders envelope.
    pub async fn find_order_by_name(
        &self,
        raw_name: &str,
    ) -> Result<OrdersResponse, ShopifyError> {
        let name = normalize_order_name(raw_name);
        let url = format!(
            "{}/admin/api/{}/orders.json",
            self.base_url, self.api_version
        );

        let response = self
            .client
            .get(url)
            .header(ACCESS_TOKEN_HEADER, &self.token)
            .query(&[("name", name.as_str()), ("status", "any")])
            .send()
            .await
            .map_err(|e| ShopifyError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            response
                .json::<OrdersResponse>()
                .await
                .map_err(|e| ShopifyError::ResponseParseFailed(e.to_string()))
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(ShopifyError::ApiError {
                status: status.as_u16(),
                body,
            })
        }
    }
}

// Manual Debug so the access token never lands in logs.
impl std::fmt::Debug for ShopifyClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShopifyClient")
            .field("base_url", &self.base_url)
            .field("api_version", &self.api_version)
            .field("token", &"[REDACTED]")
            .finish()
    }
}
