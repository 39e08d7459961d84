//! Application state shared across HTTP handlers.

use crate::config::Config;
use order_status_shopify::ShopifyClient;
use std::sync::Arc;

/// Application state shared across all HTTP handlers.
///
/// Cloned cheaply for each request. The upstream client is only present
/// when both required Shopify settings were configured at startup; the
/// lookup handler translates its absence into a configuration error.
#[derive(Clone, Debug)]
pub struct AppState {
    /// Startup configuration
    pub config: Arc<Config>,
    /// Upstream Admin API client, when configured
    pub shopify: Option<ShopifyClient>,
}

impl AppState {
    /// Build state from startup configuration.
    ///
    /// The upstream client is constructed only when the shop domain and the
    /// admin token are both present.
    #[must_use]
    pub fn new(config: Config) -> Self {
        let shopify = match (&config.shopify.shop, &config.shopify.admin_token) {
            (Some(shop), Some(token)) => Some(ShopifyClient::new(
                shop,
                token.clone(),
                config.shopify.api_version.clone(),
            )),
            _ => None,
        };

        Self {
            config: Arc::new(config),
            shopify,
        }
    }

    /// Build state around an already-constructed upstream client.
    ///
    /// Lets tests point the relay at a mock upstream server.
    #[must_use]
    pub fn with_client(config: Config, shopify: ShopifyClient) -> Self {
        Self {
            config: Arc::new(config),
            shopify: Some(shopify),
        }
    }
}
