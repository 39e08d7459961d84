//! Configuration management for the relay.
//!
//! All settings come from environment variables (a `.env` file is honored in
//! development). Nothing here panics: missing upstream settings leave the
//! relay serving health checks and configuration errors instead of refusing
//! to boot.

use std::env;

/// Admin API version used when `SHOPIFY_API_VERSION` is not set.
pub const DEFAULT_API_VERSION: &str = "2024-01";

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Upstream Shopify settings
    pub shopify: ShopifyConfig,
    /// HTTP listener settings
    pub server: ServerConfig,
}

/// Upstream Shopify settings.
#[derive(Clone)]
pub struct ShopifyConfig {
    /// Shop domain, e.g. `my-shop.myshopify.com`
    pub shop: Option<String>,
    /// Admin API access token
    pub admin_token: Option<String>,
    /// Admin API version segment of the endpoint path
    pub api_version: String,
}

/// HTTP listener settings.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Host to bind to
    pub host: String,
    /// Port to bind to
    pub port: u16,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// `SHOPIFY_SHOP` and `SHOPIFY_ADMIN_TOKEN` have no defaults; when either
    /// is absent the relay still starts, but lookups answer with a
    /// configuration error until both are set.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            shopify: ShopifyConfig {
                shop: non_empty_var("SHOPIFY_SHOP"),
                admin_token: non_empty_var("SHOPIFY_ADMIN_TOKEN"),
                api_version: non_empty_var("SHOPIFY_API_VERSION")
                    .unwrap_or_else(|| DEFAULT_API_VERSION.to_string()),
            },
            server: ServerConfig {
                host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: env::var("PORT")
                    .ok()
                    .and_then(|p| p.parse().ok())
                    .unwrap_or(3000),
            },
        }
    }
}

impl ShopifyConfig {
    /// Whether both required upstream settings are present.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.shop.is_some() && self.admin_token.is_some()
    }

    /// Names of required environment variables that are not set.
    #[must_use]
    pub fn missing_vars(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.shop.is_none() {
            missing.push("SHOPIFY_SHOP");
        }
        if self.admin_token.is_none() {
            missing.push("SHOPIFY_ADMIN_TOKEN");
        }
        missing
    }
}

// Manual Debug so the admin token never lands in logs.
impl std::fmt::Debug for ShopifyConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShopifyConfig")
            .field("shop", &self.shop)
            .field("admin_token", &self.admin_token.as_ref().map(|_| "[REDACTED]"))
            .field("api_version", &self.api_version)
            .finish()
    }
}

/// Read an environment variable, treating empty or blank values as unset.
fn non_empty_var(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
