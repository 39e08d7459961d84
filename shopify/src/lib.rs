//! # Shopify Admin API Order Lookup Client
//!
//! A small, read-only client for the orders search endpoint of the Shopify
//! Admin REST API. It covers exactly what a storefront status page needs:
//! find an order by its display name (`#1001`) and hand back the raw order
//! records for the caller to reshape.
//!
//! ## Features
//!
//! - Order search by display name, with or without the leading `#`
//! - Token authentication via the `X-Shopify-Access-Token` header
//! - Injectable base URL so tests can point at a mock server
//! - Errors that separate transport failures from upstream rejections
//!
//! ## Example
//!
//! ```no_run
//! use order_status_shopify::ShopifyClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = ShopifyClient::new(
//!         "my-shop.myshopify.com",
//!         "shpat_example_token",
//!         "2024-01",
//!     );
//!
//!     let found = client.find_order_by_name("1001").await?;
//!     println!("matched {} order(s)", found.orders.len());
//!
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod error;
pub mod orders;

pub use client::ShopifyClient;
pub use error::ShopifyError;
pub use orders::{normalize_order_name, Order, OrdersResponse};
