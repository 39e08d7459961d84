//! # Order Status Relay
//!
//! A small HTTP service that lets a storefront widget look up the status of
//! an order without ever seeing Admin API credentials. The browser calls
//! `GET /order-status?order=1001`; the relay queries the Shopify orders
//! search with the server-held token and answers with a reshaped summary the
//! tracker UI can render directly.
//!
//! ## Architecture
//!
//! - [`config`] - environment-driven settings, loaded once at startup
//! - [`state`] - shared application state handed to every handler
//! - [`routes`] - router assembly with CORS and request tracing
//! - [`handlers`] - the lookup, health and banner endpoints
//! - [`error`] - the closed error set and its HTTP mapping

#![forbid(unsafe_code)]
#![warn(missing_docs, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

pub use config::Config;
pub use error::AppError;
pub use routes::build_router;
pub use state::AppState;

/// Result type for handlers in this crate.
pub type ApiResult<T> = Result<T, AppError>;
