//! HTTP handlers for the relay's endpoints.

pub mod health;
pub mod order_status;
