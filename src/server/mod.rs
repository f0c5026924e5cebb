//! Server module wiring HTTP handlers to the order store
//!
//! This module provides the axum handlers for the `/orders` resource and a
//! router constructor that mounts them with tracing and CORS layers.

pub mod handlers;
pub mod router;

pub use handlers::AppState;
pub use router::build_order_routes;
