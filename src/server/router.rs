//! Router construction for the order routes

use axum::{Router, routing::get};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::server::handlers::{
    AppState, create_order, delete_order, get_order, health, list_orders, update_order,
};

/// Build the order routes
///
/// - GET    /health       - Health check
/// - POST   /orders       - Create an order
/// - GET    /orders       - List all orders
/// - GET    /orders/{id}  - Get an order by id
/// - PUT    /orders/{id}  - Update an order
/// - DELETE /orders/{id}  - Delete an order
pub fn build_order_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/orders", get(list_orders).post(create_order))
        .route(
            "/orders/{id}",
            get(get_order).put(update_order).delete(delete_order),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
