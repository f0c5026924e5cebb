//! HTTP handlers for order operations
//!
//! Each handler follows the same shape: deserialize, validate, call the
//! store, translate the outcome into a status code and JSON body. All
//! failures are expressed as [`OrderError`] and converted by its
//! `IntoResponse` impl.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use std::sync::Arc;

use crate::core::error::OrderError;
use crate::core::order::{Order, OrderPayload};
use crate::core::store::OrderStore;
use crate::core::validation::validate_payload;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn OrderStore>,
}

impl AppState {
    /// Create a state wrapping the given store
    pub fn new(store: Arc<dyn OrderStore>) -> Self {
        Self { store }
    }
}

/// Unwrap the JSON extractor result, mapping rejections to a 400.
///
/// A body that cannot be parsed at all gets the same status as one that
/// parses but fails validation; only the message differs.
fn require_payload(
    payload: Result<Json<OrderPayload>, JsonRejection>,
) -> Result<OrderPayload, OrderError> {
    match payload {
        Ok(Json(payload)) => Ok(payload),
        Err(rejection) => Err(OrderError::Malformed(rejection.body_text())),
    }
}

/// Health check
///
/// GET /health
pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

/// Create an order
///
/// POST /orders
///
/// Validates the payload, stamps today's date, persists, returns 201 with
/// the created order (including its assigned id).
pub async fn create_order(
    State(state): State<AppState>,
    payload: Result<Json<OrderPayload>, JsonRejection>,
) -> Result<(StatusCode, Json<Order>), OrderError> {
    let payload = require_payload(payload)?;

    let errors = validate_payload(&payload);
    if !errors.is_empty() {
        return Err(OrderError::Validation(errors));
    }

    let today = chrono::Local::now().date_naive();
    let created = state.store.create(payload.into_new_order(today)).await?;

    tracing::info!(id = created.id, "order created");

    Ok((StatusCode::CREATED, Json(created)))
}

/// List all orders
///
/// GET /orders
pub async fn list_orders(
    State(state): State<AppState>,
) -> Result<Json<Vec<Order>>, OrderError> {
    let orders = state.store.list().await?;
    Ok(Json(orders))
}

/// Get an order by id
///
/// GET /orders/{id}
pub async fn get_order(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Order>, OrderError> {
    let order = state
        .store
        .get(id)
        .await?
        .ok_or(OrderError::NotFound { id })?;

    Ok(Json(order))
}

/// Update an order
///
/// PUT /orders/{id}
///
/// Overwrites customerName, shippingAddress and total; id and orderDate are
/// left unchanged.
pub async fn update_order(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    payload: Result<Json<OrderPayload>, JsonRejection>,
) -> Result<Json<Order>, OrderError> {
    let payload = require_payload(payload)?;

    let errors = validate_payload(&payload);
    if !errors.is_empty() {
        return Err(OrderError::Validation(errors));
    }

    let mut order = state
        .store
        .get(id)
        .await?
        .ok_or(OrderError::NotFound { id })?;

    payload.apply_to(&mut order);
    let updated = state.store.update(id, order).await?;

    tracing::info!(id, "order updated");

    Ok(Json(updated))
}

/// Delete an order
///
/// DELETE /orders/{id}
///
/// Returns a plain-text confirmation on success.
pub async fn delete_order(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<(StatusCode, &'static str), OrderError> {
    if !state.store.exists(id).await? {
        return Err(OrderError::NotFound { id });
    }

    state.store.delete(id).await?;

    tracing::info!(id, "order deleted");

    Ok((StatusCode::OK, "Order deleted successfully"))
}
