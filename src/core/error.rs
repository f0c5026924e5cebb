//! Typed error handling for the orders service
//!
//! Every failure path in the service maps to one of the [`OrderError`]
//! variants, which in turn maps to an HTTP status code and a uniform JSON
//! body of the shape `{ "message": ..., "errors": [...] }`.
//!
//! # Error Categories
//!
//! - `NotFound`: the requested order id does not exist (404)
//! - `Validation`: the payload failed one or more field rules (400)
//! - `Malformed`: the request body could not be parsed as JSON (400)
//! - `Internal`: a store or other unexpected failure (500)
//!
//! Every client-side payload problem is a 400, so the contract is the same
//! on create and update.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;

/// The main error type for the orders service
#[derive(Debug, Error)]
pub enum OrderError {
    /// No order exists with the requested id
    #[error("Order not found with id: {id}")]
    NotFound { id: i64 },

    /// The payload violated one or more field rules
    ///
    /// Each entry is a `"field: message"` string; all violations for a
    /// request are collected before this error is produced.
    #[error("Validation Error ({} violation(s))", .0.len())]
    Validation(Vec<String>),

    /// The request body was not valid JSON for the expected shape
    #[error("Malformed JSON request: {0}")]
    Malformed(String),

    /// Unexpected failure, typically from the store
    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

/// Error response body for HTTP responses
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// Human-readable summary of the failure
    pub message: String,
    /// Itemized details; empty when the message alone is enough
    pub errors: Vec<String>,
}

impl OrderError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            OrderError::NotFound { .. } => StatusCode::NOT_FOUND,
            OrderError::Validation(_) => StatusCode::BAD_REQUEST,
            OrderError::Malformed(_) => StatusCode::BAD_REQUEST,
            OrderError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Convert to the uniform error response body
    pub fn to_body(&self) -> ErrorBody {
        match self {
            OrderError::NotFound { id } => ErrorBody {
                message: format!("Order not found with id: {}", id),
                errors: Vec::new(),
            },
            OrderError::Validation(errors) => ErrorBody {
                message: "Validation Error".to_string(),
                errors: errors.clone(),
            },
            OrderError::Malformed(detail) => ErrorBody {
                message: "Malformed JSON request".to_string(),
                errors: vec![detail.clone()],
            },
            OrderError::Internal(e) => ErrorBody {
                message: "Internal Server Error".to_string(),
                errors: vec![e.to_string()],
            },
        }
    }
}

impl IntoResponse for OrderError {
    fn into_response(self) -> Response {
        if let OrderError::Internal(e) = &self {
            tracing::error!(error = %e, "request failed with internal error");
        }
        let status = self.status_code();
        let body = Json(self.to_body());
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_returns_404_with_id_in_message() {
        let err = OrderError::NotFound { id: 999 };
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);

        let body = err.to_body();
        assert_eq!(body.message, "Order not found with id: 999");
        assert!(body.errors.is_empty());
    }

    #[test]
    fn validation_returns_400_with_itemized_errors() {
        let err = OrderError::Validation(vec![
            "customerName: Customer name must not be blank".to_string(),
            "total: Total must be a positive number".to_string(),
        ]);
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);

        let body = err.to_body();
        assert_eq!(body.message, "Validation Error");
        assert_eq!(body.errors.len(), 2);
    }

    #[test]
    fn malformed_returns_400() {
        let err = OrderError::Malformed("expected value at line 1".to_string());
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_body().message, "Malformed JSON request");
    }

    #[test]
    fn internal_returns_500_with_underlying_message() {
        let err = OrderError::from(anyhow::anyhow!("connection refused"));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = err.to_body();
        assert_eq!(body.message, "Internal Server Error");
        assert_eq!(body.errors, vec!["connection refused".to_string()]);
    }

    #[test]
    fn error_body_serializes_message_and_errors() {
        let body = OrderError::NotFound { id: 42 }.to_body();
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value["message"], "Order not found with id: 42");
        assert_eq!(value["errors"], serde_json::json!([]));
    }
}
