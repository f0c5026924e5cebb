//! Explicit field validation rules
//!
//! Rules are small functions returning `Option<String>` with a
//! `"field: message"` entry on violation. [`validate_payload`] runs every
//! rule and collects all violations in field order, so a client sees every
//! problem with its request at once instead of fixing them one at a time.

use crate::core::order::OrderPayload;

/// Rule: string field must be present and contain at least one
/// non-whitespace character
pub fn non_blank(field: &str, value: Option<&str>, message: &str) -> Option<String> {
    match value {
        Some(s) if !s.trim().is_empty() => None,
        _ => Some(format!("{}: {}", field, message)),
    }
}

/// Rule: numeric field must be present and strictly greater than zero
pub fn positive(field: &str, value: Option<f64>, message: &str) -> Option<String> {
    match value {
        Some(n) if n > 0.0 => None,
        _ => Some(format!("{}: {}", field, message)),
    }
}

/// Validate an order payload, collecting every violation.
///
/// Returns the violations in field order: customerName, shippingAddress,
/// total. An empty vector means the payload is valid.
pub fn validate_payload(payload: &OrderPayload) -> Vec<String> {
    let rules = [
        non_blank(
            "customerName",
            payload.customer_name.as_deref(),
            "Customer name must not be blank",
        ),
        non_blank(
            "shippingAddress",
            payload.shipping_address.as_deref(),
            "Shipping address must not be blank",
        ),
        positive(
            "total",
            payload.total,
            "Total must be a positive number",
        ),
    ];

    rules.into_iter().flatten().collect()
}
