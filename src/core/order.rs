//! The order entity and its request payload

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A persisted order.
///
/// The `id` is assigned by the store on creation and never changes.
/// `order_date` is set to the current date when the order is created and is
/// left untouched by updates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Store-assigned identifier
    pub id: i64,

    /// Name of the customer placing the order
    pub customer_name: String,

    /// Date the order was placed, assigned on creation
    pub order_date: NaiveDate,

    /// Shipping address for the order
    pub shipping_address: String,

    /// Total amount of the order
    pub total: f64,
}

/// An order that has not been persisted yet.
///
/// Produced by the create handler after validation; the store assigns the id.
#[derive(Debug, Clone)]
pub struct NewOrder {
    pub customer_name: String,
    pub order_date: NaiveDate,
    pub shipping_address: String,
    pub total: f64,
}

/// Request body for creating or updating an order.
///
/// Every field is optional at the deserialization layer so that missing or
/// null fields reach validation instead of failing JSON binding. This is what
/// lets a request with several problems get all of them reported at once.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderPayload {
    pub customer_name: Option<String>,
    pub shipping_address: Option<String>,
    pub total: Option<f64>,
}

impl OrderPayload {
    /// Build the unpersisted order from a payload that already passed
    /// validation, stamping it with the given order date.
    pub fn into_new_order(self, order_date: NaiveDate) -> NewOrder {
        NewOrder {
            customer_name: self.customer_name.unwrap_or_default(),
            order_date,
            shipping_address: self.shipping_address.unwrap_or_default(),
            total: self.total.unwrap_or_default(),
        }
    }

    /// Overwrite the client-settable fields of an existing order.
    ///
    /// The id and order date are deliberately left unchanged.
    pub fn apply_to(self, order: &mut Order) {
        order.customer_name = self.customer_name.unwrap_or_default();
        order.shipping_address = self.shipping_address.unwrap_or_default();
        order.total = self.total.unwrap_or_default();
    }
}
