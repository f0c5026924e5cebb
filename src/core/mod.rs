//! Core module containing the order entity, validation rules, store trait
//! and error types

pub mod error;
pub mod order;
pub mod store;
pub mod validation;

pub use error::{ErrorBody, OrderError};
pub use order::{NewOrder, Order, OrderPayload};
pub use store::OrderStore;
pub use validation::validate_payload;
