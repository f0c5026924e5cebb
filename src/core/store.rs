//! Store trait for order persistence

use crate::core::order::{NewOrder, Order};
use anyhow::Result;
use async_trait::async_trait;

/// Persistence abstraction for orders
///
/// Implementations provide CRUD operations over a single relational table
/// (or equivalent). The service is agnostic to the underlying storage
/// mechanism; absence of a row is represented as `None` or `false`, never
/// as an error.
#[async_trait]
pub trait OrderStore: Send + Sync {
    /// Persist a new order, assigning the next id
    async fn create(&self, order: NewOrder) -> Result<Order>;

    /// Get an order by id
    async fn get(&self, id: i64) -> Result<Option<Order>>;

    /// List all orders, id-ascending
    async fn list(&self) -> Result<Vec<Order>>;

    /// Check whether an order with the given id exists
    async fn exists(&self, id: i64) -> Result<bool>;

    /// Overwrite the client-settable fields of an existing order
    ///
    /// `order_date` is immutable after create: implementations ignore the
    /// date carried by `order` and keep the stored one, returning the
    /// persisted result. Callers are expected to have confirmed existence
    /// first; updating an absent id is an error, not a silent insert.
    async fn update(&self, id: i64, order: Order) -> Result<Order>;

    /// Delete an order by id
    ///
    /// Callers are expected to have confirmed existence first.
    async fn delete(&self, id: i64) -> Result<()>;
}
