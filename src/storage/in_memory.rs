//! In-memory implementation of OrderStore for testing and development

use crate::core::order::{NewOrder, Order};
use crate::core::store::OrderStore;
use anyhow::{Result, anyhow};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

struct Inner {
    orders: BTreeMap<i64, Order>,
    next_id: i64,
}

/// In-memory order store
///
/// Useful for testing and development. Uses RwLock for thread-safe access;
/// a BTreeMap keeps listing in id order, matching what an auto-increment
/// primary key gives a relational backend.
#[derive(Clone)]
pub struct InMemoryOrderStore {
    inner: Arc<RwLock<Inner>>,
}

impl InMemoryOrderStore {
    /// Create a new empty in-memory store
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(Inner {
                orders: BTreeMap::new(),
                next_id: 1,
            })),
        }
    }
}

impl Default for InMemoryOrderStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl OrderStore for InMemoryOrderStore {
    async fn create(&self, order: NewOrder) -> Result<Order> {
        let mut inner = self
            .inner
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        let id = inner.next_id;
        inner.next_id += 1;

        let order = Order {
            id,
            customer_name: order.customer_name,
            order_date: order.order_date,
            shipping_address: order.shipping_address,
            total: order.total,
        };
        inner.orders.insert(id, order.clone());

        Ok(order)
    }

    async fn get(&self, id: i64) -> Result<Option<Order>> {
        let inner = self
            .inner
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        Ok(inner.orders.get(&id).cloned())
    }

    async fn list(&self) -> Result<Vec<Order>> {
        let inner = self
            .inner
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        Ok(inner.orders.values().cloned().collect())
    }

    async fn exists(&self, id: i64) -> Result<bool> {
        let inner = self
            .inner
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        Ok(inner.orders.contains_key(&id))
    }

    async fn update(&self, id: i64, order: Order) -> Result<Order> {
        let mut inner = self
            .inner
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        let Some(existing) = inner.orders.get(&id) else {
            return Err(anyhow!("Order not found: {}", id));
        };

        // order_date is immutable after create
        let order = Order {
            order_date: existing.order_date,
            ..order
        };
        inner.orders.insert(id, order.clone());

        Ok(order)
    }

    async fn delete(&self, id: i64) -> Result<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        inner.orders.remove(&id);

        Ok(())
    }
}
