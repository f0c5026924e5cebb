//! SQLite storage backend using sqlx.
//!
//! Provides an [`SqliteOrderStore`] backed by an `sqlx::SqlitePool`. Orders
//! live in a single `orders` table with an auto-increment primary key.
//!
//! # Feature flag
//!
//! This module is gated behind the `sqlite` feature flag:
//! ```toml
//! [dependencies]
//! orders-rs = { version = "0.1", features = ["sqlite"] }
//! ```

use crate::core::order::{NewOrder, Order};
use crate::core::store::OrderStore;
use anyhow::{Context, Result};
use async_trait::async_trait;
use sqlx::{Row, SqlitePool, sqlite::SqliteRow};

/// Order store backed by SQLite.
#[derive(Clone, Debug)]
pub struct SqliteOrderStore {
    pool: SqlitePool,
}

impl SqliteOrderStore {
    /// Create a new `SqliteOrderStore` with the given connection pool.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Connect to the given database URL and ensure the schema exists.
    pub async fn connect(url: &str) -> Result<Self> {
        let pool = SqlitePool::connect(url)
            .await
            .with_context(|| format!("failed to connect to {}", url))?;
        let store = Self::new(pool);
        store.migrate().await?;
        Ok(store)
    }

    /// Create the orders table if it does not exist yet.
    pub async fn migrate(&self) -> Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS orders (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                customer_name TEXT NOT NULL,
                order_date TEXT NOT NULL,
                shipping_address TEXT NOT NULL,
                total REAL NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await
        .context("failed to create orders table")?;

        Ok(())
    }
}

fn row_to_order(row: &SqliteRow) -> Result<Order> {
    Ok(Order {
        id: row.try_get("id")?,
        customer_name: row.try_get("customer_name")?,
        order_date: row.try_get("order_date")?,
        shipping_address: row.try_get("shipping_address")?,
        total: row.try_get("total")?,
    })
}

#[async_trait]
impl OrderStore for SqliteOrderStore {
    async fn create(&self, order: NewOrder) -> Result<Order> {
        let result = sqlx::query(
            "INSERT INTO orders (customer_name, order_date, shipping_address, total) \
             VALUES (?, ?, ?, ?)",
        )
        .bind(&order.customer_name)
        .bind(order.order_date)
        .bind(&order.shipping_address)
        .bind(order.total)
        .execute(&self.pool)
        .await
        .context("failed to insert order")?;

        Ok(Order {
            id: result.last_insert_rowid(),
            customer_name: order.customer_name,
            order_date: order.order_date,
            shipping_address: order.shipping_address,
            total: order.total,
        })
    }

    async fn get(&self, id: i64) -> Result<Option<Order>> {
        let row = sqlx::query(
            "SELECT id, customer_name, order_date, shipping_address, total \
             FROM orders WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .context("failed to fetch order")?;

        row.as_ref().map(row_to_order).transpose()
    }

    async fn list(&self) -> Result<Vec<Order>> {
        let rows = sqlx::query(
            "SELECT id, customer_name, order_date, shipping_address, total \
             FROM orders ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await
        .context("failed to list orders")?;

        rows.iter().map(row_to_order).collect()
    }

    async fn exists(&self, id: i64) -> Result<bool> {
        let row = sqlx::query("SELECT 1 FROM orders WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .context("failed to check order existence")?;

        Ok(row.is_some())
    }

    async fn update(&self, id: i64, order: Order) -> Result<Order> {
        // order_date is immutable after create, so the column is not touched
        let result = sqlx::query(
            "UPDATE orders SET customer_name = ?, shipping_address = ?, total = ? \
             WHERE id = ?",
        )
        .bind(&order.customer_name)
        .bind(&order.shipping_address)
        .bind(order.total)
        .bind(id)
        .execute(&self.pool)
        .await
        .context("failed to update order")?;

        if result.rows_affected() == 0 {
            anyhow::bail!("Order not found: {}", id);
        }

        self.get(id)
            .await?
            .ok_or_else(|| anyhow::anyhow!("Order not found: {}", id))
    }

    async fn delete(&self, id: i64) -> Result<()> {
        sqlx::query("DELETE FROM orders WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .context("failed to delete order")?;

        Ok(())
    }
}
