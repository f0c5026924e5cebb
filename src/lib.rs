//! # orders-rs
//!
//! A small CRUD HTTP service for managing orders backed by a relational
//! table: one resource, one table, one set of handlers mapping HTTP verbs
//! to store calls, plus explicit validation and uniform error translation.
//!
//! ## Features
//!
//! - **Typed errors**: every failure maps to a status code and a uniform
//!   `{message, errors[]}` JSON body
//! - **Collect-all validation**: a request with several problems gets every
//!   violation reported at once, as ordered `"field: message"` entries
//! - **Pluggable storage**: an async `OrderStore` trait with an in-memory
//!   backend (default) and an SQLite backend behind the `sqlite` feature
//! - **Configuration-based**: listen address and storage backend via YAML
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use orders::prelude::*;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let store: Arc<dyn OrderStore> = Arc::new(InMemoryOrderStore::new());
//!     let app = build_order_routes(AppState::new(store));
//!
//!     let listener = tokio::net::TcpListener::bind("0.0.0.0:3000").await?;
//!     axum::serve(listener, app).await?;
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod core;
pub mod server;
pub mod storage;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core ===
    pub use crate::core::{
        error::{ErrorBody, OrderError},
        order::{NewOrder, Order, OrderPayload},
        store::OrderStore,
        validation::validate_payload,
    };

    // === Storage ===
    pub use crate::storage::InMemoryOrderStore;
    #[cfg(feature = "sqlite")]
    pub use crate::storage::SqliteOrderStore;

    // === Config ===
    pub use crate::config::{ServerConfig, StorageConfig};

    // === Server ===
    pub use crate::server::{AppState, build_order_routes};

    // === External dependencies ===
    pub use anyhow::Result;
    pub use async_trait::async_trait;
    pub use chrono::NaiveDate;
    pub use serde::{Deserialize, Serialize};
}
