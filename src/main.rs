//! Binary entry point for the orders server

use std::sync::Arc;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use orders::config::{ServerConfig, StorageConfig};
use orders::core::store::OrderStore;
use orders::server::{AppState, build_order_routes};
use orders::storage::InMemoryOrderStore;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = load_config()?;
    let store = build_store(&config).await?;

    let app = build_order_routes(AppState::new(store));

    let listener = tokio::net::TcpListener::bind(&config.listen).await?;
    tracing::info!(addr = %listener.local_addr()?, "orders server listening");

    axum::serve(listener, app).await?;

    Ok(())
}

/// Load configuration from the file named by `ORDERS_CONFIG`, falling back
/// to defaults when the variable is unset.
fn load_config() -> Result<ServerConfig> {
    match std::env::var("ORDERS_CONFIG") {
        Ok(path) => {
            tracing::info!(path = %path, "loading configuration");
            ServerConfig::from_yaml_file(&path)
        }
        Err(_) => Ok(ServerConfig::default()),
    }
}

async fn build_store(config: &ServerConfig) -> Result<Arc<dyn OrderStore>> {
    match &config.storage {
        StorageConfig::Memory => {
            tracing::info!("using in-memory store");
            Ok(Arc::new(InMemoryOrderStore::new()))
        }
        #[cfg(feature = "sqlite")]
        StorageConfig::Sqlite { database_url } => {
            tracing::info!(url = %database_url, "using sqlite store");
            let store = orders::storage::SqliteOrderStore::connect(database_url).await?;
            Ok(Arc::new(store))
        }
        #[cfg(not(feature = "sqlite"))]
        StorageConfig::Sqlite { .. } => {
            anyhow::bail!("sqlite backend requested but the `sqlite` feature is not enabled")
        }
    }
}
