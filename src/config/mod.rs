//! Configuration loading and management

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Storage backend selection
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "backend", rename_all = "lowercase")]
pub enum StorageConfig {
    /// Volatile in-memory store, useful for development and tests
    Memory,

    /// SQLite store (requires the `sqlite` feature)
    Sqlite {
        /// Database URL, e.g. `sqlite://orders.db` or `sqlite::memory:`
        database_url: String,
    },
}

impl Default for StorageConfig {
    fn default() -> Self {
        StorageConfig::Memory
    }
}

/// Complete configuration for the orders server
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Address to bind the HTTP listener to
    #[serde(default = "default_listen")]
    pub listen: String,

    /// Storage backend
    #[serde(default)]
    pub storage: StorageConfig,
}

fn default_listen() -> String {
    "0.0.0.0:3000".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen: default_listen(),
            storage: StorageConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path))?;
        Self::from_yaml_str(&content)
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml).context("invalid config")?;
        Ok(config)
    }
}
