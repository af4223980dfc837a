//! Configuration loading and management

use crate::core::error::ConfigError;
use crate::entities::{category::Category, order::Order, product::Product};
use anyhow::Result;
use serde::{Deserialize, Serialize};

/// HTTP listener settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Interface to bind (e.g., "127.0.0.1", "0.0.0.0")
    pub host: String,

    /// TCP port
    pub port: u16,

    /// Accept cross-origin requests from any origin
    pub permissive_cors: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            permissive_cors: true,
        }
    }
}

impl ServerConfig {
    /// `host:port` string suitable for binding
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Logging settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// `tracing_subscriber::EnvFilter` directive, overridden by `RUST_LOG`
    pub filter: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: "info,tower_http=debug".to_string(),
        }
    }
}

/// Dashboard settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Number of most recent orders shown on the overview
    pub recent_orders: usize,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self { recent_orders: 3 }
    }
}

/// Which record store backend to use
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StoreBackend {
    #[default]
    InMemory,
    Remote,
}

/// Record store settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    pub backend: StoreBackend,

    /// Base URL of the hosted service (remote backend)
    pub url: Option<String>,

    /// API key sent as `apikey` and bearer token (remote backend)
    pub api_key: Option<String>,

    /// YAML file of initial records (in-memory backend)
    pub seed: Option<String>,
}

/// Complete application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AdminConfig {
    pub server: ServerConfig,
    pub log: LogConfig,
    pub dashboard: DashboardConfig,
    pub store: StoreConfig,
}

impl AdminConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::IoError {
            message: format!("{}: {}", path, e),
        })?;
        let config: Self =
            serde_yaml::from_str(&content).map_err(|e| ConfigError::ParseError {
                file: Some(path.to_string()),
                message: e.to_string(),
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Check cross-field constraints
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.dashboard.recent_orders == 0 {
            return Err(ConfigError::InvalidValue {
                field: "dashboard.recent_orders".to_string(),
                value: "0".to_string(),
                message: "must be at least 1".to_string(),
            });
        }

        if self.store.backend == StoreBackend::Remote {
            if self.store.url.as_deref().is_none_or(str::is_empty) {
                return Err(ConfigError::InvalidValue {
                    field: "store.url".to_string(),
                    value: String::new(),
                    message: "required for the remote backend".to_string(),
                });
            }
            if self.store.api_key.as_deref().is_none_or(str::is_empty) {
                return Err(ConfigError::InvalidValue {
                    field: "store.api_key".to_string(),
                    value: String::new(),
                    message: "required for the remote backend".to_string(),
                });
            }
        }

        Ok(())
    }
}

/// Initial records for the in-memory backend
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SeedData {
    pub categories: Vec<Category>,
    pub products: Vec<Product>,
    pub orders: Vec<Order>,
}

impl SeedData {
    /// Load seed records from a YAML file
    pub fn from_yaml_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::IoError {
            message: format!("{}: {}", path, e),
        })?;
        let seed = serde_yaml::from_str(&content).map_err(|e| ConfigError::ParseError {
            file: Some(path.to_string()),
            message: e.to_string(),
        })?;
        Ok(seed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AdminConfig::default();
        assert_eq!(config.server.address(), "127.0.0.1:3000");
        assert_eq!(config.dashboard.recent_orders, 3);
        assert_eq!(config.store.backend, StoreBackend::InMemory);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let config = AdminConfig::from_yaml_str("server:\n  port: 8080\n").unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.log.filter, LogConfig::default().filter);
    }

    #[test]
    fn test_yaml_serialization() {
        let config = AdminConfig::default();
        let yaml = serde_yaml::to_string(&config).unwrap();

        let parsed = AdminConfig::from_yaml_str(&yaml).unwrap();
        assert_eq!(parsed.server.address(), config.server.address());
        assert_eq!(parsed.store.backend, config.store.backend);
    }

    #[test]
    fn test_remote_backend_requires_url_and_key() {
        let err = AdminConfig::from_yaml_str("store:\n  backend: remote\n").unwrap_err();
        assert!(err.to_string().contains("store.url"));

        let err = AdminConfig::from_yaml_str(
            "store:\n  backend: remote\n  url: https://db.example.com\n",
        )
        .unwrap_err();
        assert!(err.to_string().contains("store.api_key"));
    }

    #[test]
    fn test_zero_recent_orders_rejected() {
        let err = AdminConfig::from_yaml_str("dashboard:\n  recent_orders: 0\n").unwrap_err();
        assert!(err.to_string().contains("recent_orders"));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = AdminConfig::from_yaml_file("/nonexistent/shop-admin.yaml").unwrap_err();
        assert!(err.to_string().contains("IO error"));
    }
}
