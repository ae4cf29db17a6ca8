//! Service configuration
//!
//! Loaded from a JSON file by the CLI. The storage section is
//! optional: a service started without one reports storage as not
//! ready and serves empty data.

use serde::{Deserialize, Serialize};

/// Top-level service configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Host to bind the API server to.
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind the API server to.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Storage connection configuration, absent when the service runs
    /// without a backing store.
    #[serde(default)]
    pub storage: Option<StorageConfig>,
}

/// Storage connection configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Database name holding the content view collection.
    #[serde(default = "default_database")]
    pub database: String,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    7171
}

fn default_database() -> String {
    "viewstore".to_string()
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            storage: Some(StorageConfig::default()),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            database: default_database(),
        }
    }
}

impl ServiceConfig {
    /// The full bind address for the API server.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ServiceConfig::default();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 7171);
        assert!(config.storage.is_some());
    }

    #[test]
    fn test_bind_addr() {
        let config = ServiceConfig::default();
        assert_eq!(config.bind_addr(), "127.0.0.1:7171");
    }

    #[test]
    fn test_missing_storage_section_parses_to_none() {
        let config: ServiceConfig =
            serde_json::from_str(r#"{"host": "0.0.0.0", "port": 8080}"#).unwrap();
        assert!(config.storage.is_none());
        assert_eq!(config.bind_addr(), "0.0.0.0:8080");
    }

    #[test]
    fn test_storage_section_with_defaults() {
        let config: ServiceConfig = serde_json::from_str(r#"{"storage": {}}"#).unwrap();
        assert_eq!(config.storage.unwrap().database, "viewstore");
    }
}
