//! Main service configuration

#![allow(missing_docs)]

use super::*;
use serde::{Deserialize, Serialize};

/// Main service configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ServiceConfig {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Storage configuration
    #[serde(default)]
    pub storage: StorageConfig,
    /// Alert engine configuration
    #[serde(default)]
    pub alerts: AlertsConfig,
}

impl ServiceConfig {
    pub fn from_env() -> crate::utils::error::Result<Self> {
        let mut config = Self::default();

        if let Ok(url) = std::env::var("FRESHGUARD_DATABASE_URL") {
            config.storage.database.url = url;
        }
        if let Ok(host) = std::env::var("FRESHGUARD_HOST") {
            config.server.host = host;
        }
        if let Ok(port) = std::env::var("FRESHGUARD_PORT") {
            config.server.port = port.parse().map_err(|_| {
                crate::utils::error::AppError::Config(format!("Invalid FRESHGUARD_PORT: {}", port))
            })?;
        }

        Ok(config)
    }

    /// Merge two configurations, with other taking precedence
    pub fn merge(mut self, other: Self) -> Self {
        self.server = self.server.merge(other.server);
        self.storage = self.storage.merge(other.storage);
        self.alerts = self.alerts.merge(other.alerts);
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        // Validate server config
        if self.server.port == 0 {
            return Err("Server port cannot be 0".to_string());
        }

        // Validate storage config
        if self.storage.database.url.is_empty() {
            return Err("Database URL is required".to_string());
        }

        // Validate alert engine config
        self.alerts.validate()?;

        Ok(())
    }
}
