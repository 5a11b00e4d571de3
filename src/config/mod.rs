//! Configuration loading and validation
//!
//! Settings come from a YAML file (see `config/freshguard.yaml.example`)
//! or, when no file is present, from defaults plus `FRESHGUARD_*`
//! environment overrides. Every load path validates before returning.

pub mod models;

pub use models::*;

use crate::utils::error::{AppError, Result};
use std::path::Path;
use tracing::{debug, info};

/// Top-level configuration handle
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Service configuration
    pub service: ServiceConfig,
}

impl Config {
    /// Load and validate configuration from a YAML file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {:?}", path);

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| AppError::Config(format!("Failed to read config file: {}", e)))?;

        let service: ServiceConfig = serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("Failed to parse config: {}", e)))?;

        let config = Self { service };

        config.validate()?;

        debug!("Configuration loaded successfully");
        Ok(config)
    }

    /// Build configuration from defaults plus environment overrides
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let service = ServiceConfig::from_env()?;
        let config = Self { service };

        config.validate()?;
        Ok(config)
    }

    /// Get server configuration
    pub fn server(&self) -> &ServerConfig {
        &self.service.server
    }

    /// Get storage configuration
    pub fn storage(&self) -> &StorageConfig {
        &self.service.storage
    }

    /// Get alert engine configuration
    pub fn alerts(&self) -> &AlertsConfig {
        &self.service.alerts
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        debug!("Validating configuration");

        self.service
            .server
            .validate()
            .map_err(|e| AppError::Config(format!("Server config error: {}", e)))?;

        self.service
            .server
            .cors
            .validate()
            .map_err(|e| AppError::Config(format!("CORS config error: {}", e)))?;

        // Service-wide rules: database URL, alert retention knobs
        self.service.validate().map_err(AppError::Config)?;

        debug!("Configuration validation completed");
        Ok(())
    }

    /// Merge with another configuration (other takes precedence)
    pub fn merge(mut self, other: Self) -> Self {
        self.service = self.service.merge(other.service);
        self
    }

    /// Convert to JSON string
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(&self.service)
            .map_err(|e| AppError::Config(format!("Failed to serialize config to JSON: {}", e)))
    }

    /// Convert to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(&self.service)
            .map_err(|e| AppError::Config(format!("Failed to serialize config to YAML: {}", e)))
    }
}
