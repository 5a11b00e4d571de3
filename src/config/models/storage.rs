//! Storage configuration

use super::*;
use serde::{Deserialize, Serialize};

/// Storage configuration
///
/// The alert store is a single relational database; everything the engine
/// persists (items and alerts) lives in it.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct StorageConfig {
    /// Database connection settings
    pub database: DatabaseConfig,
}

impl StorageConfig {
    /// Merge storage configurations, with `other` winning where it was set
    pub fn merge(mut self, other: Self) -> Self {
        self.database = self.database.merge(other.database);
        self
    }
}

/// Database connection settings
///
/// `postgresql://` and `sqlite://` URLs are supported; a PostgreSQL URL
/// that cannot be reached falls back to a local SQLite file at startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Connection URL
    pub url: String,
    /// Connection pool size
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    /// Connect timeout in seconds
    #[serde(default = "default_connection_timeout")]
    pub connection_timeout: u64,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: default_database_url(),
            max_connections: default_max_connections(),
            connection_timeout: default_connection_timeout(),
        }
    }
}

impl DatabaseConfig {
    /// Merge database settings, with `other` winning where it was set
    pub fn merge(mut self, other: Self) -> Self {
        if !other.url.is_empty() && other.url != default_database_url() {
            self.url = other.url;
        }
        if other.max_connections != default_max_connections() {
            self.max_connections = other.max_connections;
        }
        if other.connection_timeout != default_connection_timeout() {
            self.connection_timeout = other.connection_timeout;
        }
        self
    }
}

fn default_database_url() -> String {
    "postgresql://localhost/freshguard".to_string()
}
