//! Configuration data models
//!
//! One file per section of the YAML config, plus the serde default values
//! the sections share.

#![allow(missing_docs)]

pub mod alerts;
pub mod server;
pub mod service;
pub mod storage;

pub use alerts::*;
pub use server::*;
pub use service::*;
pub use storage::*;

/// Default bind host
pub fn default_host() -> String {
    "0.0.0.0".to_string()
}

/// Default bind port
pub fn default_port() -> u16 {
    8000
}

/// Default request timeout in seconds
pub fn default_timeout() -> u64 {
    30
}

/// Default maximum body size in bytes (1 MiB)
pub fn default_max_body_size() -> usize {
    1024 * 1024
}

/// Default database pool size
pub fn default_max_connections() -> u32 {
    10
}

/// Default database connect timeout in seconds
pub fn default_connection_timeout() -> u64 {
    5
}

/// Default retention window for dismissed alerts, in days
pub fn default_retention_days() -> i64 {
    30
}

/// Default cleanup cadence, in hours
pub fn default_cleanup_interval_hours() -> u64 {
    24
}
