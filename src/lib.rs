//! # FreshGuard
//!
//! Expiration alert service for a food-inventory application. Consumes
//! per-item waste risk scores written by an external scorer and turns them
//! into deduplicated, classified, time-bounded user alerts.
//!
//! ## Features
//!
//! - **Alert lifecycle engine**: creation, dismissal, and retention cleanup
//!   of expiration alerts, at most one active alert per item
//! - **Severity classification**: risk scores map to `consume_now`,
//!   `expiring_soon`, or `high_risk` at creation time
//! - **SeaORM store**: PostgreSQL with SQLite fallback, schema migrations
//!   included
//! - **HTTP surface**: actix-web JSON API consumed by the web front end
//! - **Background cleanup**: periodic purge of long-dismissed alerts
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use freshguard::{Config, HttpServer};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_file("config/freshguard.yaml").await?;
//!     let server = HttpServer::new(&config).await?;
//!     server.start().await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Engine usage without the server
//!
//! ```rust,no_run
//! use freshguard::{AlertService, Config, Database};
//! use std::sync::Arc;
//!
//! # async fn demo(user_id: uuid::Uuid) -> freshguard::Result<()> {
//! let config = Config::default();
//! let db = Arc::new(Database::new(&config.storage().database).await?);
//! db.migrate().await?;
//!
//! let alerts = AlertService::new(db, config.alerts().clone());
//! let created = alerts.generate_alerts(user_id).await?;
//! println!("created {} alerts", created.len());
//! # Ok(())
//! # }
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_inception)]

// Public module exports
pub mod config;
pub mod server;
pub mod services;
pub mod storage;
pub mod utils;

// Re-export main types
pub use config::Config;
pub use server::HttpServer;
pub use services::alerts::{ActiveAlert, Alert, AlertKind, AlertService, RiskSignal};
pub use storage::database::Database;
pub use utils::error::{AppError, Result};

/// Build metadata captured at compile time
///
/// Served verbatim by the `/version` endpoint.
#[derive(Debug, Clone, serde::Serialize)]
pub struct BuildInfo {
    /// Crate version
    pub version: &'static str,
    /// Build timestamp (seconds since the Unix epoch)
    pub build_time: &'static str,
    /// Git commit hash
    pub git_hash: &'static str,
    /// Rust toolchain used for the build
    pub rust_version: &'static str,
}

/// Build information for the running binary
pub fn build_info() -> BuildInfo {
    BuildInfo {
        version: env!("CARGO_PKG_VERSION"),
        build_time: env!("BUILD_TIME"),
        git_hash: env!("GIT_HASH"),
        rust_version: env!("RUST_VERSION"),
    }
}
