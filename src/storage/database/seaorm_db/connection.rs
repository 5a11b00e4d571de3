use crate::config::DatabaseConfig;
use crate::utils::error::{AppError, Result};
use sea_orm::*;
use sea_orm_migration::MigratorTrait;
use std::time::Duration;
use tracing::{debug, info, warn};

use super::super::entities;
use super::super::migration::Migrator;
use super::types::{DatabaseBackendType, SeaOrmDatabase};

/// Local database used when the configured PostgreSQL server is unreachable.
const SQLITE_FALLBACK_URL: &str = "sqlite://data/freshguard.db?mode=rwc";

impl SeaOrmDatabase {
    /// Open a connection pool against the configured database.
    ///
    /// When a PostgreSQL URL fails to connect, the store falls back to a
    /// local SQLite file so development setups work without a server.
    pub async fn new(config: &DatabaseConfig) -> Result<Self> {
        let backend_type = DatabaseBackendType::for_url(&config.url);
        let opt = pool_options(
            &config.url,
            config.max_connections,
            Duration::from_secs(config.connection_timeout),
        );

        match Database::connect(opt).await {
            Ok(db) => {
                info!("Database connection established ({:?})", backend_type);
                Ok(Self {
                    db,
                    backend_type,
                    fallback: false,
                })
            }
            Err(e) if is_postgres_url(&config.url) => {
                warn!(
                    "PostgreSQL connection failed: {}. Attempting SQLite fallback...",
                    e
                );
                Self::fallback_to_sqlite().await
            }
            Err(e) => Err(AppError::Database(e)),
        }
    }

    /// Open the on-disk SQLite fallback, creating its directory if needed
    async fn fallback_to_sqlite() -> Result<Self> {
        std::fs::create_dir_all("data")
            .map_err(|e| AppError::Internal(format!("Failed to create data directory: {}", e)))?;

        info!("Falling back to SQLite database: {}", SQLITE_FALLBACK_URL);

        let opt = pool_options(SQLITE_FALLBACK_URL, 5, Duration::from_secs(5));
        let db = Database::connect(opt).await.map_err(AppError::Database)?;

        Ok(Self {
            db,
            backend_type: DatabaseBackendType::SQLite,
            fallback: true,
        })
    }

    /// Get the current backend type
    pub fn backend_type(&self) -> DatabaseBackendType {
        self.backend_type
    }

    /// Check if using SQLite fallback
    ///
    /// False for a database that was configured as SQLite in the first
    /// place; only the PostgreSQL-unreachable path sets this.
    pub fn is_sqlite_fallback(&self) -> bool {
        self.fallback
    }

    /// Bring the schema up to date
    pub async fn migrate(&self) -> Result<()> {
        info!("Running database migrations...");
        Migrator::up(&self.db, None).await.map_err(|e| {
            warn!("Migration failed: {}", e);
            AppError::Database(e)
        })?;
        info!("Database migrations completed successfully");
        Ok(())
    }

    /// Get the underlying database connection
    pub fn connection(&self) -> &DatabaseConnection {
        &self.db
    }

    /// Close the database connection
    pub async fn close(self) -> Result<()> {
        self.db.close().await.map_err(AppError::Database)?;
        Ok(())
    }

    /// Probe connectivity and schema by touching the alerts table
    pub async fn health_check(&self) -> Result<()> {
        debug!("Performing database health check");

        entities::Alert::find()
            .limit(1)
            .all(&self.db)
            .await
            .map_err(AppError::Database)?;

        debug!("Database health check passed");
        Ok(())
    }
}

fn is_postgres_url(url: &str) -> bool {
    url.starts_with("postgresql://") || url.starts_with("postgres://")
}

/// Pool settings shared by the primary and fallback connections
fn pool_options(url: &str, max_connections: u32, connect_timeout: Duration) -> ConnectOptions {
    let mut opt = ConnectOptions::new(url.to_string());
    opt.max_connections(max_connections)
        .min_connections(1)
        .connect_timeout(connect_timeout)
        .acquire_timeout(Duration::from_secs(30))
        .idle_timeout(Duration::from_secs(600))
        .max_lifetime(Duration::from_secs(3600))
        .sqlx_logging(true)
        .sqlx_logging_level(log::LevelFilter::Debug);
    opt
}
