//! Test database utilities
//!
//! Every test runs against its own in-memory SQLite store with the full
//! schema (inventory items, alerts, and the partial unique index) already
//! migrated, so tests never share state or need an external server.

use freshguard::config::DatabaseConfig;
use freshguard::storage::database::Database;
use std::sync::Arc;

/// Isolated in-memory store for a single test
#[derive(Debug, Clone)]
pub struct TestDatabase {
    inner: Arc<Database>,
}

impl TestDatabase {
    /// Open a fresh in-memory database and bring its schema up to date
    pub async fn new() -> Self {
        let db = create_test_db().await;
        Self {
            inner: Arc::new(db),
        }
    }

    /// Get reference to the underlying database
    pub fn db(&self) -> &Database {
        &self.inner
    }

    /// Get Arc to the underlying database, for services that share it
    pub fn db_arc(&self) -> Arc<Database> {
        Arc::clone(&self.inner)
    }
}

/// Connection settings for an in-memory test store
pub fn test_db_config() -> DatabaseConfig {
    DatabaseConfig {
        url: "sqlite::memory:".to_string(),
        max_connections: 1, // In-memory DB only supports 1 connection
        connection_timeout: 5,
    }
}

/// Open a migrated in-memory database without the wrapper
pub async fn create_test_db() -> Database {
    let db = Database::new(&test_db_config())
        .await
        .expect("Failed to create in-memory test database");
    db.migrate().await.expect("Failed to run migrations");
    db
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[tokio::test]
    async fn test_database_starts_empty_and_healthy() {
        let db = TestDatabase::new().await;
        assert!(db.db().health_check().await.is_ok());

        let count = db
            .db()
            .count_active_alerts(Uuid::new_v4())
            .await
            .expect("count should work on a fresh store");
        assert_eq!(count, 0);
    }

    #[tokio::test]
    async fn test_instances_are_isolated() {
        let first = TestDatabase::new().await;
        let second = TestDatabase::new().await;
        assert!(first.db().health_check().await.is_ok());
        assert!(second.db().health_check().await.is_ok());
    }
}
