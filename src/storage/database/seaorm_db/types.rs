use sea_orm::DatabaseConnection;

/// SeaORM-backed store for inventory items and their alerts
#[derive(Debug)]
pub struct SeaOrmDatabase {
    pub(super) db: DatabaseConnection,
    /// Backend the pool actually connected to, which may differ from the
    /// configured one after a SQLite fallback
    pub(super) backend_type: DatabaseBackendType,
    /// Whether this connection came from the fallback path rather than the
    /// configured URL
    pub(super) fallback: bool,
}

/// Database backend type indicator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatabaseBackendType {
    PostgreSQL,
    SQLite,
}

impl DatabaseBackendType {
    /// Classify a connection URL by its scheme
    pub fn for_url(url: &str) -> Self {
        if url.starts_with("sqlite") {
            DatabaseBackendType::SQLite
        } else {
            DatabaseBackendType::PostgreSQL
        }
    }
}
