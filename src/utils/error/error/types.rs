//! Error types for the alert service

use thiserror::Error;

/// Result type alias for the alert service
pub type Result<T> = std::result::Result<T, AppError>;

/// Service-wide error type
///
/// Request-scoped variants (bad request, validation, not found, conflict)
/// map to 4xx responses. The rest are infrastructure failures that surface
/// as 500s with sanitized messages.
#[derive(Error, Debug)]
pub enum AppError {
    /// Malformed request input, such as a missing or garbled X-User-Id header
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Domain validation failures
    #[error("Validation error: {0}")]
    Validation(String),

    /// Referenced alert or inventory item does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// State conflicts, such as racing alert generations
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Configuration loading or validation failures
    #[error("Configuration error: {0}")]
    Config(String),

    /// Store failures, kept as the SeaORM error so callers can inspect
    /// `sql_err()` for constraint violations
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// Schema migration failures
    #[error("Migration error: {0}")]
    Migration(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Anything else that should not reach clients verbatim
    #[error("Internal server error: {0}")]
    Internal(String),
}
