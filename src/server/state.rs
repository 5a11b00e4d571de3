//! Application state shared across HTTP handlers

use crate::config::Config;
use crate::services::alerts::AlertService;
use crate::storage::database::Database;
use std::sync::Arc;

/// Shared handler state
///
/// Cloned per worker by actix, so everything inside is behind an Arc.
#[derive(Clone)]
pub struct AppState {
    /// Service configuration (read-only)
    pub config: Arc<Config>,
    /// Relational store
    pub db: Arc<Database>,
    /// Alert lifecycle engine
    pub alerts: Arc<AlertService>,
}

impl AppState {
    /// Assemble the state handed to `App::app_data`
    pub fn new(config: Config, db: Arc<Database>, alerts: Arc<AlertService>) -> Self {
        Self {
            config: Arc::new(config),
            db,
            alerts,
        }
    }
}
