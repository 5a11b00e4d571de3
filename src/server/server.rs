//! HTTP server core implementation
//!
//! This module provides the HttpServer struct and its core methods.

use crate::config::{Config, ServerConfig};
use crate::server::routes;
use crate::server::state::AppState;
use crate::services::alerts::AlertService;
use crate::storage::database::Database;
use crate::utils::error::{AppError, Result};
use actix_cors::Cors;
use actix_web::{App, HttpServer as ActixHttpServer, middleware::DefaultHeaders, web};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use tracing_actix_web::TracingLogger;

/// HTTP server
pub struct HttpServer {
    /// Server configuration
    config: ServerConfig,
    /// Application state
    state: AppState,
}

impl HttpServer {
    /// Create a new HTTP server
    ///
    /// Connects to the store, runs migrations, and builds the alert engine
    /// over the shared connection.
    pub async fn new(config: &Config) -> Result<Self> {
        info!("Creating HTTP server");

        let db = Arc::new(Database::new(&config.storage().database).await?);
        db.migrate().await?;

        let alerts = Arc::new(AlertService::new(Arc::clone(&db), config.alerts().clone()));
        let state = AppState::new(config.clone(), db, alerts);

        Ok(Self {
            config: config.server().clone(),
            state,
        })
    }

    /// Create the Actix-web application
    fn create_app(
        state: web::Data<AppState>,
    ) -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        let cors = Self::build_cors(&state.config.server().cors);

        App::new()
            .app_data(state)
            .wrap(cors)
            .wrap(TracingLogger::default())
            .wrap(DefaultHeaders::new().add(("Server", "FreshGuard")))
            .configure(routes::health::configure_routes)
            .configure(routes::alerts::configure_routes)
    }

    /// Build the CORS middleware from configuration
    ///
    /// The front end is a cross-origin SPA, so this is part of the request
    /// path, not an optional extra.
    fn build_cors(cors_config: &crate::config::CorsConfig) -> Cors {
        if !cors_config.enabled {
            return Cors::default();
        }

        let mut cors = Cors::default();

        if cors_config.allows_all_origins() {
            cors = cors.allow_any_origin();
        } else {
            for origin in &cors_config.allowed_origins {
                cors = cors.allowed_origin(origin);
            }
        }

        let methods: Vec<actix_web::http::Method> = cors_config
            .allowed_methods
            .iter()
            .filter_map(|m| m.parse().ok())
            .collect();
        if !methods.is_empty() {
            cors = cors.allowed_methods(methods);
        }

        let headers: Vec<actix_web::http::header::HeaderName> = cors_config
            .allowed_headers
            .iter()
            .filter_map(|h| h.parse().ok())
            .collect();
        if !headers.is_empty() {
            cors = cors.allowed_headers(headers);
        }

        cors = cors.max_age(cors_config.max_age as usize);

        if cors_config.allow_credentials {
            cors = cors.supports_credentials();
        }

        cors
    }

    /// Start the HTTP server
    ///
    /// Spawns the cleanup scheduler (when enabled) and blocks until the
    /// server shuts down.
    pub async fn start(self) -> Result<()> {
        let bind_addr = self.config.address();
        let workers = self.config.worker_count();

        let alerts_config = self.state.config.alerts().clone();
        if alerts_config.cleanup_enabled && alerts_config.cleanup_interval_hours > 0 {
            let every = Duration::from_secs(alerts_config.cleanup_interval_hours * 3600);
            let _cleanup_task = Arc::clone(&self.state.alerts).start_cleanup_task(every);
            info!(
                "Cleanup scheduler started (every {}h, retention {}d)",
                alerts_config.cleanup_interval_hours, alerts_config.retention_days
            );
        } else {
            info!("Cleanup scheduler disabled by configuration");
        }

        info!("Starting HTTP server on {}", bind_addr);

        let state = web::Data::new(self.state);

        let server = ActixHttpServer::new(move || Self::create_app(state.clone()))
            .workers(workers)
            .bind(&bind_addr)
            .map_err(|e| AppError::Internal(format!("Failed to bind {}: {}", bind_addr, e)))?
            .run();

        info!("HTTP server listening on {}", bind_addr);

        server
            .await
            .map_err(|e| AppError::Internal(format!("Server error: {}", e)))?;

        info!("HTTP server stopped");
        Ok(())
    }
}
