//! Health and version endpoints
//!
//! `/health` answers cheaply from the process; `/health/detailed` also
//! probes the store. `/version` reports build metadata.

use crate::server::routes::ApiResponse;
use crate::server::state::AppState;
use actix_web::{HttpResponse, Result as ActixResult, web};

use tracing::debug;

/// Configure health check routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/health")
            .route("", web::get().to(health_check))
            .route("/detailed", web::get().to(detailed_health_check)),
    )
    .route("/version", web::get().to(version_info));
}

/// Liveness probe
///
/// Reports healthy whenever the process is serving requests; it does not
/// touch the store.
async fn health_check() -> ActixResult<HttpResponse> {
    debug!("Health check requested");

    Ok(HttpResponse::Ok().json(ApiResponse::success(HealthStatus {
        status: "healthy",
        timestamp: chrono::Utc::now(),
        version: env!("CARGO_PKG_VERSION"),
    })))
}

/// Readiness probe with a live store check
///
/// Reports degraded when the database is unreachable even though the
/// process is up.
async fn detailed_health_check(state: web::Data<AppState>) -> ActixResult<HttpResponse> {
    debug!("Detailed health check requested");

    let probe = state.db.health_check().await;
    if let Err(e) = &probe {
        debug!("Database health probe failed: {}", e);
    }

    let database = DatabaseHealth {
        connected: probe.is_ok(),
        backend: format!("{:?}", state.db.backend_type()),
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(DetailedHealthStatus {
        status: if database.connected {
            "healthy"
        } else {
            "degraded"
        },
        timestamp: chrono::Utc::now(),
        version: env!("CARGO_PKG_VERSION"),
        uptime_seconds: get_uptime_seconds(),
        database,
    })))
}

/// Build metadata for the running binary
async fn version_info() -> HttpResponse {
    debug!("Version info requested");

    HttpResponse::Ok().json(ApiResponse::success(crate::build_info()))
}

/// Payload of the liveness probe
#[derive(Debug, Clone, serde::Serialize)]
struct HealthStatus {
    status: &'static str,
    timestamp: chrono::DateTime<chrono::Utc>,
    version: &'static str,
}

/// Payload of the readiness probe
#[derive(Debug, Clone, serde::Serialize)]
struct DetailedHealthStatus {
    status: &'static str,
    timestamp: chrono::DateTime<chrono::Utc>,
    version: &'static str,
    uptime_seconds: u64,
    database: DatabaseHealth,
}

/// Store connectivity summary
#[derive(Debug, Clone, serde::Serialize)]
struct DatabaseHealth {
    connected: bool,
    backend: String,
}

/// Seconds since the first probe of this process
fn get_uptime_seconds() -> u64 {
    static START_TIME: std::sync::OnceLock<std::time::Instant> = std::sync::OnceLock::new();
    let start = START_TIME.get_or_init(std::time::Instant::now);
    start.elapsed().as_secs()
}
