//! Alert endpoints
//!
//! Thin handlers over the alert engine: decode input, call the engine,
//! encode the response envelope. Caller identity arrives as an `X-User-Id`
//! header injected by the upstream auth layer; the engine trusts it.

use crate::server::routes::ApiResponse;
use crate::server::state::AppState;
use crate::utils::error::{AppError, Result};
use actix_web::{HttpRequest, HttpResponse, web};
use serde::Serialize;
use tracing::debug;
use uuid::Uuid;

/// Configure alert routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/alerts")
            .route("", web::get().to(list_alerts))
            .route("/count", web::get().to(alert_count))
            .route("/generate", web::post().to(generate_alerts))
            .route("/dismiss-all", web::post().to(dismiss_all_alerts))
            .route("/{id}/dismiss", web::post().to(dismiss_alert)),
    );
}

/// Active alert count payload
#[derive(Debug, Serialize)]
struct CountResponse {
    /// Number of active alerts
    count: u64,
}

/// Single dismissal payload
#[derive(Debug, Serialize)]
struct DismissResponse {
    /// Whether a matching active alert was dismissed
    dismissed: bool,
}

/// Bulk dismissal payload
#[derive(Debug, Serialize)]
struct DismissAllResponse {
    /// Number of alerts dismissed
    dismissed: u64,
}

/// Generate alerts for the caller's high-risk items
///
/// POST /api/v1/alerts/generate
async fn generate_alerts(state: web::Data<AppState>, req: HttpRequest) -> Result<HttpResponse> {
    let user_id = require_user_id(&req)?;
    debug!("Alert generation requested by user: {}", user_id);

    let created = state.alerts.generate_alerts(user_id).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(created)))
}

/// List the caller's active alerts
///
/// GET /api/v1/alerts
async fn list_alerts(state: web::Data<AppState>, req: HttpRequest) -> Result<HttpResponse> {
    let user_id = require_user_id(&req)?;

    let alerts = state.alerts.active_alerts(user_id).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(alerts)))
}

/// Count the caller's active alerts (badge display)
///
/// GET /api/v1/alerts/count
async fn alert_count(state: web::Data<AppState>, req: HttpRequest) -> Result<HttpResponse> {
    let user_id = require_user_id(&req)?;

    let count = state.alerts.active_alert_count(user_id).await;
    Ok(HttpResponse::Ok().json(ApiResponse::success(CountResponse { count })))
}

/// Dismiss one of the caller's alerts
///
/// POST /api/v1/alerts/{id}/dismiss
async fn dismiss_alert(
    state: web::Data<AppState>,
    path: web::Path<i64>,
    req: HttpRequest,
) -> Result<HttpResponse> {
    let user_id = require_user_id(&req)?;
    let alert_id = path.into_inner();

    let dismissed = state.alerts.dismiss_alert(alert_id, user_id).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(DismissResponse { dismissed })))
}

/// Dismiss every active alert the caller has
///
/// POST /api/v1/alerts/dismiss-all
async fn dismiss_all_alerts(state: web::Data<AppState>, req: HttpRequest) -> Result<HttpResponse> {
    let user_id = require_user_id(&req)?;

    let dismissed = state.alerts.dismiss_all_alerts(user_id).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(DismissAllResponse { dismissed })))
}

/// Extract the caller's user id from the `X-User-Id` header
pub fn require_user_id(req: &HttpRequest) -> Result<Uuid> {
    let raw = req
        .headers()
        .get("x-user-id")
        .and_then(|value| value.to_str().ok())
        .ok_or_else(|| AppError::bad_request("Missing X-User-Id header"))?;

    Uuid::parse_str(raw)
        .map_err(|_| AppError::bad_request(format!("Invalid X-User-Id header: {}", raw)))
}
