//! HTTP response handling for errors

use super::types::AppError;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};

impl AppError {
    /// Status and machine-readable code for the HTTP mapping
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            AppError::BadRequest(_) => (StatusCode::BAD_REQUEST, "BAD_REQUEST"),
            AppError::Validation(_) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
            AppError::NotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            AppError::Conflict(_) => (StatusCode::CONFLICT, "CONFLICT"),
            AppError::Config(_) => (StatusCode::INTERNAL_SERVER_ERROR, "CONFIG_ERROR"),
            AppError::Database(_) => (StatusCode::INTERNAL_SERVER_ERROR, "DATABASE_ERROR"),
            _ => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
        }
    }

    /// Message safe to put on the wire
    ///
    /// Store and internal failures get a fixed string so connection URLs,
    /// SQL, and other backend details never reach clients.
    fn public_message(&self) -> String {
        match self {
            AppError::Database(_) => "Database operation failed".to_string(),
            AppError::Io(_) | AppError::Internal(_) | AppError::Migration(_) => {
                "An internal error occurred".to_string()
            }
            other => other.to_string(),
        }
    }
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        let (status, code) = self.status_and_code();

        HttpResponse::build(status).json(ErrorResponse {
            error: ErrorDetail {
                code: code.to_string(),
                message: self.public_message(),
                timestamp: chrono::Utc::now().timestamp(),
                request_id: None, // Populated by tracing middleware when present
            },
        })
    }
}

/// Standard error response format
#[derive(serde::Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

/// Error detail structure
#[derive(serde::Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    pub timestamp: i64,
    pub request_id: Option<String>,
}
