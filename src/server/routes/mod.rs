//! HTTP route modules
//!
//! Route handlers for the alerts API and the health endpoints, plus the
//! response envelope they share.

pub mod alerts;
pub mod health;

/// Response envelope used by every endpoint
///
/// Successful responses carry `data` and omit `error`; failures carry
/// `error` and omit `data`. Absent fields are left out of the JSON rather
/// than serialized as `null`.
#[derive(Debug, Clone, serde::Serialize)]
pub struct ApiResponse<T> {
    /// Whether the request was successful
    pub success: bool,
    /// Response payload, present on success
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Error message, present on failure
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T>
where
    T: serde::Serialize,
{
    /// Create a successful response
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    /// Create an error response
    pub fn error(message: String) -> ApiResponse<()> {
        ApiResponse {
            success: false,
            data: None,
            error: Some(message),
        }
    }
}
