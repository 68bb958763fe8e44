use crate::utils::error::EnrollError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

/// 錯誤回應格式
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub timestamp: chrono::DateTime<chrono::Utc>,
    pub status: u16,
    pub error: String,
    pub message: String,
}

impl IntoResponse for EnrollError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        if status.is_server_error() {
            tracing::error!("❌ {} (Category: {:?})", self, self.category());
        } else {
            tracing::debug!("Request rejected: {}", self);
        }

        let body = ErrorBody {
            timestamp: chrono::Utc::now(),
            status: status.as_u16(),
            error: status.canonical_reason().unwrap_or("Error").to_string(),
            message: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
