//! HTTP mapping for domain errors

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::domain::DomainError;

impl DomainError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            DomainError::NotFound => StatusCode::NOT_FOUND,
            DomainError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            DomainError::AlreadyPurchased | DomainError::Conflict(_) => StatusCode::CONFLICT,
            DomainError::Unauthorized => StatusCode::UNAUTHORIZED,
            DomainError::Database(_) | DomainError::Export(_) | DomainError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for DomainError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!("Request failed: {}", self);
        }

        (
            status,
            Json(json!({
                "success": false,
                "error": self.to_string()
            })),
        )
            .into_response()
    }
}
