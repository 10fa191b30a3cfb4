// src/api/error.rs
// Centralized error handling for HTTP API responses

use axum::{
    Json,
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use std::fmt;
use tracing::{error, warn};

use crate::core::CoreError;

/// Standard API error response format
#[derive(Debug)]
pub struct ApiError {
    pub message: String,
    pub status_code: StatusCode,
    pub error_code: Option<String>,
}

impl ApiError {
    /// Create a new internal server error
    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status_code: StatusCode::INTERNAL_SERVER_ERROR,
            error_code: Some("INTERNAL_ERROR".to_string()),
        }
    }

    /// Create a new bad request error
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status_code: StatusCode::BAD_REQUEST,
            error_code: Some("BAD_REQUEST".to_string()),
        }
    }

    /// Create a new not found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status_code: StatusCode::NOT_FOUND,
            error_code: Some("NOT_FOUND".to_string()),
        }
    }

    /// Create a new unprocessable entity error
    pub fn unprocessable_entity(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status_code: StatusCode::UNPROCESSABLE_ENTITY,
            error_code: Some("UNPROCESSABLE_ENTITY".to_string()),
        }
    }

    /// Create a new service unavailable error
    pub fn service_unavailable(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status_code: StatusCode::SERVICE_UNAVAILABLE,
            error_code: Some("SERVICE_UNAVAILABLE".to_string()),
        }
    }

    fn with_code(mut self, code: &str) -> Self {
        self.error_code = Some(code.to_string());
        self
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ApiError {}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let mut response_json = json!({
            "error": true,
            "message": self.message,
            "status": self.status_code.as_u16()
        });

        if let Some(error_code) = self.error_code {
            response_json["error_code"] = json!(error_code);
        }

        (self.status_code, Json(response_json)).into_response()
    }
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        if err.is_client_error() {
            warn!("Rejected request: {}", err);
        } else {
            error!("Server error: {:?}", err);
        }

        let message = err.to_string();
        match err {
            CoreError::PageNotFound { .. } => ApiError::not_found(message),
            CoreError::InvalidPageSize(_) => ApiError::bad_request(message),
            CoreError::MissingKey(_) => ApiError::bad_request(message).with_code("MISSING_KEY"),
            CoreError::UnknownKey(_) => ApiError::bad_request(message).with_code("UNKNOWN_KEY"),
            CoreError::InvalidWeight(_) => ApiError::bad_request(message).with_code("INVALID_WEIGHT"),
            CoreError::EmptyBatch => ApiError::unprocessable_entity(message).with_code("EMPTY_BATCH"),
            CoreError::Database(_) => ApiError::internal("Database error"),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::bad_request(format!("Invalid weight payload: {}", rejection.body_text()))
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::bad_request(format!("Invalid query: {}", rejection.body_text()))
    }
}

/// Result type alias for API operations
pub type ApiResult<T> = Result<T, ApiError>;
