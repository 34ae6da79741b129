//! Mapping from the compile error taxonomy to HTTP responses.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::core::errors::CompileError;

/// Error body detail.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorDetail {
    /// Stable error code identifier.
    pub code: String,
    /// Human readable message.
    pub message: String,
}

/// Error response wrapper.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

/// Transport-level wrapper carrying a classified compile failure.
#[derive(Debug)]
pub struct ApiError(pub CompileError);

impl From<CompileError> for ApiError {
    fn from(error: CompileError) -> Self {
        Self(error)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = match &self.0 {
            CompileError::InvalidRequest { .. } => (StatusCode::BAD_REQUEST, "INVALID_REQUEST"),
            CompileError::CompilerUnavailable { .. } => {
                (StatusCode::INTERNAL_SERVER_ERROR, "COMPILER_UNAVAILABLE")
            }
            CompileError::Timeout { .. } => (StatusCode::REQUEST_TIMEOUT, "COMPILE_TIMEOUT"),
            CompileError::MalformedOutput { .. } => {
                (StatusCode::INTERNAL_SERVER_ERROR, "MALFORMED_COMPILER_OUTPUT")
            }
            CompileError::Internal { .. } => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL"),
        };

        let body = ErrorResponse {
            error: ErrorDetail {
                code: code.to_string(),
                message: self.0.to_string(),
            },
        };

        (status, Json(body)).into_response()
    }
}
