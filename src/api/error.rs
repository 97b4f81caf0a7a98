//! API Error Types
//!
//! Defines error types for the API layer and implements conversion to HTTP
//! responses. The wire shape is a bare `{"error": "<message>"}` object, the
//! contract the API's consumers already depend on.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::query::QueryError;
use crate::store::StoreError;

/// API error types
#[derive(Debug, Error)]
pub enum ApiError {
    /// Request validation failed (malformed date in the path)
    #[error("{0}")]
    BadRequest(String),

    /// No rows satisfy the query
    #[error("{0}")]
    NoData(String),

    /// Store layer error
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    /// Internal server error
    #[error("internal error: {0}")]
    Internal(String),

    /// IO error (listener startup)
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<QueryError> for ApiError {
    fn from(err: QueryError) -> Self {
        match err {
            // Handlers that need a range-specific message map NoData
            // themselves before this conversion runs.
            QueryError::NoData => ApiError::NoData("No measurement data available.".to_string()),
            QueryError::Store(e) => ApiError::Store(e),
        }
    }
}

/// Error response body: `{"error": "<message>"}`
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NoData(_) => StatusCode::NOT_FOUND,
            ApiError::Store(_) | ApiError::Internal(_) | ApiError::Io(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        // Server-side failures keep their detail in the log, not the body
        let message = if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
            "internal server error".to_string()
        } else {
            tracing::warn!(error = %self, "request rejected");
            self.to_string()
        };

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}

/// Result type for API handlers
pub type ApiResult<T> = Result<T, ApiError>;
