use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

use abook_store::StoreError;
use abook_types::ValidationError;

/// Errors surfaced to API callers.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Request body was not valid JSON for the expected shape.
    #[error("unable to decode request body: {0}")]
    Decode(String),

    /// Path id segment was not a decimal integer.
    #[error("invalid address id: {0}")]
    InvalidId(String),

    /// A required-field or format rule failed.
    #[error("unable to validate address: {0}")]
    Validation(#[from] ValidationError),

    /// The referenced record does not exist.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Response payload failed to serialize.
    #[error("unable to encode response: {0}")]
    Encode(String),

    /// No route matched the request path.
    #[error("invalid path")]
    InvalidPath,
}

impl ApiError {
    /// Missing records map to 400 rather than 404, matching the mapping
    /// callers of the original API already depend on.
    fn status(&self) -> StatusCode {
        match self {
            ApiError::Decode(_)
            | ApiError::InvalidId(_)
            | ApiError::Validation(_)
            | ApiError::Store(StoreError::NotFound(_))
            | ApiError::InvalidPath => StatusCode::BAD_REQUEST,
            ApiError::Encode(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Decode(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        } else {
            tracing::debug!(error = %self, "rejected request");
        }
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

/// Errors from server startup and the serve loop.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("internal error: {0}")]
    Internal(String),
}

/// Result alias for server lifecycle operations.
pub type ServerResult<T> = Result<T, ServerError>;
