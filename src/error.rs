use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

pub type ApiResult<T> = Result<T, ApiError>;

/// API error types
///
/// Every variant maps to a status code and surfaces to the caller as the
/// flat `{"error": "<message>"}` envelope.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Invalid JSON data")]
    InvalidJson,

    #[error("Missing text data")]
    MissingField,

    #[error("Text must be a string")]
    InvalidType,

    #[error("Text too long. Maximum 10,000 characters.")]
    TooLong,

    #[error("No file selected")]
    NoFileSelected,

    #[error("File too large. Maximum size is 16MB.")]
    PayloadTooLarge,

    #[error("Endpoint not found")]
    NotFound,

    #[error("{0}")]
    Internal(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl ApiError {
    /// Get HTTP status code for this error
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidJson
            | ApiError::MissingField
            | ApiError::InvalidType
            | ApiError::TooLong
            | ApiError::NoFileSelected => StatusCode::BAD_REQUEST,
            ApiError::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Internal(_) | ApiError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get error code string (used in logs, not on the wire)
    pub fn error_code(&self) -> &'static str {
        match self {
            ApiError::InvalidJson => "INVALID_JSON",
            ApiError::MissingField => "MISSING_FIELD",
            ApiError::InvalidType => "INVALID_TYPE",
            ApiError::TooLong => "TOO_LONG",
            ApiError::NoFileSelected => "NO_FILE_SELECTED",
            ApiError::PayloadTooLarge => "PAYLOAD_TOO_LARGE",
            ApiError::NotFound => "NOT_FOUND",
            ApiError::Internal(_) => "INTERNAL_ERROR",
            ApiError::Config(_) => "CONFIG_ERROR",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.to_string();

        if status.is_server_error() {
            tracing::error!(code = self.error_code(), %message, "request failed");
        }

        let body = Json(json!({ "error": message }));
        (status, body).into_response()
    }
}

impl From<std::net::AddrParseError> for ApiError {
    fn from(err: std::net::AddrParseError) -> Self {
        ApiError::Config(format!("Invalid address: {err}"))
    }
}

impl From<std::io::Error> for ApiError {
    fn from(err: std::io::Error) -> Self {
        ApiError::Internal(format!("IO error: {err}"))
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        ApiError::Internal(err.to_string())
    }
}
