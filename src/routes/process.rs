use crate::error::{ApiError, ApiResult};
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use chrono::Utc;
use serde::Serialize;
use serde_json::Value;

/// Maximum accepted text length, in characters.
pub const MAX_TEXT_CHARS: usize = 10_000;

/// Response from processing a text payload
#[derive(Debug, Serialize)]
pub struct ProcessResponse {
    pub original_text: String,
    pub processed_text: String,
    pub length: usize,
    pub timestamp: String,
}

/// Process a text payload.
///
/// Validation order: the body must parse as JSON, carry a `text` key, the
/// value must be a string, and the string must not exceed
/// [`MAX_TEXT_CHARS`] characters. The "processing" itself is a placeholder
/// uppercase transform standing in for a future NLP stage.
///
/// # Example
/// ```json
/// // Request
/// { "text": "hello" }
///
/// // Response
/// {
///   "original_text": "hello",
///   "processed_text": "Processed: HELLO",
///   "length": 5,
///   "timestamp": "2025-01-31T12:00:00+00:00"
/// }
/// ```
pub async fn process_text(
    payload: Result<Json<Value>, JsonRejection>,
) -> ApiResult<impl IntoResponse> {
    let Json(body) = payload.map_err(|rejection| {
        // Keep the body-limit 413 distinct from malformed JSON
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            ApiError::PayloadTooLarge
        } else {
            ApiError::InvalidJson
        }
    })?;

    let text = validate_text(&body)?;
    let processed_text = format!("Processed: {}", text.to_uppercase());

    Ok(Json(ProcessResponse {
        length: text.chars().count(),
        original_text: text.to_string(),
        processed_text,
        timestamp: Utc::now().to_rfc3339(),
    }))
}

/// Validate the parsed request body and extract the text payload.
///
/// Pure function of the parsed input so the validation contract can be
/// tested without any HTTP plumbing.
fn validate_text(body: &Value) -> Result<&str, ApiError> {
    let value = body.get("text").ok_or(ApiError::MissingField)?;
    let text = value.as_str().ok_or(ApiError::InvalidType)?;

    if text.chars().count() > MAX_TEXT_CHARS {
        return Err(ApiError::TooLong);
    }

    Ok(text)
}
