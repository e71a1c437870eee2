use crate::error::{ApiError, ApiResult};
use axum::extract::multipart::{Multipart, MultipartError, MultipartRejection};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use chrono::Utc;
use serde::Serialize;

/// Upload acknowledgment payload
#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

/// Acknowledge a multipart upload.
///
/// A request without a file part (including one that is not multipart at
/// all) gets a 200 acknowledgment rather than an error: the endpoint exists
/// ahead of the feature it will eventually serve. A field named `file`
/// without a filename attribute is a plain form field, not a file part, and
/// takes the same acknowledgment path. A file part with an empty filename
/// is the only rejected shape. File content is never persisted or
/// inspected.
pub async fn upload_file(
    multipart: Result<Multipart, MultipartRejection>,
) -> ApiResult<impl IntoResponse> {
    let Ok(mut multipart) = multipart else {
        return Ok(Json(endpoint_ready()));
    };

    while let Some(field) = multipart.next_field().await.map_err(map_multipart_err)? {
        if field.name() != Some("file") {
            continue;
        }

        match field.file_name() {
            // No filename attribute: a text form field, not a file part
            None => continue,
            Some("") => return Err(ApiError::NoFileSelected),
            Some(name) => {
                return Ok(Json(UploadResponse {
                    message: "File uploaded successfully".to_string(),
                    filename: Some(name.to_string()),
                    timestamp: Some(Utc::now().to_rfc3339()),
                }))
            }
        }
    }

    Ok(Json(endpoint_ready()))
}

fn endpoint_ready() -> UploadResponse {
    UploadResponse {
        message: "No file provided, but endpoint is ready".to_string(),
        filename: None,
        timestamp: None,
    }
}

fn map_multipart_err(err: MultipartError) -> ApiError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        ApiError::PayloadTooLarge
    } else {
        ApiError::Internal(format!("Upload error: {err}"))
    }
}
