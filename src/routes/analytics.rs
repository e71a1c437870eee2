use crate::error::ApiResult;
use axum::response::IntoResponse;
use axum::Json;
use chrono::Utc;
use serde::Serialize;

/// Simulated analytics payload
#[derive(Debug, Serialize)]
pub struct AnalyticsResponse {
    pub analytics_data: String,
    pub records_processed: u64,
    pub last_updated: String,
}

/// Fetch analytics results.
///
/// The payload is entirely simulated; no computation runs behind it.
pub async fn get_analytics() -> ApiResult<impl IntoResponse> {
    Ok(Json(AnalyticsResponse {
        analytics_data: "Some analytics data here".to_string(),
        records_processed: 1234,
        last_updated: Utc::now().to_rfc3339(),
    }))
}
