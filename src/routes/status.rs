use axum::response::IntoResponse;
use axum::Json;
use chrono::Utc;
use serde::Serialize;

/// Known endpoint paths, surfaced by the status probe.
pub const ENDPOINTS: &[&str] = &[
    "/",
    "/api/process",
    "/api/analytics",
    "/api/upload",
    "/api/status",
];

/// Service status payload
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub timestamp: String,
    pub endpoints: &'static [&'static str],
}

/// Service status probe.
///
/// Always returns 200 with static service metadata.
pub async fn status() -> impl IntoResponse {
    Json(StatusResponse {
        status: "running",
        version: env!("CARGO_PKG_VERSION"),
        timestamp: Utc::now().to_rfc3339(),
        endpoints: ENDPOINTS,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_list_covers_api_surface() {
        assert!(ENDPOINTS.contains(&"/api/process"));
        assert!(ENDPOINTS.contains(&"/api/status"));
        assert!(!ENDPOINTS.is_empty());
    }
}
