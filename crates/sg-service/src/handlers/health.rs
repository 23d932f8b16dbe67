//! Health and status handlers.
//!
//! - `/`: service identity with version and timestamp
//! - `/health`: liveness probe - returns healthy if the process is running
//!
//! Neither endpoint checks credentials or provider reachability: the
//! gateway is deliberately usable with missing credentials (those are
//! rejected per-request), so there is nothing meaningful to probe.

use crate::models::{HealthResponse, StatusResponse};
use axum::Json;
use chrono::Utc;

/// Service name reported by the root status endpoint.
const SERVICE_NAME: &str = "session-gateway";

/// Root status handler.
pub async fn root_status() -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "ok",
        service: SERVICE_NAME,
        version: env!("CARGO_PKG_VERSION"),
        timestamp: Utc::now().to_rfc3339(),
    })
}

/// Liveness probe handler.
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse { status: "healthy" })
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_health_check() {
        let Json(response) = health_check().await;
        assert_eq!(response.status, "healthy");

        let json = serde_json::to_string(&response).unwrap();
        assert_eq!(json, "{\"status\":\"healthy\"}");
    }

    #[tokio::test]
    async fn test_root_status() {
        let Json(response) = root_status().await;

        assert_eq!(response.status, "ok");
        assert_eq!(response.service, "session-gateway");
        assert!(!response.version.is_empty());
        // Timestamp must be RFC 3339
        assert!(chrono::DateTime::parse_from_rfc3339(&response.timestamp).is_ok());
    }
}
