//! Liveness and status endpoint integration tests.

mod support;

use axum::http::StatusCode;
use sg_service::services::LoggingWebhookHandler;
use std::sync::Arc;

#[tokio::test]
async fn test_root_status_endpoint() -> Result<(), anyhow::Error> {
    let router = support::test_router(support::test_config(&[]), Arc::new(LoggingWebhookHandler));

    let (status, body) = support::get_json(&router, "/").await?;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.get("status").and_then(|v| v.as_str()), Some("ok"));
    assert_eq!(
        body.get("service").and_then(|v| v.as_str()),
        Some("session-gateway")
    );
    assert!(body
        .get("version")
        .and_then(|v| v.as_str())
        .is_some_and(|v| !v.is_empty()));

    let timestamp = body
        .get("timestamp")
        .and_then(|v| v.as_str())
        .unwrap_or_default();
    assert!(
        chrono::DateTime::parse_from_rfc3339(timestamp).is_ok(),
        "Expected RFC 3339 timestamp, got {timestamp:?}"
    );

    Ok(())
}

#[tokio::test]
async fn test_health_endpoint() -> Result<(), anyhow::Error> {
    let router = support::test_router(support::test_config(&[]), Arc::new(LoggingWebhookHandler));

    let (status, body) = support::get_json(&router, "/health").await?;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, serde_json::json!({"status": "healthy"}));

    Ok(())
}

#[tokio::test]
async fn test_metrics_endpoint_returns_text() -> Result<(), anyhow::Error> {
    let router = support::test_router(support::test_config(&[]), Arc::new(LoggingWebhookHandler));

    let (status, _body) = support::get_text(&router, "/metrics").await?;

    assert_eq!(status, StatusCode::OK);

    Ok(())
}

#[tokio::test]
async fn test_unknown_route_returns_404() -> Result<(), anyhow::Error> {
    let router = support::test_router(support::test_config(&[]), Arc::new(LoggingWebhookHandler));

    let (status, _body) = support::get_text(&router, "/api/nonexistent").await?;

    assert_eq!(status, StatusCode::NOT_FOUND);

    Ok(())
}
