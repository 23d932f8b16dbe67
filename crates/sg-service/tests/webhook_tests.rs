//! Webhook endpoint integration tests.
//!
//! Drives `/api/webhooks/media-provider` through the full router with real
//! HMAC signatures, a recording handler double, and a failing double for
//! the handler-error path.

mod support;

use axum::http::StatusCode;
use axum::Router;
use sg_service::services::webhook_service::compute_signature;
use sg_service::services::{FailingWebhookHandler, RecordingWebhookHandler};
use std::sync::Arc;

const WEBHOOK_PATH: &str = "/api/webhooks/media-provider";
const SECRET: &str = "s3cr3t";

fn secured_router(handler: Arc<RecordingWebhookHandler>) -> Router {
    support::test_router(
        support::test_config(&[("MEDIA_WEBHOOK_SECRET", SECRET)]),
        handler,
    )
}

fn signature_header(body: &[u8]) -> String {
    format!("sha256={}", compute_signature(SECRET, body))
}

#[tokio::test]
async fn test_webhook_valid_signature_dispatches() -> Result<(), anyhow::Error> {
    let handler = Arc::new(RecordingWebhookHandler::default());
    let router = secured_router(handler.clone());
    let body = br#"{"event":"room_started","room":{"name":"demo-room"}}"#;

    let (status, response) =
        support::post_bytes(&router, WEBHOOK_PATH, body, Some(&signature_header(body))).await?;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        response,
        serde_json::json!({"status": "ok", "event": "room_started"})
    );

    let calls = handler.calls();
    assert_eq!(calls.len(), 1);
    let (method, envelope) = calls
        .first()
        .ok_or_else(|| anyhow::anyhow!("handler was not invoked"))?;
    assert_eq!(*method, "room_started");
    assert_eq!(
        envelope.room.as_ref().and_then(|r| r.name.as_deref()),
        Some("demo-room")
    );

    Ok(())
}

#[tokio::test]
async fn test_webhook_tampered_signature_rejected() -> Result<(), anyhow::Error> {
    let handler = Arc::new(RecordingWebhookHandler::default());
    let router = secured_router(handler.clone());
    let body = br#"{"event":"room_started"}"#;

    // Flip the final hex character
    let mut header = signature_header(body);
    let tampered = match header.pop() {
        Some('0') => '1',
        _ => '0',
    };
    header.push(tampered);

    let (status, response) =
        support::post_bytes(&router, WEBHOOK_PATH, body, Some(&header)).await?;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(support::error_code(&response), Some("UNAUTHORIZED"));
    assert!(handler.calls().is_empty());

    Ok(())
}

#[tokio::test]
async fn test_webhook_missing_header_rejected() -> Result<(), anyhow::Error> {
    let handler = Arc::new(RecordingWebhookHandler::default());
    let router = secured_router(handler.clone());
    let body = br#"{"event":"room_started"}"#;

    let (status, response) = support::post_bytes(&router, WEBHOOK_PATH, body, None).await?;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(support::error_code(&response), Some("UNAUTHORIZED"));
    assert!(handler.calls().is_empty());

    Ok(())
}

#[tokio::test]
async fn test_webhook_no_secret_accepts_unsigned_delivery() -> Result<(), anyhow::Error> {
    let handler = Arc::new(RecordingWebhookHandler::default());
    let router = support::test_router(support::test_config(&[]), handler.clone());
    let body = br#"{"event":"participant_left","participant":{"identity":"user-3"}}"#;

    let (status, response) = support::post_bytes(&router, WEBHOOK_PATH, body, None).await?;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        response.get("event").and_then(|v| v.as_str()),
        Some("participant_left")
    );
    assert_eq!(handler.calls().len(), 1);

    Ok(())
}

#[tokio::test]
async fn test_webhook_unknown_event_acked_without_dispatch() -> Result<(), anyhow::Error> {
    let handler = Arc::new(RecordingWebhookHandler::default());
    let router = secured_router(handler.clone());
    let body = br#"{"event":"egress_updated"}"#;

    let (status, response) =
        support::post_bytes(&router, WEBHOOK_PATH, body, Some(&signature_header(body))).await?;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        response,
        serde_json::json!({"status": "ok", "event": "egress_updated"})
    );
    assert!(handler.calls().is_empty());

    Ok(())
}

#[tokio::test]
async fn test_webhook_absent_event_acked_without_dispatch() -> Result<(), anyhow::Error> {
    let handler = Arc::new(RecordingWebhookHandler::default());
    let router = secured_router(handler.clone());
    let body = br#"{"room":{"name":"demo-room"}}"#;

    let (status, response) =
        support::post_bytes(&router, WEBHOOK_PATH, body, Some(&signature_header(body))).await?;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(response, serde_json::json!({"status": "ok"}));
    assert!(handler.calls().is_empty());

    Ok(())
}

#[tokio::test]
async fn test_webhook_malformed_body_rejected_before_dispatch() -> Result<(), anyhow::Error> {
    let handler = Arc::new(RecordingWebhookHandler::default());
    let router = secured_router(handler.clone());
    let body = b"this is not json";

    // Signature over the malformed bytes passes; the parse stage rejects
    let (status, response) =
        support::post_bytes(&router, WEBHOOK_PATH, body, Some(&signature_header(body))).await?;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(support::error_code(&response), Some("BAD_REQUEST"));
    assert!(handler.calls().is_empty());

    Ok(())
}

#[tokio::test]
async fn test_webhook_handler_failure_returns_internal_error() -> Result<(), anyhow::Error> {
    let router = support::test_router(
        support::test_config(&[("MEDIA_WEBHOOK_SECRET", SECRET)]),
        Arc::new(FailingWebhookHandler),
    );
    let body = br#"{"event":"recording_finished"}"#;

    let (status, response) =
        support::post_bytes(&router, WEBHOOK_PATH, body, Some(&signature_header(body))).await?;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(support::error_code(&response), Some("INTERNAL_ERROR"));

    Ok(())
}

#[tokio::test]
async fn test_webhook_each_kind_reaches_its_handler() -> Result<(), anyhow::Error> {
    let handler = Arc::new(RecordingWebhookHandler::default());
    let router = secured_router(handler.clone());

    let kinds = [
        "room_started",
        "room_finished",
        "participant_joined",
        "participant_left",
        "track_published",
        "track_unpublished",
        "recording_finished",
    ];

    for kind in kinds {
        let body = format!(r#"{{"event":"{kind}"}}"#);
        let (status, _response) = support::post_bytes(
            &router,
            WEBHOOK_PATH,
            body.as_bytes(),
            Some(&signature_header(body.as_bytes())),
        )
        .await?;
        assert_eq!(status, StatusCode::OK, "kind: {kind}");
    }

    let methods: Vec<&str> = handler.calls().iter().map(|(m, _)| *m).collect();
    assert_eq!(methods, kinds);

    Ok(())
}
