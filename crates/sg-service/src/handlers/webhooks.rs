//! Webhook ingestion handler.
//!
//! `POST /api/webhooks/media-provider` - invoked asynchronously by the media
//! provider. The body stays raw here: signature verification must run over
//! the exact bytes delivered, before any parsing.

use crate::errors::SgError;
use crate::events::EventKind;
use crate::models::WebhookAck;
use crate::observability::metrics;
use crate::routes::AppState;
use crate::services::webhook_service;
use axum::{extract::State, http::HeaderMap, Json};
use std::sync::Arc;
use std::time::Instant;
use tracing::instrument;

#[instrument(skip_all, name = "sg.webhook.receive")]
pub async fn receive_webhook(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    body: axum::body::Bytes,
) -> Result<Json<WebhookAck>, SgError> {
    let start = Instant::now();

    let auth_header = headers.get("authorization").and_then(|h| h.to_str().ok());

    let result = webhook_service::process_webhook(
        &state.config,
        state.webhook_handler.as_ref(),
        &body,
        auth_header,
    )
    .await;

    let duration = start.elapsed();
    match result {
        Ok(ack) => {
            let event = EventKind::parse(ack.event.as_deref()).as_str();
            metrics::record_webhook(event, "success", duration);
            Ok(Json(ack))
        }
        Err(e) => {
            metrics::record_webhook("unknown", "error", duration);
            Err(e)
        }
    }
}
