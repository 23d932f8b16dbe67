//! Webhook authentication and dispatch pipeline.
//!
//! Every inbound delivery passes through three strictly sequential stages:
//!
//! 1. Signature check over the raw, unparsed body (skipped entirely when no
//!    verification secret is configured, which is an explicit insecure mode).
//! 2. Envelope parse.
//! 3. Exhaustive dispatch to exactly one handler method, where unknown
//!    event kinds are acknowledged without invoking any handler.
//!
//! The pipeline holds no state across requests and never retries.

use crate::config::Config;
use crate::errors::SgError;
use crate::events::{EventKind, WebhookEnvelope};
use crate::models::WebhookAck;
use crate::services::webhook_handler::WebhookHandler;
use common::secret::ExposeSecret;
use ring::hmac;

/// Literal prefix the provider places before the hex digest in the
/// `Authorization` header.
const SIGNATURE_PREFIX: &str = "sha256=";

/// HMAC-SHA256 digest of `body`, keyed by `secret`, as lowercase hex.
///
/// This is the value the provider sends after the `sha256=` prefix.
#[must_use]
pub fn compute_signature(secret: &str, body: &[u8]) -> String {
    let key = hmac::Key::new(hmac::HMAC_SHA256, secret.as_bytes());
    let tag = hmac::sign(&key, body);
    hex::encode(tag.as_ref())
}

/// Check a delivery's `Authorization` header against the raw body.
///
/// The header must carry the digest as the literal `sha256=` prefix followed
/// by the hex tag; anything else is rejected before any comparison.
/// `hmac::verify` recomputes the tag and compares it in constant time, so a
/// mismatched digest cannot be probed byte-by-byte through timing.
#[must_use]
pub fn verify_signature(secret: &str, body: &[u8], auth_header: &str) -> bool {
    let Some(provided_hex) = auth_header.strip_prefix(SIGNATURE_PREFIX) else {
        return false;
    };
    let Ok(provided_tag) = hex::decode(provided_hex) else {
        return false;
    };

    let key = hmac::Key::new(hmac::HMAC_SHA256, secret.as_bytes());
    hmac::verify(&key, body, &provided_tag).is_ok()
}

/// Run one delivery through the full pipeline.
///
/// # Errors
///
/// - [`SgError::Unauthorized`] when a secret is configured and the header is
///   missing or carries a bad signature. No side effects have occurred.
/// - [`SgError::BadRequest`] when the body is not a parseable envelope.
/// - [`SgError::Internal`] when the dispatched handler fails.
pub async fn process_webhook(
    config: &Config,
    handler: &dyn WebhookHandler,
    body: &[u8],
    auth_header: Option<&str>,
) -> Result<WebhookAck, SgError> {
    if let Some(secret) = &config.webhook_secret {
        let header = auth_header.ok_or_else(|| {
            tracing::warn!(target: "sg.webhooks", "Webhook rejected: missing authorization header");
            SgError::Unauthorized("Missing authorization header".to_string())
        })?;

        if !verify_signature(secret.expose_secret(), body, header) {
            tracing::warn!(target: "sg.webhooks", "Webhook rejected: invalid signature");
            return Err(SgError::Unauthorized(
                "Invalid webhook signature".to_string(),
            ));
        }
    }

    let envelope: WebhookEnvelope = serde_json::from_slice(body).map_err(|e| {
        tracing::debug!(target: "sg.webhooks", error = %e, "Webhook rejected: unparseable payload");
        SgError::BadRequest("Invalid JSON payload".to_string())
    })?;

    let kind = envelope.kind();
    dispatch(handler, kind, &envelope).await.map_err(|e| {
        tracing::error!(
            target: "sg.webhooks",
            event = kind.as_str(),
            error = %e,
            "Webhook handler failed"
        );
        SgError::Internal(format!("Webhook processing failed: {e}"))
    })?;

    Ok(WebhookAck {
        status: "ok",
        event: envelope.event,
    })
}

/// Route the envelope to exactly one handler method.
async fn dispatch(
    handler: &dyn WebhookHandler,
    kind: EventKind,
    envelope: &WebhookEnvelope,
) -> anyhow::Result<()> {
    match kind {
        EventKind::RoomStarted => handler.room_started(envelope).await,
        EventKind::RoomFinished => handler.room_finished(envelope).await,
        EventKind::ParticipantJoined => handler.participant_joined(envelope).await,
        EventKind::ParticipantLeft => handler.participant_left(envelope).await,
        EventKind::TrackPublished => handler.track_published(envelope).await,
        EventKind::TrackUnpublished => handler.track_unpublished(envelope).await,
        EventKind::RecordingFinished => handler.recording_finished(envelope).await,
        EventKind::Unknown => {
            tracing::info!(
                target: "sg.webhooks",
                event = envelope.event.as_deref(),
                "Unhandled webhook event kind"
            );
            Ok(())
        }
    }
}
