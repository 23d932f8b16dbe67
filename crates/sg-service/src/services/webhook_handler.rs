//! The webhook handler seam.
//!
//! The pipeline routes each parsed envelope to exactly one method on
//! [`WebhookHandler`]. What a handler does internally (persistence,
//! transcript processing, notification delivery) is the embedding
//! application's concern; the gateway only invokes it and propagates
//! failure. Handler errors are not isolated per event kind: a failure
//! aborts the request that delivered the event.
//!
//! Handlers must not block indefinitely; handler I/O should suspend so a
//! slow handler only stalls the request that invoked it. Deduplication of
//! repeated deliveries is the handler's responsibility if required.

use crate::events::WebhookEnvelope;
use async_trait::async_trait;

/// Collaborator invoked once per dispatched webhook event.
#[async_trait]
pub trait WebhookHandler: Send + Sync {
    async fn room_started(&self, envelope: &WebhookEnvelope) -> anyhow::Result<()>;

    async fn room_finished(&self, envelope: &WebhookEnvelope) -> anyhow::Result<()>;

    async fn participant_joined(&self, envelope: &WebhookEnvelope) -> anyhow::Result<()>;

    async fn participant_left(&self, envelope: &WebhookEnvelope) -> anyhow::Result<()>;

    async fn track_published(&self, envelope: &WebhookEnvelope) -> anyhow::Result<()>;

    async fn track_unpublished(&self, envelope: &WebhookEnvelope) -> anyhow::Result<()>;

    async fn recording_finished(&self, envelope: &WebhookEnvelope) -> anyhow::Result<()>;
}

/// Default handler: logs each event's salient fields and performs no other
/// side effects. Production deployments replace this with their own
/// implementation wired into the application state.
pub struct LoggingWebhookHandler;

#[async_trait]
impl WebhookHandler for LoggingWebhookHandler {
    async fn room_started(&self, envelope: &WebhookEnvelope) -> anyhow::Result<()> {
        let room = envelope.room.as_ref().and_then(|r| r.name.as_deref());
        tracing::info!(target: "sg.webhooks", room, "Room started");
        Ok(())
    }

    async fn room_finished(&self, envelope: &WebhookEnvelope) -> anyhow::Result<()> {
        let room = envelope.room.as_ref().and_then(|r| r.name.as_deref());
        let duration = envelope.room.as_ref().and_then(|r| r.duration);
        tracing::info!(target: "sg.webhooks", room, duration, "Room finished");
        Ok(())
    }

    async fn participant_joined(&self, envelope: &WebhookEnvelope) -> anyhow::Result<()> {
        let room = envelope.room.as_ref().and_then(|r| r.name.as_deref());
        let identity = envelope
            .participant
            .as_ref()
            .and_then(|p| p.identity.as_deref());
        let name = envelope.participant.as_ref().and_then(|p| p.name.as_deref());
        tracing::info!(target: "sg.webhooks", room, identity, name, "Participant joined");
        Ok(())
    }

    async fn participant_left(&self, envelope: &WebhookEnvelope) -> anyhow::Result<()> {
        let room = envelope.room.as_ref().and_then(|r| r.name.as_deref());
        let identity = envelope
            .participant
            .as_ref()
            .and_then(|p| p.identity.as_deref());
        tracing::info!(target: "sg.webhooks", room, identity, "Participant left");
        Ok(())
    }

    async fn track_published(&self, envelope: &WebhookEnvelope) -> anyhow::Result<()> {
        let identity = envelope
            .participant
            .as_ref()
            .and_then(|p| p.identity.as_deref());
        let kind = envelope.track.as_ref().and_then(|t| t.kind.as_deref());
        tracing::info!(target: "sg.webhooks", identity, kind, "Track published");
        Ok(())
    }

    async fn track_unpublished(&self, envelope: &WebhookEnvelope) -> anyhow::Result<()> {
        let identity = envelope
            .participant
            .as_ref()
            .and_then(|p| p.identity.as_deref());
        let kind = envelope.track.as_ref().and_then(|t| t.kind.as_deref());
        tracing::info!(target: "sg.webhooks", identity, kind, "Track unpublished");
        Ok(())
    }

    async fn recording_finished(&self, envelope: &WebhookEnvelope) -> anyhow::Result<()> {
        let room = envelope
            .egress_info
            .as_ref()
            .and_then(|e| e.room_name.as_deref());
        let location = envelope
            .egress_info
            .as_ref()
            .and_then(|e| e.file.as_ref())
            .and_then(|f| f.location.as_deref());
        tracing::info!(target: "sg.webhooks", room, location, "Recording finished");
        Ok(())
    }
}

/// Test doubles for the handler seam (exposed for integration tests).
pub mod mock {
    use super::{async_trait, WebhookEnvelope, WebhookHandler};
    use std::sync::Mutex;

    /// Records every invocation, in order, together with the envelope the
    /// method was called with.
    #[derive(Default)]
    pub struct RecordingWebhookHandler {
        calls: Mutex<Vec<(&'static str, WebhookEnvelope)>>,
    }

    impl RecordingWebhookHandler {
        fn record(&self, method: &'static str, envelope: &WebhookEnvelope) {
            if let Ok(mut calls) = self.calls.lock() {
                calls.push((method, envelope.clone()));
            }
        }

        /// Snapshot of the recorded invocations.
        #[must_use]
        pub fn calls(&self) -> Vec<(&'static str, WebhookEnvelope)> {
            self.calls.lock().map(|c| c.clone()).unwrap_or_default()
        }
    }

    #[async_trait]
    impl WebhookHandler for RecordingWebhookHandler {
        async fn room_started(&self, envelope: &WebhookEnvelope) -> anyhow::Result<()> {
            self.record("room_started", envelope);
            Ok(())
        }

        async fn room_finished(&self, envelope: &WebhookEnvelope) -> anyhow::Result<()> {
            self.record("room_finished", envelope);
            Ok(())
        }

        async fn participant_joined(&self, envelope: &WebhookEnvelope) -> anyhow::Result<()> {
            self.record("participant_joined", envelope);
            Ok(())
        }

        async fn participant_left(&self, envelope: &WebhookEnvelope) -> anyhow::Result<()> {
            self.record("participant_left", envelope);
            Ok(())
        }

        async fn track_published(&self, envelope: &WebhookEnvelope) -> anyhow::Result<()> {
            self.record("track_published", envelope);
            Ok(())
        }

        async fn track_unpublished(&self, envelope: &WebhookEnvelope) -> anyhow::Result<()> {
            self.record("track_unpublished", envelope);
            Ok(())
        }

        async fn recording_finished(&self, envelope: &WebhookEnvelope) -> anyhow::Result<()> {
            self.record("recording_finished", envelope);
            Ok(())
        }
    }

    /// Fails every invocation; exercises the handler-error path.
    pub struct FailingWebhookHandler;

    #[async_trait]
    impl WebhookHandler for FailingWebhookHandler {
        async fn room_started(&self, _envelope: &WebhookEnvelope) -> anyhow::Result<()> {
            anyhow::bail!("room_started handler failed")
        }

        async fn room_finished(&self, _envelope: &WebhookEnvelope) -> anyhow::Result<()> {
            anyhow::bail!("room_finished handler failed")
        }

        async fn participant_joined(&self, _envelope: &WebhookEnvelope) -> anyhow::Result<()> {
            anyhow::bail!("participant_joined handler failed")
        }

        async fn participant_left(&self, _envelope: &WebhookEnvelope) -> anyhow::Result<()> {
            anyhow::bail!("participant_left handler failed")
        }

        async fn track_published(&self, _envelope: &WebhookEnvelope) -> anyhow::Result<()> {
            anyhow::bail!("track_published handler failed")
        }

        async fn track_unpublished(&self, _envelope: &WebhookEnvelope) -> anyhow::Result<()> {
            anyhow::bail!("track_unpublished handler failed")
        }

        async fn recording_finished(&self, _envelope: &WebhookEnvelope) -> anyhow::Result<()> {
            anyhow::bail!("recording_finished handler failed")
        }
    }
}
