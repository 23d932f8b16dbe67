//! Metrics definitions for the Session Gateway.
//!
//! All metrics follow Prometheus naming conventions:
//! - `sg_` prefix for Session Gateway
//! - `_total` suffix for counters
//! - `_seconds` suffix for duration histograms
//!
//! # Cardinality
//!
//! Labels are bounded:
//! - `event`: the seven known webhook kinds plus `unknown`
//! - `status`: success / error / bad_request

use metrics::{counter, histogram};
use metrics_exporter_prometheus::{Matcher, PrometheusBuilder, PrometheusHandle};
use std::time::Duration;

/// Initialize the Prometheus metrics recorder and return the handle for
/// serving metrics via HTTP. Must be called before any metrics are recorded.
///
/// # Errors
///
/// Returns an error if the recorder fails to install (e.g., already
/// installed).
pub fn init_metrics_recorder() -> Result<PrometheusHandle, String> {
    PrometheusBuilder::new()
        .set_buckets_for_metric(
            Matcher::Prefix("sg_webhook".to_string()),
            &[0.001, 0.005, 0.010, 0.025, 0.050, 0.100, 0.250, 0.500, 1.000],
        )
        .map_err(|e| format!("Failed to set webhook buckets: {e}"))?
        .install_recorder()
        .map_err(|e| format!("Failed to install Prometheus recorder: {e}"))
}

/// Record the outcome of a token issuance request.
///
/// Metric: `sg_tokens_issued_total`
pub fn record_token_issued(status: &'static str) {
    counter!("sg_tokens_issued_total", "status" => status).increment(1);
}

/// Record one processed webhook delivery.
///
/// Metrics: `sg_webhooks_total`, `sg_webhook_duration_seconds`
///
/// `event` must come from `EventKind::as_str` so the label set stays bounded.
pub fn record_webhook(event: &'static str, status: &'static str, duration: Duration) {
    histogram!("sg_webhook_duration_seconds", "event" => event).record(duration.as_secs_f64());

    counter!("sg_webhooks_total", "event" => event, "status" => status).increment(1);
}
