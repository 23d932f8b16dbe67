//! Prometheus metrics endpoint.

use axum::extract::State;
use metrics_exporter_prometheus::PrometheusHandle;

/// Render the current metrics in Prometheus exposition format.
///
/// `GET /metrics`
pub async fn metrics_handler(State(handle): State<PrometheusHandle>) -> String {
    handle.render()
}
