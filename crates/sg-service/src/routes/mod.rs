//! HTTP routes for the Session Gateway.
//!
//! Defines the axum router and application state.

use crate::config::Config;
use crate::handlers;
use crate::services::WebhookHandler;
use axum::{
    routing::{get, post},
    Router,
};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Credential configuration, read-only after startup.
    pub config: Config,

    /// Collaborator invoked once per dispatched webhook event.
    pub webhook_handler: Arc<dyn WebhookHandler>,
}

/// Build the application routes.
///
/// - `/` - service status (public)
/// - `/health` - liveness probe (public)
/// - `/metrics` - Prometheus metrics endpoint (public)
/// - `POST /api/token` - access token issuance
/// - `POST /api/webhooks/media-provider` - webhook ingestion
/// - TraceLayer for request logging
/// - 30 second request timeout
/// - Permissive CORS: the mobile client calls from arbitrary origins;
///   tighten per deployment
pub fn build_routes(state: Arc<AppState>, metrics_handle: PrometheusHandle) -> Router {
    let api_routes = Router::new()
        .route("/", get(handlers::root_status))
        .route("/health", get(handlers::health_check))
        .route("/api/token", post(handlers::generate_token))
        .route(
            "/api/webhooks/media-provider",
            post(handlers::receive_webhook),
        )
        .with_state(state);

    // Metrics route with its own state
    let metrics_routes = Router::new()
        .route("/metrics", get(handlers::metrics_handler))
        .with_state(metrics_handle);

    api_routes
        .merge(metrics_routes)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(Duration::from_secs(30)))
        .layer(CorsLayer::permissive())
}
