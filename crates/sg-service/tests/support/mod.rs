//! Shared helpers for integration tests.
//!
//! Builds the full application router with an injected webhook handler and
//! drives it in-process via `tower::ServiceExt::oneshot`.

#![allow(dead_code)] // Not every test binary uses every helper

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use metrics_exporter_prometheus::PrometheusBuilder;
use sg_service::config::Config;
use sg_service::routes::{build_routes, AppState};
use sg_service::services::WebhookHandler;
use std::collections::HashMap;
use std::sync::Arc;
use tower::ServiceExt;

/// Build a `Config` from key/value pairs, as if from the environment.
pub fn test_config(vars: &[(&str, &str)]) -> Config {
    let map: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect();
    Config::from_vars(&map)
}

/// Build the application router with the given config and handler.
pub fn test_router(config: Config, handler: Arc<dyn WebhookHandler>) -> Router {
    let state = Arc::new(AppState {
        config,
        webhook_handler: handler,
    });

    // The handle only backs the /metrics route; no global recorder is
    // installed, so parallel test binaries do not conflict.
    let metrics_handle = PrometheusBuilder::new().build_recorder().handle();

    build_routes(state, metrics_handle)
}

/// GET a path and parse the response body as JSON.
pub async fn get_json(
    router: &Router,
    uri: &str,
) -> anyhow::Result<(StatusCode, serde_json::Value)> {
    let request = Request::builder().method("GET").uri(uri).body(Body::empty())?;
    let response = router.clone().oneshot(request).await?;
    read_json(response).await
}

/// GET a path and return the response body as text.
pub async fn get_text(router: &Router, uri: &str) -> anyhow::Result<(StatusCode, String)> {
    let request = Request::builder().method("GET").uri(uri).body(Body::empty())?;
    let response = router.clone().oneshot(request).await?;

    let status = response.status();
    let bytes = response.into_body().collect().await?.to_bytes();
    Ok((status, String::from_utf8(bytes.to_vec())?))
}

/// POST raw bytes, optionally with an `Authorization` header, and parse the
/// response body as JSON.
pub async fn post_bytes(
    router: &Router,
    uri: &str,
    body: &[u8],
    auth_header: Option<&str>,
) -> anyhow::Result<(StatusCode, serde_json::Value)> {
    let mut builder = Request::builder().method("POST").uri(uri);
    if let Some(value) = auth_header {
        builder = builder.header("authorization", value);
    }
    let request = builder.body(Body::from(body.to_vec()))?;
    let response = router.clone().oneshot(request).await?;
    read_json(response).await
}

/// POST a JSON string body and parse the response body as JSON.
pub async fn post_json(
    router: &Router,
    uri: &str,
    body: &str,
) -> anyhow::Result<(StatusCode, serde_json::Value)> {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))?;
    let response = router.clone().oneshot(request).await?;
    read_json(response).await
}

/// Error code from a `{error: {code, message}}` response body.
pub fn error_code(body: &serde_json::Value) -> Option<&str> {
    body.get("error")?.get("code")?.as_str()
}

async fn read_json(response: Response) -> anyhow::Result<(StatusCode, serde_json::Value)> {
    let status = response.status();
    let bytes = response.into_body().collect().await?.to_bytes();
    let value = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes)?
    };
    Ok((status, value))
}
