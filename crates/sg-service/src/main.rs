use sg_service::config::Config;
use sg_service::observability::metrics;
use sg_service::routes::{self, AppState};
use sg_service::services::LoggingWebhookHandler;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sg_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Session Gateway");

    // Load configuration. Missing credentials are a valid startup state and
    // are rejected per-request instead.
    let config = Config::from_env();

    if config.signing_credentials().is_none() {
        warn!(
            "Media API credentials not configured; token issuance will fail until \
             MEDIA_API_KEY and MEDIA_API_SECRET are set"
        );
    }
    if config.webhook_secret.is_none() {
        warn!("MEDIA_WEBHOOK_SECRET not set; webhook signature verification is disabled");
    }

    // Initialize metrics recorder
    let metrics_handle = metrics::init_metrics_recorder().map_err(|e| {
        error!("Failed to initialize metrics recorder: {}", e);
        e
    })?;

    // Parse bind address before moving config
    let bind_address = config.bind_address.clone();

    // Create application state
    let state = Arc::new(AppState {
        config,
        webhook_handler: Arc::new(LoggingWebhookHandler),
    });

    // Build application routes
    let app = routes::build_routes(state, metrics_handle);

    // Parse bind address
    let addr: SocketAddr = bind_address.parse().map_err(|e| {
        error!("Invalid bind address: {}", e);
        e
    })?;

    info!("Session Gateway listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
