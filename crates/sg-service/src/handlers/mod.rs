//! HTTP request handlers for the Session Gateway.

pub mod health;
pub mod metrics;
pub mod tokens;
pub mod webhooks;

pub use health::{health_check, root_status};
pub use metrics::metrics_handler;
pub use tokens::generate_token;
pub use webhooks::receive_webhook;
