//! Service layer for the Session Gateway.
//!
//! # Components
//!
//! - `token_service` - access token construction and signing
//! - `webhook_handler` - the collaborator seam webhook events dispatch into
//! - `webhook_service` - webhook authentication, parsing, and dispatch

pub mod token_service;
pub mod webhook_handler;
pub mod webhook_service;

pub use webhook_handler::{LoggingWebhookHandler, WebhookHandler};
// Test doubles for the handler seam (exposed for integration tests)
#[allow(unused_imports)]
pub use webhook_handler::mock::{FailingWebhookHandler, RecordingWebhookHandler};
