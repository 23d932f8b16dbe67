//! Session Gateway (SG) Service Library
//!
//! This library provides the backend integration layer between the mobile
//! client, the real-time media-session provider, and downstream business
//! logic: it issues signed room access tokens and authenticates, parses,
//! and dispatches the provider's webhook notifications.
//!
//! # Modules
//!
//! - `config` - Service configuration
//! - `errors` - Error types
//! - `events` - Webhook envelope and event kinds
//! - `handlers` - HTTP request handlers
//! - `models` - Data models
//! - `observability` - Metrics
//! - `routes` - Router assembly and application state
//! - `services` - Business logic layer

pub mod config;
pub mod errors;
pub mod events;
pub mod handlers;
pub mod models;
pub mod observability;
pub mod routes;
pub mod services;
