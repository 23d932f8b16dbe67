//! Secret types for protecting credential material from accidental logging.
//!
//! This module re-exports types from the [`secrecy`] crate. Use them for every
//! sensitive value the gateway handles: the media-provider API secret, the
//! webhook verification secret, and any future credential material.
//!
//! `SecretString` implements `Debug` with redaction, so a struct that derives
//! `Debug` while holding a secret field cannot leak it through `{:?}` or a
//! tracing event. The wrapped value is zeroized on drop.
//!
//! Access to the underlying string is always explicit:
//!
//! ```rust
//! use common::secret::{ExposeSecret, SecretString};
//!
//! let api_secret = SecretString::from("whk_9f3a");
//!
//! // Redacted: prints Secret([REDACTED alloc::string::String])
//! println!("{:?}", api_secret);
//!
//! // Deliberate access at the point of use only
//! let raw: &str = api_secret.expose_secret();
//! # assert_eq!(raw, "whk_9f3a");
//! ```
//!
//! Configuration structs hold secrets as `Option<SecretString>` since the
//! gateway treats absent credentials as a valid (if degraded) state; the
//! option is unwrapped and exposed only where the secret is actually used
//! for signing or verification.

// Re-export the main types from secrecy
pub use secrecy::{ExposeSecret, SecretBox, SecretString};
