use common::secret::SecretString;
use std::collections::HashMap;
use std::env;

/// Service configuration, read-only after startup.
///
/// Credentials are optional at load time: the gateway starts without them and
/// rejects the operations that need them at the point of use. An unset
/// `webhook_secret` disables webhook signature verification entirely, which
/// is an explicit insecure mode rather than an error.
#[derive(Debug, Clone)]
pub struct Config {
    /// Address the HTTP server binds to.
    pub bind_address: String,

    /// Media provider API key, also the key identifier inside issued tokens.
    pub api_key: Option<String>,

    /// Media provider API secret used to sign access tokens.
    pub api_secret: Option<SecretString>,

    /// Secret used to verify webhook deliveries. Unset disables verification.
    pub webhook_secret: Option<SecretString>,

    /// Media server URL returned to clients alongside an issued token.
    pub media_server_url: String,
}

impl Config {
    /// Load configuration from environment variables
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_vars(&env::vars().collect())
    }

    /// Load configuration from a `HashMap` (for testing)
    ///
    /// Empty-string values are normalized to absent so that `VAR=` in a unit
    /// file behaves the same as an unset variable.
    #[must_use]
    pub fn from_vars(vars: &HashMap<String, String>) -> Self {
        let bind_address = vars
            .get("BIND_ADDRESS")
            .cloned()
            .unwrap_or_else(|| "0.0.0.0:8000".to_string());

        let api_key = non_empty(vars, "MEDIA_API_KEY");
        let api_secret = non_empty(vars, "MEDIA_API_SECRET").map(SecretString::from);
        let webhook_secret = non_empty(vars, "MEDIA_WEBHOOK_SECRET").map(SecretString::from);

        let media_server_url = non_empty(vars, "MEDIA_SERVER_URL")
            .unwrap_or_else(|| "ws://localhost:7880".to_string());

        Config {
            bind_address,
            api_key,
            api_secret,
            webhook_secret,
            media_server_url,
        }
    }

    /// Token-signing credentials, present only when both the API key and the
    /// API secret are configured.
    #[must_use]
    pub fn signing_credentials(&self) -> Option<(&str, &SecretString)> {
        match (&self.api_key, &self.api_secret) {
            (Some(key), Some(secret)) => Some((key.as_str(), secret)),
            _ => None,
        }
    }
}

fn non_empty(vars: &HashMap<String, String>, name: &str) -> Option<String> {
    vars.get(name).filter(|v| !v.is_empty()).cloned()
}
