//! Access token issuance.
//!
//! Builds the signed credential a participant presents when joining a media
//! room. Tokens are compact HS256 claim sets in the provider's wire shape:
//! the API key as the issuer (key identifier), the participant identity as
//! subject and display name, and a single `video` grant scoping the token to
//! exactly one room with the full participant capability set.

use crate::config::Config;
use crate::errors::SgError;
use crate::models::TokenResponse;
use chrono::Utc;
use common::secret::ExposeSecret;
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use serde::{Deserialize, Serialize};

/// Issued-token lifetime. The provider SDK defaults to six hours; the
/// signing library here has no implicit expiry, so the default is pinned.
const TOKEN_TTL_SECONDS: i64 = 6 * 60 * 60;

/// Capability set embedded in a signed access token.
///
/// Wire keys are camelCase per the provider's token contract. Every issued
/// token carries exactly one grant, scoped to one room; there is no
/// wildcard and no reduced-capability variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoGrant {
    pub room_join: bool,
    pub room: String,
    pub can_publish: bool,
    pub can_subscribe: bool,
    pub can_publish_data: bool,
}

/// Claims carried by an issued access token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessClaims {
    /// Key identifier: the API key the token was signed under.
    pub iss: String,

    /// Participant identity.
    pub sub: String,

    /// Display name, same as the identity.
    pub name: String,

    /// Issued-at timestamp (Unix epoch seconds).
    pub iat: i64,

    /// Not-before timestamp (Unix epoch seconds).
    pub nbf: i64,

    /// Expiration timestamp (Unix epoch seconds).
    pub exp: i64,

    /// Opaque payload attached verbatim; downstream participants read it
    /// as-is. No size bound is imposed here.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<String>,

    /// The single room grant.
    pub video: VideoGrant,
}

/// Issue a signed access token for one participant in one room.
///
/// # Errors
///
/// - [`SgError::Configuration`] when the API key or secret is not configured.
/// - [`SgError::Signing`] when serialization or signing fails.
pub fn issue_token(
    config: &Config,
    room_name: &str,
    participant_identity: &str,
    metadata: Option<&str>,
) -> Result<TokenResponse, SgError> {
    let (api_key, api_secret) = config.signing_credentials().ok_or_else(|| {
        SgError::Configuration(
            "Media credentials not configured. Set MEDIA_API_KEY and MEDIA_API_SECRET \
             environment variables."
                .to_string(),
        )
    })?;

    let now = Utc::now().timestamp();
    let claims = AccessClaims {
        iss: api_key.to_string(),
        sub: participant_identity.to_string(),
        name: participant_identity.to_string(),
        iat: now,
        nbf: now,
        exp: now + TOKEN_TTL_SECONDS,
        metadata: metadata.map(ToString::to_string),
        video: VideoGrant {
            room_join: true,
            room: room_name.to_string(),
            can_publish: true,
            can_subscribe: true,
            can_publish_data: true,
        },
    };

    let token = encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(api_secret.expose_secret().as_bytes()),
    )
    .map_err(|e| SgError::Signing(format!("Failed to sign access token: {e}")))?;

    Ok(TokenResponse {
        token,
        url: config.media_server_url.clone(),
    })
}
