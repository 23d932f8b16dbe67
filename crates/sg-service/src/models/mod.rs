//! Data models for the Session Gateway HTTP surface.

use serde::{Deserialize, Serialize};

/// Token issuance request.
///
/// Sent by the mobile client before joining a room. Wire keys are camelCase
/// per the client contract. The gateway trusts the caller-supplied identity;
/// authenticating the calling client is the embedding deployment's concern.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenRequest {
    /// Room the token grants access to. Must be non-empty.
    pub room_name: String,

    /// Participant identity, also used as the display name. Must be non-empty.
    pub participant_identity: String,

    /// Opaque payload attached verbatim to the token for downstream readers.
    #[serde(default)]
    pub metadata: Option<String>,
}

/// Token issuance response: the signed credential plus the media-server URL
/// the client should connect to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub token: String,
    pub url: String,
}

/// Root status response, returned by `GET /`.
#[derive(Debug, Clone, Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
    /// RFC 3339 UTC timestamp at time of request.
    pub timestamp: String,
}

/// Liveness response, returned by `GET /health`.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// Acknowledgement returned for every accepted webhook delivery, regardless
/// of what the handler did internally.
#[derive(Debug, Clone, Serialize)]
pub struct WebhookAck {
    pub status: &'static str,

    /// Raw event tag echoed back; omitted when the payload carried none.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event: Option<String>,
}
