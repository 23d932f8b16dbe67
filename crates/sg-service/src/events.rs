//! Webhook envelope and event kinds.
//!
//! The media provider delivers lifecycle notifications as JSON documents
//! tagged by an `event` field. The tag is modeled as a closed sum type so
//! dispatch is an exhaustive match; adding a new kind is a compile-time
//! checked change. Tags outside the known set (including an absent tag)
//! collapse into [`EventKind::Unknown`], which is acknowledged without
//! invoking any handler.

use serde::{Deserialize, Serialize};

/// The fixed set of event kinds the gateway routes, plus `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    /// A room was created.
    RoomStarted,

    /// A room ended.
    RoomFinished,

    /// A participant joined a room.
    ParticipantJoined,

    /// A participant left a room.
    ParticipantLeft,

    /// A media track started publishing.
    TrackPublished,

    /// A media track stopped publishing.
    TrackUnpublished,

    /// A recording completed.
    RecordingFinished,

    /// Any other tag, including a missing one. Not an error.
    Unknown,
}

impl EventKind {
    /// Map a raw event tag to its kind.
    #[must_use]
    pub fn parse(tag: Option<&str>) -> Self {
        match tag {
            Some("room_started") => EventKind::RoomStarted,
            Some("room_finished") => EventKind::RoomFinished,
            Some("participant_joined") => EventKind::ParticipantJoined,
            Some("participant_left") => EventKind::ParticipantLeft,
            Some("track_published") => EventKind::TrackPublished,
            Some("track_unpublished") => EventKind::TrackUnpublished,
            Some("recording_finished") => EventKind::RecordingFinished,
            _ => EventKind::Unknown,
        }
    }

    /// Returns the string representation of the kind.
    ///
    /// Used as a bounded metrics label; `Unknown` collapses every
    /// unrecognized tag into a single value.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::RoomStarted => "room_started",
            EventKind::RoomFinished => "room_finished",
            EventKind::ParticipantJoined => "participant_joined",
            EventKind::ParticipantLeft => "participant_left",
            EventKind::TrackPublished => "track_published",
            EventKind::TrackUnpublished => "track_unpublished",
            EventKind::RecordingFinished => "recording_finished",
            EventKind::Unknown => "unknown",
        }
    }
}

/// Parsed representation of one inbound webhook delivery.
///
/// Constructed once per request from the raw body, passed by reference to
/// exactly one handler, never persisted. Every section is optional; the
/// provider only populates the records relevant to the event kind. Unknown
/// fields in the payload are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WebhookEnvelope {
    /// Raw event tag as delivered. `None` is tolerated and treated as an
    /// unrecognized kind.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub room: Option<RoomInfo>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub participant: Option<ParticipantInfo>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub track: Option<TrackInfo>,

    #[serde(rename = "egressInfo", skip_serializing_if = "Option::is_none")]
    pub egress_info: Option<EgressInfo>,
}

impl WebhookEnvelope {
    /// The event kind this envelope is routed by.
    #[must_use]
    pub fn kind(&self) -> EventKind {
        EventKind::parse(self.event.as_deref())
    }
}

/// Room record attached to room and participant events.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RoomInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sid: Option<String>,

    /// Room lifetime in seconds, populated on `room_finished`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<u64>,
}

/// Participant record attached to participant and track events.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParticipantInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identity: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Track record attached to track events.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrackInfo {
    /// Track kind, e.g. audio or video.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sid: Option<String>,
}

/// Recording/egress record attached to `recording_finished`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EgressInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub room_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<FileInfo>,
}

/// Output file record inside an egress record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FileInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}
