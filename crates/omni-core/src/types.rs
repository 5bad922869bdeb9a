//! Fundamental types for the Omni platform.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a workspace member
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MemberId(pub Uuid);

impl MemberId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for MemberId {
    fn default() -> Self {
        Self::new()
    }
}

/// Unique identifier for a conversation thread
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ConversationId(pub Uuid);

impl ConversationId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ConversationId {
    fn default() -> Self {
        Self::new()
    }
}

/// Unique identifier for a recorded voice session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VoiceSessionId(pub Uuid);

impl VoiceSessionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for VoiceSessionId {
    fn default() -> Self {
        Self::new()
    }
}

/// Timestamp wrapper with millisecond precision
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Timestamp(pub i64);

impl Timestamp {
    pub fn now() -> Self {
        Self(Utc::now().timestamp_millis())
    }

    pub fn from_millis(millis: i64) -> Self {
        Self(millis)
    }

    pub fn as_millis(&self) -> i64 {
        self.0
    }

    pub fn as_secs_f64(&self) -> f64 {
        self.0 as f64 / 1_000.0
    }

    pub fn to_datetime(&self) -> DateTime<Utc> {
        DateTime::from_timestamp_millis(self.0).unwrap_or_else(Utc::now)
    }
}

/// Messaging channel a conversation lives on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ChannelKind {
    Sms,
    Whatsapp,
    Email,
    Voice,
    WebChat,
    Instagram,
}

impl ChannelKind {
    pub const ALL: [ChannelKind; 6] = [
        ChannelKind::Sms,
        ChannelKind::Whatsapp,
        ChannelKind::Email,
        ChannelKind::Voice,
        ChannelKind::WebChat,
        ChannelKind::Instagram,
    ];

    /// Stable identifier used in URLs and query strings
    pub fn slug(&self) -> &'static str {
        match self {
            ChannelKind::Sms => "sms",
            ChannelKind::Whatsapp => "whatsapp",
            ChannelKind::Email => "email",
            ChannelKind::Voice => "voice",
            ChannelKind::WebChat => "web-chat",
            ChannelKind::Instagram => "instagram",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        match slug {
            "sms" => Some(ChannelKind::Sms),
            "whatsapp" => Some(ChannelKind::Whatsapp),
            "email" => Some(ChannelKind::Email),
            "voice" => Some(ChannelKind::Voice),
            "web-chat" => Some(ChannelKind::WebChat),
            "instagram" => Some(ChannelKind::Instagram),
            _ => None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ChannelKind::Sms => "SMS",
            ChannelKind::Whatsapp => "WhatsApp",
            ChannelKind::Email => "Email",
            ChannelKind::Voice => "Voice",
            ChannelKind::WebChat => "Web Chat",
            ChannelKind::Instagram => "Instagram",
        }
    }

    /// Whether the channel expects replies within the same sitting
    pub fn is_realtime(&self) -> bool {
        matches!(
            self,
            ChannelKind::Voice | ChannelKind::WebChat | ChannelKind::Whatsapp
        )
    }
}

/// Lifecycle state of a conversation in the inbox
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ConversationStatus {
    Open,
    Snoozed,
    Resolved,
}

impl ConversationStatus {
    pub const ALL: [ConversationStatus; 3] = [
        ConversationStatus::Open,
        ConversationStatus::Snoozed,
        ConversationStatus::Resolved,
    ];

    pub fn slug(&self) -> &'static str {
        match self {
            ConversationStatus::Open => "open",
            ConversationStatus::Snoozed => "snoozed",
            ConversationStatus::Resolved => "resolved",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        match slug {
            "open" => Some(ConversationStatus::Open),
            "snoozed" => Some(ConversationStatus::Snoozed),
            "resolved" => Some(ConversationStatus::Resolved),
            _ => None,
        }
    }
}
