//! Conversation thread model.

use omni_core::{ChannelKind, ConversationId, ConversationStatus, PersonaKind, Timestamp};
use serde::{Deserialize, Serialize};

/// A single customer thread in the unified inbox
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Conversation {
    pub id: ConversationId,

    /// Display name of the customer on the other end
    pub contact_name: String,

    /// Channel the thread lives on
    pub channel: ChannelKind,

    pub status: ConversationStatus,

    /// First line of the most recent message, for list views
    pub last_message_preview: String,

    /// When the most recent message arrived
    pub last_activity: Timestamp,

    pub unread_count: u32,

    /// Persona currently answering this thread
    pub assigned_persona: PersonaKind,
}

impl Conversation {
    pub fn is_unread(&self) -> bool {
        self.unread_count > 0
    }

    /// Threads that still need someone's attention
    pub fn needs_attention(&self) -> bool {
        self.status == ConversationStatus::Open && self.is_unread()
    }
}
