//! Pure inbox queries: filtering and sorting over conversation slices.

use omni_core::{ChannelKind, ConversationStatus};
use serde::{Deserialize, Serialize};

use crate::conversation::Conversation;

/// Sort order for inbox listings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortOrder {
    /// Most recent activity first
    #[default]
    NewestFirst,
    /// Oldest activity first
    OldestFirst,
    /// Highest unread count first, recency as tiebreak
    UnreadFirst,
}

impl SortOrder {
    pub fn from_slug(slug: &str) -> Option<Self> {
        match slug {
            "newest-first" => Some(SortOrder::NewestFirst),
            "oldest-first" => Some(SortOrder::OldestFirst),
            "unread-first" => Some(SortOrder::UnreadFirst),
            _ => None,
        }
    }
}

/// Inbox query: every field is optional, an empty query returns everything
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConversationQuery {
    pub channel: Option<ChannelKind>,
    pub status: Option<ConversationStatus>,
    /// Case-insensitive substring match over contact name and preview
    pub search: Option<String>,
    #[serde(default)]
    pub sort: SortOrder,
}

impl ConversationQuery {
    pub fn matches(&self, conversation: &Conversation) -> bool {
        if let Some(channel) = self.channel {
            if conversation.channel != channel {
                return false;
            }
        }
        if let Some(status) = self.status {
            if conversation.status != status {
                return false;
            }
        }
        if let Some(search) = &self.search {
            let needle = search.to_lowercase();
            if needle.is_empty() {
                return true;
            }
            let in_name = conversation.contact_name.to_lowercase().contains(&needle);
            let in_preview = conversation
                .last_message_preview
                .to_lowercase()
                .contains(&needle);
            if !in_name && !in_preview {
                return false;
            }
        }
        true
    }

    /// Filter and sort a slice of conversations into a fresh list
    pub fn apply(&self, conversations: &[Conversation]) -> Vec<Conversation> {
        let mut matched: Vec<Conversation> = conversations
            .iter()
            .filter(|c| self.matches(c))
            .cloned()
            .collect();

        match self.sort {
            SortOrder::NewestFirst => {
                matched.sort_by(|a, b| b.last_activity.cmp(&a.last_activity));
            }
            SortOrder::OldestFirst => {
                matched.sort_by(|a, b| a.last_activity.cmp(&b.last_activity));
            }
            SortOrder::UnreadFirst => {
                matched.sort_by(|a, b| {
                    b.unread_count
                        .cmp(&a.unread_count)
                        .then(b.last_activity.cmp(&a.last_activity))
                });
            }
        }

        matched
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use omni_core::{ConversationId, PersonaKind, Timestamp};

    fn thread(
        name: &str,
        channel: ChannelKind,
        status: ConversationStatus,
        activity_ms: i64,
        unread: u32,
    ) -> Conversation {
        Conversation {
            id: ConversationId::new(),
            contact_name: name.to_string(),
            channel,
            status,
            last_message_preview: format!("latest from {name}"),
            last_activity: Timestamp::from_millis(activity_ms),
            unread_count: unread,
            assigned_persona: PersonaKind::Analyst,
        }
    }

    fn inbox() -> Vec<Conversation> {
        vec![
            thread("Amara Chen", ChannelKind::Whatsapp, ConversationStatus::Open, 3_000, 2),
            thread("Luis Ortega", ChannelKind::Email, ConversationStatus::Resolved, 1_000, 0),
            thread("Priya Nair", ChannelKind::Whatsapp, ConversationStatus::Open, 2_000, 5),
            thread("Sam Okafor", ChannelKind::Sms, ConversationStatus::Snoozed, 4_000, 0),
        ]
    }

    #[test]
    fn test_empty_query_returns_everything_newest_first() {
        let result = ConversationQuery::default().apply(&inbox());
        assert_eq!(result.len(), 4);
        assert_eq!(result[0].contact_name, "Sam Okafor");
        assert_eq!(result[3].contact_name, "Luis Ortega");
    }

    #[test]
    fn test_channel_filter() {
        let query = ConversationQuery {
            channel: Some(ChannelKind::Whatsapp),
            ..Default::default()
        };
        let result = query.apply(&inbox());
        assert_eq!(result.len(), 2);
        assert!(result.iter().all(|c| c.channel == ChannelKind::Whatsapp));
    }

    #[test]
    fn test_status_filter() {
        let query = ConversationQuery {
            status: Some(ConversationStatus::Open),
            ..Default::default()
        };
        assert_eq!(query.apply(&inbox()).len(), 2);
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let query = ConversationQuery {
            search: Some("aMARA".to_string()),
            ..Default::default()
        };
        let result = query.apply(&inbox());
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].contact_name, "Amara Chen");
    }

    #[test]
    fn test_search_covers_preview() {
        let query = ConversationQuery {
            search: Some("latest from luis".to_string()),
            ..Default::default()
        };
        assert_eq!(query.apply(&inbox()).len(), 1);
    }

    #[test]
    fn test_unread_first_sort() {
        let query = ConversationQuery {
            sort: SortOrder::UnreadFirst,
            ..Default::default()
        };
        let result = query.apply(&inbox());
        assert_eq!(result[0].contact_name, "Priya Nair");
        assert_eq!(result[1].contact_name, "Amara Chen");
        // Zero-unread ties fall back to recency
        assert_eq!(result[2].contact_name, "Sam Okafor");
    }

    #[test]
    fn test_oldest_first_sort() {
        let query = ConversationQuery {
            sort: SortOrder::OldestFirst,
            ..Default::default()
        };
        let result = query.apply(&inbox());
        assert_eq!(result[0].contact_name, "Luis Ortega");
    }

    #[test]
    fn test_combined_filters() {
        let query = ConversationQuery {
            channel: Some(ChannelKind::Whatsapp),
            status: Some(ConversationStatus::Open),
            search: Some("priya".to_string()),
            sort: SortOrder::NewestFirst,
        };
        let result = query.apply(&inbox());
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].contact_name, "Priya Nair");
    }
}
