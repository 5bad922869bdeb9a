//! Async in-memory conversation store.

use omni_core::ConversationId;
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::conversation::Conversation;
use crate::query::ConversationQuery;

/// In-memory conversation store
///
/// The dashboard is read-heavy, so threads live in a `RwLock`ed map and
/// queries clone out of it. Persistence belongs to the upstream message
/// backend; this store only mirrors what the API serves.
#[derive(Default)]
pub struct ConversationStore {
    conversations: RwLock<HashMap<ConversationId, Conversation>>,
}

impl ConversationStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert(&self, conversation: Conversation) {
        let mut conversations = self.conversations.write().await;
        conversations.insert(conversation.id, conversation);
    }

    pub async fn insert_all(&self, batch: Vec<Conversation>) {
        let mut conversations = self.conversations.write().await;
        for conversation in batch {
            conversations.insert(conversation.id, conversation);
        }
    }

    pub async fn get(&self, id: ConversationId) -> Option<Conversation> {
        let conversations = self.conversations.read().await;
        conversations.get(&id).cloned()
    }

    pub async fn remove(&self, id: ConversationId) -> Option<Conversation> {
        let mut conversations = self.conversations.write().await;
        conversations.remove(&id)
    }

    /// Run an inbox query against the current contents
    pub async fn query(&self, query: &ConversationQuery) -> Vec<Conversation> {
        let conversations = self.conversations.read().await;
        let all: Vec<Conversation> = conversations.values().cloned().collect();
        query.apply(&all)
    }

    pub async fn len(&self) -> usize {
        let conversations = self.conversations.read().await;
        conversations.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    pub async fn clear(&self) {
        let mut conversations = self.conversations.write().await;
        conversations.clear();
    }
}
