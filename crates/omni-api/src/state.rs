//! Shared application state.

use omni_conversations::ConversationStore;
use omni_voice::VoiceSessionStore;
use std::sync::Arc;

use crate::config::ApiConfig;
use crate::demo;

/// State shared across all request handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ApiConfig>,
    pub conversations: Arc<ConversationStore>,
    pub voice_sessions: Arc<VoiceSessionStore>,
}

impl AppState {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            config: Arc::new(config),
            conversations: Arc::new(ConversationStore::new()),
            voice_sessions: Arc::new(VoiceSessionStore::new()),
        }
    }

    /// State pre-loaded with the demo dataset the dashboard ships with
    pub async fn with_demo_data(config: ApiConfig) -> Self {
        let state = Self::new(config);
        state
            .conversations
            .insert_all(demo::demo_conversations())
            .await;
        state
            .voice_sessions
            .insert_all(demo::demo_voice_sessions())
            .await;
        state
    }
}
