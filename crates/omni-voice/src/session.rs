//! Voice session records and in-memory store.

use omni_core::{Timestamp, VoiceSessionId};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::emotion::EmotionSample;
use crate::timeline::EmotionTimeline;

/// A recorded voice session exported by the voice backend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VoiceSession {
    pub id: VoiceSessionId,

    /// Member the agent spoke with
    pub member_name: String,

    pub started_at: Timestamp,

    pub duration_ms: u64,

    /// Emotion observations, ordered by offset
    pub samples: Vec<EmotionSample>,
}

impl VoiceSession {
    /// Aggregate this session's samples into a timeline
    pub fn timeline(&self, bucket_ms: u64) -> EmotionTimeline {
        EmotionTimeline::from_samples(&self.samples, bucket_ms)
    }
}

/// Lightweight listing entry for the dashboard index
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VoiceSessionSummary {
    pub id: VoiceSessionId,
    pub member_name: String,
    pub started_at: Timestamp,
    pub duration_ms: u64,
    pub sample_count: usize,
}

impl From<&VoiceSession> for VoiceSessionSummary {
    fn from(session: &VoiceSession) -> Self {
        Self {
            id: session.id,
            member_name: session.member_name.clone(),
            started_at: session.started_at,
            duration_ms: session.duration_ms,
            sample_count: session.samples.len(),
        }
    }
}

/// In-memory voice session store
#[derive(Default)]
pub struct VoiceSessionStore {
    sessions: RwLock<HashMap<VoiceSessionId, VoiceSession>>,
}

impl VoiceSessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert(&self, session: VoiceSession) {
        let mut sessions = self.sessions.write().await;
        sessions.insert(session.id, session);
    }

    pub async fn insert_all(&self, batch: Vec<VoiceSession>) {
        let mut sessions = self.sessions.write().await;
        for session in batch {
            sessions.insert(session.id, session);
        }
    }

    pub async fn get(&self, id: VoiceSessionId) -> Option<VoiceSession> {
        let sessions = self.sessions.read().await;
        sessions.get(&id).cloned()
    }

    /// Summaries for the session index, newest first
    pub async fn list(&self) -> Vec<VoiceSessionSummary> {
        let sessions = self.sessions.read().await;
        let mut summaries: Vec<VoiceSessionSummary> =
            sessions.values().map(VoiceSessionSummary::from).collect();
        summaries.sort_by(|a, b| b.started_at.cmp(&a.started_at));
        summaries
    }

    /// Timeline for one session, `None` when the id is unknown
    pub async fn timeline(&self, id: VoiceSessionId, bucket_ms: u64) -> Option<EmotionTimeline> {
        let sessions = self.sessions.read().await;
        sessions.get(&id).map(|s| s.timeline(bucket_ms))
    }

    pub async fn len(&self) -> usize {
        let sessions = self.sessions.read().await;
        sessions.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}
