//! Voice session endpoints.

use axum::extract::{Path, Query, State};
use axum::Json;
use omni_core::VoiceSessionId;
use omni_voice::{EmotionTimeline, VoiceSessionSummary, DEFAULT_BUCKET_MS};
use serde::Deserialize;
use uuid::Uuid;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct TimelineParams {
    /// Bucket width in milliseconds; defaults to the dashboard's 5s view
    pub bucket_ms: Option<u64>,
}

/// `GET /api/voice-sessions`
pub async fn list(State(state): State<AppState>) -> Json<Vec<VoiceSessionSummary>> {
    Json(state.voice_sessions.list().await)
}

/// `GET /api/voice-sessions/{id}/timeline`
pub async fn timeline(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(params): Query<TimelineParams>,
) -> Result<Json<EmotionTimeline>, ApiError> {
    let bucket_ms = params.bucket_ms.unwrap_or(DEFAULT_BUCKET_MS);

    state
        .voice_sessions
        .timeline(VoiceSessionId(id), bucket_ms)
        .await
        .map(Json)
        .ok_or(ApiError::NotFound {
            kind: "voice session",
            id: id.to_string(),
        })
}
