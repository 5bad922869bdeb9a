//! Inbox listing endpoints.

use axum::extract::{Path, Query, State};
use axum::Json;
use omni_conversations::{Conversation, ConversationQuery, SortOrder};
use omni_core::{ChannelKind, ConversationId, ConversationStatus};
use serde::Deserialize;
use uuid::Uuid;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct InboxParams {
    pub channel: Option<String>,
    pub status: Option<String>,
    /// Substring search over contact name and message preview
    pub q: Option<String>,
    pub sort: Option<String>,
}

fn parse_params(params: InboxParams) -> Result<ConversationQuery, ApiError> {
    let channel = match params.channel {
        Some(slug) => match ChannelKind::from_slug(&slug) {
            Some(channel) => Some(channel),
            None => {
                return Err(ApiError::InvalidQuery {
                    param: "channel",
                    value: slug,
                })
            }
        },
        None => None,
    };

    let status = match params.status {
        Some(slug) => match ConversationStatus::from_slug(&slug) {
            Some(status) => Some(status),
            None => {
                return Err(ApiError::InvalidQuery {
                    param: "status",
                    value: slug,
                })
            }
        },
        None => None,
    };

    let sort = match params.sort {
        Some(slug) => match SortOrder::from_slug(&slug) {
            Some(sort) => sort,
            None => {
                return Err(ApiError::InvalidQuery {
                    param: "sort",
                    value: slug,
                })
            }
        },
        None => SortOrder::default(),
    };

    Ok(ConversationQuery {
        channel,
        status,
        search: params.q,
        sort,
    })
}

/// `GET /api/conversations`
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<InboxParams>,
) -> Result<Json<Vec<Conversation>>, ApiError> {
    let query = parse_params(params)?;
    Ok(Json(state.conversations.query(&query).await))
}

/// `GET /api/conversations/{id}`
pub async fn get_one(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Conversation>, ApiError> {
    state
        .conversations
        .get(ConversationId(id))
        .await
        .map(Json)
        .ok_or(ApiError::NotFound {
            kind: "conversation",
            id: id.to_string(),
        })
}
