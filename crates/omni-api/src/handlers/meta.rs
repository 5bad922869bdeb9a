//! Health check and catalog endpoints.

use axum::Json;
use omni_core::{ChannelKind, PersonaKind};
use serde::Serialize;
use serde_json::{json, Value};

/// `GET /api/health`
pub async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

#[derive(Debug, Serialize)]
pub struct ChannelInfo {
    pub slug: &'static str,
    pub display_name: &'static str,
    pub realtime: bool,
}

/// `GET /api/channels`
pub async fn list_channels() -> Json<Vec<ChannelInfo>> {
    let channels = ChannelKind::ALL
        .iter()
        .map(|channel| ChannelInfo {
            slug: channel.slug(),
            display_name: channel.display_name(),
            realtime: channel.is_realtime(),
        })
        .collect();
    Json(channels)
}

#[derive(Debug, Serialize)]
pub struct PersonaInfo {
    pub name: &'static str,
    pub tone: &'static str,
    pub description: &'static str,
}

/// `GET /api/personas`
pub async fn list_personas() -> Json<Vec<PersonaInfo>> {
    let personas = PersonaKind::ALL
        .iter()
        .map(|persona| PersonaInfo {
            name: persona.display_name(),
            tone: persona.tone(),
            description: persona.description(),
        })
        .collect();
    Json(personas)
}
