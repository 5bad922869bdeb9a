//! Profile-summary endpoints.
//!
//! These two handlers wrap the deterministic synthesizer for the
//! onboarding wizard. The contract is deliberately forgiving: any input
//! produces a 200 with a summary, substituting the boundary fallback name
//! where the payload gives us nothing usable, and a malformed body is
//! reported through an advisory `error` field rather than a 4xx.

use axum::body::Bytes;
use axum::extract::{Query, State};
use axum::Json;
use omni_profile::synthesize_profile_summary;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::state::AppState;

/// Name used when the request carries no usable `name`.
///
/// Distinct from the synthesizer's own `"This member"` fallback: that one
/// covers blank names handed to the core directly, this one covers the
/// HTTP boundary. The split matches the original service's behavior.
pub const BOUNDARY_FALLBACK_NAME: &str = "Explorer";

/// Error code reported when the request body is not valid JSON
pub const INVALID_PAYLOAD: &str = "invalid-payload";

const SOURCE_SYNTHETIC: &str = "synthetic";

#[derive(Debug, Serialize)]
pub struct ProfileSummaryResponse {
    pub name: String,
    pub summary: String,
    pub source: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<&'static str>,
}

#[derive(Debug, Deserialize)]
pub struct SummaryQuery {
    pub name: Option<String>,
}

/// Outcome of validating the `name` field of an arbitrary JSON payload
enum NameParam {
    Valid(String),
    Invalid,
}

fn validate_name(value: Option<&serde_json::Value>) -> NameParam {
    match value {
        Some(serde_json::Value::String(s)) if !s.trim().is_empty() => {
            NameParam::Valid(s.trim().to_string())
        }
        _ => NameParam::Invalid,
    }
}

async fn respond(state: &AppState, name: String, error: Option<&'static str>) -> Json<ProfileSummaryResponse> {
    // Simulated backend pacing; the handler always waits the full delay,
    // there is no early-abort path.
    let delay = Duration::from_millis(state.config.profile.min_latency_ms);
    tokio::time::sleep(delay).await;

    let summary = synthesize_profile_summary(&name);

    Json(ProfileSummaryResponse {
        name,
        summary,
        source: SOURCE_SYNTHETIC,
        error,
    })
}

/// `POST /api/profile-summary`
///
/// Accepts arbitrary bytes so a malformed body never becomes a 4xx.
pub async fn synthesize_post(
    State(state): State<AppState>,
    body: Bytes,
) -> Json<ProfileSummaryResponse> {
    let (name, error) = match serde_json::from_slice::<serde_json::Value>(&body) {
        Ok(payload) => match validate_name(payload.get("name")) {
            NameParam::Valid(name) => (name, None),
            NameParam::Invalid => (BOUNDARY_FALLBACK_NAME.to_string(), None),
        },
        Err(_) => {
            tracing::debug!("profile-summary body did not parse as JSON, using fallback name");
            (BOUNDARY_FALLBACK_NAME.to_string(), Some(INVALID_PAYLOAD))
        }
    };

    respond(&state, name, error).await
}

/// `GET /api/profile-summary?name=<value>`
pub async fn synthesize_get(
    State(state): State<AppState>,
    Query(query): Query<SummaryQuery>,
) -> Json<ProfileSummaryResponse> {
    let name = query
        .name
        .map(|n| n.trim().to_string())
        .filter(|n| !n.is_empty())
        .unwrap_or_else(|| BOUNDARY_FALLBACK_NAME.to_string());

    respond(&state, name, None).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_validate_name() {
        let payload = json!({ "name": "  Sam  " });
        match validate_name(payload.get("name")) {
            NameParam::Valid(name) => assert_eq!(name, "Sam"),
            NameParam::Invalid => panic!("expected valid name"),
        }

        for payload in [json!({}), json!({ "name": 42 }), json!({ "name": "   " })] {
            assert!(matches!(validate_name(payload.get("name")), NameParam::Invalid));
        }
    }

    #[test]
    fn test_error_field_is_omitted_when_absent() {
        let response = ProfileSummaryResponse {
            name: "Sam".to_string(),
            summary: "Sam is a tester.".to_string(),
            source: SOURCE_SYNTHETIC,
            error: None,
        };
        let encoded = serde_json::to_string(&response).unwrap();
        assert!(!encoded.contains("error"));
    }
}
