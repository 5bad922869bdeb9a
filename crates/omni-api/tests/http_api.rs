//! HTTP-level integration tests for the Omni API.
//!
//! These drive the assembled router directly through tower, proving the
//! wire contract: the always-200 profile-summary endpoints with their
//! minimum latency, inbox filtering, catalogs, and 400/404 mapping.

use std::time::{Duration, Instant};

use axum::body::Body;
use axum::Router;
use http_body_util::BodyExt;
use hyper::{Request, StatusCode};
use omni_api::config::ApiConfig;
use omni_api::routes::build_router;
use omni_api::state::AppState;
use omni_profile::synthesize_profile_summary;
use tower::ServiceExt;

const TEST_MIN_LATENCY_MS: u64 = 25;

fn test_config() -> ApiConfig {
    let mut config = ApiConfig::default();
    config.profile.min_latency_ms = TEST_MIN_LATENCY_MS;
    config
}

async fn test_app() -> Router {
    build_router(AppState::with_demo_data(test_config()).await)
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap_or_else(|_| {
        serde_json::json!({ "raw": String::from_utf8_lossy(&bytes).to_string() })
    })
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_json(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

// ── Health and catalogs ─────────────────────────────────────────

#[tokio::test]
async fn test_health() {
    let response = test_app().await.oneshot(get("/api/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_channel_catalog() {
    let response = test_app().await.oneshot(get("/api/channels")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    let channels = body.as_array().unwrap();
    assert_eq!(channels.len(), 6);
    assert!(channels.iter().any(|c| c["slug"] == "web-chat"));
}

#[tokio::test]
async fn test_persona_catalog() {
    let response = test_app().await.oneshot(get("/api/personas")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    let personas = body.as_array().unwrap();
    assert_eq!(personas.len(), 6);
    assert!(personas.iter().all(|p| !p["tone"].as_str().unwrap().is_empty()));
}

// ── Profile summary ─────────────────────────────────────────────

#[tokio::test]
async fn test_post_profile_summary() {
    let started = Instant::now();
    let response = test_app()
        .await
        .oneshot(post_json("/api/profile-summary", r#"{"name": "Sam"}"#))
        .await
        .unwrap();
    let elapsed = started.elapsed();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(
        elapsed >= Duration::from_millis(TEST_MIN_LATENCY_MS),
        "response arrived before the minimum latency: {elapsed:?}"
    );

    let body = body_json(response).await;
    assert_eq!(body["name"], "Sam");
    assert_eq!(body["source"], "synthetic");
    assert_eq!(body["summary"], synthesize_profile_summary("Sam"));
    assert!(body.get("error").is_none());
}

#[tokio::test]
async fn test_post_profile_summary_malformed_body_still_succeeds() {
    let response = test_app()
        .await
        .oneshot(post_json("/api/profile-summary", "{not json at all"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["name"], "Explorer");
    assert_eq!(body["error"], "invalid-payload");
    assert_eq!(body["summary"], synthesize_profile_summary("Explorer"));
}

#[tokio::test]
async fn test_post_profile_summary_non_string_name_uses_fallback() {
    let response = test_app()
        .await
        .oneshot(post_json("/api/profile-summary", r#"{"name": 42}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["name"], "Explorer");
    // Valid JSON, just no usable name: not reported as an error
    assert!(body.get("error").is_none());
}

#[tokio::test]
async fn test_post_profile_summary_blank_name_uses_fallback() {
    let response = test_app()
        .await
        .oneshot(post_json("/api/profile-summary", r#"{"name": "   "}"#))
        .await
        .unwrap();

    let body = body_json(response).await;
    assert_eq!(body["name"], "Explorer");
}

#[tokio::test]
async fn test_get_profile_summary() {
    let response = test_app()
        .await
        .oneshot(get("/api/profile-summary?name=Ada%20Lovelace"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["name"], "Ada Lovelace");
    assert_eq!(body["summary"], synthesize_profile_summary("Ada Lovelace"));
    assert!(body["summary"].as_str().unwrap().contains("Ada"));
}

#[tokio::test]
async fn test_get_profile_summary_without_name() {
    let response = test_app()
        .await
        .oneshot(get("/api/profile-summary"))
        .await
        .unwrap();

    let body = body_json(response).await;
    assert_eq!(body["name"], "Explorer");
    assert_eq!(body["source"], "synthetic");
}

// ── Conversations ───────────────────────────────────────────────

#[tokio::test]
async fn test_list_conversations() {
    let response = test_app()
        .await
        .oneshot(get("/api/conversations"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body.as_array().unwrap().len(), 8);
}

#[tokio::test]
async fn test_list_conversations_search() {
    let response = test_app()
        .await
        .oneshot(get("/api/conversations?q=amara&sort=unread-first"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    let threads = body.as_array().unwrap();
    assert_eq!(threads.len(), 1);
    assert_eq!(threads[0]["contact_name"], "Amara Chen");
}

#[tokio::test]
async fn test_list_conversations_channel_filter_is_consistent() {
    let response = test_app()
        .await
        .oneshot(get("/api/conversations?channel=email"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert!(body
        .as_array()
        .unwrap()
        .iter()
        .all(|c| c["channel"] == "email"));
}

#[tokio::test]
async fn test_list_conversations_rejects_unknown_channel() {
    let response = test_app()
        .await
        .oneshot(get("/api/conversations?channel=fax"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_get_conversation_roundtrip() {
    let app = test_app().await;

    let listing = app
        .clone()
        .oneshot(get("/api/conversations"))
        .await
        .unwrap();
    let body = body_json(listing).await;
    let id = body[0]["id"].as_str().unwrap().to_string();

    let response = app
        .oneshot(get(&format!("/api/conversations/{id}")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let thread = body_json(response).await;
    assert_eq!(thread["id"].as_str().unwrap(), id);
}

#[tokio::test]
async fn test_get_conversation_unknown_is_404() {
    let response = test_app()
        .await
        .oneshot(get("/api/conversations/00000000-0000-0000-0000-000000000000"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ── Voice sessions ──────────────────────────────────────────────

#[tokio::test]
async fn test_voice_session_timeline_roundtrip() {
    let app = test_app().await;

    let listing = app
        .clone()
        .oneshot(get("/api/voice-sessions"))
        .await
        .unwrap();
    assert_eq!(listing.status(), StatusCode::OK);

    let body = body_json(listing).await;
    let sessions = body.as_array().unwrap();
    assert_eq!(sessions.len(), 4);

    let id = sessions[0]["id"].as_str().unwrap().to_string();
    let response = app
        .oneshot(get(&format!("/api/voice-sessions/{id}/timeline?bucket_ms=4000")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let timeline = body_json(response).await;
    assert_eq!(timeline["bucket_ms"], 4000);
    assert!(!timeline["buckets"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_voice_session_timeline_unknown_is_404() {
    let response = test_app()
        .await
        .oneshot(get(
            "/api/voice-sessions/00000000-0000-0000-0000-000000000000/timeline",
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
