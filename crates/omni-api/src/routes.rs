//! Router assembly.

use axum::http::header::HeaderName;
use axum::http::{HeaderValue, Method};
use axum::routing::get;
use axum::Router;
use tower::ServiceBuilder;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::CorsConfig;
use crate::handlers::{conversations, meta, profile, voice};
use crate::state::AppState;

/// Build the full API router with tracing and CORS layers applied
pub fn build_router(state: AppState) -> Router {
    let cors = cors_layer(&state.config.cors);

    Router::new()
        .route("/api/health", get(meta::health))
        .route(
            "/api/profile-summary",
            get(profile::synthesize_get).post(profile::synthesize_post),
        )
        .route("/api/channels", get(meta::list_channels))
        .route("/api/personas", get(meta::list_personas))
        .route("/api/conversations", get(conversations::list))
        .route("/api/conversations/:id", get(conversations::get_one))
        .route("/api/voice-sessions", get(voice::list))
        .route("/api/voice-sessions/:id/timeline", get(voice::timeline))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(state)
}

fn cors_layer(config: &CorsConfig) -> CorsLayer {
    if config.allowed_origins.iter().any(|origin| origin == "*") {
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
    }

    let origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();
    let methods: Vec<Method> = config
        .allowed_methods
        .iter()
        .filter_map(|method| method.parse().ok())
        .collect();
    let headers: Vec<HeaderName> = config
        .allowed_headers
        .iter()
        .filter_map(|header| header.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(AllowMethods::list(methods))
        .allow_headers(AllowHeaders::list(headers))
}
