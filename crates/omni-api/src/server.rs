//! Server bootstrap.

use omni_core::Result;
use tracing_subscriber::EnvFilter;

use crate::config::ApiConfig;
use crate::routes::build_router;
use crate::state::AppState;

/// Initialize the tracing subscriber.
///
/// `RUST_LOG` wins when set; otherwise requests and server lifecycle are
/// logged at info level.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("omni_api=info,tower_http=info"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Run the API server until the process is stopped
pub async fn run(config: ApiConfig) -> Result<()> {
    let bind_addr = config.http.bind_addr;

    let state = AppState::with_demo_data(config).await;
    tracing::info!(
        "Seeded demo dataset: {} conversations, {} voice sessions",
        state.conversations.len().await,
        state.voice_sessions.len().await
    );

    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    tracing::info!("API server listening on {bind_addr}");

    axum::serve(listener, app).await?;

    Ok(())
}
