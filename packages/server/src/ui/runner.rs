//! Router construction and server startup.

use std::sync::Arc;

use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

use crate::{
    domain::SessionRegistry,
    infrastructure::repository::InMemorySessionRegistry,
    ui::{
        handler::{get_sessions, health_check, websocket_handler},
        signal,
        state::AppState,
    },
};

/// Default relay port
pub const DEFAULT_PORT: u16 = 8090;

/// Relay server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: DEFAULT_PORT,
        }
    }
}

/// Build the relay router on top of the given state.
///
/// The WebSocket endpoint lives at `/`; `/api/*` carries the operational
/// HTTP surface. Public so integration tests run the real app.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(websocket_handler))
        .route("/api/health", get(health_check))
        .route("/api/sessions", get(get_sessions))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Run the relay until SIGINT/SIGTERM.
///
/// The registry is purely in-memory: a restart drops every session and
/// clients re-login through their own reconnect logic.
pub async fn run(config: ServerConfig) -> std::io::Result<()> {
    let registry: Arc<dyn SessionRegistry> = Arc::new(InMemorySessionRegistry::new());
    let state = Arc::new(AppState { registry });
    let app = build_router(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("relay listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(signal::shutdown_signal())
        .await
}
