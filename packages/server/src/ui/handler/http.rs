//! HTTP API endpoint handlers.

use std::sync::Arc;

use axum::{Json, extract::State};

use hiroba_shared::time::timestamp_to_jst_rfc3339;

use crate::{infrastructure::dto::http::SessionSummaryDto, ui::state::AppState};

/// Health check endpoint
pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({"status": "ok"}))
}

/// Debug endpoint listing live sessions (for testing purposes)
pub async fn get_sessions(State(state): State<Arc<AppState>>) -> Json<Vec<SessionSummaryDto>> {
    let sessions = state.registry.get_sessions().await;

    let mut summaries: Vec<SessionSummaryDto> = sessions
        .iter()
        .map(|s| SessionSummaryDto {
            connection_id: s.id.to_string(),
            user: s.identity.as_ref().map(|name| name.as_str().to_string()),
            connected_at: timestamp_to_jst_rfc3339(s.connected_at.value()),
        })
        .collect();

    // Sort by connection_id for consistent ordering
    summaries.sort_by(|a, b| a.connection_id.cmp(&b.connection_id));

    Json(summaries)
}
