//! HTTP API response DTOs for the chat relay.

use serde::{Deserialize, Serialize};

/// Live session summary for the sessions endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionSummaryDto {
    pub connection_id: String,
    /// Claimed display name, absent before the first login
    pub user: Option<String>,
    pub connected_at: String, // ISO 8601
}
