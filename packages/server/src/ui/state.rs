//! Server state shared across connection handlers.

use std::sync::Arc;

use crate::domain::SessionRegistry;

/// Shared application state
pub struct AppState {
    /// Registry（データアクセス層の抽象化）— the single owner of all
    /// connection → identity mappings and outbound senders
    pub registry: Arc<dyn SessionRegistry>,
}
