//! Session registry abstraction.
//!
//! The registry is the relay's single source of truth for live connections:
//! `ConnectionId → (outbound sender, claimed identity)`. UseCase 層は
//! この trait に依存し、具体的な実装には依存しません（依存性の逆転）。

use async_trait::async_trait;
use tokio::sync::mpsc::UnboundedSender;

use super::{
    entity::Session,
    error::RegistryError,
    value_object::{ConnectionId, UserName},
};

/// Outbound handle for one live peer, snapshotted for a broadcast.
#[derive(Debug, Clone)]
pub struct PeerHandle {
    /// Connection the handle belongs to
    pub conn_id: ConnectionId,
    /// Channel that feeds the peer's send task (serialized frames)
    pub sender: UnboundedSender<String>,
}

/// Live mapping from connection to claimed identity.
///
/// Every method takes the registry's single internal lock, so registry
/// mutation and broadcast enumeration are serialized through one
/// mutual-exclusion domain.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SessionRegistry: Send + Sync {
    /// Register a newly accepted connection together with its outbound sender.
    async fn add_session(&self, session: Session, sender: UnboundedSender<String>);

    /// Remove a session. Returns the removed session, or `None` when the
    /// connection was already removed — removal is idempotent.
    async fn remove_session(&self, conn_id: &ConnectionId) -> Option<Session>;

    /// Overwrite the identity claimed by a connection, returning the
    /// previous claim.
    async fn set_identity(
        &self,
        conn_id: &ConnectionId,
        name: UserName,
    ) -> Result<Option<UserName>, RegistryError>;

    /// Identity currently claimed by a connection (`None` before login).
    async fn get_identity(&self, conn_id: &ConnectionId) -> Option<UserName>;

    /// Outbound handles for every live connection except `exclude`.
    async fn get_broadcast_targets<'a>(&self, exclude: Option<&'a ConnectionId>)
    -> Vec<PeerHandle>;

    /// Snapshot of all live sessions.
    async fn get_sessions(&self) -> Vec<Session>;

    /// Number of live connections.
    async fn count_sessions(&self) -> usize;
}
