//! WebSocket wire frames for the chat relay.
//!
//! One JSON object per text frame, tagged by `type`. The client and the
//! relay speak different frame sets, so each direction gets its own enum.

use serde::{Deserialize, Serialize};

/// Frames sent by clients to the relay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ClientFrame {
    /// Announce or update the identity for this connection
    Login { user: String },
    /// Chat content to broadcast to every other connection
    Message { msg: String },
    /// Any other kind is ignored silently
    #[serde(other)]
    Unknown,
}

/// Frames sent by the relay to clients.
///
/// System notices carry no `user` field; relayed chat omits `user` entirely
/// when the sender never logged in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ServerFrame {
    /// System notice (connect/join/leave)
    Info { msg: String },
    /// Relayed chat from another connection
    Message {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        user: Option<String>,
        msg: String,
    },
}
