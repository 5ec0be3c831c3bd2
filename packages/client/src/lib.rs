//! Hiroba CLI chat client.
//!
//! Captures an identity once, keeps a WebSocket session to the relay alive
//! with automatic reconnection, and renders incoming broadcasts to the
//! terminal.

pub mod error;
pub mod identity;
pub mod input;
pub mod session;

pub use error::ClientError;
pub use identity::capture_identity;
pub use session::{RECONNECT_DELAY, SessionConfig, run_session};
