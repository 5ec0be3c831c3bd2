//! Hiroba chat relay server.
//!
//! Accepts persistent WebSocket connections, tracks which identity each
//! connection has claimed, and fans every qualifying frame out to all
//! other live connections.

pub mod domain;
pub mod infrastructure;
pub mod ui;
pub mod usecase;

// Re-export entry points
pub use ui::{ServerConfig, build_router, run};
