//! Data transfer objects for the relay's external interfaces.

pub mod http;
pub mod websocket;
