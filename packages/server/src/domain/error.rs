//! Domain layer error definitions.

use thiserror::Error;

/// Errors related to the session registry
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// No session is registered for the given connection
    #[error("no session registered for connection '{0}'")]
    SessionNotFound(String),
}
