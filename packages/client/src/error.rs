//! Client error definitions.

use thiserror::Error;

/// Errors that abort the client before or during startup
#[derive(Debug, Error)]
pub enum ClientError {
    /// Reading from the interactive prompt failed (Ctrl-C at the name
    /// prompt lands here — the client never connects without an identity)
    #[error("failed to read user input: {0}")]
    Input(#[from] rustyline::error::ReadlineError),
}
