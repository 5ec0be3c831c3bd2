//! One-shot identity capture.
//!
//! The identity is captured once per process, before the first connect,
//! and resent at every reconnection's login step. It is never re-solicited
//! on reconnect.

use crate::error::ClientError;

/// Trim a raw answer; `None` when nothing usable remains.
pub fn normalize_identity(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Capture the display name to chat under.
///
/// A preset (from the CLI) short-circuits the prompt. Otherwise the prompt
/// repeats until a non-empty name is given — declining means the client
/// does not connect at all.
pub fn capture_identity(preset: Option<String>) -> Result<String, ClientError> {
    if let Some(name) = preset.as_deref().and_then(normalize_identity) {
        return Ok(name);
    }

    let mut editor = rustyline::DefaultEditor::new()?;
    loop {
        let answer = editor.readline("Enter your name: ")?;
        match normalize_identity(&answer) {
            Some(name) => return Ok(name),
            None => eprintln!("User name must be provided!"),
        }
    }
}
