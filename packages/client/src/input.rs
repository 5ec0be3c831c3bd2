//! Interactive input loop.
//!
//! rustyline blocks, so the prompt runs on its own thread and feeds chat
//! lines into the async session through an unbounded channel. Ending the
//! loop (Ctrl-C / Ctrl-D) drops the sender, which the session observes as
//! a deliberate teardown.

use rustyline::error::ReadlineError;
use tokio::sync::mpsc;

/// Spawn the prompt thread. Lines are trimmed; empty lines are skipped.
pub fn spawn_input_loop(tx: mpsc::UnboundedSender<String>) -> std::thread::JoinHandle<()> {
    std::thread::spawn(move || {
        let mut editor = match rustyline::DefaultEditor::new() {
            Ok(editor) => editor,
            Err(e) => {
                tracing::error!("failed to start input prompt: {}", e);
                return;
            }
        };

        loop {
            match editor.readline("> ") {
                Ok(line) => {
                    let line = line.trim().to_string();
                    if line.is_empty() {
                        continue;
                    }
                    if tx.send(line).is_err() {
                        // session is gone, nothing left to feed
                        break;
                    }
                }
                Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
                Err(e) => {
                    tracing::error!("input error: {}", e);
                    break;
                }
            }
        }
    })
}
