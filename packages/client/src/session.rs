//! Reconnecting chat session.
//!
//! An explicit state machine drives the transport:
//! `Disconnected → Connecting → Connected → Disconnected → …` with a fixed
//! retry delay and unbounded attempts. Deliberate shutdown (input EOF or
//! the shutdown channel) wins every race, so no reconnect timer outlives
//! the session.

use std::time::Duration;

use futures_util::{SinkExt, StreamExt};
use tokio::{
    net::TcpStream,
    sync::{mpsc, watch},
    time::sleep,
};
use tokio_tungstenite::{
    MaybeTlsStream, WebSocketStream, connect_async, tungstenite::Message,
};

use hiroba_server::infrastructure::dto::websocket::{ClientFrame, ServerFrame};
use hiroba_shared::time::jst_now;

/// Fixed delay between reconnect attempts
pub const RECONNECT_DELAY: Duration = Duration::from_millis(3000);

/// Connection lifecycle states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionState {
    Disconnected,
    Connecting,
    Connected,
}

/// Session configuration captured once at startup
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// WebSocket URL of the relay
    pub server_url: String,
    /// Display name announced at every login
    pub identity: String,
}

/// What to do with one inbound text frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InboundAction {
    /// Unparseable or uninteresting — drop silently
    Ignore,
    /// System notice, surfaced in the log only, never as a chat line
    Notice(String),
    /// Chat from another identity, rendered to the terminal
    Render { user: String, msg: String },
}

/// How one established connection ended
enum SessionEnd {
    /// Deliberate teardown — no reconnect
    Shutdown,
    /// Transport failure or server-side close — schedule a reconnect
    ConnectionLost,
}

fn transition(state: &mut ConnectionState, next: ConnectionState) {
    tracing::debug!("connection state: {:?} -> {:?}", state, next);
    *state = next;
}

/// Run the chat session until deliberate shutdown.
///
/// `input` carries outgoing chat lines; closing it (EOF at the prompt) is
/// a deliberate teardown. `shutdown` firing has the same effect. While the
/// session is not connected, incoming lines are dropped with a local
/// error, never queued.
pub async fn run_session(
    config: SessionConfig,
    mut input: mpsc::UnboundedReceiver<String>,
    mut shutdown: watch::Receiver<bool>,
) {
    let mut state = ConnectionState::Disconnected;

    loop {
        transition(&mut state, ConnectionState::Connecting);
        tracing::info!("connecting to {}", config.server_url);

        let connect = connect_async(config.server_url.as_str());
        tokio::pin!(connect);

        // Race the attempt against shutdown and keep answering input with
        // a local error — nothing is queued while not connected
        let attempt = loop {
            tokio::select! {
                result = &mut connect => break Some(result),
                _ = shutdown.changed() => break None,
                line = input.recv() => match line {
                    Some(_) => tracing::error!("not connected to the server, message dropped"),
                    None => break None,
                },
            }
        };

        let Some(result) = attempt else {
            transition(&mut state, ConnectionState::Disconnected);
            return;
        };

        match result {
            Ok((stream, _response)) => {
                transition(&mut state, ConnectionState::Connected);
                tracing::info!("connected to {}", config.server_url);

                let end = drive_connection(&config, stream, &mut input, &mut shutdown).await;
                transition(&mut state, ConnectionState::Disconnected);

                if let SessionEnd::Shutdown = end {
                    return;
                }
            }
            Err(e) => {
                transition(&mut state, ConnectionState::Disconnected);
                tracing::warn!("connection attempt failed: {}", e);
            }
        }

        // Fixed-delay retry, cancellable by shutdown; input during the
        // wait is reported as not-connected and dropped
        tracing::warn!(
            "disconnected from the server, retrying in {} ms",
            RECONNECT_DELAY.as_millis()
        );
        let retry = sleep(RECONNECT_DELAY);
        tokio::pin!(retry);
        loop {
            tokio::select! {
                _ = &mut retry => break,
                _ = shutdown.changed() => return,
                line = input.recv() => match line {
                    Some(_) => tracing::error!("not connected to the server, message dropped"),
                    None => return,
                },
            }
        }
    }
}

/// Drive one established connection until it ends.
async fn drive_connection(
    config: &SessionConfig,
    stream: WebSocketStream<MaybeTlsStream<TcpStream>>,
    input: &mut mpsc::UnboundedReceiver<String>,
    shutdown: &mut watch::Receiver<bool>,
) -> SessionEnd {
    let (mut sink, mut source) = stream.split();

    // Announce the captured identity immediately after the transport opens
    let login = ClientFrame::Login {
        user: config.identity.clone(),
    };
    let login_json = serde_json::to_string(&login).unwrap();
    if let Err(e) = sink.send(Message::Text(login_json.into())).await {
        tracing::warn!("failed to send login: {}", e);
        return SessionEnd::ConnectionLost;
    }

    loop {
        tokio::select! {
            frame = source.next() => match frame {
                Some(Ok(Message::Text(text))) => render_inbound(&config.identity, &text),
                Some(Ok(Message::Close(_))) | None => {
                    tracing::info!("server closed the connection");
                    return SessionEnd::ConnectionLost;
                }
                Some(Ok(_)) => {}
                Some(Err(e)) => {
                    tracing::warn!("transport error: {}", e);
                    return SessionEnd::ConnectionLost;
                }
            },
            line = input.recv() => match line {
                Some(text) => {
                    let frame = ClientFrame::Message { msg: text };
                    let json = serde_json::to_string(&frame).unwrap();
                    if let Err(e) = sink.send(Message::Text(json.into())).await {
                        tracing::warn!("failed to send message: {}", e);
                        return SessionEnd::ConnectionLost;
                    }
                }
                None => {
                    // input EOF is a deliberate teardown, close the
                    // transport instead of letting the reconnect loop run
                    let _ = sink.send(Message::Close(None)).await;
                    return SessionEnd::Shutdown;
                }
            },
            _ = shutdown.changed() => {
                let _ = sink.send(Message::Close(None)).await;
                return SessionEnd::Shutdown;
            }
        }
    }
}

/// Decide what to do with one inbound text frame.
///
/// Frames without a usable payload are ignored; frames without a sender
/// are system notices; our own name coming back is suppressed because the
/// terminal already echoed the outgoing line.
pub fn classify_inbound(self_name: &str, raw: &str) -> InboundAction {
    let frame = match serde_json::from_str::<ServerFrame>(raw) {
        Ok(frame) => frame,
        Err(_) => return InboundAction::Ignore,
    };

    match frame {
        ServerFrame::Info { msg } => InboundAction::Notice(msg),
        ServerFrame::Message { user: None, msg } => InboundAction::Notice(msg),
        ServerFrame::Message {
            user: Some(user),
            msg,
        } => {
            if user == self_name {
                InboundAction::Ignore
            } else {
                InboundAction::Render { user, msg }
            }
        }
    }
}

fn render_inbound(self_name: &str, raw: &str) {
    match classify_inbound(self_name, raw) {
        InboundAction::Ignore => {}
        InboundAction::Notice(msg) => tracing::info!("{}", msg),
        InboundAction::Render { user, msg } => {
            println!("[{}] {}: {}", jst_now().format("%H:%M"), user, msg);
        }
    }
}
