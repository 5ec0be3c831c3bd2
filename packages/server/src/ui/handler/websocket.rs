//! WebSocket connection handlers.
//!
//! Each accepted socket gets its own task pair: a receive loop that
//! interprets frames, and a send loop that drains the connection's
//! unbounded channel. Disconnect cleanup runs after `tokio::select!`
//! joins the pair, so it fires exactly once whether the transport
//! errored or closed first.

use std::sync::Arc;

use axum::{
    extract::{
        State,
        ws::{Message, WebSocket, WebSocketUpgrade},
    },
    response::IntoResponse,
};
use futures_util::{sink::SinkExt, stream::StreamExt};
use tokio::sync::mpsc;

use hiroba_shared::time::get_jst_timestamp;

use crate::{
    domain::{ConnectionId, ConnectionIdFactory, PeerHandle, Session, Timestamp, UserName},
    infrastructure::dto::websocket::{ClientFrame, ServerFrame},
    ui::state::AppState,
    usecase::{
        DisconnectParticipantUseCase, LoginParticipantUseCase, RegisterConnectionUseCase,
        SendMessageUseCase,
    },
};

pub async fn websocket_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    ws.on_upgrade(|socket| handle_socket(socket, state))
}

async fn handle_socket(socket: WebSocket, state: Arc<AppState>) {
    let conn_id = ConnectionIdFactory::generate();
    let (mut sender, mut receiver) = socket.split();

    // Create a channel for this connection to receive broadcast frames
    let (tx, mut rx) = mpsc::unbounded_channel::<String>();

    // Register before reading any frame, so broadcasts from other
    // connections already reach this one
    let register_usecase = RegisterConnectionUseCase::new(state.registry.clone());
    let session = Session::new(conn_id, Timestamp::new(get_jst_timestamp()));
    let online = register_usecase.execute(session, tx).await;
    tracing::info!("connection '{}' accepted ({} online)", conn_id, online);

    // Greet the new connection only; no broadcast, identity still unknown
    let welcome = ServerFrame::Info {
        msg: "Connected to the Chat Server!".to_string(),
    };
    let welcome_json = serde_json::to_string(&welcome).unwrap();
    if let Err(e) = sender.send(Message::Text(welcome_json.into())).await {
        tracing::warn!("failed to greet connection '{}': {}", conn_id, e);
    }

    let recv_state = state.clone();

    // Task: receive frames from this connection and dispatch them
    let mut recv_task = tokio::spawn(async move {
        while let Some(msg) = receiver.next().await {
            let msg = match msg {
                Ok(msg) => msg,
                Err(e) => {
                    // transport error: log it, cleanup happens after the
                    // select below, together with the close path
                    tracing::warn!("transport error on connection '{}': {}", conn_id, e);
                    break;
                }
            };

            match msg {
                Message::Text(text) => handle_frame(&recv_state, conn_id, &text).await,
                Message::Close(_) => {
                    tracing::info!("connection '{}' requested close", conn_id);
                    break;
                }
                Message::Ping(_) => {
                    tracing::debug!("ping from connection '{}'", conn_id);
                    // Ping/pong is handled automatically by the WebSocket protocol
                }
                _ => {}
            }
        }
    });

    // Task: forward broadcast frames queued for this connection
    let mut send_task = tokio::spawn(async move {
        while let Some(payload) = rx.recv().await {
            if sender.send(Message::Text(payload.into())).await.is_err() {
                break;
            }
        }
    });

    // If any one of the tasks completes, abort the other
    tokio::select! {
        _ = &mut recv_task => send_task.abort(),
        _ = &mut send_task => recv_task.abort(),
    };

    // Cleanup fires once regardless of which side ended first; a second
    // invocation for the same connection would be a no-op
    let disconnect_usecase = DisconnectParticipantUseCase::new(state.registry.clone());
    match disconnect_usecase.execute(&conn_id).await {
        Some(outcome) => {
            if let Some(name) = &outcome.identity {
                let leave = ServerFrame::Info {
                    msg: format!("{} has left the chat.", name),
                };
                broadcast_to(&outcome.targets, &leave);
            }
            tracing::info!("connection '{}' disconnected and removed from registry", conn_id);
        }
        None => {
            tracing::debug!("connection '{}' was already cleaned up", conn_id);
        }
    }
}

/// Parse and dispatch one inbound text frame.
///
/// Malformed frames are logged and dropped; the connection stays open.
async fn handle_frame(state: &Arc<AppState>, conn_id: ConnectionId, raw: &str) {
    let frame = match serde_json::from_str::<ClientFrame>(raw) {
        Ok(frame) => frame,
        Err(e) => {
            tracing::warn!("dropping malformed frame from '{}': {}", conn_id, e);
            return;
        }
    };

    match frame {
        ClientFrame::Login { user } => {
            let login_usecase = LoginParticipantUseCase::new(state.registry.clone());
            match login_usecase
                .execute(&conn_id, UserName::new(user.clone()))
                .await
            {
                Ok(outcome) => {
                    match &outcome.previous {
                        Some(previous) => tracing::info!(
                            "connection '{}' re-identified from '{}' to '{}'",
                            conn_id,
                            previous,
                            user
                        ),
                        None => tracing::info!("connection '{}' logged in as '{}'", conn_id, user),
                    }

                    // A join notice goes out on every login, re-logins included
                    let notice = ServerFrame::Info {
                        msg: format!("{} has joined the chat!", user),
                    };
                    broadcast_to(&outcome.targets, &notice);
                }
                Err(e) => {
                    tracing::warn!("login failed on connection '{}': {}", conn_id, e);
                }
            }
        }
        ClientFrame::Message { msg } => {
            let send_usecase = SendMessageUseCase::new(state.registry.clone());
            let outcome = send_usecase.execute(&conn_id).await;

            // Never echoed back to the sender; an unidentified sender is
            // relayed without a user field, not rejected
            let chat = ServerFrame::Message {
                user: outcome
                    .sender_identity
                    .map(|name| name.into_string()),
                msg,
            };
            broadcast_to(&outcome.targets, &chat);
        }
        ClientFrame::Unknown => {
            tracing::debug!("ignoring frame with unknown kind from '{}'", conn_id);
        }
    }
}

/// Serialize a frame once and queue it for every target.
///
/// A failed send means the peer's send task is gone; it is logged and the
/// loop moves on, so one broken peer never stalls delivery to the rest.
fn broadcast_to(targets: &[PeerHandle], frame: &ServerFrame) {
    let payload = serde_json::to_string(frame).unwrap();

    for target in targets {
        if target.sender.send(payload.clone()).is_err() {
            tracing::warn!("failed to queue frame for connection '{}'", target.conn_id);
        }
    }
}
