//! Shared fixtures for integration tests.
#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use futures_util::{SinkExt, StreamExt};
use tokio::net::TcpStream;
use tokio::sync::oneshot;
use tokio_tungstenite::{MaybeTlsStream, WebSocketStream, connect_async, tungstenite::Message};

use hiroba_server::{
    build_router, domain::SessionRegistry,
    infrastructure::repository::InMemorySessionRegistry, ui::state::AppState,
};

/// A WebSocket client connected to the test relay
pub type WsClient = WebSocketStream<MaybeTlsStream<TcpStream>>;

/// The real relay router served on an ephemeral port
pub struct TestServer {
    addr: SocketAddr,
    shutdown: Option<oneshot::Sender<()>>,
}

impl TestServer {
    pub async fn start() -> Self {
        let registry: Arc<dyn SessionRegistry> = Arc::new(InMemorySessionRegistry::new());
        let state = Arc::new(AppState { registry });
        let app = build_router(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind test listener");
        let addr = listener.local_addr().expect("failed to read local addr");

        let (tx, rx) = oneshot::channel::<()>();
        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async {
                    rx.await.ok();
                })
                .await
                .expect("test server failed");
        });

        Self {
            addr,
            shutdown: Some(tx),
        }
    }

    pub fn ws_url(&self) -> String {
        format!("ws://{}", self.addr)
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
    }
}

/// Open a WebSocket connection to the test relay.
pub async fn connect(server: &TestServer) -> WsClient {
    let (ws, _response) = connect_async(server.ws_url())
        .await
        .expect("failed to open websocket");
    ws
}

/// Receive the next text frame as JSON, with a timeout.
pub async fn recv_json(ws: &mut WsClient) -> serde_json::Value {
    loop {
        let frame = tokio::time::timeout(Duration::from_secs(2), ws.next())
            .await
            .expect("timed out waiting for a frame")
            .expect("connection closed while waiting for a frame")
            .expect("transport error while waiting for a frame");

        if let Message::Text(text) = frame {
            return serde_json::from_str(&text).expect("frame is not valid JSON");
        }
    }
}

/// Send a raw text frame (valid JSON or not).
pub async fn send_raw(ws: &mut WsClient, raw: &str) {
    ws.send(Message::Text(raw.to_string().into()))
        .await
        .expect("failed to send frame");
}

/// Send a JSON value as one text frame.
pub async fn send_json(ws: &mut WsClient, value: serde_json::Value) {
    send_raw(ws, &value.to_string()).await;
}

/// Send a login frame.
pub async fn login(ws: &mut WsClient, name: &str) {
    send_json(ws, serde_json::json!({"type": "login", "user": name})).await;
}

/// Wait until the registry shows a session with the given identity.
///
/// Logins carry no acknowledgement, so tests that need "login processed"
/// before their next step poll the sessions endpoint.
pub async fn wait_for_identity(server: &TestServer, name: &str) {
    let deadline = tokio::time::Instant::now() + Duration::from_secs(2);
    loop {
        let sessions: serde_json::Value =
            reqwest::get(format!("{}/api/sessions", server.base_url()))
                .await
                .expect("failed to query sessions")
                .json()
                .await
                .expect("sessions response is not JSON");

        let found = sessions
            .as_array()
            .map(|list| list.iter().any(|s| s["user"] == name))
            .unwrap_or(false);
        if found {
            return;
        }

        if tokio::time::Instant::now() > deadline {
            panic!("identity '{}' never appeared in the registry", name);
        }
        tokio::time::sleep(Duration::from_millis(20)).await;
    }
}

/// Assert that no frame arrives within a short window.
pub async fn assert_silent(ws: &mut WsClient) {
    let result = tokio::time::timeout(Duration::from_millis(300), ws.next()).await;
    if let Ok(Some(Ok(frame))) = result {
        panic!("expected silence but received: {:?}", frame);
    }
}
