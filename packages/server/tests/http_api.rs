//! HTTP API integration tests.
//!
//! Tests for the operational endpoints (health check, live session list).

mod fixtures;

use fixtures::{TestServer, connect, login, recv_json, wait_for_identity};

#[tokio::test]
async fn test_health_endpoint() {
    // テスト項目: /api/health エンドポイントが正常に動作する
    // given (前提条件):
    let server = TestServer::start().await;
    let client = reqwest::Client::new();

    // when (操作):
    let response = client
        .get(format!("{}/api/health", server.base_url()))
        .send()
        .await
        .expect("Failed to send request");

    // then (期待する結果):
    assert_eq!(response.status(), 200);

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_sessions_endpoint_lists_live_connections() {
    // テスト項目: /api/sessions が接続中のセッションと identity を返す
    // given (前提条件): ログイン済みの alice と未ログインの接続
    let server = TestServer::start().await;
    let mut alice = connect(&server).await;
    recv_json(&mut alice).await; // welcome
    let mut anon = connect(&server).await;
    recv_json(&mut anon).await; // welcome
    login(&mut alice, "alice").await;
    wait_for_identity(&server, "alice").await;

    // when (操作):
    let response = reqwest::get(format!("{}/api/sessions", server.base_url()))
        .await
        .expect("Failed to send request");

    // then (期待する結果):
    assert_eq!(response.status(), 200);

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    let sessions = body.as_array().expect("Response should be an array");
    assert_eq!(sessions.len(), 2);

    // alice の identity が見え、未ログインの接続は user が null
    let users: Vec<&serde_json::Value> = sessions.iter().map(|s| &s["user"]).collect();
    assert!(users.contains(&&serde_json::json!("alice")));
    assert!(users.contains(&&serde_json::Value::Null));

    // 各要素は connection_id と connected_at を持つ
    for session in sessions {
        assert!(session["connection_id"].is_string());
        assert!(session["connected_at"].is_string());
    }
}
