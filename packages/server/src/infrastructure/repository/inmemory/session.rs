//! InMemory Session Registry 実装
//!
//! ドメイン層が定義する SessionRegistry trait の具体的な実装。
//! HashMap をインメモリストアとして使用します。
//!
//! 登録・削除・identity の更新・ブロードキャスト対象の列挙は全て単一の
//! Mutex を通るため、接続のクローズとブロードキャストが競合しても
//! lost update や iteration 中の mutation は起きません。

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::{Mutex, mpsc::UnboundedSender};

use crate::domain::{
    ConnectionId, PeerHandle, RegistryError, Session, SessionRegistry, UserName,
};

/// One registry slot: the session and the channel feeding its send task.
struct SessionEntry {
    session: Session,
    sender: UnboundedSender<String>,
}

/// インメモリ Session Registry 実装
pub struct InMemorySessionRegistry {
    sessions: Mutex<HashMap<ConnectionId, SessionEntry>>,
}

impl InMemorySessionRegistry {
    /// 空の InMemorySessionRegistry を作成
    pub fn new() -> Self {
        Self {
            sessions: Mutex::new(HashMap::new()),
        }
    }
}

impl Default for InMemorySessionRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SessionRegistry for InMemorySessionRegistry {
    async fn add_session(&self, session: Session, sender: UnboundedSender<String>) {
        let mut sessions = self.sessions.lock().await;
        sessions.insert(session.id, SessionEntry { session, sender });
    }

    async fn remove_session(&self, conn_id: &ConnectionId) -> Option<Session> {
        let mut sessions = self.sessions.lock().await;
        sessions.remove(conn_id).map(|entry| entry.session)
    }

    async fn set_identity(
        &self,
        conn_id: &ConnectionId,
        name: UserName,
    ) -> Result<Option<UserName>, RegistryError> {
        let mut sessions = self.sessions.lock().await;
        let entry = sessions
            .get_mut(conn_id)
            .ok_or_else(|| RegistryError::SessionNotFound(conn_id.to_string()))?;
        Ok(entry.session.claim_identity(name))
    }

    async fn get_identity(&self, conn_id: &ConnectionId) -> Option<UserName> {
        let sessions = self.sessions.lock().await;
        sessions
            .get(conn_id)
            .and_then(|entry| entry.session.identity.clone())
    }

    async fn get_broadcast_targets<'a>(&self, exclude: Option<&'a ConnectionId>) -> Vec<PeerHandle> {
        let sessions = self.sessions.lock().await;
        sessions
            .iter()
            .filter(|(id, _)| Some(*id) != exclude)
            .map(|(id, entry)| PeerHandle {
                conn_id: *id,
                sender: entry.sender.clone(),
            })
            .collect()
    }

    async fn get_sessions(&self) -> Vec<Session> {
        let sessions = self.sessions.lock().await;
        sessions.values().map(|entry| entry.session.clone()).collect()
    }

    async fn count_sessions(&self) -> usize {
        let sessions = self.sessions.lock().await;
        sessions.len()
    }
}
