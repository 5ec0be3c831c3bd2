//! UseCase: ログイン処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - LoginParticipantUseCase::execute() メソッド
//! - identity の登録・上書きと、参加通知のブロードキャスト対象選定
//!
//! ### なぜこのテストが必要か
//! - 2回目のログインが上書き（追加ではなく）であることを保証
//! - 参加通知が送信者自身に配送されないことを保証
//!
//! ### どのような状況を想定しているか
//! - 正常系：初回ログイン
//! - 正常系：同一接続からの再ログイン（名前変更）
//! - 異常系：未登録の接続からのログイン

use std::sync::Arc;

use crate::domain::{ConnectionId, PeerHandle, SessionRegistry, UserName};

use super::error::LoginError;

/// ログイン処理の結果
#[derive(Debug)]
pub struct LoginOutcome {
    /// 上書きされる前の identity（初回ログインでは None）
    pub previous: Option<UserName>,
    /// 参加通知のブロードキャスト対象（送信者を除く）
    pub targets: Vec<PeerHandle>,
}

/// ログインのユースケース
pub struct LoginParticipantUseCase {
    /// Registry（データアクセス層の抽象化）
    registry: Arc<dyn SessionRegistry>,
}

impl LoginParticipantUseCase {
    /// 新しい LoginParticipantUseCase を作成
    pub fn new(registry: Arc<dyn SessionRegistry>) -> Self {
        Self { registry }
    }

    /// ログインを実行
    ///
    /// identity を上書き登録し、参加通知の対象（送信者以外の全接続）を
    /// 返します。通知はログインのたびに送られます（再ログインを含む）。
    pub async fn execute(
        &self,
        conn_id: &ConnectionId,
        name: UserName,
    ) -> Result<LoginOutcome, LoginError> {
        let previous = self.registry.set_identity(conn_id, name).await?;
        let targets = self.registry.get_broadcast_targets(Some(conn_id)).await;

        Ok(LoginOutcome { previous, targets })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::{ConnectionIdFactory, Session, Timestamp},
        infrastructure::repository::InMemorySessionRegistry,
    };
    use hiroba_shared::time::get_jst_timestamp;
    use tokio::sync::mpsc;

    async fn register(registry: &Arc<InMemorySessionRegistry>) -> ConnectionId {
        let session = Session::new(
            ConnectionIdFactory::generate(),
            Timestamp::new(get_jst_timestamp()),
        );
        let conn_id = session.id;
        let (tx, _rx) = mpsc::unbounded_channel();
        registry.add_session(session, tx).await;
        conn_id
    }

    #[tokio::test]
    async fn test_login_first_time() {
        // テスト項目: 初回ログインで identity が設定され、他の接続が通知対象になる
        // given (前提条件): 3つの接続
        let registry = Arc::new(InMemorySessionRegistry::new());
        let usecase = LoginParticipantUseCase::new(registry.clone());
        let alice = register(&registry).await;
        let bob = register(&registry).await;
        let charlie = register(&registry).await;

        // when (操作): alice がログイン
        let result = usecase
            .execute(&alice, UserName::new("alice".to_string()))
            .await;

        // then (期待する結果):
        let outcome = result.unwrap();
        assert!(outcome.previous.is_none());
        assert_eq!(outcome.targets.len(), 2);
        assert!(outcome.targets.iter().any(|t| t.conn_id == bob));
        assert!(outcome.targets.iter().any(|t| t.conn_id == charlie));
        assert!(outcome.targets.iter().all(|t| t.conn_id != alice));
    }

    #[tokio::test]
    async fn test_login_overwrites_previous_identity() {
        // テスト項目: 再ログインは identity を上書きし、以前の名前が返される
        // given (前提条件):
        let registry = Arc::new(InMemorySessionRegistry::new());
        let usecase = LoginParticipantUseCase::new(registry.clone());
        let conn_id = register(&registry).await;
        usecase
            .execute(&conn_id, UserName::new("alice".to_string()))
            .await
            .unwrap();

        // when (操作): 別の名前で再ログイン
        let outcome = usecase
            .execute(&conn_id, UserName::new("alicia".to_string()))
            .await
            .unwrap();

        // then (期待する結果):
        assert_eq!(outcome.previous, Some(UserName::new("alice".to_string())));
        assert_eq!(
            registry.get_identity(&conn_id).await,
            Some(UserName::new("alicia".to_string()))
        );
    }

    #[tokio::test]
    async fn test_login_unknown_connection_fails() {
        // テスト項目: 未登録の接続からのログインはエラーになる
        // given (前提条件):
        let registry = Arc::new(InMemorySessionRegistry::new());
        let usecase = LoginParticipantUseCase::new(registry);
        let unknown = ConnectionIdFactory::generate();

        // when (操作):
        let result = usecase
            .execute(&unknown, UserName::new("ghost".to_string()))
            .await;

        // then (期待する結果):
        assert!(matches!(result, Err(LoginError::SessionNotFound(_))));
    }
}
