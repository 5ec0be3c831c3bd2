//! UseCase: 切断処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - DisconnectParticipantUseCase::execute() メソッド
//! - 接続の削除と退出通知の対象選定、および冪等性
//!
//! ### なぜこのテストが必要か
//! - transport エラーと close は別イベントとして観測されるが、クリーン
//!   アップは接続ごとに正確に一度だけ実行される必要がある
//! - identity を持たない接続の切断では通知が発生しないことを保証
//!
//! ### どのような状況を想定しているか
//! - 正常系：ログイン済み接続の切断と退出通知
//! - エッジケース：未ログイン接続の切断（通知なし）
//! - エッジケース：同じ接続の二重切断（二度目は no-op）

use std::sync::Arc;

use crate::domain::{ConnectionId, PeerHandle, SessionRegistry, UserName};

/// 切断処理の結果
#[derive(Debug)]
pub struct DisconnectOutcome {
    /// 切断した接続が名乗っていた identity（未ログインなら None）
    pub identity: Option<UserName>,
    /// 退出通知のブロードキャスト対象（残りの全接続）
    pub targets: Vec<PeerHandle>,
}

/// 切断のユースケース
pub struct DisconnectParticipantUseCase {
    /// Registry（データアクセス層の抽象化）
    registry: Arc<dyn SessionRegistry>,
}

impl DisconnectParticipantUseCase {
    /// 新しい DisconnectParticipantUseCase を作成
    pub fn new(registry: Arc<dyn SessionRegistry>) -> Self {
        Self { registry }
    }

    /// 切断を実行
    ///
    /// レジストリから接続を削除し、退出通知の対象（残りの全接続）を
    /// 返します。既に削除済みの接続に対しては `None` を返し、何も
    /// 起こりません（冪等）。
    pub async fn execute(&self, conn_id: &ConnectionId) -> Option<DisconnectOutcome> {
        let removed = self.registry.remove_session(conn_id).await?;
        let targets = self.registry.get_broadcast_targets(None).await;

        Some(DisconnectOutcome {
            identity: removed.identity,
            targets,
        })
    }
}
