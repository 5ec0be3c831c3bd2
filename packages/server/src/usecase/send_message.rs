//! UseCase: メッセージ中継処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - SendMessageUseCase::execute() メソッド
//! - 送信者 identity の解決とブロードキャスト対象選定
//!
//! ### なぜこのテストが必要か
//! - 送信者以外にだけ中継されることを保証（リレーはエコーバックしない）
//! - ログイン前の接続からのメッセージも拒否されず、identity 不明のまま
//!   中継されることを保証
//!
//! ### どのような状況を想定しているか
//! - 正常系：ログイン済みの送信者からのメッセージ
//! - エッジケース：ログイン前の送信者（identity = None）
//! - エッジケース：送信者のみが接続している場合（対象なし）

use std::sync::Arc;

use crate::domain::{ConnectionId, PeerHandle, SessionRegistry, UserName};

/// メッセージ中継の結果
#[derive(Debug)]
pub struct MessageOutcome {
    /// 送信者の identity（ログイン前は None のまま中継される）
    pub sender_identity: Option<UserName>,
    /// ブロードキャスト対象（送信者を除く）
    pub targets: Vec<PeerHandle>,
}

/// メッセージ中継のユースケース
pub struct SendMessageUseCase {
    /// Registry（データアクセス層の抽象化）
    registry: Arc<dyn SessionRegistry>,
}

impl SendMessageUseCase {
    /// 新しい SendMessageUseCase を作成
    pub fn new(registry: Arc<dyn SessionRegistry>) -> Self {
        Self { registry }
    }

    /// メッセージ中継を実行
    ///
    /// 送信者の identity を解決し、中継対象（送信者以外の全接続）を
    /// 返します。identity が未登録でもメッセージは落とされません。
    pub async fn execute(&self, conn_id: &ConnectionId) -> MessageOutcome {
        let sender_identity = self.registry.get_identity(conn_id).await;
        let targets = self.registry.get_broadcast_targets(Some(conn_id)).await;

        MessageOutcome {
            sender_identity,
            targets,
        }
    }
}
