//! UseCase: 接続登録処理
//!
//! 接続が受け入れられた時点でレジストリに登録します。identity はまだ
//! 不明（login フレーム到着まで）。重複チェックは行いません —
//! レジストリのキーは接続であり、名前の一意性は仕様上保証されません。

use std::sync::Arc;

use tokio::sync::mpsc::UnboundedSender;

use crate::domain::{Session, SessionRegistry};

/// 接続登録のユースケース
pub struct RegisterConnectionUseCase {
    /// Registry（データアクセス層の抽象化）
    registry: Arc<dyn SessionRegistry>,
}

impl RegisterConnectionUseCase {
    /// 新しい RegisterConnectionUseCase を作成
    pub fn new(registry: Arc<dyn SessionRegistry>) -> Self {
        Self { registry }
    }

    /// 接続登録を実行
    ///
    /// # Returns
    ///
    /// 登録後の接続数
    pub async fn execute(
        &self,
        session: Session,
        sender: UnboundedSender<String>,
    ) -> usize {
        self.registry.add_session(session, sender).await;
        self.registry.count_sessions().await
    }
}
