//! UseCase 層のエラー定義

use thiserror::Error;

use crate::domain::RegistryError;

/// ログイン処理のエラー
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LoginError {
    /// 対象の接続がレジストリに存在しない
    #[error("connection is not registered: {0}")]
    SessionNotFound(String),
}

impl From<RegistryError> for LoginError {
    fn from(err: RegistryError) -> Self {
        match err {
            RegistryError::SessionNotFound(id) => LoginError::SessionNotFound(id),
        }
    }
}
