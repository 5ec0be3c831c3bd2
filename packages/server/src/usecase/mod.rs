//! UseCase 層
//!
//! リレーの各操作（接続登録・ログイン・メッセージ中継・切断）を実装する
//! レイヤー。UI 層から呼び出され、Domain 層の SessionRegistry を操作します。

pub mod disconnect_participant;
pub mod error;
pub mod login_participant;
pub mod register_connection;
pub mod send_message;

pub use disconnect_participant::{DisconnectOutcome, DisconnectParticipantUseCase};
pub use error::LoginError;
pub use login_participant::{LoginOutcome, LoginParticipantUseCase};
pub use register_connection::RegisterConnectionUseCase;
pub use send_message::{MessageOutcome, SendMessageUseCase};
