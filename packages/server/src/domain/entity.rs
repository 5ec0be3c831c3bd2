//! Core domain models for the chat relay.

use serde::{Deserialize, Serialize};

use super::value_object::{ConnectionId, Timestamp, UserName};

/// Represents one live connection and the identity it has claimed, if any.
///
/// A session exists from accept until close. The identity is absent until
/// the first `login` frame arrives and is overwritten by every later one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    /// Connection identifier assigned on accept
    pub id: ConnectionId,
    /// Display name claimed at login (absent before the first login)
    pub identity: Option<UserName>,
    /// Timestamp when the connection was accepted
    pub connected_at: Timestamp,
}

impl Session {
    /// Create a new session with no identity yet.
    pub fn new(id: ConnectionId, connected_at: Timestamp) -> Self {
        Self {
            id,
            identity: None,
            connected_at,
        }
    }

    /// Claim an identity for this session, returning the previous one.
    ///
    /// A second login overwrites, it never appends.
    pub fn claim_identity(&mut self, name: UserName) -> Option<UserName> {
        self.identity.replace(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::factory::ConnectionIdFactory;

    #[test]
    fn test_session_new_has_no_identity() {
        // テスト項目: 新しい Session は identity を持たない
        // given (前提条件):
        let id = ConnectionIdFactory::generate();

        // when (操作):
        let session = Session::new(id, Timestamp::new(1000));

        // then (期待する結果):
        assert_eq!(session.id, id);
        assert!(session.identity.is_none());
        assert_eq!(session.connected_at, Timestamp::new(1000));
    }

    #[test]
    fn test_claim_identity_first_login() {
        // テスト項目: 最初のログインで identity が設定され、以前の値は None
        // given (前提条件):
        let mut session = Session::new(ConnectionIdFactory::generate(), Timestamp::new(0));

        // when (操作):
        let previous = session.claim_identity(UserName::new("alice".to_string()));

        // then (期待する結果):
        assert!(previous.is_none());
        assert_eq!(session.identity, Some(UserName::new("alice".to_string())));
    }

    #[test]
    fn test_claim_identity_overwrites() {
        // テスト項目: 2回目のログインは identity を上書きし、以前の名前を返す
        // given (前提条件):
        let mut session = Session::new(ConnectionIdFactory::generate(), Timestamp::new(0));
        session.claim_identity(UserName::new("alice".to_string()));

        // when (操作):
        let previous = session.claim_identity(UserName::new("alicia".to_string()));

        // then (期待する結果):
        assert_eq!(previous, Some(UserName::new("alice".to_string())));
        assert_eq!(session.identity, Some(UserName::new("alicia".to_string())));
    }
}
