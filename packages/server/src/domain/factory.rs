//! Domain factories for creating domain entities and value objects.

use uuid::Uuid;

use super::value_object::ConnectionId;

/// Factory for generating ConnectionId instances.
///
/// Encapsulates identifier generation, separating it from the value object
/// itself. ConnectionIds carry no validation, so generation cannot fail.
pub struct ConnectionIdFactory;

impl ConnectionIdFactory {
    /// Generate a new ConnectionId with a random UUID v4.
    pub fn generate() -> ConnectionId {
        ConnectionId::from_uuid(Uuid::new_v4())
    }
}
