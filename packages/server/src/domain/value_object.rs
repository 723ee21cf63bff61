//! Value objects of the room domain.
//!
//! Identifiers are validated newtypes so that the coordinator never sees an
//! empty or oversized ID coming from a client payload.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::error::ValueObjectError;

/// Maximum length (in characters) of any identifier.
pub const MAX_ID_LENGTH: usize = 128;

fn validate_id(kind: &'static str, value: &str) -> Result<(), ValueObjectError> {
    if value.trim().is_empty() {
        return Err(ValueObjectError::Empty(kind));
    }
    if value.trim() != value {
        return Err(ValueObjectError::SurroundingWhitespace(kind));
    }
    let length = value.chars().count();
    if length > MAX_ID_LENGTH {
        return Err(ValueObjectError::TooLong {
            kind,
            length,
            max: MAX_ID_LENGTH,
        });
    }
    Ok(())
}

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident, $kind:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(String);

        impl $name {
            /// Validate and wrap the given string.
            pub fn new(value: String) -> Result<Self, ValueObjectError> {
                validate_id($kind, &value)?;
                Ok(Self(value))
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }

            pub fn into_string(self) -> String {
                self.0
            }
        }

        impl TryFrom<String> for $name {
            type Error = ValueObjectError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

string_id!(
    /// Opaque room identifier, generated by the coordinator and never reused.
    RoomId,
    "room_id"
);

string_id!(
    /// Durable participant identity supplied by the client; survives reconnects.
    SessionId,
    "session_id"
);

string_id!(
    /// Transport-level identity of one live socket.
    ConnectionId,
    "connection_id"
);

/// Generates fresh room IDs.
pub struct RoomIdFactory;

impl RoomIdFactory {
    pub fn generate() -> RoomId {
        RoomId(Uuid::new_v4().to_string())
    }
}

/// Generates fresh connection IDs for accepted sockets.
pub struct ConnectionIdFactory;

impl ConnectionIdFactory {
    pub fn generate() -> ConnectionId {
        ConnectionId(Uuid::new_v4().to_string())
    }
}

/// Unix timestamp in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(i64);

impl Timestamp {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

/// Participant role within a room. Assigned once, never changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Host,
    Guest,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Host => "HOST",
            Role::Guest => "GUEST",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
