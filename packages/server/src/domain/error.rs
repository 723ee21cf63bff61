//! Domain error types.

use thiserror::Error;

use super::{ConnectionId, RoomId, SessionId};

/// Validation failure when building a value object.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValueObjectError {
    #[error("{0} must not be empty")]
    Empty(&'static str),

    #[error("{0} must not have leading or trailing whitespace")]
    SurroundingWhitespace(&'static str),

    #[error("{kind} is too long ({length} > {max} characters)")]
    TooLong {
        kind: &'static str,
        length: usize,
        max: usize,
    },
}

/// Failures of room/session coordinator transitions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RoomError {
    #[error("room '{0}' does not exist")]
    RoomNotFound(RoomId),

    #[error("session '{0}' was not found in any room")]
    SessionNotFound(SessionId),

    #[error("connection '{0}' is not the host of the room")]
    NotHost(ConnectionId),
}

/// Failures when delivering messages through the connection adapter.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MessagePushError {
    #[error("client '{0}' is not connected")]
    ClientNotFound(String),

    #[error("failed to push message: {0}")]
    PushFailed(String),
}
