//! Domain layer: value objects, entities, the room/session coordinator and
//! the ports the outer layers implement.

pub mod entity;
pub mod error;
pub mod message_pusher;
pub mod registry;
pub mod repository;
pub mod value_object;

pub use entity::{ParticipantProfile, Room, RoomSnapshot};
pub use error::{MessagePushError, RoomError, ValueObjectError};
#[cfg(test)]
pub use message_pusher::MockMessagePusher;
pub use message_pusher::{MessagePusher, PushMessage, PusherChannel};
pub use registry::{
    DisconnectedSession, JoinOutcome, LeaveOutcome, ReconnectOutcome, RoomRegistry,
};
#[cfg(test)]
pub use repository::MockRoomRepository;
pub use repository::RoomRepository;
pub use value_object::{
    ConnectionId, ConnectionIdFactory, MAX_ID_LENGTH, Role, RoomId, RoomIdFactory, SessionId,
    Timestamp,
};
