//! WebSocket event DTOs.
//!
//! Every text frame is a JSON envelope of the form
//! `{"event": "<name>", "data": {...}}`. Payload fields are camelCase.

use serde::{Deserialize, Serialize};

use crate::domain::Role;

/// `joinRoom` で存在しないルームを指定したときのメッセージ
pub const ROOM_NOT_FOUND_MESSAGE: &str = "Room does not exist.";
/// `closeRoom` を HOST 以外が送ったときのメッセージ
pub const NOT_HOST_MESSAGE: &str = "Only the host can close the room.";
/// 再接続に失敗したときのメッセージ
pub const RECONNECTION_FAILED_MESSAGE: &str =
    "Cannot reconnect. Session not found or already connected.";

/// Inbound event (client → server)
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(
    tag = "event",
    content = "data",
    rename_all = "camelCase",
    rename_all_fields = "camelCase"
)]
pub enum ClientEvent {
    CreateRoom {
        session_id: String,
    },
    /// `room_id` はクライアントが送ってくるが、サーバーは使わない
    Reconnect {
        session_id: String,
        #[serde(default)]
        room_id: Option<String>,
    },
    JoinRoom {
        room_id: String,
        session_id: String,
    },
    LeaveRoom {
        room_id: String,
    },
    SendGestureToRoom {
        room_id: String,
        gesture: String,
        #[serde(default)]
        data: serde_json::Value,
    },
    CloseRoom {
        room_id: String,
    },
}

/// Outbound event (server → client)
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(
    tag = "event",
    content = "data",
    rename_all = "camelCase",
    rename_all_fields = "camelCase"
)]
pub enum ServerEvent {
    Connected {
        connection_id: String,
    },
    RoomCreated {
        room_id: String,
        connection_id: String,
        session_id: String,
        role: Role,
    },
    Reconnected {
        room_id: String,
        connection_id: String,
        session_id: String,
        role: Role,
    },
    ParticipantReconnected {
        session_id: String,
        connection_id: String,
        role: Role,
        reconnected_at: i64,
    },
    ReconnectionFailed {
        message: String,
    },
    RoomJoined {
        room_id: String,
        connection_id: String,
        session_id: String,
        role: Role,
        host_connection_id: Option<String>,
    },
    NewParticipant {
        connection_id: String,
        session_id: String,
        role: Role,
    },
    Error {
        message: String,
    },
    RoomLeft {
        room_id: String,
        connection_id: String,
    },
    ParticipantLeft {
        connection_id: String,
    },
    GestureSent {
        connection_id: String,
        gesture: String,
        data: serde_json::Value,
    },
    ParticipantDisconnected {
        session_id: String,
        role: Role,
        disconnected_at: i64,
    },
    RoomClosed {
        room_id: String,
    },
}

impl ServerEvent {
    /// イベント名（ログ用）
    pub fn name(&self) -> &'static str {
        match self {
            ServerEvent::Connected { .. } => "connected",
            ServerEvent::RoomCreated { .. } => "roomCreated",
            ServerEvent::Reconnected { .. } => "reconnected",
            ServerEvent::ParticipantReconnected { .. } => "participantReconnected",
            ServerEvent::ReconnectionFailed { .. } => "reconnectionFailed",
            ServerEvent::RoomJoined { .. } => "roomJoined",
            ServerEvent::NewParticipant { .. } => "newParticipant",
            ServerEvent::Error { .. } => "error",
            ServerEvent::RoomLeft { .. } => "roomLeft",
            ServerEvent::ParticipantLeft { .. } => "participantLeft",
            ServerEvent::GestureSent { .. } => "gestureSent",
            ServerEvent::ParticipantDisconnected { .. } => "participantDisconnected",
            ServerEvent::RoomClosed { .. } => "roomClosed",
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
