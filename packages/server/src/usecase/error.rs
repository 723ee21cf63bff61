//! UseCase 層のエラー定義

use thiserror::Error;

/// ルーム参加のエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum JoinRoomError {
    #[error("room '{0}' does not exist")]
    RoomNotFound(String),
}

/// セッション再接続のエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReconnectError {
    #[error("session '{0}' not found")]
    SessionNotFound(String),
}

/// ルームを閉じる操作のエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CloseRoomError {
    #[error("connection '{0}' is not the host of the room")]
    NotHost(String),
    #[error("room '{0}' does not exist")]
    RoomNotFound(String),
}

/// ジェスチャー送信のエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SendGestureError {
    #[error("failed to broadcast gesture: {0}")]
    BroadcastFailed(String),
}
