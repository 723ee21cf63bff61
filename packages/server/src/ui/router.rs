//! Event router: inbound WebSocket events → usecases → outbound events.
//!
//! 受信したエンベロープを `ClientEvent` にデコードし、`match` で UseCase に
//! 振り分けます。UseCase の結果から `ServerEvent` を組み立て、ユニキャスト・
//! ルームブロードキャスト・全体ブロードキャストで送信します。
//!
//! 不正なフレーム（JSON として不正、未知のイベント、フィールド欠落、不正な ID）は
//! `warn` ログを出して捨てます。接続は切らず、状態も変更しません。
//! ただし `joinRoom` のルーム ID が不正な場合は、存在しないルームと同じ
//! `error` イベントで応答します。

use std::sync::Arc;

use crate::{
    domain::{ConnectionId, PusherChannel, Role, RoomId, SessionId, ValueObjectError},
    infrastructure::dto::websocket::{
        ClientEvent, NOT_HOST_MESSAGE, RECONNECTION_FAILED_MESSAGE, ROOM_NOT_FOUND_MESSAGE,
        ServerEvent,
    },
    usecase::CloseRoomError,
};

use super::state::AppState;

/// WebSocket イベントのディスパッチャー
pub struct EventRouter {
    state: Arc<AppState>,
}

impl EventRouter {
    pub fn new(state: Arc<AppState>) -> Self {
        Self { state }
    }

    /// 新しい接続を登録し、`connected` を送る
    pub async fn on_connect(&self, sender: PusherChannel) -> ConnectionId {
        let connection_id = self
            .state
            .connect_participant_usecase
            .execute(sender)
            .await;
        self.unicast(
            &connection_id,
            &ServerEvent::Connected {
                connection_id: connection_id.as_str().to_string(),
            },
        )
        .await;
        connection_id
    }

    /// 受信したテキストフレームを処理
    pub async fn route(&self, connection_id: &ConnectionId, text: &str) {
        let event = match serde_json::from_str::<ClientEvent>(text) {
            Ok(event) => event,
            Err(e) => {
                tracing::warn!(
                    "Dropping malformed frame from '{}': {}",
                    connection_id,
                    e
                );
                return;
            }
        };

        if let Err(e) = self.dispatch(connection_id, event).await {
            tracing::warn!("Dropping frame from '{}': {}", connection_id, e);
        }
    }

    /// 接続断を記録し、影響を受けたルームに `participantDisconnected` を送る
    pub async fn on_disconnect(&self, connection_id: &ConnectionId) {
        let affected = self
            .state
            .disconnect_participant_usecase
            .execute(connection_id)
            .await;

        for session in affected {
            tracing::info!(
                "Session '{}' ({}) disconnected from room {}",
                session.session_id,
                session.role,
                session.room_id
            );
            let event = ServerEvent::ParticipantDisconnected {
                session_id: session.session_id.into_string(),
                role: session.role,
                disconnected_at: session.disconnected_at.value(),
            };
            self.broadcast_room(&session.room_id, &event, Some(connection_id.clone()))
                .await;
        }
    }

    async fn dispatch(
        &self,
        connection_id: &ConnectionId,
        event: ClientEvent,
    ) -> Result<(), ValueObjectError> {
        match event {
            ClientEvent::CreateRoom { session_id } => {
                self.create_room(connection_id, SessionId::new(session_id)?)
                    .await
            }
            ClientEvent::Reconnect { session_id, .. } => {
                self.reconnect(connection_id, SessionId::new(session_id)?)
                    .await
            }
            ClientEvent::JoinRoom {
                room_id,
                session_id,
            } => {
                let session_id = SessionId::new(session_id)?;
                // 形式が不正なルーム ID は「存在しないルーム」として応答する
                match RoomId::new(room_id) {
                    Ok(room_id) => self.join_room(connection_id, room_id, session_id).await,
                    Err(e) => {
                        tracing::info!("Join rejected for '{}': {}", connection_id, e);
                        self.send_error(connection_id, ROOM_NOT_FOUND_MESSAGE).await;
                    }
                }
            }
            ClientEvent::LeaveRoom { room_id } => {
                self.leave_room(connection_id, RoomId::new(room_id)?).await
            }
            ClientEvent::SendGestureToRoom {
                room_id,
                gesture,
                data,
            } => {
                self.send_gesture(connection_id, RoomId::new(room_id)?, gesture, data)
                    .await
            }
            ClientEvent::CloseRoom { room_id } => {
                self.close_room(connection_id, RoomId::new(room_id)?).await
            }
        }
        Ok(())
    }

    async fn create_room(&self, connection_id: &ConnectionId, session_id: SessionId) {
        let room_id = self
            .state
            .create_room_usecase
            .execute(connection_id.clone(), session_id.clone())
            .await;

        let event = ServerEvent::RoomCreated {
            room_id: room_id.into_string(),
            connection_id: connection_id.as_str().to_string(),
            session_id: session_id.into_string(),
            role: Role::Host,
        };
        self.broadcast_all(&event).await;
    }

    async fn reconnect(&self, connection_id: &ConnectionId, session_id: SessionId) {
        match self
            .state
            .reconnect_session_usecase
            .execute(session_id.clone(), connection_id.clone())
            .await
        {
            Ok(outcome) => {
                tracing::info!(
                    "Session '{}' reconnected to room {} as {}",
                    session_id,
                    outcome.room_id,
                    outcome.role
                );
                let reconnected = ServerEvent::Reconnected {
                    room_id: outcome.room_id.as_str().to_string(),
                    connection_id: connection_id.as_str().to_string(),
                    session_id: session_id.as_str().to_string(),
                    role: outcome.role,
                };
                self.unicast(connection_id, &reconnected).await;

                let notice = ServerEvent::ParticipantReconnected {
                    session_id: session_id.into_string(),
                    connection_id: connection_id.as_str().to_string(),
                    role: outcome.role,
                    reconnected_at: outcome.reconnected_at.value(),
                };
                self.broadcast_room(&outcome.room_id, &notice, Some(connection_id.clone()))
                    .await;
            }
            Err(e) => {
                tracing::info!("Reconnect rejected for '{}': {}", connection_id, e);
                let event = ServerEvent::ReconnectionFailed {
                    message: RECONNECTION_FAILED_MESSAGE.to_string(),
                };
                self.unicast(connection_id, &event).await;
            }
        }
    }

    async fn join_room(
        &self,
        connection_id: &ConnectionId,
        room_id: RoomId,
        session_id: SessionId,
    ) {
        match self
            .state
            .join_room_usecase
            .execute(room_id.clone(), connection_id.clone(), session_id.clone())
            .await
        {
            Ok(joined) => {
                let event = ServerEvent::RoomJoined {
                    room_id: room_id.as_str().to_string(),
                    connection_id: connection_id.as_str().to_string(),
                    session_id: session_id.as_str().to_string(),
                    role: joined.role,
                    host_connection_id: joined.host_connection_id.map(|id| id.into_string()),
                };
                self.unicast(connection_id, &event).await;

                let notice = ServerEvent::NewParticipant {
                    connection_id: connection_id.as_str().to_string(),
                    session_id: session_id.into_string(),
                    role: joined.role,
                };
                self.broadcast_room(&room_id, &notice, Some(connection_id.clone()))
                    .await;
            }
            Err(e) => {
                tracing::info!("Join rejected for '{}': {}", connection_id, e);
                self.send_error(connection_id, ROOM_NOT_FOUND_MESSAGE).await;
            }
        }
    }

    async fn leave_room(&self, connection_id: &ConnectionId, room_id: RoomId) {
        self.state
            .leave_room_usecase
            .execute(&room_id, connection_id)
            .await;

        let event = ServerEvent::RoomLeft {
            room_id: room_id.as_str().to_string(),
            connection_id: connection_id.as_str().to_string(),
        };
        self.unicast(connection_id, &event).await;

        let notice = ServerEvent::ParticipantLeft {
            connection_id: connection_id.as_str().to_string(),
        };
        self.broadcast_room(&room_id, &notice, Some(connection_id.clone()))
            .await;
    }

    async fn send_gesture(
        &self,
        connection_id: &ConnectionId,
        room_id: RoomId,
        gesture: String,
        data: serde_json::Value,
    ) {
        let event = ServerEvent::GestureSent {
            connection_id: connection_id.as_str().to_string(),
            gesture,
            data,
        };
        let Some(json) = Self::encode(&event) else {
            return;
        };
        if let Err(e) = self
            .state
            .send_gesture_usecase
            .execute(&room_id, connection_id.clone(), &json)
            .await
        {
            tracing::warn!("Failed to relay gesture in room {}: {}", room_id, e);
        }
    }

    async fn close_room(&self, connection_id: &ConnectionId, room_id: RoomId) {
        let event = ServerEvent::RoomClosed {
            room_id: room_id.as_str().to_string(),
        };
        let Some(json) = Self::encode(&event) else {
            return;
        };

        match self
            .state
            .close_room_usecase
            .execute(&room_id, connection_id, &json)
            .await
        {
            Ok(_) => {}
            Err(CloseRoomError::NotHost(_)) => {
                self.send_error(connection_id, NOT_HOST_MESSAGE).await;
            }
            Err(CloseRoomError::RoomNotFound(_)) => {
                self.send_error(connection_id, ROOM_NOT_FOUND_MESSAGE).await;
            }
        }
    }

    async fn send_error(&self, connection_id: &ConnectionId, message: &str) {
        let event = ServerEvent::Error {
            message: message.to_string(),
        };
        self.unicast(connection_id, &event).await;
    }

    // ========================================
    // 送信ヘルパー
    // ========================================

    fn encode(event: &ServerEvent) -> Option<String> {
        match event.to_json() {
            Ok(json) => Some(json),
            Err(e) => {
                tracing::error!("Failed to encode '{}': {}", event.name(), e);
                None
            }
        }
    }

    async fn unicast(&self, connection_id: &ConnectionId, event: &ServerEvent) {
        let Some(json) = Self::encode(event) else {
            return;
        };
        if let Err(e) = self.state.message_pusher.push_to(connection_id, &json).await {
            tracing::warn!("Failed to send '{}' to '{}': {}", event.name(), connection_id, e);
        }
    }

    async fn broadcast_room(
        &self,
        room_id: &RoomId,
        event: &ServerEvent,
        exclude: Option<ConnectionId>,
    ) {
        let Some(json) = Self::encode(event) else {
            return;
        };
        if let Err(e) = self
            .state
            .message_pusher
            .broadcast_to_group(room_id, &json, exclude)
            .await
        {
            tracing::warn!("Failed to broadcast '{}' to room {}: {}", event.name(), room_id, e);
        }
    }

    async fn broadcast_all(&self, event: &ServerEvent) {
        let Some(json) = Self::encode(event) else {
            return;
        };
        if let Err(e) = self.state.message_pusher.broadcast_all(&json).await {
            tracing::warn!("Failed to broadcast '{}': {}", event.name(), e);
        }
    }
}
