//! InMemory Room Repository 実装
//!
//! ドメイン層が定義する RoomRepository trait の具体的な実装。
//! `RoomRegistry` を 1 つの `Mutex` で保護し、各操作を 1 回のロック取得で
//! 完結させます。ロック中に I/O は行いません。

use std::sync::Arc;

use aizu_shared::time::{Clock, SystemClock};
use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::{
    ConnectionId, DisconnectedSession, JoinOutcome, LeaveOutcome, ReconnectOutcome, RoomError,
    RoomId, RoomRegistry, RoomRepository, RoomSnapshot, SessionId, Timestamp,
};

/// インメモリ Room Repository 実装
pub struct InMemoryRoomRepository {
    /// 全ルームの状態
    registry: Mutex<RoomRegistry>,
    /// 参加時刻・切断時刻の取得元
    clock: Arc<dyn Clock>,
}

impl InMemoryRoomRepository {
    /// システム時刻を使う InMemoryRoomRepository を作成
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    /// 任意の Clock を使う InMemoryRoomRepository を作成
    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            registry: Mutex::new(RoomRegistry::new()),
            clock,
        }
    }

    fn now(&self) -> Timestamp {
        Timestamp::new(self.clock.now_millis())
    }
}

impl Default for InMemoryRoomRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RoomRepository for InMemoryRoomRepository {
    async fn create_room(
        &self,
        host_connection_id: ConnectionId,
        session_id: SessionId,
    ) -> RoomId {
        let now = self.now();
        let mut registry = self.registry.lock().await;
        let room_id = registry.create_room(host_connection_id.clone(), session_id.clone(), now);
        tracing::debug!(
            "Room {} created with host {} (session {})",
            room_id,
            host_connection_id,
            session_id
        );
        room_id
    }

    async fn join_room(
        &self,
        room_id: &RoomId,
        connection_id: ConnectionId,
        session_id: SessionId,
    ) -> Result<JoinOutcome, RoomError> {
        let now = self.now();
        let mut registry = self.registry.lock().await;
        let outcome =
            registry.join_room(room_id, connection_id.clone(), session_id.clone(), now)?;
        tracing::debug!(
            "Connection {} (session {}) added to room {} as {}{}",
            connection_id,
            session_id,
            room_id,
            outcome.role,
            if outcome.resumed { " (resumed)" } else { "" }
        );
        Ok(outcome)
    }

    async fn leave_room(&self, room_id: &RoomId, connection_id: &ConnectionId) -> LeaveOutcome {
        let mut registry = self.registry.lock().await;
        let outcome = registry.leave_room(room_id, connection_id);
        if outcome.removed.is_some() {
            tracing::debug!("Connection {} removed from room {}", connection_id, room_id);
        }
        if outcome.room_deleted {
            tracing::debug!("Room {} is empty and was deleted", room_id);
        }
        outcome
    }

    async fn handle_disconnection(
        &self,
        connection_id: &ConnectionId,
    ) -> Vec<DisconnectedSession> {
        let now = self.now();
        let mut registry = self.registry.lock().await;
        let disconnected = registry.handle_disconnection(connection_id, now);
        for session in &disconnected {
            tracing::debug!(
                "Connection {} (session {}) disconnected from room {}",
                connection_id,
                session.session_id,
                session.room_id
            );
        }
        disconnected
    }

    async fn reconnect_session(
        &self,
        session_id: &SessionId,
        new_connection_id: ConnectionId,
    ) -> Result<ReconnectOutcome, RoomError> {
        let now = self.now();
        let mut registry = self.registry.lock().await;
        let outcome = registry.reconnect_session(session_id, new_connection_id.clone(), now)?;
        tracing::debug!(
            "Session {} reconnected with new connection {} in room {}",
            session_id,
            new_connection_id,
            outcome.room_id
        );
        Ok(outcome)
    }

    async fn delete_room(&self, room_id: &RoomId) -> Vec<ConnectionId> {
        let mut registry = self.registry.lock().await;
        let members = registry.delete_room(room_id);
        tracing::debug!("Room {} deleted ({} members)", room_id, members.len());
        members
    }

    async fn close_room(
        &self,
        room_id: &RoomId,
        connection_id: &ConnectionId,
    ) -> Result<Vec<ConnectionId>, RoomError> {
        let mut registry = self.registry.lock().await;
        let members = registry.close_room(room_id, connection_id)?;
        tracing::debug!(
            "Room {} closed by host {} ({} members)",
            room_id,
            connection_id,
            members.len()
        );
        Ok(members)
    }

    async fn get_room_info(&self, room_id: &RoomId) -> Option<RoomSnapshot> {
        let registry = self.registry.lock().await;
        registry.room_info(room_id)
    }

    async fn get_all_rooms(&self) -> Vec<RoomSnapshot> {
        let registry = self.registry.lock().await;
        registry.all_rooms()
    }

    async fn get_room_count(&self) -> usize {
        let registry = self.registry.lock().await;
        registry.room_count()
    }

    async fn is_room_host(&self, room_id: &RoomId, connection_id: &ConnectionId) -> bool {
        let registry = self.registry.lock().await;
        registry.is_room_host(room_id, connection_id)
    }

    async fn get_room_host(&self, room_id: &RoomId) -> Option<ConnectionId> {
        let registry = self.registry.lock().await;
        registry.room_host(room_id)
    }

    async fn clear(&self) -> usize {
        let mut registry = self.registry.lock().await;
        registry.clear()
    }
}
