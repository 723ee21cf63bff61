//! UseCase: ルーム作成処理

use std::sync::Arc;

use crate::domain::{ConnectionId, MessagePusher, RoomId, RoomRepository, SessionId};

/// ルーム作成のユースケース
pub struct CreateRoomUseCase {
    /// Repository（ルーム・セッションコーディネーター）
    repository: Arc<dyn RoomRepository>,
    /// MessagePusher（メッセージ通知の抽象化）
    message_pusher: Arc<dyn MessagePusher>,
}

impl CreateRoomUseCase {
    /// 新しい CreateRoomUseCase を作成
    pub fn new(
        repository: Arc<dyn RoomRepository>,
        message_pusher: Arc<dyn MessagePusher>,
    ) -> Self {
        Self {
            repository,
            message_pusher,
        }
    }

    /// ルームを作成し、作成者を HOST として登録する
    ///
    /// 作成者の接続はルームのトランスポートグループに追加される。失敗しない。
    pub async fn execute(&self, connection_id: ConnectionId, session_id: SessionId) -> RoomId {
        let room_id = self
            .repository
            .create_room(connection_id.clone(), session_id)
            .await;
        self.message_pusher
            .join_group(&room_id, &connection_id)
            .await;
        tracing::info!("Room {} created by connection '{}'", room_id, connection_id);
        room_id
    }
}
