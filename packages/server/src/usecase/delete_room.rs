//! UseCase: ルームの管理削除
//!
//! HTTP の管理 API から呼ばれ、ルームを無条件に削除してメンバーを強制切断します。

use std::sync::Arc;

use crate::domain::{ConnectionId, MessagePusher, RoomId, RoomRepository};

/// ルーム削除のユースケース
pub struct DeleteRoomUseCase {
    /// Repository（ルーム・セッションコーディネーター）
    repository: Arc<dyn RoomRepository>,
    /// MessagePusher（メッセージ通知の抽象化）
    message_pusher: Arc<dyn MessagePusher>,
}

impl DeleteRoomUseCase {
    /// 新しい DeleteRoomUseCase を作成
    pub fn new(
        repository: Arc<dyn RoomRepository>,
        message_pusher: Arc<dyn MessagePusher>,
    ) -> Self {
        Self {
            repository,
            message_pusher,
        }
    }

    /// ルーム削除を実行
    ///
    /// # Returns
    ///
    /// 削除したルームの全メンバーの接続 ID（ルームが存在しなければ空）
    pub async fn execute(&self, room_id: &RoomId) -> Vec<ConnectionId> {
        let members = self.repository.delete_room(room_id).await;
        self.message_pusher.dissolve_group(room_id).await;

        for connection_id in &members {
            // 切断済みのメンバーは送信チャンネルを持たない
            if let Err(e) = self.message_pusher.force_disconnect(connection_id).await {
                tracing::debug!("Skipping disconnect of '{}': {}", connection_id, e);
            }
        }
        if !members.is_empty() {
            tracing::info!("Room {} deleted, {} members evicted", room_id, members.len());
        }

        members
    }
}
