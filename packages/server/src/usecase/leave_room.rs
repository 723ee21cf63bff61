//! UseCase: ルーム退出処理

use std::sync::Arc;

use crate::domain::{ConnectionId, LeaveOutcome, MessagePusher, RoomId, RoomRepository};

/// ルーム退出のユースケース
pub struct LeaveRoomUseCase {
    /// Repository（ルーム・セッションコーディネーター）
    repository: Arc<dyn RoomRepository>,
    /// MessagePusher（メッセージ通知の抽象化）
    message_pusher: Arc<dyn MessagePusher>,
}

impl LeaveRoomUseCase {
    /// 新しい LeaveRoomUseCase を作成
    pub fn new(
        repository: Arc<dyn RoomRepository>,
        message_pusher: Arc<dyn MessagePusher>,
    ) -> Self {
        Self {
            repository,
            message_pusher,
        }
    }

    /// ルーム退出を実行
    ///
    /// 存在しないルームや未参加の接続に対しては何もしない（エラーにしない）。
    /// 最後の参加者が退出するとルームは削除される。
    pub async fn execute(&self, room_id: &RoomId, connection_id: &ConnectionId) -> LeaveOutcome {
        let outcome = self.repository.leave_room(room_id, connection_id).await;
        self.message_pusher.leave_group(room_id, connection_id).await;
        if outcome.room_deleted {
            tracing::info!("Room {} deleted (no participants left)", room_id);
        }
        outcome
    }
}
