//! UseCase: ジェスチャー送信処理
//!
//! コーディネーターの状態は変更せず、ルームのグループ（送信者を除く）へ中継します。

use std::sync::Arc;

use crate::domain::{ConnectionId, MessagePusher, RoomId};

use super::error::SendGestureError;

/// ジェスチャー送信のユースケース
pub struct SendGestureUseCase {
    /// MessagePusher（メッセージ通知の抽象化）
    message_pusher: Arc<dyn MessagePusher>,
}

impl SendGestureUseCase {
    /// 新しい SendGestureUseCase を作成
    pub fn new(message_pusher: Arc<dyn MessagePusher>) -> Self {
        Self { message_pusher }
    }

    /// ジェスチャー送信を実行
    ///
    /// # Arguments
    ///
    /// * `room_id` - 送信先のルーム
    /// * `from_connection_id` - 送信者の接続 ID（ブロードキャスト対象から除外）
    /// * `json_message` - 送信する JSON メッセージ（DTO 層で生成されたもの）
    pub async fn execute(
        &self,
        room_id: &RoomId,
        from_connection_id: ConnectionId,
        json_message: &str,
    ) -> Result<(), SendGestureError> {
        self.message_pusher
            .broadcast_to_group(room_id, json_message, Some(from_connection_id))
            .await
            .map_err(|e| SendGestureError::BroadcastFailed(e.to_string()))
    }
}
