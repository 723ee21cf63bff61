//! UseCase: 起動時のルーム初期化
//!
//! 全トランスポートグループを強制的に解散し、コーディネーターの状態を破棄します。

use std::sync::Arc;

use crate::domain::{MessagePusher, RoomRepository};

/// ルーム初期化のユースケース
pub struct ResetRoomsUseCase {
    /// Repository（ルーム・セッションコーディネーター）
    repository: Arc<dyn RoomRepository>,
    /// MessagePusher（メッセージ通知の抽象化）
    message_pusher: Arc<dyn MessagePusher>,
}

impl ResetRoomsUseCase {
    /// 新しい ResetRoomsUseCase を作成
    pub fn new(
        repository: Arc<dyn RoomRepository>,
        message_pusher: Arc<dyn MessagePusher>,
    ) -> Self {
        Self {
            repository,
            message_pusher,
        }
    }

    /// 初期化を実行し、破棄したルーム数を返す
    pub async fn execute(&self) -> usize {
        let groups = self.message_pusher.clear_groups().await;
        tracing::debug!("Cleared {} transport groups", groups);
        self.repository.clear().await
    }
}
