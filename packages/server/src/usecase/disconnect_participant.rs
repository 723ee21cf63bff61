//! UseCase: 参加者切断処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - DisconnectParticipantUseCase::execute() メソッド
//!
//! ### なぜこのテストが必要か
//! - 切断してもプロファイルとルームは残る（再接続のため）
//! - 切断した接続は MessagePusher から登録解除される
//!
//! ### どのような状況を想定しているか
//! - 正常系：唯一の参加者の切断（ルームは残る）
//! - エッジケース：どのルームにも属していない接続の切断

use std::sync::Arc;

use crate::domain::{ConnectionId, DisconnectedSession, MessagePusher, RoomRepository};

/// 参加者切断のユースケース
pub struct DisconnectParticipantUseCase {
    /// Repository（ルーム・セッションコーディネーター）
    repository: Arc<dyn RoomRepository>,
    /// MessagePusher（メッセージ通知の抽象化）
    message_pusher: Arc<dyn MessagePusher>,
}

impl DisconnectParticipantUseCase {
    /// 新しい DisconnectParticipantUseCase を作成
    pub fn new(
        repository: Arc<dyn RoomRepository>,
        message_pusher: Arc<dyn MessagePusher>,
    ) -> Self {
        Self {
            repository,
            message_pusher,
        }
    }

    /// 参加者切断を実行
    ///
    /// # Arguments
    ///
    /// * `connection_id` - 切断した接続の ID（Domain Model）
    ///
    /// # Returns
    ///
    /// 切断を記録したセッションの一覧（ルームごとの通知に使う）
    pub async fn execute(&self, connection_id: &ConnectionId) -> Vec<DisconnectedSession> {
        // 1. コーディネーターに切断を記録
        let affected = self.repository.handle_disconnection(connection_id).await;

        // 2. MessagePusher から登録解除（全グループからも外れる）
        self.message_pusher.unregister_client(connection_id).await;

        affected
    }
}
