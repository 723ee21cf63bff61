//! UseCase: セッション再接続処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - ReconnectSessionUseCase::execute() メソッド
//!
//! ### なぜこのテストが必要か
//! - 切断中のセッションが新しい接続で同じロールのまま再開できることを保証
//! - 接続中のセッションへの再接続は後勝ちで、古い接続をグループから外す
//!
//! ### どのような状況を想定しているか
//! - 正常系：切断後の再接続
//! - 正常系：接続中セッションの上書き
//! - 異常系：存在しないセッション

use std::sync::Arc;

use crate::domain::{ConnectionId, MessagePusher, ReconnectOutcome, RoomRepository, SessionId};

use super::error::ReconnectError;

/// セッション再接続のユースケース
pub struct ReconnectSessionUseCase {
    /// Repository（ルーム・セッションコーディネーター）
    repository: Arc<dyn RoomRepository>,
    /// MessagePusher（メッセージ通知の抽象化）
    message_pusher: Arc<dyn MessagePusher>,
}

impl ReconnectSessionUseCase {
    /// 新しい ReconnectSessionUseCase を作成
    pub fn new(
        repository: Arc<dyn RoomRepository>,
        message_pusher: Arc<dyn MessagePusher>,
    ) -> Self {
        Self {
            repository,
            message_pusher,
        }
    }

    /// セッション再接続を実行
    ///
    /// # Returns
    ///
    /// * `Ok(ReconnectOutcome)` - 再接続成功（ルーム ID とロール）
    /// * `Err(ReconnectError::SessionNotFound)` - どのルームにもセッションがない
    pub async fn execute(
        &self,
        session_id: SessionId,
        new_connection_id: ConnectionId,
    ) -> Result<ReconnectOutcome, ReconnectError> {
        let outcome = self
            .repository
            .reconnect_session(&session_id, new_connection_id.clone())
            .await
            .map_err(|_| ReconnectError::SessionNotFound(session_id.as_str().to_string()))?;

        if let Some(superseded) = &outcome.superseded_connection {
            tracing::info!(
                "Session '{}' superseded connection '{}'",
                session_id,
                superseded
            );
            self.message_pusher
                .leave_group(&outcome.room_id, superseded)
                .await;
        }
        self.message_pusher
            .join_group(&outcome.room_id, &new_connection_id)
            .await;

        Ok(outcome)
    }
}
