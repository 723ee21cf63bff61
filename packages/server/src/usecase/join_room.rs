//! UseCase: ルーム参加処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - JoinRoomUseCase::execute() メソッド
//!
//! ### なぜこのテストが必要か
//! - 存在しないルームへの参加はエラーになる必要がある
//! - 同じセッションで参加し直してもプロファイルが重複してはならない
//! - 古い接続はトランスポートグループから外す必要がある
//! - 参加の途中でルームが閉じられたら、グループに接続を残してはならない
//!
//! ### どのような状況を想定しているか
//! - 正常系：新規セッションが GUEST として参加
//! - 正常系：既存セッションの再参加（ロールを維持）
//! - 異常系：存在しないルーム
//! - 異常系：グループ参加の直前にルームがクローズされた

use std::sync::Arc;

use crate::domain::{ConnectionId, MessagePusher, Role, RoomId, RoomRepository, SessionId};

use super::error::JoinRoomError;

/// ルーム参加の結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JoinedRoom {
    pub role: Role,
    /// 既存セッションの再開だったかどうか
    pub resumed: bool,
    /// HOST の現在の接続 ID（HOST が退出済みなら None）
    pub host_connection_id: Option<ConnectionId>,
}

/// ルーム参加のユースケース
pub struct JoinRoomUseCase {
    /// Repository（ルーム・セッションコーディネーター）
    repository: Arc<dyn RoomRepository>,
    /// MessagePusher（メッセージ通知の抽象化）
    message_pusher: Arc<dyn MessagePusher>,
}

impl JoinRoomUseCase {
    /// 新しい JoinRoomUseCase を作成
    pub fn new(
        repository: Arc<dyn RoomRepository>,
        message_pusher: Arc<dyn MessagePusher>,
    ) -> Self {
        Self {
            repository,
            message_pusher,
        }
    }

    /// ルーム参加を実行
    ///
    /// # Arguments
    ///
    /// * `room_id` - 参加するルーム
    /// * `connection_id` - 参加する接続
    /// * `session_id` - クライアントのセッション ID
    ///
    /// # Returns
    ///
    /// * `Ok(JoinedRoom)` - 参加成功
    /// * `Err(JoinRoomError::RoomNotFound)` - ルームが存在しない
    pub async fn execute(
        &self,
        room_id: RoomId,
        connection_id: ConnectionId,
        session_id: SessionId,
    ) -> Result<JoinedRoom, JoinRoomError> {
        // 1. コーディネーターに参加を記録（ルームの存在判定もここで行う）
        let outcome = self
            .repository
            .join_room(&room_id, connection_id.clone(), session_id)
            .await
            .map_err(|_| JoinRoomError::RoomNotFound(room_id.as_str().to_string()))?;

        // 2. トランスポートグループを更新
        if let Some(superseded) = &outcome.superseded_connection {
            self.message_pusher.leave_group(&room_id, superseded).await;
        }
        self.message_pusher
            .join_group(&room_id, &connection_id)
            .await;

        // 3. グループ参加までの間にルームが閉じられていたら取り消す
        if self.repository.get_room_info(&room_id).await.is_none() {
            tracing::info!(
                "Room {} was closed while connection {} was joining",
                room_id,
                connection_id
            );
            self.message_pusher
                .leave_group(&room_id, &connection_id)
                .await;
            return Err(JoinRoomError::RoomNotFound(room_id.as_str().to_string()));
        }

        // 4. HOST の接続 ID を解決
        let host_connection_id = self.repository.get_room_host(&room_id).await;

        Ok(JoinedRoom {
            role: outcome.role,
            resumed: outcome.resumed,
            host_connection_id,
        })
    }
}
