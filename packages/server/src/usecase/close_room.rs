//! UseCase: HOST によるルームのクローズ
//!
//! HOST だけがルームを閉じられます。HOST 判定とルーム削除はコーディネーター内で
//! 1 回の状態遷移として行い、その後グループ全体（HOST 自身を含む）へ通知して
//! グループを解散します。

use std::sync::Arc;

use crate::domain::{ConnectionId, MessagePusher, RoomError, RoomId, RoomRepository};

use super::error::CloseRoomError;

/// ルームクローズのユースケース
pub struct CloseRoomUseCase {
    /// Repository（ルーム・セッションコーディネーター）
    repository: Arc<dyn RoomRepository>,
    /// MessagePusher（メッセージ通知の抽象化）
    message_pusher: Arc<dyn MessagePusher>,
}

impl CloseRoomUseCase {
    /// 新しい CloseRoomUseCase を作成
    pub fn new(
        repository: Arc<dyn RoomRepository>,
        message_pusher: Arc<dyn MessagePusher>,
    ) -> Self {
        Self {
            repository,
            message_pusher,
        }
    }

    /// ルームクローズを実行
    ///
    /// # Arguments
    ///
    /// * `room_id` - 閉じるルーム
    /// * `connection_id` - 要求した接続（HOST である必要がある）
    /// * `json_message` - グループに通知する JSON メッセージ
    ///
    /// # Returns
    ///
    /// * `Ok(Vec<ConnectionId>)` - 削除したルームのメンバーの接続 ID
    /// * `Err(CloseRoomError)` - ルームが存在しない、または HOST ではない
    pub async fn execute(
        &self,
        room_id: &RoomId,
        connection_id: &ConnectionId,
        json_message: &str,
    ) -> Result<Vec<ConnectionId>, CloseRoomError> {
        let members = self
            .repository
            .close_room(room_id, connection_id)
            .await
            .map_err(|e| match e {
                RoomError::NotHost(connection_id) => {
                    CloseRoomError::NotHost(connection_id.as_str().to_string())
                }
                _ => CloseRoomError::RoomNotFound(room_id.as_str().to_string()),
            })?;

        // グループは dissolve_group まで残っている
        if let Err(e) = self
            .message_pusher
            .broadcast_to_group(room_id, json_message, None)
            .await
        {
            tracing::warn!("Failed to notify room {} of closing: {}", room_id, e);
        }

        self.message_pusher.dissolve_group(room_id).await;
        tracing::info!(
            "Room {} closed by host '{}' ({} members)",
            room_id,
            connection_id,
            members.len()
        );

        Ok(members)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::{MockMessagePusher, MockRoomRepository, SessionId},
        infrastructure::repository::InMemoryRoomRepository,
    };

    fn conn(id: &str) -> ConnectionId {
        ConnectionId::new(id.to_string()).unwrap()
    }

    fn session(id: &str) -> SessionId {
        SessionId::new(id.to_string()).unwrap()
    }

    #[tokio::test]
    async fn test_close_room_by_host() {
        // テスト項目: HOST はルームを閉じられ、グループ全体に通知される
        // given (前提条件):
        let repository = Arc::new(InMemoryRoomRepository::new());
        let room_id = repository.create_room(conn("c1"), session("s1")).await;
        repository
            .join_room(&room_id, conn("c2"), session("s2"))
            .await
            .unwrap();

        let mut message_pusher = MockMessagePusher::new();
        message_pusher
            .expect_broadcast_to_group()
            .withf(|_, _, exclude| exclude.is_none())
            .times(1)
            .returning(|_, _, _| Ok(()));
        message_pusher
            .expect_dissolve_group()
            .times(1)
            .returning(|_| Vec::new());
        let usecase = CloseRoomUseCase::new(repository.clone(), Arc::new(message_pusher));

        // when (操作):
        let result = usecase.execute(&room_id, &conn("c1"), "{}").await;

        // then (期待する結果):
        assert_eq!(result, Ok(vec![conn("c1"), conn("c2")]));
        assert_eq!(repository.get_room_count().await, 0);
    }

    #[tokio::test]
    async fn test_close_room_by_guest_is_rejected() {
        // テスト項目: GUEST はルームを閉じられず、ルームは残る
        // given (前提条件):
        let repository = Arc::new(InMemoryRoomRepository::new());
        let room_id = repository.create_room(conn("c1"), session("s1")).await;
        repository
            .join_room(&room_id, conn("c2"), session("s2"))
            .await
            .unwrap();
        let usecase = CloseRoomUseCase::new(repository.clone(), Arc::new(MockMessagePusher::new()));

        // when (操作):
        let result = usecase.execute(&room_id, &conn("c2"), "{}").await;

        // then (期待する結果):
        assert_eq!(result, Err(CloseRoomError::NotHost("c2".to_string())));
        assert_eq!(repository.get_room_count().await, 1);
    }

    #[tokio::test]
    async fn test_close_missing_room() {
        // テスト項目: 存在しないルームを閉じようとするとエラーになる
        // given (前提条件):
        let repository = Arc::new(InMemoryRoomRepository::new());
        let usecase = CloseRoomUseCase::new(repository, Arc::new(MockMessagePusher::new()));

        // when (操作):
        let result = usecase
            .execute(&RoomId::new("gone".to_string()).unwrap(), &conn("c1"), "{}")
            .await;

        // then (期待する結果):
        assert_eq!(result, Err(CloseRoomError::RoomNotFound("gone".to_string())));
    }

    #[tokio::test]
    async fn test_close_room_checks_host_and_deletes_in_one_call() {
        // テスト項目: HOST 判定と削除はコーディネーターへの 1 回の呼び出しで行われる
        // given (前提条件):
        let mut repository = MockRoomRepository::new();
        repository
            .expect_close_room()
            .withf(|room_id, connection_id| {
                room_id.as_str() == "r1" && connection_id.as_str() == "c1"
            })
            .times(1)
            .returning(|_, _| Ok(vec![conn("c1"), conn("c2")]));
        repository.expect_is_room_host().never();
        repository.expect_delete_room().never();
        let mut message_pusher = MockMessagePusher::new();
        message_pusher
            .expect_broadcast_to_group()
            .times(1)
            .returning(|_, _, _| Ok(()));
        message_pusher
            .expect_dissolve_group()
            .times(1)
            .returning(|_| vec![conn("c1"), conn("c2")]);
        let usecase = CloseRoomUseCase::new(Arc::new(repository), Arc::new(message_pusher));

        // when (操作):
        let result = usecase
            .execute(&RoomId::new("r1".to_string()).unwrap(), &conn("c1"), "{}")
            .await;

        // then (期待する結果):
        assert_eq!(result, Ok(vec![conn("c1"), conn("c2")]));
    }

    #[tokio::test]
    async fn test_close_room_rejected_by_coordinator_sends_nothing() {
        // テスト項目: コーディネーターが HOST でないと判定したら通知もグループ解散も行わない
        // given (前提条件):
        let mut repository = MockRoomRepository::new();
        repository
            .expect_close_room()
            .times(1)
            .returning(|_, connection_id| Err(RoomError::NotHost(connection_id.clone())));
        let mut message_pusher = MockMessagePusher::new();
        message_pusher.expect_broadcast_to_group().never();
        message_pusher.expect_dissolve_group().never();
        let usecase = CloseRoomUseCase::new(Arc::new(repository), Arc::new(message_pusher));

        // when (操作):
        let result = usecase
            .execute(&RoomId::new("r1".to_string()).unwrap(), &conn("c2"), "{}")
            .await;

        // then (期待する結果):
        assert_eq!(result, Err(CloseRoomError::NotHost("c2".to_string())));
    }
}
