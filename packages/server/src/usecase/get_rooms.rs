//! UseCase: ルーム一覧取得

use std::sync::Arc;

use crate::domain::{RoomRepository, RoomSnapshot};

/// ルーム一覧取得のユースケース
pub struct GetRoomsUseCase {
    repository: Arc<dyn RoomRepository>,
}

impl GetRoomsUseCase {
    pub fn new(repository: Arc<dyn RoomRepository>) -> Self {
        Self { repository }
    }

    /// 全ルームのスナップショットを作成順で返す
    pub async fn execute(&self) -> Vec<RoomSnapshot> {
        self.repository.get_all_rooms().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::{ConnectionId, SessionId},
        infrastructure::repository::InMemoryRoomRepository,
    };
    use aizu_shared::time::SteppingClock;

    #[tokio::test]
    async fn test_get_rooms_in_creation_order() {
        // テスト項目: ルーム一覧は作成順に並ぶ
        // given (前提条件):
        let repository = Arc::new(InMemoryRoomRepository::with_clock(Arc::new(
            SteppingClock::new(1_000, 10),
        )));
        let mut created = Vec::new();
        for i in 0..3 {
            let room_id = repository
                .create_room(
                    ConnectionId::new(format!("c{}", i)).unwrap(),
                    SessionId::new(format!("s{}", i)).unwrap(),
                )
                .await;
            created.push(room_id);
        }
        let usecase = GetRoomsUseCase::new(repository);

        // when (操作):
        let rooms = usecase.execute().await;

        // then (期待する結果):
        let ids: Vec<_> = rooms.into_iter().map(|room| room.room_id).collect();
        assert_eq!(ids, created);
    }
}
