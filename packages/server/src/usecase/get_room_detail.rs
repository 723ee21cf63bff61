//! UseCase: ルーム詳細取得

use std::sync::Arc;

use crate::domain::{RoomId, RoomRepository, RoomSnapshot};

/// ルーム詳細取得のユースケース
pub struct GetRoomDetailUseCase {
    repository: Arc<dyn RoomRepository>,
}

impl GetRoomDetailUseCase {
    pub fn new(repository: Arc<dyn RoomRepository>) -> Self {
        Self { repository }
    }

    /// ルームが存在しなければ None
    pub async fn execute(&self, room_id: &RoomId) -> Option<RoomSnapshot> {
        self.repository.get_room_info(room_id).await
    }
}
