//! UseCase: ルーム数取得

use std::sync::Arc;

use crate::domain::RoomRepository;

pub struct GetRoomCountUseCase {
    repository: Arc<dyn RoomRepository>,
}

impl GetRoomCountUseCase {
    pub fn new(repository: Arc<dyn RoomRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self) -> usize {
        self.repository.get_room_count().await
    }
}
