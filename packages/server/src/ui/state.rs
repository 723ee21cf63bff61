//! Server state shared by all handlers.

use std::sync::Arc;

use crate::{
    domain::{MessagePusher, RoomRepository},
    usecase::{
        CloseRoomUseCase, ConnectParticipantUseCase, CreateRoomUseCase, DeleteRoomUseCase,
        DisconnectParticipantUseCase, GetRoomCountUseCase, GetRoomDetailUseCase, GetRoomsUseCase,
        JoinRoomUseCase, LeaveRoomUseCase, ReconnectSessionUseCase, ResetRoomsUseCase,
        SendGestureUseCase,
    },
};

/// Shared application state
pub struct AppState {
    /// MessagePusher（ユニキャスト・ブロードキャスト用）
    pub message_pusher: Arc<dyn MessagePusher>,
    pub connect_participant_usecase: ConnectParticipantUseCase,
    pub disconnect_participant_usecase: DisconnectParticipantUseCase,
    pub create_room_usecase: CreateRoomUseCase,
    pub join_room_usecase: JoinRoomUseCase,
    pub leave_room_usecase: LeaveRoomUseCase,
    pub reconnect_session_usecase: ReconnectSessionUseCase,
    pub send_gesture_usecase: SendGestureUseCase,
    pub close_room_usecase: CloseRoomUseCase,
    pub delete_room_usecase: DeleteRoomUseCase,
    pub get_rooms_usecase: GetRoomsUseCase,
    pub get_room_detail_usecase: GetRoomDetailUseCase,
    pub get_room_count_usecase: GetRoomCountUseCase,
    pub reset_rooms_usecase: ResetRoomsUseCase,
}

impl AppState {
    /// Repository と MessagePusher から全 UseCase を組み立てる
    pub fn new(
        repository: Arc<dyn RoomRepository>,
        message_pusher: Arc<dyn MessagePusher>,
    ) -> Self {
        Self {
            connect_participant_usecase: ConnectParticipantUseCase::new(message_pusher.clone()),
            disconnect_participant_usecase: DisconnectParticipantUseCase::new(
                repository.clone(),
                message_pusher.clone(),
            ),
            create_room_usecase: CreateRoomUseCase::new(
                repository.clone(),
                message_pusher.clone(),
            ),
            join_room_usecase: JoinRoomUseCase::new(repository.clone(), message_pusher.clone()),
            leave_room_usecase: LeaveRoomUseCase::new(repository.clone(), message_pusher.clone()),
            reconnect_session_usecase: ReconnectSessionUseCase::new(
                repository.clone(),
                message_pusher.clone(),
            ),
            send_gesture_usecase: SendGestureUseCase::new(message_pusher.clone()),
            close_room_usecase: CloseRoomUseCase::new(repository.clone(), message_pusher.clone()),
            delete_room_usecase: DeleteRoomUseCase::new(
                repository.clone(),
                message_pusher.clone(),
            ),
            get_rooms_usecase: GetRoomsUseCase::new(repository.clone()),
            get_room_detail_usecase: GetRoomDetailUseCase::new(repository.clone()),
            get_room_count_usecase: GetRoomCountUseCase::new(repository.clone()),
            reset_rooms_usecase: ResetRoomsUseCase::new(repository, message_pusher.clone()),
            message_pusher,
        }
    }
}
