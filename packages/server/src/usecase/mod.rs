//! UseCase 層
//!
//! ルーム・セッションコーディネーター（`RoomRepository`）の呼び出しと、
//! トランスポートグループ（`MessagePusher`）の副作用をまとめます。
//! 送信するイベントの組み立ては UI 層の `EventRouter` が担当します。

pub mod close_room;
pub mod connect_participant;
pub mod create_room;
pub mod delete_room;
pub mod disconnect_participant;
pub mod error;
pub mod get_room_count;
pub mod get_room_detail;
pub mod get_rooms;
pub mod join_room;
pub mod leave_room;
pub mod reconnect_session;
pub mod reset_rooms;
pub mod send_gesture;

pub use close_room::CloseRoomUseCase;
pub use connect_participant::ConnectParticipantUseCase;
pub use create_room::CreateRoomUseCase;
pub use delete_room::DeleteRoomUseCase;
pub use disconnect_participant::DisconnectParticipantUseCase;
pub use error::{CloseRoomError, JoinRoomError, ReconnectError, SendGestureError};
pub use get_room_count::GetRoomCountUseCase;
pub use get_room_detail::GetRoomDetailUseCase;
pub use get_rooms::GetRoomsUseCase;
pub use join_room::{JoinRoomUseCase, JoinedRoom};
pub use leave_room::LeaveRoomUseCase;
pub use reconnect_session::ReconnectSessionUseCase;
pub use reset_rooms::ResetRoomsUseCase;
pub use send_gesture::SendGestureUseCase;
