//! HTTP API endpoint handlers.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::{
    domain::RoomId,
    infrastructure::dto::http::{DeleteRoomResponseDto, RoomCountDto, RoomSnapshotDto},
    ui::state::AppState,
};

/// Health check endpoint
pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({"status": "ok"}))
}

/// Get list of rooms
pub async fn get_rooms(State(state): State<Arc<AppState>>) -> Json<Vec<RoomSnapshotDto>> {
    let rooms = state.get_rooms_usecase.execute().await;

    // Domain Model から DTO への変換
    Json(rooms.into_iter().map(RoomSnapshotDto::from).collect())
}

/// Get number of rooms
pub async fn get_room_count(State(state): State<Arc<AppState>>) -> Json<RoomCountDto> {
    let count = state.get_room_count_usecase.execute().await;
    Json(RoomCountDto { count })
}

/// Get room detail by ID
///
/// 存在しないルーム（不正な ID を含む）は `null` を返す
pub async fn get_room_detail(
    State(state): State<Arc<AppState>>,
    Path(room_id): Path<String>,
) -> Json<Option<RoomSnapshotDto>> {
    let Ok(room_id) = RoomId::new(room_id) else {
        return Json(None);
    };
    let room = state.get_room_detail_usecase.execute(&room_id).await;
    Json(room.map(RoomSnapshotDto::from))
}

/// Delete a room and force-disconnect its members
pub async fn delete_room(
    State(state): State<Arc<AppState>>,
    Path(room_id): Path<String>,
) -> Result<Json<DeleteRoomResponseDto>, StatusCode> {
    let room_id = match RoomId::new(room_id) {
        Ok(id) => id,
        Err(e) => {
            tracing::warn!("Invalid room id: {}", e);
            return Err(StatusCode::BAD_REQUEST);
        }
    };

    let evicted = state.delete_room_usecase.execute(&room_id).await;
    Ok(Json(DeleteRoomResponseDto {
        room_id: room_id.into_string(),
        evicted: evicted.len(),
    }))
}
