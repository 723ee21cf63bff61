//! HTTP API response DTOs.
//!
//! Timestamps are rendered as RFC 3339 strings (UTC).

use serde::{Deserialize, Serialize};

/// 参加者プロファイル
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileDto {
    pub connection_id: String,
    pub session_id: String,
    /// "HOST" または "GUEST"
    pub role: String,
    pub joined_at: String,
    pub disconnected_at: Option<String>,
    pub is_connected: bool,
}

/// ルームのスナップショット
///
/// `participant_count` は接続中のメンバー数、`host_count` / `guest_count` は
/// 切断中のメンバーも含めたプロファイル数。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomSnapshotDto {
    pub room_id: String,
    pub participant_count: usize,
    pub connection_ids: Vec<String>,
    pub profiles: Vec<ProfileDto>,
    pub host_count: usize,
    pub guest_count: usize,
    pub created_at: String,
}

/// `GET /api/rooms/count`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomCountDto {
    pub count: usize,
}

/// `DELETE /api/rooms/{room_id}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteRoomResponseDto {
    pub room_id: String,
    /// 強制切断した接続数
    pub evicted: usize,
}
