//! Conversion logic from domain entities to DTOs.

use aizu_shared::time::timestamp_to_rfc3339;

use crate::domain::{ParticipantProfile, RoomSnapshot};
use crate::infrastructure::dto::http::{ProfileDto, RoomSnapshotDto};

// ========================================
// Domain Entity → DTO
// ========================================

impl From<&ParticipantProfile> for ProfileDto {
    fn from(model: &ParticipantProfile) -> Self {
        Self {
            connection_id: model.connection_id.as_str().to_string(),
            session_id: model.session_id.as_str().to_string(),
            role: model.role.as_str().to_string(),
            joined_at: timestamp_to_rfc3339(model.joined_at.value()),
            disconnected_at: model
                .disconnected_at
                .map(|at| timestamp_to_rfc3339(at.value())),
            is_connected: model.is_connected,
        }
    }
}

impl From<RoomSnapshot> for RoomSnapshotDto {
    fn from(model: RoomSnapshot) -> Self {
        Self {
            room_id: model.room_id.into_string(),
            participant_count: model.participant_count,
            connection_ids: model
                .connection_ids
                .into_iter()
                .map(|id| id.into_string())
                .collect(),
            profiles: model.profiles.iter().map(ProfileDto::from).collect(),
            host_count: model.host_count,
            guest_count: model.guest_count,
            created_at: timestamp_to_rfc3339(model.created_at.value()),
        }
    }
}
