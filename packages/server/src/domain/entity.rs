//! Entities of the room domain: rooms and the participant profiles inside them.

use super::{ConnectionId, Role, RoomId, SessionId, Timestamp};

/// One logical participant of a room.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParticipantProfile {
    /// Current transport connection; replaced on reconnect
    pub connection_id: ConnectionId,
    /// Client-supplied durable identity
    pub session_id: SessionId,
    pub role: Role,
    pub joined_at: Timestamp,
    /// Most recent disconnect, `None` while connected
    pub disconnected_at: Option<Timestamp>,
    pub is_connected: bool,
}

impl ParticipantProfile {
    pub fn new(
        connection_id: ConnectionId,
        session_id: SessionId,
        role: Role,
        joined_at: Timestamp,
    ) -> Self {
        Self {
            connection_id,
            session_id,
            role,
            joined_at,
            disconnected_at: None,
            is_connected: true,
        }
    }

    pub fn mark_disconnected(&mut self, at: Timestamp) {
        self.is_connected = false;
        self.disconnected_at = Some(at);
    }

    /// Attach the profile to `connection_id` and mark it connected.
    ///
    /// Role and `joined_at` are left untouched. Returns the previous
    /// connection when it was still live and differs from the new one.
    pub fn resume(&mut self, connection_id: ConnectionId) -> Option<ConnectionId> {
        let superseded = (self.is_connected && self.connection_id != connection_id)
            .then(|| self.connection_id.clone());
        self.connection_id = connection_id;
        self.is_connected = true;
        self.disconnected_at = None;
        superseded
    }
}

/// Read-only projection of a room.
///
/// `participant_count` counts live connections only, while `host_count` and
/// `guest_count` include disconnected profiles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomSnapshot {
    pub room_id: RoomId,
    pub created_at: Timestamp,
    pub participant_count: usize,
    pub connection_ids: Vec<ConnectionId>,
    pub profiles: Vec<ParticipantProfile>,
    pub host_count: usize,
    pub guest_count: usize,
}

/// A room and its participant profiles, kept in join order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    pub id: RoomId,
    pub created_at: Timestamp,
    pub profiles: Vec<ParticipantProfile>,
}

impl Room {
    pub fn new(id: RoomId, created_at: Timestamp) -> Self {
        Self {
            id,
            created_at,
            profiles: Vec::new(),
        }
    }

    pub fn find_by_session(&self, session_id: &SessionId) -> Option<&ParticipantProfile> {
        self.profiles.iter().find(|p| &p.session_id == session_id)
    }

    pub fn find_by_session_mut(
        &mut self,
        session_id: &SessionId,
    ) -> Option<&mut ParticipantProfile> {
        self.profiles.iter_mut().find(|p| &p.session_id == session_id)
    }

    pub fn find_by_connection(&self, connection_id: &ConnectionId) -> Option<&ParticipantProfile> {
        self.profiles
            .iter()
            .find(|p| &p.connection_id == connection_id)
    }

    /// Add a profile for a session that has none in this room yet.
    ///
    /// Returns `false` and leaves the room unchanged if the session already
    /// has a profile.
    pub fn add_profile(&mut self, profile: ParticipantProfile) -> bool {
        if self.find_by_session(&profile.session_id).is_some() {
            return false;
        }
        self.profiles.push(profile);
        true
    }

    /// Remove the profile bound to `connection_id`, if any.
    pub fn remove_by_connection(
        &mut self,
        connection_id: &ConnectionId,
    ) -> Option<ParticipantProfile> {
        let index = self
            .profiles
            .iter()
            .position(|p| &p.connection_id == connection_id)?;
        Some(self.profiles.remove(index))
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    pub fn host(&self) -> Option<&ParticipantProfile> {
        self.profiles.iter().find(|p| p.role == Role::Host)
    }

    pub fn count_role(&self, role: Role) -> usize {
        self.profiles.iter().filter(|p| p.role == role).count()
    }

    /// Connection IDs of live members.
    pub fn connected_ids(&self) -> Vec<ConnectionId> {
        self.profiles
            .iter()
            .filter(|p| p.is_connected)
            .map(|p| p.connection_id.clone())
            .collect()
    }

    /// Connection IDs of every member, connected or not.
    pub fn member_ids(&self) -> Vec<ConnectionId> {
        self.profiles
            .iter()
            .map(|p| p.connection_id.clone())
            .collect()
    }

    pub fn snapshot(&self) -> RoomSnapshot {
        let connection_ids = self.connected_ids();
        RoomSnapshot {
            room_id: self.id.clone(),
            created_at: self.created_at,
            participant_count: connection_ids.len(),
            connection_ids,
            profiles: self.profiles.clone(),
            host_count: self.count_role(Role::Host),
            guest_count: self.count_role(Role::Guest),
        }
    }
}
