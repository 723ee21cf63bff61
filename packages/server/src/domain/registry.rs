//! Room/session coordinator state machine.
//!
//! `RoomRegistry` owns every room and performs each transition as a plain
//! `&mut self` method, so a single lock around it is enough to make every
//! operation atomic. It performs no I/O.

use std::collections::HashMap;

use super::{
    ConnectionId, ParticipantProfile, Role, Room, RoomError, RoomId, RoomIdFactory, RoomSnapshot,
    SessionId, Timestamp,
};

/// Result of a successful join.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JoinOutcome {
    pub role: Role,
    /// `true` when the session already had a profile in the room
    pub resumed: bool,
    /// Live connection replaced by this join, if any
    pub superseded_connection: Option<ConnectionId>,
}

/// Result of a leave.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaveOutcome {
    pub removed: Option<ParticipantProfile>,
    pub room_deleted: bool,
}

/// A profile that was marked disconnected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisconnectedSession {
    pub room_id: RoomId,
    pub session_id: SessionId,
    pub role: Role,
    pub disconnected_at: Timestamp,
}

/// Result of a successful reconnect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReconnectOutcome {
    pub room_id: RoomId,
    pub role: Role,
    /// Live connection replaced by this reconnect (last write wins)
    pub superseded_connection: Option<ConnectionId>,
    pub reconnected_at: Timestamp,
}

#[derive(Debug, Default)]
pub struct RoomRegistry {
    rooms: HashMap<RoomId, Room>,
}

impl RoomRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a room with `session_id` as its host.
    pub fn create_room(
        &mut self,
        host_connection_id: ConnectionId,
        session_id: SessionId,
        now: Timestamp,
    ) -> RoomId {
        let mut room_id = RoomIdFactory::generate();
        while self.rooms.contains_key(&room_id) {
            room_id = RoomIdFactory::generate();
        }

        let mut room = Room::new(room_id.clone(), now);
        room.add_profile(ParticipantProfile::new(
            host_connection_id,
            session_id,
            Role::Host,
            now,
        ));
        self.rooms.insert(room_id.clone(), room);
        room_id
    }

    /// Join an existing room.
    ///
    /// New sessions become guests. A session that already has a profile in
    /// the room is resumed on the new connection and keeps its role.
    pub fn join_room(
        &mut self,
        room_id: &RoomId,
        connection_id: ConnectionId,
        session_id: SessionId,
        now: Timestamp,
    ) -> Result<JoinOutcome, RoomError> {
        let room = self
            .rooms
            .get_mut(room_id)
            .ok_or_else(|| RoomError::RoomNotFound(room_id.clone()))?;

        if let Some(profile) = room.find_by_session_mut(&session_id) {
            let superseded_connection = profile.resume(connection_id);
            return Ok(JoinOutcome {
                role: profile.role,
                resumed: true,
                superseded_connection,
            });
        }

        room.add_profile(ParticipantProfile::new(
            connection_id,
            session_id,
            Role::Guest,
            now,
        ));
        Ok(JoinOutcome {
            role: Role::Guest,
            resumed: false,
            superseded_connection: None,
        })
    }

    /// Remove the profile bound to `connection_id`; delete the room once empty.
    pub fn leave_room(&mut self, room_id: &RoomId, connection_id: &ConnectionId) -> LeaveOutcome {
        let Some(room) = self.rooms.get_mut(room_id) else {
            return LeaveOutcome {
                removed: None,
                room_deleted: false,
            };
        };

        let removed = room.remove_by_connection(connection_id);
        let room_deleted = room.is_empty();
        if room_deleted {
            self.rooms.remove(room_id);
        }

        LeaveOutcome {
            removed,
            room_deleted,
        }
    }

    /// Mark every live profile bound to `connection_id` as disconnected.
    ///
    /// Profiles and rooms are kept so the session can reconnect later.
    pub fn handle_disconnection(
        &mut self,
        connection_id: &ConnectionId,
        now: Timestamp,
    ) -> Vec<DisconnectedSession> {
        let mut room_ids = self.room_ids_in_creation_order();
        let mut disconnected = Vec::new();

        for room_id in room_ids.drain(..) {
            let Some(room) = self.rooms.get_mut(&room_id) else {
                continue;
            };
            for profile in room
                .profiles
                .iter_mut()
                .filter(|p| p.is_connected && &p.connection_id == connection_id)
            {
                profile.mark_disconnected(now);
                disconnected.push(DisconnectedSession {
                    room_id: room_id.clone(),
                    session_id: profile.session_id.clone(),
                    role: profile.role,
                    disconnected_at: now,
                });
            }
        }

        disconnected
    }

    /// Resume `session_id` on `new_connection_id`.
    ///
    /// Rooms are searched in creation order and the first match wins.
    /// Reconnecting a session that is still connected is allowed; the
    /// previous connection is reported as superseded.
    pub fn reconnect_session(
        &mut self,
        session_id: &SessionId,
        new_connection_id: ConnectionId,
        now: Timestamp,
    ) -> Result<ReconnectOutcome, RoomError> {
        let room_id = self
            .room_ids_in_creation_order()
            .into_iter()
            .find(|id| {
                self.rooms
                    .get(id)
                    .is_some_and(|room| room.find_by_session(session_id).is_some())
            })
            .ok_or_else(|| RoomError::SessionNotFound(session_id.clone()))?;

        let profile = self
            .rooms
            .get_mut(&room_id)
            .and_then(|room| room.find_by_session_mut(session_id))
            .ok_or_else(|| RoomError::SessionNotFound(session_id.clone()))?;

        let superseded_connection = profile.resume(new_connection_id);
        Ok(ReconnectOutcome {
            room_id,
            role: profile.role,
            superseded_connection,
            reconnected_at: now,
        })
    }

    /// Remove the room unconditionally and return every member's connection.
    pub fn delete_room(&mut self, room_id: &RoomId) -> Vec<ConnectionId> {
        self.rooms
            .remove(room_id)
            .map(|room| room.member_ids())
            .unwrap_or_default()
    }

    /// Delete the room on behalf of its host.
    ///
    /// The host check and the removal happen in one transition, so no join
    /// can slip in between them.
    pub fn close_room(
        &mut self,
        room_id: &RoomId,
        connection_id: &ConnectionId,
    ) -> Result<Vec<ConnectionId>, RoomError> {
        if !self.rooms.contains_key(room_id) {
            return Err(RoomError::RoomNotFound(room_id.clone()));
        }
        if !self.is_room_host(room_id, connection_id) {
            return Err(RoomError::NotHost(connection_id.clone()));
        }
        Ok(self.delete_room(room_id))
    }

    pub fn room_info(&self, room_id: &RoomId) -> Option<RoomSnapshot> {
        self.rooms.get(room_id).map(Room::snapshot)
    }

    /// Snapshots of every room, oldest first.
    pub fn all_rooms(&self) -> Vec<RoomSnapshot> {
        self.room_ids_in_creation_order()
            .iter()
            .filter_map(|id| self.rooms.get(id))
            .map(Room::snapshot)
            .collect()
    }

    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_room_host(&self, room_id: &RoomId, connection_id: &ConnectionId) -> bool {
        self.rooms
            .get(room_id)
            .and_then(|room| room.find_by_connection(connection_id))
            .is_some_and(|profile| profile.role == Role::Host)
    }

    pub fn room_host(&self, room_id: &RoomId) -> Option<ConnectionId> {
        self.rooms
            .get(room_id)
            .and_then(Room::host)
            .map(|profile| profile.connection_id.clone())
    }

    /// Drop every room, returning how many were cleared.
    pub fn clear(&mut self) -> usize {
        let count = self.rooms.len();
        self.rooms.clear();
        count
    }

    fn room_ids_in_creation_order(&self) -> Vec<RoomId> {
        let mut rooms: Vec<&Room> = self.rooms.values().collect();
        rooms.sort_by(|a, b| a.created_at.cmp(&b.created_at).then_with(|| a.id.cmp(&b.id)));
        rooms.into_iter().map(|room| room.id.clone()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ========================================
    // テスト作業記録
    // ========================================
    // 【何をテストするか】
    // - RoomRegistry の各状態遷移（作成・参加・退出・切断・再接続・削除）
    // - participant_count と host/guest 数の非対称性
    //
    // 【なぜこのテストが必要か】
    // - ルーム・セッション管理の中核であり、役割の保持と再接続の整合性を保証する必要がある
    //
    // 【どのようなシナリオをテストするか】
    // 1. 作成 → 参加 → 切断 → 再接続 → 退出のシナリオ
    // 2. 存在しないルームへの参加
    // 3. 同一セッションの再参加・再接続で重複が生じないこと
    // 4. ホストの切断・ゲストの入れ替わりでも host_count が 1 のまま
    // ========================================

    fn conn(id: &str) -> ConnectionId {
        ConnectionId::new(id.to_string()).unwrap()
    }

    fn session(id: &str) -> SessionId {
        SessionId::new(id.to_string()).unwrap()
    }

    fn at(millis: i64) -> Timestamp {
        Timestamp::new(millis)
    }

    fn counts(registry: &RoomRegistry, room_id: &RoomId) -> (usize, usize, usize) {
        let info = registry.room_info(room_id).unwrap();
        (info.participant_count, info.host_count, info.guest_count)
    }

    #[test]
    fn test_create_room_assigns_host() {
        // テスト項目: ルーム作成者が HOST として登録される
        // given (前提条件):
        let mut registry = RoomRegistry::new();

        // when (操作):
        let room_id = registry.create_room(conn("c1"), session("s1"), at(100));

        // then (期待する結果):
        assert_eq!(counts(&registry, &room_id), (1, 1, 0));
        assert!(registry.is_room_host(&room_id, &conn("c1")));
        assert_eq!(registry.room_host(&room_id), Some(conn("c1")));
        assert_eq!(registry.room_count(), 1);
    }

    #[test]
    fn test_create_room_generates_distinct_ids() {
        // テスト項目: 作成されるルーム ID は毎回異なる
        // given (前提条件):
        let mut registry = RoomRegistry::new();

        // when (操作):
        let first = registry.create_room(conn("c1"), session("s1"), at(100));
        let second = registry.create_room(conn("c2"), session("s2"), at(100));

        // then (期待する結果):
        assert_ne!(first, second);
        assert_eq!(registry.room_count(), 2);
    }

    #[test]
    fn test_join_existing_room_as_guest() {
        // テスト項目: 既存ルームへの参加者は GUEST になる
        // given (前提条件):
        let mut registry = RoomRegistry::new();
        let room_id = registry.create_room(conn("c1"), session("s1"), at(100));

        // when (操作):
        let outcome = registry
            .join_room(&room_id, conn("c2"), session("s2"), at(200))
            .unwrap();

        // then (期待する結果):
        assert_eq!(outcome.role, Role::Guest);
        assert!(!outcome.resumed);
        assert_eq!(counts(&registry, &room_id), (2, 1, 1));
        assert!(!registry.is_room_host(&room_id, &conn("c2")));
    }

    #[test]
    fn test_join_nonexistent_room_fails() {
        // テスト項目: 存在しないルームへの参加は RoomNotFound になる
        // given (前提条件):
        let mut registry = RoomRegistry::new();
        let missing = RoomId::new("R2".to_string()).unwrap();

        // when (操作):
        let result = registry.join_room(&missing, conn("c3"), session("s3"), at(100));

        // then (期待する結果):
        assert_eq!(result, Err(RoomError::RoomNotFound(missing)));
        assert_eq!(registry.room_count(), 0);
    }

    #[test]
    fn test_rejoin_same_session_resumes_without_duplicate() {
        // テスト項目: 同じセッションで再参加しても重複せず、元の役割を保持する
        // given (前提条件):
        let mut registry = RoomRegistry::new();
        let room_id = registry.create_room(conn("c1"), session("s1"), at(100));
        registry
            .join_room(&room_id, conn("c2"), session("s2"), at(200))
            .unwrap();
        registry.handle_disconnection(&conn("c2"), at(300));

        // when (操作): HOST のセッションも含めて再参加する
        let guest = registry
            .join_room(&room_id, conn("c2b"), session("s2"), at(400))
            .unwrap();
        let host = registry
            .join_room(&room_id, conn("c1b"), session("s1"), at(500))
            .unwrap();

        // then (期待する結果):
        assert_eq!(guest.role, Role::Guest);
        assert!(guest.resumed);
        assert_eq!(guest.superseded_connection, None);
        assert_eq!(host.role, Role::Host);
        assert_eq!(host.superseded_connection, Some(conn("c1")));

        let info = registry.room_info(&room_id).unwrap();
        assert_eq!(info.profiles.len(), 2);
        assert_eq!((info.host_count, info.guest_count), (1, 1));
        assert_eq!(info.profiles[1].joined_at, at(200));
    }

    #[test]
    fn test_disconnect_keeps_profile_and_room() {
        // テスト項目: 切断はプロファイルを残し、participant_count のみ減る
        // given (前提条件):
        let mut registry = RoomRegistry::new();
        let room_id = registry.create_room(conn("c1"), session("s1"), at(100));
        registry
            .join_room(&room_id, conn("c2"), session("s2"), at(200))
            .unwrap();

        // when (操作):
        let disconnected = registry.handle_disconnection(&conn("c2"), at(300));

        // then (期待する結果):
        assert_eq!(
            disconnected,
            vec![DisconnectedSession {
                room_id: room_id.clone(),
                session_id: session("s2"),
                role: Role::Guest,
                disconnected_at: at(300),
            }]
        );
        assert_eq!(counts(&registry, &room_id), (1, 1, 1));
        let info = registry.room_info(&room_id).unwrap();
        assert!(!info.profiles[1].is_connected);
        assert_eq!(info.profiles[1].disconnected_at, Some(at(300)));
    }

    #[test]
    fn test_disconnect_of_sole_member_keeps_room() {
        // テスト項目: 唯一のメンバーが切断してもルームは削除されない
        // given (前提条件):
        let mut registry = RoomRegistry::new();
        let room_id = registry.create_room(conn("c1"), session("s1"), at(100));

        // when (操作):
        registry.handle_disconnection(&conn("c1"), at(200));

        // then (期待する結果):
        assert_eq!(registry.room_count(), 1);
        assert_eq!(counts(&registry, &room_id), (0, 1, 0));
    }

    #[test]
    fn test_disconnect_twice_reports_once() {
        // テスト項目: 既に切断済みのプロファイルは再度報告されない
        // given (前提条件):
        let mut registry = RoomRegistry::new();
        registry.create_room(conn("c1"), session("s1"), at(100));
        registry.handle_disconnection(&conn("c1"), at(200));

        // when (操作):
        let second = registry.handle_disconnection(&conn("c1"), at(300));

        // then (期待する結果):
        assert!(second.is_empty());
    }

    #[test]
    fn test_disconnect_spans_every_room_of_connection() {
        // テスト項目: 同一接続が複数ルームにいる場合、全ルームで切断として扱われる
        // given (前提条件):
        let mut registry = RoomRegistry::new();
        let first = registry.create_room(conn("c1"), session("s1"), at(100));
        let second = registry.create_room(conn("c2"), session("s2"), at(200));
        registry
            .join_room(&second, conn("c1"), session("s1"), at(300))
            .unwrap();

        // when (操作):
        let disconnected = registry.handle_disconnection(&conn("c1"), at(400));

        // then (期待する結果): ルーム作成順に並ぶ
        let rooms: Vec<RoomId> = disconnected.into_iter().map(|d| d.room_id).collect();
        assert_eq!(rooms, vec![first, second]);
    }

    #[test]
    fn test_disconnect_then_reconnect_restores_profile() {
        // テスト項目: 切断後の再接続で接続状態・役割・新しい connection_id が反映される
        // given (前提条件):
        let mut registry = RoomRegistry::new();
        let room_id = registry.create_room(conn("c1"), session("s1"), at(100));
        registry
            .join_room(&room_id, conn("c2"), session("s2"), at(200))
            .unwrap();
        registry.handle_disconnection(&conn("c2"), at(300));

        // when (操作):
        let outcome = registry
            .reconnect_session(&session("s2"), conn("c2b"), at(400))
            .unwrap();

        // then (期待する結果):
        assert_eq!(
            outcome,
            ReconnectOutcome {
                room_id: room_id.clone(),
                role: Role::Guest,
                superseded_connection: None,
                reconnected_at: at(400),
            }
        );
        assert_eq!(counts(&registry, &room_id), (2, 1, 1));
        let info = registry.room_info(&room_id).unwrap();
        let profile = &info.profiles[1];
        assert!(profile.is_connected);
        assert_eq!(profile.disconnected_at, None);
        assert_eq!(profile.connection_id, conn("c2b"));
        assert_eq!(profile.joined_at, at(200));
    }

    #[test]
    fn test_reconnect_unknown_session_fails() {
        // テスト項目: 未知のセッションの再接続は SessionNotFound になる
        // given (前提条件):
        let mut registry = RoomRegistry::new();
        registry.create_room(conn("c1"), session("s1"), at(100));

        // when (操作):
        let result = registry.reconnect_session(&session("ghost"), conn("c9"), at(400));

        // then (期待する結果):
        assert_eq!(result, Err(RoomError::SessionNotFound(session("ghost"))));
    }

    #[test]
    fn test_reconnect_connected_session_is_last_write_wins() {
        // テスト項目: 接続中のセッションへの再接続は上書きされ、旧接続が報告される
        // given (前提条件):
        let mut registry = RoomRegistry::new();
        let room_id = registry.create_room(conn("c1"), session("s1"), at(100));

        // when (操作):
        let first = registry
            .reconnect_session(&session("s1"), conn("c1b"), at(400))
            .unwrap();
        let second = registry
            .reconnect_session(&session("s1"), conn("c1c"), at(400))
            .unwrap();

        // then (期待する結果):
        assert_eq!(first.superseded_connection, Some(conn("c1")));
        assert_eq!(second.superseded_connection, Some(conn("c1b")));
        assert_eq!(registry.room_host(&room_id), Some(conn("c1c")));
        assert_eq!(counts(&registry, &room_id), (1, 1, 0));
    }

    #[test]
    fn test_reconnect_prefers_oldest_room() {
        // テスト項目: 複数ルームに同じセッションがある場合、最も古いルームが選ばれる
        // given (前提条件):
        let mut registry = RoomRegistry::new();
        let older = registry.create_room(conn("c1"), session("shared"), at(100));
        let newer = registry.create_room(conn("c2"), session("other"), at(200));
        registry
            .join_room(&newer, conn("c3"), session("shared"), at(300))
            .unwrap();

        // when (操作):
        let outcome = registry
            .reconnect_session(&session("shared"), conn("c4"), at(400))
            .unwrap();

        // then (期待する結果):
        assert_eq!(outcome.room_id, older);
        assert_eq!(outcome.role, Role::Host);
    }

    #[test]
    fn test_leave_until_empty_deletes_room() {
        // テスト項目: 全員が退出するとルームが削除される
        // given (前提条件):
        let mut registry = RoomRegistry::new();
        let room_id = registry.create_room(conn("c1"), session("s1"), at(100));
        registry
            .join_room(&room_id, conn("c2"), session("s2"), at(200))
            .unwrap();
        registry.handle_disconnection(&conn("c2"), at(300));
        registry
            .reconnect_session(&session("s2"), conn("c2b"), at(400))
            .unwrap();

        // when (操作):
        let first = registry.leave_room(&room_id, &conn("c1"));
        let second = registry.leave_room(&room_id, &conn("c2b"));

        // then (期待する結果):
        assert!(!first.room_deleted);
        assert_eq!(first.removed.map(|p| p.role), Some(Role::Host));
        assert!(second.room_deleted);
        assert_eq!(registry.room_info(&room_id), None);
        assert_eq!(registry.room_count(), 0);
    }

    #[test]
    fn test_leave_unknown_room_or_connection_is_noop() {
        // テスト項目: 存在しないルーム・接続での退出は何も変更しない
        // given (前提条件):
        let mut registry = RoomRegistry::new();
        let room_id = registry.create_room(conn("c1"), session("s1"), at(100));
        let missing = RoomId::new("missing".to_string()).unwrap();

        // when (操作):
        let unknown_room = registry.leave_room(&missing, &conn("c1"));
        let unknown_conn = registry.leave_room(&room_id, &conn("c9"));

        // then (期待する結果):
        assert_eq!(unknown_room.removed, None);
        assert!(!unknown_room.room_deleted);
        assert_eq!(unknown_conn.removed, None);
        assert!(!unknown_conn.room_deleted);
        assert_eq!(counts(&registry, &room_id), (1, 1, 0));
    }

    #[test]
    fn test_host_count_stays_one_through_churn() {
        // テスト項目: ゲストの入れ替わりやホスト切断があっても host_count は 1 のまま
        // given (前提条件):
        let mut registry = RoomRegistry::new();
        let room_id = registry.create_room(conn("h"), session("host"), at(0));

        // when (操作):
        for i in 0..5 {
            let c = conn(&format!("g{i}"));
            registry
                .join_room(&room_id, c.clone(), session(&format!("guest{i}")), at(i))
                .unwrap();
            assert_eq!(registry.room_info(&room_id).unwrap().host_count, 1);
            if i % 2 == 0 {
                registry.leave_room(&room_id, &c);
            } else {
                registry.handle_disconnection(&c, at(i + 100));
            }
            assert_eq!(registry.room_info(&room_id).unwrap().host_count, 1);
        }
        registry.handle_disconnection(&conn("h"), at(1_000));

        // then (期待する結果):
        let info = registry.room_info(&room_id).unwrap();
        assert_eq!(info.host_count, 1);
        assert_eq!(info.guest_count, 2);
        assert_eq!(info.participant_count, 0);
    }

    #[test]
    fn test_room_info_is_idempotent() {
        // テスト項目: 変更がなければ room_info は同じスナップショットを返す
        // given (前提条件):
        let mut registry = RoomRegistry::new();
        let room_id = registry.create_room(conn("c1"), session("s1"), at(100));
        registry
            .join_room(&room_id, conn("c2"), session("s2"), at(200))
            .unwrap();

        // when (操作):
        let first = registry.room_info(&room_id);
        let second = registry.room_info(&room_id);

        // then (期待する結果):
        assert!(first.is_some());
        assert_eq!(first, second);
    }

    #[test]
    fn test_delete_room_returns_all_members() {
        // テスト項目: ルーム削除で切断済みも含む全メンバーの接続 ID が返される
        // given (前提条件):
        let mut registry = RoomRegistry::new();
        let room_id = registry.create_room(conn("c1"), session("s1"), at(100));
        registry
            .join_room(&room_id, conn("c2"), session("s2"), at(200))
            .unwrap();
        registry.handle_disconnection(&conn("c2"), at(300));

        // when (操作):
        let members = registry.delete_room(&room_id);
        let again = registry.delete_room(&room_id);

        // then (期待する結果):
        assert_eq!(members, vec![conn("c1"), conn("c2")]);
        assert!(again.is_empty());
        assert_eq!(registry.room_info(&room_id), None);
    }

    #[test]
    fn test_close_room_by_host_removes_room() {
        // テスト項目: ホストによるクローズでルームが削除され全メンバーが返される
        // given (前提条件):
        let mut registry = RoomRegistry::new();
        let room_id = registry.create_room(conn("c1"), session("s1"), at(100));
        registry
            .join_room(&room_id, conn("c2"), session("s2"), at(200))
            .unwrap();

        // when (操作):
        let result = registry.close_room(&room_id, &conn("c1"));

        // then (期待する結果):
        assert_eq!(result, Ok(vec![conn("c1"), conn("c2")]));
        assert_eq!(registry.room_info(&room_id), None);
        assert_eq!(registry.room_count(), 0);
    }

    #[test]
    fn test_close_room_by_guest_is_rejected() {
        // テスト項目: ゲストによるクローズは拒否されルームは残る
        // given (前提条件):
        let mut registry = RoomRegistry::new();
        let room_id = registry.create_room(conn("c1"), session("s1"), at(100));
        registry
            .join_room(&room_id, conn("c2"), session("s2"), at(200))
            .unwrap();

        // when (操作):
        let result = registry.close_room(&room_id, &conn("c2"));

        // then (期待する結果):
        assert_eq!(result, Err(RoomError::NotHost(conn("c2"))));
        assert_eq!(counts(&registry, &room_id), (2, 1, 1));
    }

    #[test]
    fn test_close_missing_room() {
        // テスト項目: 存在しないルームのクローズは RoomNotFound になる
        // given (前提条件):
        let mut registry = RoomRegistry::new();
        let room_id = RoomId::new("nope".to_string()).unwrap();

        // when (操作):
        let result = registry.close_room(&room_id, &conn("c1"));

        // then (期待する結果):
        assert_eq!(result, Err(RoomError::RoomNotFound(room_id)));
    }

    #[test]
    fn test_all_rooms_ordered_by_creation() {
        // テスト項目: all_rooms は作成順に並ぶ
        // given (前提条件):
        let mut registry = RoomRegistry::new();
        let first = registry.create_room(conn("c1"), session("s1"), at(300));
        let second = registry.create_room(conn("c2"), session("s2"), at(400));
        let third = registry.create_room(conn("c3"), session("s3"), at(500));

        // when (操作):
        let rooms: Vec<RoomId> = registry
            .all_rooms()
            .into_iter()
            .map(|snapshot| snapshot.room_id)
            .collect();

        // then (期待する結果):
        assert_eq!(rooms, vec![first, second, third]);
    }

    #[test]
    fn test_clear_drops_every_room() {
        // テスト項目: clear で全ルームが削除され、削除数が返される
        // given (前提条件):
        let mut registry = RoomRegistry::new();
        registry.create_room(conn("c1"), session("s1"), at(100));
        registry.create_room(conn("c2"), session("s2"), at(200));

        // when (操作):
        let cleared = registry.clear();

        // then (期待する結果):
        assert_eq!(cleared, 2);
        assert_eq!(registry.room_count(), 0);
        assert!(registry.all_rooms().is_empty());
    }
}
