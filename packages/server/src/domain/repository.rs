//! Repository trait 定義
//!
//! ルーム・セッションコーディネーターのインターフェースを定義します。
//! 具体的な実装は Infrastructure 層が提供します（依存性の逆転）。
//!
//! 各メソッドは 1 回の不可分な状態遷移です。実装は全ルームを 1 つのロックで
//! 保護し、同一ルームへの操作が交錯しないことを保証しなければなりません。

use async_trait::async_trait;

use super::{
    ConnectionId, DisconnectedSession, JoinOutcome, LeaveOutcome, ReconnectOutcome, RoomError,
    RoomId, RoomSnapshot, SessionId,
};

/// Room Repository trait
///
/// UseCase 層はこの trait に依存し、Infrastructure 層の具体的な実装には依存しない。
/// タイムスタンプ（参加時刻・切断時刻・再接続時刻）は実装側の Clock で決定する。
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RoomRepository: Send + Sync {
    /// 新しいルームを作成し、作成者を HOST として登録
    async fn create_room(&self, host_connection_id: ConnectionId, session_id: SessionId)
    -> RoomId;

    /// 既存ルームに参加（新規セッションは GUEST、既存セッションは再開）
    async fn join_room(
        &self,
        room_id: &RoomId,
        connection_id: ConnectionId,
        session_id: SessionId,
    ) -> Result<JoinOutcome, RoomError>;

    /// connection_id に対応するプロファイルを削除（空になったルームは削除）
    async fn leave_room(&self, room_id: &RoomId, connection_id: &ConnectionId) -> LeaveOutcome;

    /// 接続断を記録（プロファイルとルームは残す）
    async fn handle_disconnection(&self, connection_id: &ConnectionId)
    -> Vec<DisconnectedSession>;

    /// セッションを新しい接続で再開
    async fn reconnect_session(
        &self,
        session_id: &SessionId,
        new_connection_id: ConnectionId,
    ) -> Result<ReconnectOutcome, RoomError>;

    /// ルームを無条件に削除し、全メンバーの接続 ID を返す
    async fn delete_room(&self, room_id: &RoomId) -> Vec<ConnectionId>;

    /// HOST によるルームのクローズ
    ///
    /// HOST 判定と削除を 1 回の状態遷移で行い、全メンバーの接続 ID を返す。
    async fn close_room(
        &self,
        room_id: &RoomId,
        connection_id: &ConnectionId,
    ) -> Result<Vec<ConnectionId>, RoomError>;

    /// ルームのスナップショットを取得
    async fn get_room_info(&self, room_id: &RoomId) -> Option<RoomSnapshot>;

    /// 全ルームのスナップショットを作成順に取得
    async fn get_all_rooms(&self) -> Vec<RoomSnapshot>;

    /// ルーム数を取得
    async fn get_room_count(&self) -> usize;

    /// connection_id がルームの HOST かどうか
    async fn is_room_host(&self, room_id: &RoomId, connection_id: &ConnectionId) -> bool;

    /// ルームの HOST の接続 ID を取得
    async fn get_room_host(&self, room_id: &RoomId) -> Option<ConnectionId>;

    /// 全ルームを破棄し、破棄したルーム数を返す
    async fn clear(&self) -> usize;
}
