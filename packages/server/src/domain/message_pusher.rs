//! MessagePusher trait 定義
//!
//! コネクションアダプター（WebSocket など）への送信インターフェース。
//! ユニキャスト、ルーム単位のブロードキャスト（トランスポートグループ）、
//! 全体ブロードキャスト、強制切断を抽象化します。
//!
//! トランスポートグループはブロードキャストの宛先管理のためだけに使い、
//! ルームの存在やメンバー数の判断には使いません（それは RoomRepository が持つ）。

use async_trait::async_trait;
use tokio::sync::mpsc;

use super::{ConnectionId, MessagePushError, RoomId};

/// 接続ごとの送信キューに流す指示
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PushMessage {
    /// テキストフレームを送信
    Text(String),
    /// 接続を閉じる
    Close,
}

/// 接続ごとの送信チャンネル
pub type PusherChannel = mpsc::UnboundedSender<PushMessage>;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MessagePusher: Send + Sync {
    /// 接続を登録
    async fn register_client(&self, connection_id: ConnectionId, sender: PusherChannel);

    /// 接続を登録解除（所属する全グループからも外す）
    async fn unregister_client(&self, connection_id: &ConnectionId);

    /// 特定の接続に送信
    async fn push_to(
        &self,
        connection_id: &ConnectionId,
        content: &str,
    ) -> Result<(), MessagePushError>;

    /// 指定した接続群に送信（一部の送信失敗は許容）
    async fn broadcast(
        &self,
        targets: Vec<ConnectionId>,
        content: &str,
    ) -> Result<(), MessagePushError>;

    /// 登録済みの全接続に送信
    async fn broadcast_all(&self, content: &str) -> Result<(), MessagePushError>;

    /// 接続をルームのグループに追加
    async fn join_group(&self, room_id: &RoomId, connection_id: &ConnectionId);

    /// 接続をルームのグループから外す
    async fn leave_group(&self, room_id: &RoomId, connection_id: &ConnectionId);

    /// ルームのグループに送信（`exclude` の接続は除く）
    async fn broadcast_to_group(
        &self,
        room_id: &RoomId,
        content: &str,
        exclude: Option<ConnectionId>,
    ) -> Result<(), MessagePushError>;

    /// グループを解散し、所属していた接続 ID を返す
    async fn dissolve_group(&self, room_id: &RoomId) -> Vec<ConnectionId>;

    /// 全グループを解散し、所属していた接続を強制切断する。解散したグループ数を返す
    async fn clear_groups(&self) -> usize;

    /// 接続を強制切断
    async fn force_disconnect(&self, connection_id: &ConnectionId)
    -> Result<(), MessagePushError>;
}
