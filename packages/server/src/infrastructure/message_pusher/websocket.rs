//! WebSocket を使った MessagePusher 実装
//!
//! ## 責務
//!
//! - 接続ごとの `PusherChannel` を管理
//! - ルームごとのトランスポートグループを管理
//! - ユニキャスト、グループ・全体へのブロードキャスト、強制切断
//!
//! ## 設計ノート
//!
//! WebSocket の生成は UI 層（`ui::handler::websocket`）で行われます。
//! この実装は生成された sender を受け取り、メッセージ送信に使用します。
//!
//! ロック順序は常に `groups` → `clients` です。

use std::{
    collections::{HashMap, HashSet},
    sync::Arc,
};

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::{
    ConnectionId, MessagePushError, MessagePusher, PushMessage, PusherChannel, RoomId,
};

/// WebSocket を使った MessagePusher 実装
///
/// ## 使用例
///
/// ```ignore
/// let clients = Arc::new(Mutex::new(HashMap::new()));
/// let pusher = WebSocketMessagePusher::new(clients.clone());
///
/// pusher.join_group(&room_id, &connection_id).await;
/// pusher.broadcast_to_group(&room_id, "{\"event\":\"gestureSent\"}", None).await?;
/// ```
pub struct WebSocketMessagePusher {
    /// 接続中のクライアントの sender
    clients: Arc<Mutex<HashMap<ConnectionId, PusherChannel>>>,
    /// ルームごとのトランスポートグループ
    groups: Mutex<HashMap<RoomId, HashSet<ConnectionId>>>,
}

impl WebSocketMessagePusher {
    /// 新しい WebSocketMessagePusher を作成
    pub fn new(clients: Arc<Mutex<HashMap<ConnectionId, PusherChannel>>>) -> Self {
        Self {
            clients,
            groups: Mutex::new(HashMap::new()),
        }
    }

    fn send_text(
        sender: &PusherChannel,
        connection_id: &ConnectionId,
        content: &str,
    ) -> Result<(), MessagePushError> {
        sender
            .send(PushMessage::Text(content.to_string()))
            .map_err(|e| {
                MessagePushError::PushFailed(format!("{}: {}", connection_id.as_str(), e))
            })
    }
}

#[async_trait]
impl MessagePusher for WebSocketMessagePusher {
    async fn register_client(&self, connection_id: ConnectionId, sender: PusherChannel) {
        let mut clients = self.clients.lock().await;
        tracing::debug!("Connection '{}' registered to MessagePusher", connection_id);
        clients.insert(connection_id, sender);
    }

    async fn unregister_client(&self, connection_id: &ConnectionId) {
        {
            let mut groups = self.groups.lock().await;
            for members in groups.values_mut() {
                members.remove(connection_id);
            }
            groups.retain(|_, members| !members.is_empty());
        }
        let mut clients = self.clients.lock().await;
        clients.remove(connection_id);
        tracing::debug!(
            "Connection '{}' unregistered from MessagePusher",
            connection_id
        );
    }

    async fn push_to(
        &self,
        connection_id: &ConnectionId,
        content: &str,
    ) -> Result<(), MessagePushError> {
        let clients = self.clients.lock().await;

        let sender = clients
            .get(connection_id)
            .ok_or_else(|| MessagePushError::ClientNotFound(connection_id.as_str().to_string()))?;
        Self::send_text(sender, connection_id, content)?;
        tracing::debug!("Pushed message to connection '{}'", connection_id);
        Ok(())
    }

    async fn broadcast(
        &self,
        targets: Vec<ConnectionId>,
        content: &str,
    ) -> Result<(), MessagePushError> {
        let clients = self.clients.lock().await;

        for target in targets {
            match clients.get(&target) {
                // ブロードキャストでは一部の送信失敗を許容
                Some(sender) => {
                    if let Err(e) = Self::send_text(sender, &target, content) {
                        tracing::warn!("Failed to broadcast to '{}': {}", target, e);
                    }
                }
                None => {
                    tracing::warn!("Connection '{}' not found during broadcast, skipping", target);
                }
            }
        }

        Ok(())
    }

    async fn broadcast_all(&self, content: &str) -> Result<(), MessagePushError> {
        let clients = self.clients.lock().await;

        for (connection_id, sender) in clients.iter() {
            if let Err(e) = Self::send_text(sender, connection_id, content) {
                tracing::warn!("Failed to broadcast to '{}': {}", connection_id, e);
            }
        }
        tracing::debug!("Broadcasted message to {} connections", clients.len());

        Ok(())
    }

    async fn join_group(&self, room_id: &RoomId, connection_id: &ConnectionId) {
        let mut groups = self.groups.lock().await;
        groups
            .entry(room_id.clone())
            .or_default()
            .insert(connection_id.clone());
    }

    async fn leave_group(&self, room_id: &RoomId, connection_id: &ConnectionId) {
        let mut groups = self.groups.lock().await;
        if let Some(members) = groups.get_mut(room_id) {
            members.remove(connection_id);
            if members.is_empty() {
                groups.remove(room_id);
            }
        }
    }

    async fn broadcast_to_group(
        &self,
        room_id: &RoomId,
        content: &str,
        exclude: Option<ConnectionId>,
    ) -> Result<(), MessagePushError> {
        let targets: Vec<ConnectionId> = {
            let groups = self.groups.lock().await;
            groups
                .get(room_id)
                .map(|members| {
                    members
                        .iter()
                        .filter(|id| Some(*id) != exclude.as_ref())
                        .cloned()
                        .collect()
                })
                .unwrap_or_default()
        };
        tracing::debug!(
            "Broadcasting to room {} ({} recipients)",
            room_id,
            targets.len()
        );
        self.broadcast(targets, content).await
    }

    async fn dissolve_group(&self, room_id: &RoomId) -> Vec<ConnectionId> {
        let mut groups = self.groups.lock().await;
        let mut members: Vec<ConnectionId> = groups
            .remove(room_id)
            .map(|members| members.into_iter().collect())
            .unwrap_or_default();
        members.sort();
        members
    }

    async fn clear_groups(&self) -> usize {
        let drained: Vec<(RoomId, HashSet<ConnectionId>)> = {
            let mut groups = self.groups.lock().await;
            groups.drain().collect()
        };

        for (room_id, members) in &drained {
            for connection_id in members {
                if let Err(e) = self.force_disconnect(connection_id).await {
                    tracing::debug!(
                        "Skipping disconnect of '{}' in room {}: {}",
                        connection_id,
                        room_id,
                        e
                    );
                }
            }
        }

        drained.len()
    }

    async fn force_disconnect(
        &self,
        connection_id: &ConnectionId,
    ) -> Result<(), MessagePushError> {
        let clients = self.clients.lock().await;

        let sender = clients
            .get(connection_id)
            .ok_or_else(|| MessagePushError::ClientNotFound(connection_id.as_str().to_string()))?;
        sender
            .send(PushMessage::Close)
            .map_err(|e| MessagePushError::PushFailed(e.to_string()))?;
        tracing::debug!("Requested close of connection '{}'", connection_id);
        Ok(())
    }
}

#[cfg(test)]
impl WebSocketMessagePusher {
    /// ルームのグループに所属する接続 ID（昇順）
    pub(crate) async fn group_members(&self, room_id: &RoomId) -> Vec<ConnectionId> {
        let groups = self.groups.lock().await;
        let mut members: Vec<ConnectionId> = groups
            .get(room_id)
            .map(|members| members.iter().cloned().collect())
            .unwrap_or_default();
        members.sort();
        members
    }
}
