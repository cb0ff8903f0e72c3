/*!
 * WebSocket 实时变更推送
 *
 * 客户端连接 `ws://host/api/v1/ws?token=<access_token>`，之后收到
 * 与自己相关的数据变更事件，收到后重新拉取对应的控制台视图。
 *
 * ## 消息格式
 *
 * ```json
 * {"type": "connected", "user_id": 1}
 * {
 *     "type": "changed",
 *     "payload": {
 *         "collection": "attendance",
 *         "action": "updated",
 *         "course_id": 3,
 *         "lecture_id": 7,
 *         "user_id": 12,
 *         "occurred_at": "2026-03-01T10:00:00Z"
 *     }
 * }
 * {"type": "ping"}
 * {"type": "pong"}
 * ```
 *
 * 不同集合之间的事件没有顺序保证。
 */

pub mod publish;

use actix_ws::Message;
use dashmap::DashMap;
use futures_util::StreamExt;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::broadcast;
use tracing::{debug, info, warn};

use crate::models::realtime::entities::ChangeEvent;

/// 每个用户的广播通道容量，落后的接收端会丢弃事件
const CHANNEL_CAPACITY: usize = 100;
const HEARTBEAT_INTERVAL: std::time::Duration = std::time::Duration::from_secs(30);

/// WebSocket 消息类型
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum WsMessage {
    /// 数据变更
    Changed { payload: ChangeEvent },
    Ping,
    Pong,
    Connected { user_id: i64 },
    Error { message: String },
}

/// 连接管理器
///
/// 一个用户可以同时打开多个连接，共享同一个广播通道。
#[derive(Default)]
pub struct ConnectionManager {
    connections: DashMap<i64, broadcast::Sender<WsMessage>>,
}

impl ConnectionManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&self, user_id: i64) -> broadcast::Receiver<WsMessage> {
        let entry = self.connections.entry(user_id).or_insert_with(|| {
            let (tx, _) = broadcast::channel(CHANNEL_CAPACITY);
            tx
        });
        entry.subscribe()
    }

    /// 最后一个连接断开时才移除通道
    pub fn unregister(&self, user_id: i64) {
        self.connections
            .remove_if(&user_id, |_, sender| sender.receiver_count() == 0);
    }

    pub fn send_to_user(&self, user_id: i64, message: WsMessage) -> bool {
        self.connections
            .get(&user_id)
            .is_some_and(|sender| sender.send(message).is_ok())
    }

    pub fn send_to_users(&self, user_ids: &[i64], message: WsMessage) {
        for &user_id in user_ids {
            self.send_to_user(user_id, message.clone());
        }
    }

    /// 推送给所有在线用户
    pub fn broadcast_all(&self, message: WsMessage) {
        for entry in self.connections.iter() {
            let _ = entry.value().send(message.clone());
        }
    }

    pub fn online_count(&self) -> usize {
        self.connections
            .iter()
            .filter(|entry| entry.receiver_count() > 0)
            .count()
    }
}

pub struct WebSocketService;

impl WebSocketService {
    pub async fn handle_connection(
        manager: Arc<ConnectionManager>,
        user_id: i64,
        mut session: actix_ws::Session,
        mut stream: actix_ws::MessageStream,
    ) {
        info!("WebSocket connected for user: {}", user_id);

        let mut rx = manager.register(user_id);

        if let Ok(json) = serde_json::to_string(&WsMessage::Connected { user_id }) {
            let _ = session.text(json).await;
        }

        let mut heartbeat = tokio::time::interval(HEARTBEAT_INTERVAL);
        // 第一次 tick 立即返回，跳过
        heartbeat.tick().await;

        loop {
            tokio::select! {
                msg = stream.next() => {
                    match msg {
                        Some(Ok(Message::Text(text))) => {
                            match serde_json::from_str::<WsMessage>(&text) {
                                Ok(WsMessage::Ping) => {
                                    let pong = serde_json::to_string(&WsMessage::Pong)
                                        .unwrap_or_else(|_| r#"{"type":"pong"}"#.to_string());
                                    if session.text(pong).await.is_err() {
                                        break;
                                    }
                                }
                                Ok(other) => {
                                    debug!("Ignoring message from user {}: {:?}", user_id, other);
                                }
                                Err(_) => {
                                    let reply = WsMessage::Error {
                                        message: "Unrecognized message".to_string(),
                                    };
                                    if let Ok(json) = serde_json::to_string(&reply)
                                        && session.text(json).await.is_err()
                                    {
                                        break;
                                    }
                                }
                            }
                        }
                        Some(Ok(Message::Ping(data))) => {
                            if session.pong(&data).await.is_err() {
                                break;
                            }
                        }
                        Some(Ok(Message::Close(_))) | None => {
                            info!("WebSocket closed for user: {}", user_id);
                            break;
                        }
                        Some(Err(e)) => {
                            warn!("WebSocket error for user {}: {:?}", user_id, e);
                            break;
                        }
                        _ => {}
                    }
                }

                msg = rx.recv() => {
                    match msg {
                        Ok(ws_msg) => {
                            if let Ok(json) = serde_json::to_string(&ws_msg)
                                && session.text(json).await.is_err()
                            {
                                break;
                            }
                        }
                        Err(broadcast::error::RecvError::Lagged(n)) => {
                            warn!("WebSocket for user {} lagged by {} messages", user_id, n);
                        }
                        Err(broadcast::error::RecvError::Closed) => break,
                    }
                }

                _ = heartbeat.tick() => {
                    if session.ping(b"").await.is_err() {
                        break;
                    }
                }
            }
        }

        // 先释放接收端，unregister 才能看到正确的订阅数
        drop(rx);
        manager.unregister(user_id);
        let _ = session.close(None).await;
        info!("WebSocket disconnected for user: {}", user_id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::realtime::entities::{ChangeAction, ChangeCollection};

    fn event() -> WsMessage {
        WsMessage::Changed {
            payload: ChangeEvent::new(ChangeCollection::Courses, ChangeAction::Created).course(1),
        }
    }

    #[tokio::test]
    async fn test_send_reaches_registered_user_only() {
        let manager = ConnectionManager::new();
        let mut rx1 = manager.register(1);
        let _rx2 = manager.register(2);

        manager.send_to_users(&[1, 3], event());
        assert!(matches!(rx1.recv().await, Ok(WsMessage::Changed { .. })));
        assert!(!manager.send_to_user(3, event()));
        assert_eq!(manager.online_count(), 2);
    }

    #[tokio::test]
    async fn test_broadcast_all() {
        let manager = ConnectionManager::new();
        let mut rx1 = manager.register(1);
        let mut rx2 = manager.register(2);

        manager.broadcast_all(event());
        assert!(rx1.recv().await.is_ok());
        assert!(rx2.recv().await.is_ok());
    }

    #[test]
    fn test_unregister_keeps_other_connections() {
        let manager = ConnectionManager::new();
        let rx_a = manager.register(1);
        let rx_b = manager.register(1);

        drop(rx_a);
        manager.unregister(1);
        assert_eq!(manager.online_count(), 1);

        drop(rx_b);
        manager.unregister(1);
        assert_eq!(manager.online_count(), 0);
    }

    #[test]
    fn test_message_wire_format() {
        let json = serde_json::to_value(WsMessage::Connected { user_id: 5 }).unwrap();
        assert_eq!(json["type"], "connected");
        let ping: WsMessage = serde_json::from_str(r#"{"type":"ping"}"#).unwrap();
        assert!(matches!(ping, WsMessage::Ping));
    }
}
