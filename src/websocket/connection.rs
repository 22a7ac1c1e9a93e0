use dashmap::DashMap;
use std::sync::Arc;
use tokio::sync::mpsc;
use uuid::Uuid;

use crate::websocket::types::WsMessage;

pub type WsSender = mpsc::UnboundedSender<WsMessage>;

/// In-memory presence registry: user id -> live session sender.
///
/// One entry per user; a second connection for the same user overwrites the
/// first. State lives only for the process lifetime and is rebuilt empty on
/// restart. Entries are independent, so per-key writes need no global lock;
/// the online-set broadcast reads a snapshot of the keys at broadcast time.
#[derive(Clone)]
pub struct ConnectionManager {
    connections: Arc<DashMap<Uuid, WsSender>>,
}

impl ConnectionManager {
    pub fn new() -> Self {
        Self {
            connections: Arc::new(DashMap::new()),
        }
    }

    /// Register a session and broadcast the updated online set to everyone.
    pub fn register(&self, user_id: Uuid, sender: WsSender) {
        self.connections.insert(user_id, sender);
        self.broadcast_online_users();
    }

    /// Drop a session and broadcast the updated online set to everyone.
    pub fn unregister(&self, user_id: &Uuid) {
        self.connections.remove(user_id);
        self.broadcast_online_users();
    }

    /// Pure read; an absent entry just means the user is offline.
    pub fn lookup(&self, user_id: &Uuid) -> Option<WsSender> {
        self.connections.get(user_id).map(|entry| entry.clone())
    }

    /// Push a message to one user's session, if connected. Best effort: an
    /// offline user or a closed channel is not an error.
    pub fn send_to_user(&self, user_id: &Uuid, message: WsMessage) {
        if let Some(sender) = self.lookup(user_id) {
            let _ = sender.send(message);
        }
    }

    pub fn online_user_ids(&self) -> Vec<Uuid> {
        self.connections.iter().map(|entry| *entry.key()).collect()
    }

    fn broadcast_online_users(&self) {
        let online = self.online_user_ids();
        for entry in self.connections.iter() {
            let _ = entry.value().send(WsMessage::GetOnlineUsers(online.clone()));
        }
    }
}

impl Default for ConnectionManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use tokio::sync::mpsc::UnboundedReceiver;

    use crate::message::message_models::Message;

    fn session() -> (WsSender, UnboundedReceiver<WsMessage>) {
        mpsc::unbounded_channel()
    }

    fn sample_message(sender_id: Uuid, text: &str) -> Message {
        Message {
            id: Uuid::new_v4(),
            conversation_id: Uuid::new_v4(),
            sender_id,
            text: text.to_string(),
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn register_then_lookup_then_unregister() {
        let manager = ConnectionManager::new();
        let user = Uuid::new_v4();
        let (tx, _rx) = session();

        manager.register(user, tx);
        assert!(manager.lookup(&user).is_some());

        manager.unregister(&user);
        assert!(manager.lookup(&user).is_none());
    }

    #[tokio::test]
    async fn connect_broadcasts_online_set_to_all_sessions() {
        let manager = ConnectionManager::new();
        let (alice, bob) = (Uuid::new_v4(), Uuid::new_v4());
        let (alice_tx, mut alice_rx) = session();
        let (bob_tx, mut bob_rx) = session();

        manager.register(alice, alice_tx);
        // Alice sees herself online
        match alice_rx.recv().await.unwrap() {
            WsMessage::GetOnlineUsers(online) => assert_eq!(online, vec![alice]),
            other => panic!("unexpected event: {:?}", other),
        }

        manager.register(bob, bob_tx);
        // Both now see a two-user online set
        for rx in [&mut alice_rx, &mut bob_rx] {
            match rx.recv().await.unwrap() {
                WsMessage::GetOnlineUsers(online) => {
                    assert_eq!(online.len(), 2);
                    assert!(online.contains(&alice) && online.contains(&bob));
                }
                other => panic!("unexpected event: {:?}", other),
            }
        }

        manager.unregister(&bob);
        match alice_rx.recv().await.unwrap() {
            WsMessage::GetOnlineUsers(online) => assert_eq!(online, vec![alice]),
            other => panic!("unexpected event: {:?}", other),
        }
    }

    #[tokio::test]
    async fn send_to_online_user_delivers_exactly_once() {
        let manager = ConnectionManager::new();
        let receiver = Uuid::new_v4();
        let (tx, mut rx) = session();
        manager.register(receiver, tx);

        // Drain the connect broadcast
        let _ = rx.recv().await;

        let sender_id = Uuid::new_v4();
        manager.send_to_user(&receiver, WsMessage::NewMessage(sample_message(sender_id, "hi")));

        match rx.recv().await.unwrap() {
            WsMessage::NewMessage(message) => {
                assert_eq!(message.text, "hi");
                assert_eq!(message.sender_id, sender_id);
            }
            other => panic!("unexpected event: {:?}", other),
        }
        assert!(rx.try_recv().is_err(), "expected exactly one push");
    }

    #[tokio::test]
    async fn send_to_offline_user_is_a_silent_no_op() {
        let manager = ConnectionManager::new();
        let offline = Uuid::new_v4();
        manager.send_to_user(
            &offline,
            WsMessage::NewMessage(sample_message(Uuid::new_v4(), "hello?")),
        );
        assert!(manager.lookup(&offline).is_none());
    }

    #[tokio::test]
    async fn second_connection_overwrites_the_first() {
        let manager = ConnectionManager::new();
        let user = Uuid::new_v4();
        let (first_tx, mut first_rx) = session();
        let (second_tx, mut second_rx) = session();

        manager.register(user, first_tx);
        let _ = first_rx.recv().await;
        manager.register(user, second_tx);

        manager.send_to_user(&user, WsMessage::Ping);
        // Only the newest session receives pushes
        let _ = second_rx.recv().await; // connect broadcast
        match second_rx.recv().await.unwrap() {
            WsMessage::Ping => {}
            other => panic!("unexpected event: {:?}", other),
        }
    }
}
