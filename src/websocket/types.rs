use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::message::message_models::Message;

/// Server-to-client events on the realtime channel.
///
/// Event names are part of the client contract: `getOnlineUsers` carries the
/// full set of currently connected user ids and is broadcast to every session
/// on each connect/disconnect; `newMessage` goes only to the receiver of a
/// freshly persisted message.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "event", content = "data", rename_all = "camelCase")]
pub enum WsMessage {
    GetOnlineUsers(Vec<Uuid>),
    NewMessage(Message),
    Ping,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn online_users_event_name_on_the_wire() {
        let msg = WsMessage::GetOnlineUsers(vec![]);
        let json = serde_json::to_value(&msg).unwrap();
        assert_eq!(json["event"], "getOnlineUsers");
    }

    #[test]
    fn new_message_event_name_on_the_wire() {
        let msg = WsMessage::NewMessage(Message {
            id: Uuid::new_v4(),
            conversation_id: Uuid::new_v4(),
            sender_id: Uuid::new_v4(),
            text: "hi".to_string(),
            created_at: Utc::now(),
        });
        let json = serde_json::to_value(&msg).unwrap();
        assert_eq!(json["event"], "newMessage");
        assert_eq!(json["data"]["text"], "hi");
    }
}
