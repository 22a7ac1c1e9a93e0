use crate::{
    error::{AppError, Result},
    message::{
        message_dto::ConversationSummary, message_models::Message,
        message_repository::MessageRepository,
    },
    websocket::{ConnectionManager, WsMessage},
};
use uuid::Uuid;

/// Single orchestration point for sending and retrieving messages.
#[derive(Clone)]
pub struct MessageService {
    repo: MessageRepository,
    ws_connections: ConnectionManager,
}

impl MessageService {
    pub fn new(repo: MessageRepository, ws_connections: ConnectionManager) -> Self {
        Self {
            repo,
            ws_connections,
        }
    }

    /// Persist a message and fan it out to the receiver's live session.
    ///
    /// Fixed sequence: resolve (or lazily create) the conversation, append
    /// the message, overwrite the last-message summary, then push to the
    /// receiver only after the durable writes. Fan-out is best effort and
    /// at-most-once; an offline receiver sees the message on the next
    /// history or conversation read. Not idempotent across retries — a
    /// retried send appends a duplicate message.
    pub async fn send_message(
        &self,
        sender_id: Uuid,
        receiver_id: Uuid,
        text: &str,
    ) -> Result<Message> {
        if sender_id == receiver_id {
            return Err(AppError::BadRequest(
                "You can't message yourself".to_string(),
            ));
        }

        let conversation = self
            .repo
            .find_or_create_conversation(sender_id, receiver_id, text)
            .await?;

        let message = self
            .repo
            .create_message(conversation.id, sender_id, text)
            .await?;

        self.repo
            .update_last_message(conversation.id, text, sender_id)
            .await?;

        self.ws_connections
            .send_to_user(&receiver_id, WsMessage::NewMessage(message.clone()));

        Ok(message)
    }

    /// Full history with another user, oldest first. "Never talked" is a
    /// distinct not-found condition, not an empty list.
    pub async fn get_history(&self, user_id: Uuid, other_user_id: Uuid) -> Result<Vec<Message>> {
        let conversation = self
            .repo
            .find_conversation(user_id, other_user_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound("You have no conversation with this person".to_string())
            })?;

        self.repo.find_messages(conversation.id).await
    }

    pub async fn list_conversations(&self, user_id: Uuid) -> Result<Vec<ConversationSummary>> {
        self.repo.find_user_conversations(user_id).await
    }
}
