use crate::{
    error::{AppError, Result},
    message::{
        message_dto::ConversationSummary,
        message_models::{normalize_pair, Conversation, Message},
    },
};
use sqlx::PgPool;
use uuid::Uuid;

#[derive(Clone)]
pub struct MessageRepository {
    pool: PgPool,
}

impl MessageRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_conversation(
        &self,
        user_id: Uuid,
        other_user_id: Uuid,
    ) -> Result<Option<Conversation>> {
        let (one, two) = normalize_pair(user_id, other_user_id);
        let conversation = sqlx::query_as::<_, Conversation>(
            "SELECT * FROM conversations
             WHERE participant_one = $1 AND participant_two = $2",
        )
        .bind(one)
        .bind(two)
        .fetch_optional(&self.pool)
        .await?;

        Ok(conversation)
    }

    /// Find the conversation for a pair, creating it lazily on first
    /// contact. Two concurrent first messages can both observe "not found"
    /// and race to insert; the unique pair index lets exactly one win and
    /// the loser re-reads the winner's row instead of failing.
    pub async fn find_or_create_conversation(
        &self,
        sender_id: Uuid,
        receiver_id: Uuid,
        text: &str,
    ) -> Result<Conversation> {
        if let Some(conversation) = self.find_conversation(sender_id, receiver_id).await? {
            return Ok(conversation);
        }

        let (one, two) = normalize_pair(sender_id, receiver_id);
        let inserted = sqlx::query_as::<_, Conversation>(
            "INSERT INTO conversations
                 (participant_one, participant_two, last_message_text, last_message_sender_id)
             VALUES ($1, $2, $3, $4)
             ON CONFLICT (participant_one, participant_two) DO NOTHING
             RETURNING *",
        )
        .bind(one)
        .bind(two)
        .bind(text)
        .bind(sender_id)
        .fetch_optional(&self.pool)
        .await?;

        match inserted {
            Some(conversation) => Ok(conversation),
            // Lost the race; the other sender's insert committed first
            None => self
                .find_conversation(sender_id, receiver_id)
                .await?
                .ok_or_else(|| {
                    AppError::Internal("conversation vanished after insert conflict".to_string())
                }),
        }
    }

    pub async fn create_message(
        &self,
        conversation_id: Uuid,
        sender_id: Uuid,
        text: &str,
    ) -> Result<Message> {
        let message = sqlx::query_as::<_, Message>(
            "INSERT INTO messages (conversation_id, sender_id, text)
             VALUES ($1, $2, $3)
             RETURNING *",
        )
        .bind(conversation_id)
        .bind(sender_id)
        .bind(text)
        .fetch_one(&self.pool)
        .await?;

        Ok(message)
    }

    /// Unconditional overwrite of the denormalized last-message summary.
    /// Idempotent when the conversation was just created with these values.
    pub async fn update_last_message(
        &self,
        conversation_id: Uuid,
        text: &str,
        sender_id: Uuid,
    ) -> Result<()> {
        sqlx::query(
            "UPDATE conversations
             SET last_message_text = $1,
                 last_message_sender_id = $2,
                 last_activity_at = NOW()
             WHERE id = $3",
        )
        .bind(text)
        .bind(sender_id)
        .bind(conversation_id)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// All messages for a conversation, oldest first: history reads
    /// chronologically, unlike the newest-first conversation list.
    pub async fn find_messages(&self, conversation_id: Uuid) -> Result<Vec<Message>> {
        let messages = sqlx::query_as::<_, Message>(
            "SELECT * FROM messages
             WHERE conversation_id = $1
             ORDER BY created_at ASC",
        )
        .bind(conversation_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(messages)
    }

    pub async fn find_user_conversations(&self, user_id: Uuid) -> Result<Vec<ConversationSummary>> {
        let conversations = sqlx::query_as::<_, ConversationSummary>(
            "SELECT
                c.id AS conversation_id,
                u.id AS participant_id,
                u.full_name,
                u.profile_photo,
                c.last_message_text,
                c.last_message_sender_id,
                c.created_at,
                c.last_activity_at
             FROM conversations c
             JOIN users u ON u.id = CASE
                 WHEN c.participant_one = $1 THEN c.participant_two
                 ELSE c.participant_one
             END
             WHERE c.participant_one = $1 OR c.participant_two = $1
             ORDER BY c.last_activity_at DESC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(conversations)
    }
}
