use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// A single immutable text entry in a conversation. Never updated or
/// deleted; `created_at` is the sole ordering key.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Message {
    pub id: Uuid,
    pub conversation_id: Uuid,
    pub sender_id: Uuid,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

/// Durable pairing of two participants with a denormalized copy of the
/// latest message. The pair is stored normalized (participant_one <
/// participant_two) so the unique index enforces at most one conversation
/// per unordered pair.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Conversation {
    pub id: Uuid,
    pub participant_one: Uuid,
    pub participant_two: Uuid,
    pub last_message_text: String,
    pub last_message_sender_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub last_activity_at: DateTime<Utc>,
}

/// Order a participant pair so lookups and the uniqueness constraint are
/// insensitive to who initiated the conversation.
pub fn normalize_pair(a: Uuid, b: Uuid) -> (Uuid, Uuid) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pair_normalization_is_order_insensitive() {
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        assert_eq!(normalize_pair(a, b), normalize_pair(b, a));
        let (one, two) = normalize_pair(a, b);
        assert!(one <= two);
    }

    #[test]
    fn normalized_pair_is_stable_for_repeat_sends() {
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        // Same storage key no matter which side sends first
        assert_eq!(normalize_pair(a, b), normalize_pair(a, b));
        assert_eq!(normalize_pair(b, a), normalize_pair(a, b));
    }
}
