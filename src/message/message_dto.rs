use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(Clone, Debug, Deserialize, Validate, ToSchema)]
pub struct SendMessageRequest {
    #[validate(length(min = 1, message = "message body must not be empty"))]
    pub message_body: String,
}

/// A conversation enriched with the counterpart's public profile fields,
/// used for the conversation list. Ordered by last activity, newest first.
#[derive(Debug, Serialize, ToSchema, sqlx::FromRow)]
pub struct ConversationSummary {
    pub conversation_id: Uuid,
    pub participant_id: Uuid,
    pub full_name: String,
    pub profile_photo: String,
    pub last_message_text: String,
    pub last_message_sender_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub last_activity_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_message_body_fails_validation() {
        let payload = SendMessageRequest {
            message_body: String::new(),
        };
        assert!(payload.validate().is_err());
    }

    #[test]
    fn non_empty_message_body_passes_validation() {
        let payload = SendMessageRequest {
            message_body: "hi".to_string(),
        };
        assert!(payload.validate().is_ok());
    }
}
