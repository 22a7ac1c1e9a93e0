use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Story {
    pub id: Uuid,
    pub user_id: Uuid,
    pub text: Option<String>,
    pub media_url: Option<String>,
    pub expires_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

/// Story enriched with the author's public profile for the story feed.
#[derive(Debug, Serialize, FromRow, ToSchema)]
pub struct StoryResponse {
    pub id: Uuid,
    pub user_id: Uuid,
    pub user_name: String,
    pub user_photo: String,
    pub text: Option<String>,
    pub media_url: Option<String>,
    pub expires_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}
