use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Post {
    pub id: Uuid,
    pub creator_id: Uuid,
    pub body: String,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Post enriched with the creator's public profile and engagement counts,
/// as returned by the read queries.
#[derive(Debug, Serialize, FromRow, ToSchema)]
pub struct PostResponse {
    pub id: Uuid,
    pub creator_id: Uuid,
    pub creator_name: String,
    pub creator_photo: String,
    pub body: String,
    pub image_url: Option<String>,
    pub like_count: i64,
    pub comment_count: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
