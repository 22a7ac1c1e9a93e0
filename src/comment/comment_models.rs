use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Comment {
    pub id: Uuid,
    pub post_id: Uuid,
    pub creator_id: Uuid,
    pub body: String,
    pub created_at: DateTime<Utc>,
}

/// Comment enriched with the creator's public profile for listing.
#[derive(Debug, Serialize, FromRow, ToSchema)]
pub struct CommentResponse {
    pub id: Uuid,
    pub post_id: Uuid,
    pub creator_id: Uuid,
    pub creator_name: String,
    pub creator_photo: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
}
