use crate::{
    error::Result,
    story::story_models::{Story, StoryResponse},
};
use sqlx::PgPool;
use uuid::Uuid;

#[derive(Clone)]
pub struct StoryRepository {
    pool: PgPool,
}

impl StoryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        user_id: Uuid,
        text: Option<&str>,
        media_url: Option<&str>,
        ttl_hours: i64,
    ) -> Result<Story> {
        let story = sqlx::query_as::<_, Story>(
            "INSERT INTO stories (user_id, text, media_url, expires_at)
             VALUES ($1, $2, $3, NOW() + make_interval(hours => $4::int))
             RETURNING *",
        )
        .bind(user_id)
        .bind(text)
        .bind(media_url)
        .bind(ttl_hours)
        .fetch_one(&self.pool)
        .await?;

        Ok(story)
    }

    /// Active (unexpired) stories, newest first.
    pub async fn find_active(&self) -> Result<Vec<StoryResponse>> {
        let stories = sqlx::query_as::<_, StoryResponse>(
            "SELECT
                s.id,
                s.user_id,
                u.full_name AS user_name,
                u.profile_photo AS user_photo,
                s.text,
                s.media_url,
                s.expires_at,
                s.created_at
             FROM stories s
             JOIN users u ON u.id = s.user_id
             WHERE s.expires_at > NOW()
             ORDER BY s.created_at DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(stories)
    }

    pub async fn delete_expired(&self) -> Result<u64> {
        let result = sqlx::query("DELETE FROM stories WHERE expires_at < NOW()")
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
