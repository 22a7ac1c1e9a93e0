use crate::{
    comment::comment_models::{Comment, CommentResponse},
    error::Result,
};
use sqlx::PgPool;
use uuid::Uuid;

#[derive(Clone)]
pub struct CommentRepository {
    pool: PgPool,
}

impl CommentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, post_id: Uuid, creator_id: Uuid, body: &str) -> Result<Comment> {
        let comment = sqlx::query_as::<_, Comment>(
            "INSERT INTO comments (post_id, creator_id, body)
             VALUES ($1, $2, $3)
             RETURNING *",
        )
        .bind(post_id)
        .bind(creator_id)
        .bind(body)
        .fetch_one(&self.pool)
        .await?;

        Ok(comment)
    }

    pub async fn find_by_id(&self, comment_id: Uuid) -> Result<Option<Comment>> {
        let comment = sqlx::query_as::<_, Comment>("SELECT * FROM comments WHERE id = $1")
            .bind(comment_id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(comment)
    }

    pub async fn find_by_post(&self, post_id: Uuid) -> Result<Vec<CommentResponse>> {
        let comments = sqlx::query_as::<_, CommentResponse>(
            "SELECT
                c.id,
                c.post_id,
                c.creator_id,
                u.full_name AS creator_name,
                u.profile_photo AS creator_photo,
                c.body,
                c.created_at
             FROM comments c
             JOIN users u ON u.id = c.creator_id
             WHERE c.post_id = $1
             ORDER BY c.created_at DESC",
        )
        .bind(post_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(comments)
    }

    pub async fn delete(&self, comment_id: Uuid) -> Result<()> {
        sqlx::query("DELETE FROM comments WHERE id = $1")
            .bind(comment_id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
