use crate::{
    error::Result,
    post::post_models::{Post, PostResponse},
};
use sqlx::PgPool;
use uuid::Uuid;

// Shared projection for the enriched read queries
const POST_SELECT: &str = "SELECT
    p.id,
    p.creator_id,
    u.full_name AS creator_name,
    u.profile_photo AS creator_photo,
    p.body,
    p.image_url,
    (SELECT COUNT(*) FROM post_likes pl WHERE pl.post_id = p.id) AS like_count,
    (SELECT COUNT(*) FROM comments c WHERE c.post_id = p.id) AS comment_count,
    p.created_at,
    p.updated_at
 FROM posts p
 JOIN users u ON u.id = p.creator_id";

#[derive(Clone)]
pub struct PostRepository {
    pool: PgPool,
}

impl PostRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        creator_id: Uuid,
        body: &str,
        image_url: Option<&str>,
    ) -> Result<Post> {
        let post = sqlx::query_as::<_, Post>(
            "INSERT INTO posts (creator_id, body, image_url)
             VALUES ($1, $2, $3)
             RETURNING *",
        )
        .bind(creator_id)
        .bind(body)
        .bind(image_url)
        .fetch_one(&self.pool)
        .await?;

        Ok(post)
    }

    pub async fn find_by_id(&self, post_id: Uuid) -> Result<Option<Post>> {
        let post = sqlx::query_as::<_, Post>("SELECT * FROM posts WHERE id = $1")
            .bind(post_id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(post)
    }

    pub async fn find_detailed(&self, post_id: Uuid) -> Result<Option<PostResponse>> {
        let post = sqlx::query_as::<_, PostResponse>(&format!("{POST_SELECT} WHERE p.id = $1"))
            .bind(post_id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(post)
    }

    pub async fn find_all(&self) -> Result<Vec<PostResponse>> {
        let posts =
            sqlx::query_as::<_, PostResponse>(&format!("{POST_SELECT} ORDER BY p.created_at DESC"))
                .fetch_all(&self.pool)
                .await?;

        Ok(posts)
    }

    pub async fn find_by_creator(&self, creator_id: Uuid) -> Result<Vec<PostResponse>> {
        let posts = sqlx::query_as::<_, PostResponse>(&format!(
            "{POST_SELECT} WHERE p.creator_id = $1 ORDER BY p.created_at DESC"
        ))
        .bind(creator_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(posts)
    }

    /// Posts by users the caller follows, newest first.
    pub async fn find_following_feed(&self, user_id: Uuid) -> Result<Vec<PostResponse>> {
        let posts = sqlx::query_as::<_, PostResponse>(&format!(
            "{POST_SELECT}
             WHERE p.creator_id IN (SELECT followed_id FROM follows WHERE follower_id = $1)
             ORDER BY p.created_at DESC"
        ))
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(posts)
    }

    pub async fn update_body(&self, post_id: Uuid, body: &str) -> Result<Post> {
        let post = sqlx::query_as::<_, Post>(
            "UPDATE posts SET body = $1, updated_at = NOW() WHERE id = $2 RETURNING *",
        )
        .bind(body)
        .bind(post_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(post)
    }

    pub async fn delete(&self, post_id: Uuid) -> Result<()> {
        sqlx::query("DELETE FROM posts WHERE id = $1")
            .bind(post_id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    pub async fn has_liked(&self, post_id: Uuid, user_id: Uuid) -> Result<bool> {
        let exists: bool = sqlx::query_scalar(
            "SELECT EXISTS (SELECT 1 FROM post_likes WHERE post_id = $1 AND user_id = $2)",
        )
        .bind(post_id)
        .bind(user_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }

    pub async fn add_like(&self, post_id: Uuid, user_id: Uuid) -> Result<()> {
        sqlx::query(
            "INSERT INTO post_likes (post_id, user_id)
             VALUES ($1, $2)
             ON CONFLICT (post_id, user_id) DO NOTHING",
        )
        .bind(post_id)
        .bind(user_id)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn remove_like(&self, post_id: Uuid, user_id: Uuid) -> Result<()> {
        sqlx::query("DELETE FROM post_likes WHERE post_id = $1 AND user_id = $2")
            .bind(post_id)
            .bind(user_id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    pub async fn count_likes(&self, post_id: Uuid) -> Result<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM post_likes WHERE post_id = $1")
            .bind(post_id)
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    pub async fn is_bookmarked(&self, user_id: Uuid, post_id: Uuid) -> Result<bool> {
        let exists: bool = sqlx::query_scalar(
            "SELECT EXISTS (SELECT 1 FROM bookmarks WHERE user_id = $1 AND post_id = $2)",
        )
        .bind(user_id)
        .bind(post_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }

    pub async fn add_bookmark(&self, user_id: Uuid, post_id: Uuid) -> Result<()> {
        sqlx::query(
            "INSERT INTO bookmarks (user_id, post_id)
             VALUES ($1, $2)
             ON CONFLICT (user_id, post_id) DO NOTHING",
        )
        .bind(user_id)
        .bind(post_id)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn remove_bookmark(&self, user_id: Uuid, post_id: Uuid) -> Result<()> {
        sqlx::query("DELETE FROM bookmarks WHERE user_id = $1 AND post_id = $2")
            .bind(user_id)
            .bind(post_id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    pub async fn find_bookmarked(&self, user_id: Uuid) -> Result<Vec<PostResponse>> {
        let posts = sqlx::query_as::<_, PostResponse>(&format!(
            "{POST_SELECT}
             JOIN bookmarks b ON b.post_id = p.id
             WHERE b.user_id = $1
             ORDER BY b.created_at DESC"
        ))
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(posts)
    }
}
