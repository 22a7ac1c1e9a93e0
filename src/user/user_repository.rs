use crate::error::Result;
use sqlx::PgPool;
use uuid::Uuid;

use super::user_models::User;

#[derive(Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, full_name: &str, email: &str, password_hash: &str) -> Result<User> {
        let user = sqlx::query_as::<_, User>(
            "INSERT INTO users (full_name, email, password_hash) VALUES ($1, $2, $3) RETURNING *",
        )
        .bind(full_name)
        .bind(email)
        .bind(password_hash)
        .fetch_one(&self.pool)
        .await?;

        Ok(user)
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE email = $1")
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;

        Ok(user)
    }

    pub async fn find_by_id(&self, user_id: Uuid) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(user)
    }

    /// Users the caller is not already following, excluding themselves.
    pub async fn find_suggested(&self, user_id: Uuid) -> Result<Vec<User>> {
        let users = sqlx::query_as::<_, User>(
            "SELECT * FROM users
             WHERE id != $1
               AND id NOT IN (SELECT followed_id FROM follows WHERE follower_id = $1)
             ORDER BY created_at DESC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(users)
    }

    pub async fn search_by_name(&self, query: &str) -> Result<Vec<User>> {
        let users = sqlx::query_as::<_, User>(
            "SELECT * FROM users WHERE full_name ILIKE $1 ORDER BY full_name",
        )
        .bind(format!("%{}%", query))
        .fetch_all(&self.pool)
        .await?;

        Ok(users)
    }

    pub async fn update_profile(
        &self,
        user_id: Uuid,
        full_name: Option<&str>,
        bio: Option<&str>,
    ) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            "UPDATE users
             SET full_name = COALESCE($1, full_name),
                 bio = COALESCE($2, bio),
                 updated_at = NOW()
             WHERE id = $3
             RETURNING *",
        )
        .bind(full_name)
        .bind(bio)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    pub async fn update_avatar(&self, user_id: Uuid, avatar_url: &str) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            "UPDATE users SET profile_photo = $1, updated_at = NOW() WHERE id = $2 RETURNING *",
        )
        .bind(avatar_url)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    pub async fn is_following(&self, follower_id: Uuid, followed_id: Uuid) -> Result<bool> {
        let exists: bool = sqlx::query_scalar(
            "SELECT EXISTS (
                 SELECT 1 FROM follows WHERE follower_id = $1 AND followed_id = $2
             )",
        )
        .bind(follower_id)
        .bind(followed_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }

    pub async fn add_follow(&self, follower_id: Uuid, followed_id: Uuid) -> Result<()> {
        sqlx::query(
            "INSERT INTO follows (follower_id, followed_id)
             VALUES ($1, $2)
             ON CONFLICT (follower_id, followed_id) DO NOTHING",
        )
        .bind(follower_id)
        .bind(followed_id)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn remove_follow(&self, follower_id: Uuid, followed_id: Uuid) -> Result<()> {
        sqlx::query("DELETE FROM follows WHERE follower_id = $1 AND followed_id = $2")
            .bind(follower_id)
            .bind(followed_id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    pub async fn find_following_ids(&self, user_id: Uuid) -> Result<Vec<Uuid>> {
        let ids: Vec<Uuid> =
            sqlx::query_scalar("SELECT followed_id FROM follows WHERE follower_id = $1")
                .bind(user_id)
                .fetch_all(&self.pool)
                .await?;

        Ok(ids)
    }
}
