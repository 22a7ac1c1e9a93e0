use crate::{
    auth::{create_jwt, hash_password, verify_password},
    error::{AppError, Result},
    user::{
        user_dto::{AuthResponse, FollowResponse, RegisterRequest, UpdateProfileRequest},
        user_models::UserResponse,
        user_repository::UserRepository,
    },
};
use uuid::Uuid;

#[derive(Clone)]
pub struct UserService {
    repo: UserRepository,
    jwt_secret: String,
    jwt_expiration_hours: i64,
}

impl UserService {
    pub fn new(repo: UserRepository, jwt_secret: String, jwt_expiration_hours: i64) -> Self {
        Self {
            repo,
            jwt_secret,
            jwt_expiration_hours,
        }
    }

    pub async fn register(&self, payload: RegisterRequest) -> Result<UserResponse> {
        if payload.password != payload.confirm_password {
            return Err(AppError::Validation("Passwords do not match".to_string()));
        }

        let email = payload.email.to_lowercase();

        if self.repo.find_by_email(&email).await?.is_some() {
            return Err(AppError::Conflict("Email already exists".to_string()));
        }

        let password_hash = hash_password(&payload.password)?;
        let user = self
            .repo
            .create(&payload.full_name, &email, &password_hash)
            .await?;

        Ok(user.into())
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<AuthResponse> {
        let email = email.to_lowercase();

        let user = self
            .repo
            .find_by_email(&email)
            .await?
            .ok_or(AppError::Unauthorized("Invalid credentials".to_string()))?;

        if !verify_password(password, &user.password_hash)? {
            return Err(AppError::Unauthorized("Invalid credentials".to_string()));
        }

        let token = create_jwt(user.id, &user.email, &self.jwt_secret, self.jwt_expiration_hours)?;

        Ok(AuthResponse {
            token,
            user: user.into(),
        })
    }

    pub async fn get_user(&self, user_id: Uuid) -> Result<UserResponse> {
        let user = self
            .repo
            .find_by_id(user_id)
            .await?
            .ok_or(AppError::NotFound("User not found".to_string()))?;

        Ok(user.into())
    }

    pub async fn get_suggested_users(&self, user_id: Uuid) -> Result<Vec<UserResponse>> {
        let users = self.repo.find_suggested(user_id).await?;
        Ok(users.into_iter().map(UserResponse::from).collect())
    }

    pub async fn search_users(&self, query: &str) -> Result<Vec<UserResponse>> {
        let users = self.repo.search_by_name(query).await?;
        Ok(users.into_iter().map(UserResponse::from).collect())
    }

    pub async fn update_profile(
        &self,
        user_id: Uuid,
        payload: UpdateProfileRequest,
    ) -> Result<UserResponse> {
        let user = self
            .repo
            .update_profile(user_id, payload.full_name.as_deref(), payload.bio.as_deref())
            .await?
            .ok_or(AppError::NotFound("User not found".to_string()))?;

        Ok(user.into())
    }

    pub async fn change_avatar(&self, user_id: Uuid, avatar_url: &str) -> Result<UserResponse> {
        let user = self
            .repo
            .update_avatar(user_id, avatar_url)
            .await?
            .ok_or(AppError::NotFound("User not found".to_string()))?;

        Ok(user.into())
    }

    /// Toggle: follow if not yet following, unfollow otherwise.
    pub async fn toggle_follow(&self, user_id: Uuid, target_id: Uuid) -> Result<FollowResponse> {
        if user_id == target_id {
            return Err(AppError::BadRequest(
                "You can't follow/unfollow yourself".to_string(),
            ));
        }

        self.repo
            .find_by_id(target_id)
            .await?
            .ok_or(AppError::NotFound("User not found".to_string()))?;

        let following = if self.repo.is_following(user_id, target_id).await? {
            self.repo.remove_follow(user_id, target_id).await?;
            false
        } else {
            self.repo.add_follow(user_id, target_id).await?;
            true
        };

        let following_ids = self.repo.find_following_ids(user_id).await?;

        Ok(FollowResponse {
            following,
            following_ids,
        })
    }
}
