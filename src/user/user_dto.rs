use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::user::user_models::UserResponse;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct RegisterRequest {
    #[validate(length(min = 1, message = "full name is required"))]
    pub full_name: String,
    #[validate(email(message = "invalid email"))]
    pub email: String,
    #[validate(length(min = 6, message = "password should be at least 6 characters"))]
    pub password: String,
    pub confirm_password: String,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    #[validate(email(message = "invalid email"))]
    pub email: String,
    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AuthResponse {
    pub token: String,
    pub user: UserResponse,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateProfileRequest {
    #[validate(length(min = 1, message = "full name must not be empty"))]
    pub full_name: Option<String>,
    #[validate(length(max = 500))]
    pub bio: Option<String>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct ChangeAvatarRequest {
    #[validate(url(message = "avatar must be a valid URL"))]
    pub avatar_url: String,
}

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub query: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct FollowResponse {
    pub following: bool,
    pub following_ids: Vec<Uuid>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_rejects_short_password() {
        let payload = RegisterRequest {
            full_name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            password: "short".to_string(),
            confirm_password: "short".to_string(),
        };
        assert!(payload.validate().is_err());
    }

    #[test]
    fn register_rejects_bad_email() {
        let payload = RegisterRequest {
            full_name: "Ada".to_string(),
            email: "not-an-email".to_string(),
            password: "secret123".to_string(),
            confirm_password: "secret123".to_string(),
        };
        assert!(payload.validate().is_err());
    }
}
