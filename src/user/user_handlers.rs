use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    error::Result,
    middleware::AuthUser,
    state::AppState,
    user::{
        user_dto::{
            AuthResponse, ChangeAvatarRequest, FollowResponse, LoginRequest, RegisterRequest,
            SearchQuery, UpdateProfileRequest,
        },
        user_models::UserResponse,
    },
};

/// Register a new user account
#[utoipa::path(
    post,
    path = "/api/users/register",
    tag = "users",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "User registered successfully", body = UserResponse),
        (status = 409, description = "Email already exists"),
        (status = 422, description = "Invalid input")
    )
)]
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> Result<impl IntoResponse> {
    payload.validate()?;

    let user = state.user_service.register(payload).await?;

    Ok((StatusCode::CREATED, Json(user)))
}

/// Log in with email and password
#[utoipa::path(
    post,
    path = "/api/users/login",
    tag = "users",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = AuthResponse),
        (status = 401, description = "Invalid credentials")
    )
)]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<impl IntoResponse> {
    payload.validate()?;

    let response = state
        .user_service
        .login(&payload.email, &payload.password)
        .await?;

    Ok((StatusCode::OK, Json(response)))
}

/// Get the authenticated user's profile
#[utoipa::path(
    get,
    path = "/api/users/me",
    tag = "users",
    responses(
        (status = 200, description = "Current user profile", body = UserResponse),
        (status = 401, description = "Unauthorized")
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn get_current_user(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<impl IntoResponse> {
    let user = state.user_service.get_user(user_id).await?;

    Ok((StatusCode::OK, Json(user)))
}

/// Update the authenticated user's profile
#[utoipa::path(
    patch,
    path = "/api/users/me",
    tag = "users",
    request_body = UpdateProfileRequest,
    responses(
        (status = 200, description = "Profile updated", body = UserResponse),
        (status = 401, description = "Unauthorized"),
        (status = 422, description = "Invalid input")
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn update_profile(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Json(payload): Json<UpdateProfileRequest>,
) -> Result<impl IntoResponse> {
    payload.validate()?;

    let user = state.user_service.update_profile(user_id, payload).await?;

    Ok((StatusCode::OK, Json(user)))
}

/// Change the authenticated user's profile photo
#[utoipa::path(
    post,
    path = "/api/users/avatar",
    tag = "users",
    request_body = ChangeAvatarRequest,
    responses(
        (status = 200, description = "Profile photo updated", body = UserResponse),
        (status = 401, description = "Unauthorized"),
        (status = 422, description = "Invalid URL")
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn change_avatar(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Json(payload): Json<ChangeAvatarRequest>,
) -> Result<impl IntoResponse> {
    payload.validate()?;

    let user = state
        .user_service
        .change_avatar(user_id, &payload.avatar_url)
        .await?;

    Ok((StatusCode::OK, Json(user)))
}

/// Search users by name
#[utoipa::path(
    get,
    path = "/api/users/search",
    tag = "users",
    params(
        ("query" = Option<String>, Query, description = "Case-insensitive name fragment")
    ),
    responses(
        (status = 200, description = "Matching users", body = Vec<UserResponse>),
        (status = 401, description = "Unauthorized")
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn search_users(
    State(state): State<AppState>,
    AuthUser(_user_id): AuthUser,
    Query(query): Query<SearchQuery>,
) -> Result<impl IntoResponse> {
    let users = match query.query.as_deref() {
        Some(q) if !q.is_empty() => state.user_service.search_users(q).await?,
        _ => vec![],
    };

    Ok((StatusCode::OK, Json(users)))
}

/// Get suggested users (not yet followed, excluding self)
#[utoipa::path(
    get,
    path = "/api/users",
    tag = "users",
    responses(
        (status = 200, description = "Suggested users", body = Vec<UserResponse>),
        (status = 401, description = "Unauthorized")
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn get_users(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<impl IntoResponse> {
    let users = state.user_service.get_suggested_users(user_id).await?;

    Ok((StatusCode::OK, Json(users)))
}

/// Get a user by id
#[utoipa::path(
    get,
    path = "/api/users/{id}",
    tag = "users",
    params(
        ("id" = Uuid, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User profile", body = UserResponse),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "User not found")
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn get_user(
    State(state): State<AppState>,
    AuthUser(_user_id): AuthUser,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    let user = state.user_service.get_user(id).await?;

    Ok((StatusCode::OK, Json(user)))
}

/// Follow or unfollow a user (toggle)
#[utoipa::path(
    post,
    path = "/api/users/{id}/follow",
    tag = "users",
    params(
        ("id" = Uuid, Path, description = "User to follow or unfollow")
    ),
    responses(
        (status = 200, description = "Follow state toggled", body = FollowResponse),
        (status = 400, description = "Cannot follow yourself"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "User not found")
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn follow_unfollow_user(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    let response = state.user_service.toggle_follow(user_id, id).await?;

    Ok((StatusCode::OK, Json(response)))
}
