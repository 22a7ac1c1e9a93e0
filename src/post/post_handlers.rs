use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    error::{AppError, Result},
    middleware::AuthUser,
    post::{
        post_dto::{BookmarkResponse, CreatePostRequest, LikeResponse, UpdatePostRequest},
        post_models::{Post, PostResponse},
    },
    state::AppState,
};

/// Create a post
#[utoipa::path(
    post,
    path = "/api/posts",
    tag = "posts",
    request_body = CreatePostRequest,
    responses(
        (status = 201, description = "Post created", body = Post),
        (status = 401, description = "Unauthorized"),
        (status = 422, description = "Invalid input")
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn create_post(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Json(payload): Json<CreatePostRequest>,
) -> Result<impl IntoResponse> {
    payload.validate()?;

    let post = state
        .post_repository
        .create(user_id, &payload.body, payload.image_url.as_deref())
        .await?;

    Ok((StatusCode::CREATED, Json(post)))
}

/// Get a post by id
#[utoipa::path(
    get,
    path = "/api/posts/{id}",
    tag = "posts",
    params(
        ("id" = Uuid, Path, description = "Post ID")
    ),
    responses(
        (status = 200, description = "Post with creator and counts", body = PostResponse),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Post not found")
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn get_post(
    State(state): State<AppState>,
    AuthUser(_user_id): AuthUser,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    let post = state
        .post_repository
        .find_detailed(id)
        .await?
        .ok_or(AppError::NotFound("Post not found".to_string()))?;

    Ok((StatusCode::OK, Json(post)))
}

/// Get all posts, newest first
#[utoipa::path(
    get,
    path = "/api/posts",
    tag = "posts",
    responses(
        (status = 200, description = "All posts", body = Vec<PostResponse>),
        (status = 401, description = "Unauthorized")
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn get_posts(
    State(state): State<AppState>,
    AuthUser(_user_id): AuthUser,
) -> Result<impl IntoResponse> {
    let posts = state.post_repository.find_all().await?;

    Ok((StatusCode::OK, Json(posts)))
}

/// Get posts from followed users
#[utoipa::path(
    get,
    path = "/api/posts/following",
    tag = "posts",
    responses(
        (status = 200, description = "Posts from followed users", body = Vec<PostResponse>),
        (status = 401, description = "Unauthorized")
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn get_following_posts(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<impl IntoResponse> {
    let posts = state.post_repository.find_following_feed(user_id).await?;

    Ok((StatusCode::OK, Json(posts)))
}

/// Get a user's posts
#[utoipa::path(
    get,
    path = "/api/users/{id}/posts",
    tag = "posts",
    params(
        ("id" = Uuid, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "The user's posts, newest first", body = Vec<PostResponse>),
        (status = 401, description = "Unauthorized")
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn get_user_posts(
    State(state): State<AppState>,
    AuthUser(_user_id): AuthUser,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    let posts = state.post_repository.find_by_creator(id).await?;

    Ok((StatusCode::OK, Json(posts)))
}

/// Update a post's body (creator only)
#[utoipa::path(
    patch,
    path = "/api/posts/{id}",
    tag = "posts",
    params(
        ("id" = Uuid, Path, description = "Post ID")
    ),
    request_body = UpdatePostRequest,
    responses(
        (status = 200, description = "Post updated", body = Post),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Not the creator"),
        (status = 404, description = "Post not found")
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn update_post(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdatePostRequest>,
) -> Result<impl IntoResponse> {
    payload.validate()?;

    let post = state
        .post_repository
        .find_by_id(id)
        .await?
        .ok_or(AppError::NotFound("Post not found".to_string()))?;

    if post.creator_id != user_id {
        return Err(AppError::Forbidden(
            "You can't update this post since you are not the creator".to_string(),
        ));
    }

    let updated = state.post_repository.update_body(id, &payload.body).await?;

    Ok((StatusCode::OK, Json(updated)))
}

/// Delete a post (creator only)
#[utoipa::path(
    delete,
    path = "/api/posts/{id}",
    tag = "posts",
    params(
        ("id" = Uuid, Path, description = "Post ID")
    ),
    responses(
        (status = 204, description = "Post deleted"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Not the creator"),
        (status = 404, description = "Post not found")
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn delete_post(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    let post = state
        .post_repository
        .find_by_id(id)
        .await?
        .ok_or(AppError::NotFound("Post not found".to_string()))?;

    if post.creator_id != user_id {
        return Err(AppError::Forbidden(
            "You can't delete this post since you are not the creator".to_string(),
        ));
    }

    state.post_repository.delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Like or unlike a post (toggle)
#[utoipa::path(
    post,
    path = "/api/posts/{id}/like",
    tag = "posts",
    params(
        ("id" = Uuid, Path, description = "Post ID")
    ),
    responses(
        (status = 200, description = "Like state toggled", body = LikeResponse),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Post not found")
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn like_post(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    state
        .post_repository
        .find_by_id(id)
        .await?
        .ok_or(AppError::NotFound("Post not found".to_string()))?;

    let liked = if state.post_repository.has_liked(id, user_id).await? {
        state.post_repository.remove_like(id, user_id).await?;
        false
    } else {
        state.post_repository.add_like(id, user_id).await?;
        true
    };

    let like_count = state.post_repository.count_likes(id).await?;

    Ok((StatusCode::OK, Json(LikeResponse { liked, like_count })))
}

/// Bookmark or unbookmark a post (toggle)
#[utoipa::path(
    post,
    path = "/api/posts/{id}/bookmark",
    tag = "posts",
    params(
        ("id" = Uuid, Path, description = "Post ID")
    ),
    responses(
        (status = 200, description = "Bookmark state toggled", body = BookmarkResponse),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Post not found")
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn bookmark_post(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    state
        .post_repository
        .find_by_id(id)
        .await?
        .ok_or(AppError::NotFound("Post not found".to_string()))?;

    let bookmarked = if state.post_repository.is_bookmarked(user_id, id).await? {
        state.post_repository.remove_bookmark(user_id, id).await?;
        false
    } else {
        state.post_repository.add_bookmark(user_id, id).await?;
        true
    };

    Ok((StatusCode::OK, Json(BookmarkResponse { bookmarked })))
}

/// Get the authenticated user's bookmarked posts
#[utoipa::path(
    get,
    path = "/api/users/bookmarks",
    tag = "posts",
    responses(
        (status = 200, description = "Bookmarked posts, newest bookmark first", body = Vec<PostResponse>),
        (status = 401, description = "Unauthorized")
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn get_bookmarks(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<impl IntoResponse> {
    let posts = state.post_repository.find_bookmarked(user_id).await?;

    Ok((StatusCode::OK, Json(posts)))
}
