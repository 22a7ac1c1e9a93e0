use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    comment::{
        comment_dto::CreateCommentRequest,
        comment_models::{Comment, CommentResponse},
    },
    error::{AppError, Result},
    middleware::AuthUser,
    state::AppState,
};

/// Comment on a post
#[utoipa::path(
    post,
    path = "/api/comments/{post_id}",
    tag = "comments",
    params(
        ("post_id" = Uuid, Path, description = "Post to comment on")
    ),
    request_body = CreateCommentRequest,
    responses(
        (status = 201, description = "Comment created", body = Comment),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Post not found"),
        (status = 422, description = "Empty comment")
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn create_comment(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(post_id): Path<Uuid>,
    Json(payload): Json<CreateCommentRequest>,
) -> Result<impl IntoResponse> {
    payload.validate()?;

    state
        .post_repository
        .find_by_id(post_id)
        .await?
        .ok_or(AppError::NotFound("Post not found".to_string()))?;

    let comment = state
        .comment_repository
        .create(post_id, user_id, &payload.comment)
        .await?;

    Ok((StatusCode::CREATED, Json(comment)))
}

/// Get a post's comments, newest first
#[utoipa::path(
    get,
    path = "/api/comments/{post_id}",
    tag = "comments",
    params(
        ("post_id" = Uuid, Path, description = "Post ID")
    ),
    responses(
        (status = 200, description = "Comments for the post", body = Vec<CommentResponse>),
        (status = 401, description = "Unauthorized")
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn get_post_comments(
    State(state): State<AppState>,
    AuthUser(_user_id): AuthUser,
    Path(post_id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    let comments = state.comment_repository.find_by_post(post_id).await?;

    Ok((StatusCode::OK, Json(comments)))
}

/// Delete a comment (creator only)
#[utoipa::path(
    delete,
    path = "/api/comments/{comment_id}",
    tag = "comments",
    params(
        ("comment_id" = Uuid, Path, description = "Comment ID")
    ),
    responses(
        (status = 204, description = "Comment deleted"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Not the creator"),
        (status = 404, description = "Comment not found")
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn delete_comment(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(comment_id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    let comment = state
        .comment_repository
        .find_by_id(comment_id)
        .await?
        .ok_or(AppError::NotFound("Comment not found".to_string()))?;

    if comment.creator_id != user_id {
        return Err(AppError::Forbidden("Unauthorized action".to_string()));
    }

    state.comment_repository.delete(comment_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
