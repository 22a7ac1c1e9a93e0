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
    message::{
        message_dto::{ConversationSummary, SendMessageRequest},
        message_models::Message,
    },
    middleware::AuthUser,
    state::AppState,
};

/// Send a message to another user
#[utoipa::path(
    post,
    path = "/api/messages/{receiver_id}",
    tag = "messages",
    params(
        ("receiver_id" = Uuid, Path, description = "User to send the message to")
    ),
    request_body = SendMessageRequest,
    responses(
        (status = 201, description = "Message sent successfully", body = Message),
        (status = 400, description = "Sender and receiver are the same user"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Receiver not found"),
        (status = 422, description = "Empty message body")
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn send_message(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(receiver_id): Path<Uuid>,
    Json(payload): Json<SendMessageRequest>,
) -> Result<impl IntoResponse> {
    payload.validate()?;

    // Receiver identity is verified here; the service only orchestrates
    state
        .user_repository
        .find_by_id(receiver_id)
        .await?
        .ok_or(AppError::NotFound("Receiver not found".to_string()))?;

    let message = state
        .message_service
        .send_message(user_id, receiver_id, &payload.message_body)
        .await?;

    Ok((StatusCode::CREATED, Json(message)))
}

/// Get the full message history with another user, oldest first
#[utoipa::path(
    get,
    path = "/api/messages/{receiver_id}",
    tag = "messages",
    params(
        ("receiver_id" = Uuid, Path, description = "Other participant")
    ),
    responses(
        (status = 200, description = "Messages in chronological order", body = Vec<Message>),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "No conversation with this user")
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn get_messages(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(receiver_id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    let messages = state.message_service.get_history(user_id, receiver_id).await?;

    Ok((StatusCode::OK, Json(messages)))
}

/// List the authenticated user's conversations, most recent activity first
#[utoipa::path(
    get,
    path = "/api/conversations",
    tag = "messages",
    responses(
        (status = 200, description = "Conversation summaries", body = Vec<ConversationSummary>),
        (status = 401, description = "Unauthorized")
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn get_conversations(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<impl IntoResponse> {
    let conversations = state.message_service.list_conversations(user_id).await?;

    Ok((StatusCode::OK, Json(conversations)))
}
