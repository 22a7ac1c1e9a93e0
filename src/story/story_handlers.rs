use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use validator::Validate;

use crate::{
    error::{AppError, Result},
    middleware::AuthUser,
    state::AppState,
    story::{
        story_dto::CreateStoryRequest,
        story_models::{Story, StoryResponse},
    },
};

// Stories live for a day
const STORY_TTL_HOURS: i64 = 24;

/// Create a story (text and/or media URL, 24h lifetime)
#[utoipa::path(
    post,
    path = "/api/stories",
    tag = "stories",
    request_body = CreateStoryRequest,
    responses(
        (status = 201, description = "Story created", body = Story),
        (status = 401, description = "Unauthorized"),
        (status = 422, description = "Story must have text or media")
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn create_story(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Json(payload): Json<CreateStoryRequest>,
) -> Result<impl IntoResponse> {
    payload.validate()?;

    if !payload.has_content() {
        return Err(AppError::Validation(
            "Story must have text or media".to_string(),
        ));
    }

    let story = state
        .story_repository
        .create(
            user_id,
            payload.text.as_deref(),
            payload.media_url.as_deref(),
            STORY_TTL_HOURS,
        )
        .await?;

    Ok((StatusCode::CREATED, Json(story)))
}

/// Get all active stories, newest first
#[utoipa::path(
    get,
    path = "/api/stories",
    tag = "stories",
    responses(
        (status = 200, description = "Active stories", body = Vec<StoryResponse>),
        (status = 401, description = "Unauthorized")
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn get_stories(
    State(state): State<AppState>,
    AuthUser(_user_id): AuthUser,
) -> Result<impl IntoResponse> {
    let stories = state.story_repository.find_active().await?;

    Ok((StatusCode::OK, Json(stories)))
}
