use std::sync::Arc;

use crate::{
    comment::comment_repository::CommentRepository,
    message::message_service::MessageService,
    post::post_repository::PostRepository,
    story::story_repository::StoryRepository,
    user::{user_repository::UserRepository, user_service::UserService},
    websocket::ConnectionManager,
};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub ws_connections: ConnectionManager,
    pub user_repository: UserRepository,
    pub post_repository: PostRepository,
    pub comment_repository: CommentRepository,
    pub story_repository: StoryRepository,
    pub user_service: UserService,
    pub message_service: MessageService,
}

#[derive(Clone)]
pub struct Config {
    pub jwt_secret: String,
    pub jwt_expiration_hours: i64,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            jwt_secret: std::env::var("JWT_SECRET").expect("JWT_SECRET must be set"),
            jwt_expiration_hours: std::env::var("JWT_EXPIRATION_HOURS")
                .unwrap_or_else(|_| "24".to_string())
                .parse()
                .expect("JWT_EXPIRATION_HOURS must be a number"),
        }
    }
}
