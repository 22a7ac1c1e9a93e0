mod auth;
mod comment;
mod db;
mod error;
mod message;
mod middleware;
mod post;
mod routes;
mod state;
mod story;
mod user;
mod websocket;

use db::{create_pool, run_migrations};
use routes::create_router;
use state::{AppState, Config};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenv::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,mingle_backend=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Arc::new(Config::from_env());

    let database_url = std::env::var("DATABASE_URL")
        .map_err(|_| anyhow::anyhow!("DATABASE_URL environment variable is not set"))?;

    tracing::info!("Connecting to database...");
    let db = create_pool(&database_url).await?;

    tracing::info!("Running migrations...");
    run_migrations(&db).await?;

    // Presence registry, owned by the server and injected through AppState
    let ws_connections = websocket::ConnectionManager::new();

    // Repositories
    let user_repository = user::UserRepository::new(db.clone());
    let post_repository = post::PostRepository::new(db.clone());
    let comment_repository = comment::CommentRepository::new(db.clone());
    let story_repository = story::StoryRepository::new(db.clone());
    let message_repository = message::MessageRepository::new(db.clone());

    // Services
    let user_service = user::UserService::new(
        user_repository.clone(),
        config.jwt_secret.clone(),
        config.jwt_expiration_hours,
    );
    let message_service =
        message::MessageService::new(message_repository, ws_connections.clone());

    let state = AppState {
        config: config.clone(),
        ws_connections,
        user_repository,
        post_repository,
        comment_repository,
        story_repository: story_repository.clone(),
        user_service,
        message_service,
    };

    // Background sweep for expired stories; the scheduler handle must
    // outlive the server loop
    let _story_sweeper = story::start_story_sweeper(story_repository).await?;

    let app = create_router(state);

    let host = std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let port = std::env::var("PORT").unwrap_or_else(|_| "3000".to_string());
    let addr = format!("{}:{}", host, port);

    tracing::info!("Server starting on http://{}", addr);
    tracing::info!("Swagger UI available at http://{}/swagger-ui", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
