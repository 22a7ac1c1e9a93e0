use crate::{
    comment::{
        comment_dto::CreateCommentRequest,
        comment_handlers,
        comment_models::{Comment, CommentResponse},
    },
    message::{
        message_dto::{ConversationSummary, SendMessageRequest},
        message_handlers,
        message_models::{Conversation, Message},
    },
    middleware::auth_middleware,
    post::{
        post_dto::{BookmarkResponse, CreatePostRequest, LikeResponse, UpdatePostRequest},
        post_handlers,
        post_models::{Post, PostResponse},
    },
    state::AppState,
    story::{
        story_dto::CreateStoryRequest,
        story_handlers,
        story_models::{Story, StoryResponse},
    },
    user::{
        user_dto::{
            AuthResponse, ChangeAvatarRequest, FollowResponse, LoginRequest, RegisterRequest,
            UpdateProfileRequest,
        },
        user_handlers,
        user_models::{User, UserResponse},
    },
};
use axum::{
    http::{
        header::{AUTHORIZATION, CONTENT_TYPE},
        Method,
    },
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::user::user_handlers::register,
        crate::user::user_handlers::login,
        crate::user::user_handlers::get_current_user,
        crate::user::user_handlers::update_profile,
        crate::user::user_handlers::change_avatar,
        crate::user::user_handlers::search_users,
        crate::user::user_handlers::get_users,
        crate::user::user_handlers::get_user,
        crate::user::user_handlers::follow_unfollow_user,
        crate::post::post_handlers::create_post,
        crate::post::post_handlers::get_post,
        crate::post::post_handlers::get_posts,
        crate::post::post_handlers::get_following_posts,
        crate::post::post_handlers::get_user_posts,
        crate::post::post_handlers::update_post,
        crate::post::post_handlers::delete_post,
        crate::post::post_handlers::like_post,
        crate::post::post_handlers::bookmark_post,
        crate::post::post_handlers::get_bookmarks,
        crate::comment::comment_handlers::create_comment,
        crate::comment::comment_handlers::get_post_comments,
        crate::comment::comment_handlers::delete_comment,
        crate::story::story_handlers::create_story,
        crate::story::story_handlers::get_stories,
        crate::message::message_handlers::send_message,
        crate::message::message_handlers::get_messages,
        crate::message::message_handlers::get_conversations,
    ),
    components(
        schemas(
            RegisterRequest,
            LoginRequest,
            AuthResponse,
            UpdateProfileRequest,
            ChangeAvatarRequest,
            FollowResponse,
            CreatePostRequest,
            UpdatePostRequest,
            LikeResponse,
            BookmarkResponse,
            CreateCommentRequest,
            CreateStoryRequest,
            SendMessageRequest,
            ConversationSummary,
            User,
            UserResponse,
            Post,
            PostResponse,
            Comment,
            CommentResponse,
            Story,
            StoryResponse,
            Conversation,
            Message,
        )
    ),
    tags(
        (name = "users", description = "Account and profile endpoints"),
        (name = "posts", description = "Post, like and bookmark endpoints"),
        (name = "comments", description = "Post comment endpoints"),
        (name = "stories", description = "Ephemeral story endpoints"),
        (name = "messages", description = "Direct messaging endpoints")
    ),
    modifiers(&SecurityAddon)
)]
struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                utoipa::openapi::security::SecurityScheme::Http(
                    utoipa::openapi::security::Http::new(
                        utoipa::openapi::security::HttpAuthScheme::Bearer,
                    ),
                ),
            )
        }
    }
}

pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([AUTHORIZATION, CONTENT_TYPE]);

    // Public routes (no auth required)
    let public_user_routes = Router::new()
        .route("/register", post(user_handlers::register))
        .route("/login", post(user_handlers::login));

    // Protected routes (auth required)
    let user_routes = Router::new()
        .route(
            "/me",
            get(user_handlers::get_current_user).patch(user_handlers::update_profile),
        )
        .route("/avatar", post(user_handlers::change_avatar))
        .route("/search", get(user_handlers::search_users))
        .route("/bookmarks", get(post_handlers::get_bookmarks))
        .route("/", get(user_handlers::get_users))
        .route("/:id", get(user_handlers::get_user))
        .route("/:id/follow", post(user_handlers::follow_unfollow_user))
        .route("/:id/posts", get(post_handlers::get_user_posts))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    let post_routes = Router::new()
        .route(
            "/",
            get(post_handlers::get_posts).post(post_handlers::create_post),
        )
        .route("/following", get(post_handlers::get_following_posts))
        .route(
            "/:id",
            get(post_handlers::get_post)
                .patch(post_handlers::update_post)
                .delete(post_handlers::delete_post),
        )
        .route("/:id/like", post(post_handlers::like_post))
        .route("/:id/bookmark", post(post_handlers::bookmark_post))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    let comment_routes = Router::new()
        .route(
            "/:id",
            post(comment_handlers::create_comment)
                .get(comment_handlers::get_post_comments)
                .delete(comment_handlers::delete_comment),
        )
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    let story_routes = Router::new()
        .route(
            "/",
            get(story_handlers::get_stories).post(story_handlers::create_story),
        )
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    let message_routes = Router::new()
        .route(
            "/:receiver_id",
            post(message_handlers::send_message).get(message_handlers::get_messages),
        )
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    let conversation_routes = Router::new()
        .route("/conversations", get(message_handlers::get_conversations))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    // WebSocket route (token accepted via query param)
    let ws_routes = Router::new()
        .route("/ws", get(crate::websocket::ws_handler))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    let api_routes = Router::new()
        .nest("/users", public_user_routes.merge(user_routes))
        .nest("/posts", post_routes)
        .nest("/comments", comment_routes)
        .nest("/stories", story_routes)
        .nest("/messages", message_routes)
        .merge(conversation_routes)
        .merge(ws_routes);

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
