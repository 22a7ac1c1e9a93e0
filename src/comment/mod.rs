pub mod comment_dto;
pub mod comment_handlers;
pub mod comment_models;
pub mod comment_repository;

pub use comment_models::Comment;
pub use comment_repository::CommentRepository;
