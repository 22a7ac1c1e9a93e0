pub mod post_dto;
pub mod post_handlers;
pub mod post_models;
pub mod post_repository;

pub use post_models::Post;
pub use post_repository::PostRepository;
