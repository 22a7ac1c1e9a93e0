pub mod story_dto;
pub mod story_handlers;
pub mod story_models;
pub mod story_repository;
pub mod story_sweeper;

pub use story_models::Story;
pub use story_repository::StoryRepository;
pub use story_sweeper::start_story_sweeper;
