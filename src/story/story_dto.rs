use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateStoryRequest {
    #[validate(length(min = 1, message = "story text must not be empty"))]
    pub text: Option<String>,
    #[validate(url(message = "media must be a valid URL"))]
    pub media_url: Option<String>,
}

impl CreateStoryRequest {
    /// A story needs at least one of text or media.
    pub fn has_content(&self) -> bool {
        self.text.is_some() || self.media_url.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn story_without_text_or_media_has_no_content() {
        let payload = CreateStoryRequest {
            text: None,
            media_url: None,
        };
        assert!(!payload.has_content());
    }

    #[test]
    fn text_only_story_is_valid() {
        let payload = CreateStoryRequest {
            text: Some("good morning".to_string()),
            media_url: None,
        };
        assert!(payload.has_content());
        assert!(payload.validate().is_ok());
    }
}
