use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

use super::content::Content;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

/// A single transcript entry: one role, one content value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub created: i64,
    pub content: Content,
}

impl Message {
    pub fn new(role: Role, content: Content) -> Self {
        Self {
            role,
            created: SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .unwrap_or_default()
                .as_secs() as i64,
            content,
        }
    }

    pub fn system(text: &str) -> Self {
        Self::new(Role::System, Content::text(text))
    }

    pub fn user(text: &str) -> Self {
        Self::new(Role::User, Content::text(text))
    }

    pub fn assistant<S: Into<String>>(text: S) -> Self {
        Self::new(Role::Assistant, Content::text(text))
    }

    pub fn assistant_image<S: Into<String>, T: Into<String>>(url: S, caption: T) -> Self {
        Self::new(Role::Assistant, Content::image(url, caption))
    }

    pub fn text(&self) -> &str {
        self.content.prompt_text()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn test_user_message() {
        let message = Message::user("abcd");
        assert!(matches!(message.role, Role::User));
        assert_eq!(message.text(), "abcd");
    }

    #[test]
    fn test_assistant_image_message() {
        let message = Message::assistant_image("https://example.com/img.png", "a cat");
        let image = message.content.as_image().unwrap();
        assert_eq!(image.url, "https://example.com/img.png");
        assert_eq!(image.caption, "a cat");
        assert_eq!(message.text(), "https://example.com/img.png");
    }

    #[test]
    fn test_text_starting_with_http_stays_text() {
        // The tag decides the kind; the URL-ish prefix does not.
        let message = Message::assistant("http://example.com is a reserved domain");
        assert!(message.content.as_image().is_none());
        assert!(message.content.as_text().is_some());
    }

    #[test]
    fn test_serialization() {
        let message = Message::assistant_image("https://example.com/img.png", "a cat");
        let serialized = serde_json::to_string(&message).unwrap();
        let deserialized: Message = serde_json::from_str(&serialized).unwrap();
        assert_eq!(message, deserialized);

        let json_value: Value = serde_json::from_str(&serialized).unwrap();
        assert_eq!(json_value["role"], "assistant");
        assert_eq!(json_value["content"]["type"], "image");
        assert!(json_value.get("created").is_some());
    }
}
