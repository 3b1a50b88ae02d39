use serde::{Deserialize, Serialize};

// Text content
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Text {
    pub text: String,
}

// A hosted image, kept by reference. The caption is the phrase the image
// was generated from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Image {
    pub url: String,
    pub caption: String,
}

/// Content carried by a message. Image replies are tagged explicitly rather
/// than detected by inspecting the text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Content {
    Text(Text),
    Image(Image),
}

impl Content {
    pub fn text<S: Into<String>>(text: S) -> Self {
        Content::Text(Text { text: text.into() })
    }

    pub fn image<S: Into<String>, T: Into<String>>(url: S, caption: T) -> Self {
        Content::Image(Image {
            url: url.into(),
            caption: caption.into(),
        })
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Content::Text(text) => Some(&text.text),
            _ => None,
        }
    }

    pub fn as_image(&self) -> Option<&Image> {
        match self {
            Content::Image(image) => Some(image),
            _ => None,
        }
    }

    /// The string sent to the completion API for this content. An image is
    /// represented on the wire by its URL, matching how it is stored.
    pub fn prompt_text(&self) -> &str {
        match self {
            Content::Text(text) => &text.text,
            Content::Image(image) => &image.url,
        }
    }
}
