use anyhow::Result;

use super::types::message::Message;

/// A text-completion backend. One call per user turn, exactly one reply,
/// no streaming and no retry.
pub trait CompletionProvider {
    /// `model` is the deployment the request is routed to; `messages` is the
    /// full transcript in order, system instruction included.
    fn complete(&self, model: &str, messages: &[Message]) -> Result<String>;
}

/// An image-generation backend. One call per detected image request,
/// returning the URL of a single hosted image.
pub trait ImageProvider {
    fn generate(&self, model: &str, prompt: &str, size: &str) -> Result<String>;
}
