use std::sync::{Arc, Mutex};

use anyhow::{anyhow, Result};

use super::base::{CompletionProvider, ImageProvider};
use super::types::message::Message;

/// A completion backend that returns pre-configured outcomes, in order.
pub struct MockCompletionProvider {
    replies: Mutex<Vec<Result<String, String>>>,
}

impl MockCompletionProvider {
    pub fn new(replies: Vec<Result<String, String>>) -> Self {
        Self {
            replies: Mutex::new(replies),
        }
    }

    pub fn replying(replies: &[&str]) -> Self {
        Self::new(replies.iter().map(|r| Ok(r.to_string())).collect())
    }

    pub fn failing(detail: &str) -> Self {
        Self::new(vec![Err(detail.to_string())])
    }
}

impl CompletionProvider for MockCompletionProvider {
    fn complete(&self, _model: &str, _messages: &[Message]) -> Result<String> {
        let mut replies = self.replies.lock().unwrap();
        if replies.is_empty() {
            return Err(anyhow!("no scripted reply left"));
        }
        replies.remove(0).map_err(|detail| anyhow!(detail))
    }
}

/// An image backend that records every prompt it receives and returns
/// pre-configured outcomes, in order. `prompt_log` hands out a shared
/// handle so tests can inspect the prompts after the provider is boxed
/// into a session.
pub struct MockImageProvider {
    outcomes: Mutex<Vec<Result<String, String>>>,
    prompts: Arc<Mutex<Vec<String>>>,
}

impl MockImageProvider {
    pub fn new(outcomes: Vec<Result<String, String>>) -> Self {
        Self {
            outcomes: Mutex::new(outcomes),
            prompts: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn returning(url: &str) -> Self {
        Self::new(vec![Ok(url.to_string())])
    }

    pub fn failing(detail: &str) -> Self {
        Self::new(vec![Err(detail.to_string())])
    }

    pub fn prompt_log(&self) -> Arc<Mutex<Vec<String>>> {
        Arc::clone(&self.prompts)
    }
}

impl ImageProvider for MockImageProvider {
    fn generate(&self, _model: &str, prompt: &str, _size: &str) -> Result<String> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        let mut outcomes = self.outcomes.lock().unwrap();
        if outcomes.is_empty() {
            return Err(anyhow!("no scripted outcome left"));
        }
        outcomes.remove(0).map_err(|detail| anyhow!(detail))
    }
}
