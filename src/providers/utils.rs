use anyhow::Result;
use serde_json::{json, Value};

use super::types::message::Message;

/// Project transcript messages to the chat-completions message
/// specification: `{role, content}` pairs in original order. Image
/// messages are sent as their stored URL string.
pub fn messages_to_chat_spec(messages: &[Message]) -> Vec<Value> {
    messages
        .iter()
        .map(|message| {
            json!({
                "role": message.role,
                "content": message.content.prompt_text(),
            })
        })
        .collect()
}

#[derive(Debug, thiserror::Error)]
#[error("malformed completion response: {0}")]
pub struct MalformedResponseError(pub String);

/// Pull the single reply text out of a chat-completions response body.
pub fn reply_text_from_response(response: &Value) -> Result<String> {
    response["choices"][0]["message"]["content"]
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| MalformedResponseError(response.to_string()).into())
}

/// Extract the human-readable detail from an API error body. Azure wraps it
/// as `{"error": {"message": ...}}`; anything else is reported verbatim.
pub fn api_error_detail(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|value| {
            value
                .get("error")
                .and_then(|e| e.get("message"))
                .and_then(|m| m.as_str())
                .map(str::to_string)
        })
        .unwrap_or_else(|| body.to_string())
}
