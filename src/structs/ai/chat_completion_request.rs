use serde::{Deserialize, Serialize};
use crate::structs::ai::chat_message::ChatMessage;

/// Provider-neutral completion request: model, ordered messages and sampling limits.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub max_tokens: u32,
    pub temperature: f32,
}
