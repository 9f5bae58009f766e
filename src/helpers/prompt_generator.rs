use crate::prompts::strategy_analysis_prompt::{STRATEGY_ANALYSIS_SYSTEM_PROMPT, STRATEGY_ANALYSIS_USER_PREFIX};
use crate::structs::ai::chat_completion_request::ChatCompletionRequest;
use crate::structs::ai::chat_message::ChatMessage;
use crate::structs::config::ai_config::AiConfig;

pub fn generate_user_prompt(source_text: &str) -> String {
    format!("{}{}", STRATEGY_ANALYSIS_USER_PREFIX, source_text)
}

/// System instruction followed by the wrapped strategy source.
pub fn generate_messages(source_text: &str) -> Vec<ChatMessage> {
    vec![
        ChatMessage::system(STRATEGY_ANALYSIS_SYSTEM_PROMPT),
        ChatMessage::user(generate_user_prompt(source_text)),
    ]
}

pub fn generate_request(source_text: &str, ai: &AiConfig) -> ChatCompletionRequest {
    ChatCompletionRequest {
        model: ai.model.clone(),
        messages: generate_messages(source_text),
        max_tokens: ai.max_tokens,
        temperature: ai.temperature,
    }
}
