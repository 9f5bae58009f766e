use async_trait::async_trait;
use crate::enums::ai_provider_error::AiProviderError;
use crate::structs::ai::chat_completion::ChatCompletion;
use crate::structs::ai::chat_completion_request::ChatCompletionRequest;

/// A remote text-generation service that answers one chat completion per call.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AiProvider: Send + Sync {

    async fn chat(&self, request: ChatCompletionRequest) -> Result<ChatCompletion, AiProviderError>;
}
