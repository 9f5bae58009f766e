use async_trait::async_trait;
use reqwest::Client;

use crate::enums::ai_provider_error::AiProviderError;
use crate::structs::ai::chat_completion::ChatCompletion;
use crate::structs::ai::chat_completion_request::ChatCompletionRequest;
use crate::structs::ai::openai::openai_error_body::OpenAIErrorBody;
use crate::structs::ai::openai::openai_message::OpenAIMessage;
use crate::structs::ai::openai::openai_request::OpenAIRequest;
use crate::structs::ai::openai::openai_response::OpenAIResponse;
use crate::traits::ai_provider::AiProvider;

#[derive(Clone)]
pub struct OpenAIProvider {
    api_key: String,
    base_url: String,
    client: Client,
}

impl OpenAIProvider {
    pub fn new(api_key: String, base_url: String) -> Self {
        Self {
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    fn get_request(&self, request: &ChatCompletionRequest) -> OpenAIRequest {
        OpenAIRequest {
            model: request.model.clone(),
            messages: request.messages.iter().map(OpenAIMessage::from).collect(),
            max_tokens: Some(request.max_tokens),
            temperature: Some(request.temperature),
            stream: false,
        }
    }

    async fn make_request(&self, url: String, request_body: OpenAIRequest) -> Result<reqwest::Response, AiProviderError> {
        log::info!("📦 Request model: {}", request_body.model);

        self.client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .header("Accept", "application/json")
            .json(&request_body)
            .send()
            .await
            .map_err(|e| AiProviderError::NetworkError(e.to_string()))
    }

    fn into_completion(response: OpenAIResponse) -> Result<ChatCompletion, AiProviderError> {
        let text = response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| AiProviderError::SerializationError("No content in response".to_string()))?;

        let total_tokens = response
            .usage
            .map(|usage| usage.total_tokens)
            .ok_or_else(|| AiProviderError::SerializationError("No usage in response".to_string()))?;

        Ok(ChatCompletion { text, total_tokens })
    }
}

#[async_trait]
impl AiProvider for OpenAIProvider {
    async fn chat(&self, request: ChatCompletionRequest) -> Result<ChatCompletion, AiProviderError> {
        let url = format!("{}/chat/completions", self.base_url);
        let request_body = self.get_request(&request);

        let response = self.make_request(url, request_body).await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());

            log::error!("❌ OpenAI API Error Response: {}", error_text);

            return Err(AiProviderError::from_status(
                status.as_u16(),
                OpenAIErrorBody::describe(&error_text),
            ));
        }

        let body: OpenAIResponse = response
            .json()
            .await
            .map_err(|e| AiProviderError::SerializationError(e.to_string()))?;

        Self::into_completion(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structs::ai::chat_message::ChatMessage;

    #[test]
    fn test_request_body_shape() {
        let provider = OpenAIProvider::new("sk-test".to_string(), "https://api.openai.com/v1/".to_string());
        let request = ChatCompletionRequest {
            model: "gpt-4".to_string(),
            messages: vec![ChatMessage::system("be brief"), ChatMessage::user("hello")],
            max_tokens: 1500,
            temperature: 0.3,
        };

        let body = serde_json::to_value(provider.get_request(&request)).unwrap();

        assert_eq!(provider.base_url, "https://api.openai.com/v1");
        assert_eq!(body["model"], "gpt-4");
        assert_eq!(body["max_tokens"], 1500);
        assert_eq!(body["stream"], false);
        assert_eq!(body["messages"][0]["role"], "system");
        assert_eq!(body["messages"][1]["role"], "user");
        assert_eq!(body["messages"][1]["content"], "hello");
    }

    #[test]
    fn test_response_without_usage_is_rejected() {
        let response: OpenAIResponse = serde_json::from_str(
            r#"{"choices":[{"index":0,"message":{"role":"assistant","content":"hi"},"finish_reason":"stop"}]}"#,
        )
        .unwrap();

        assert!(matches!(
            OpenAIProvider::into_completion(response),
            Err(AiProviderError::SerializationError(_))
        ));
    }
}
