use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AiProviderError {
    #[error("API Error: {0}")]
    ApiError(String),

    #[error("Network Error: {0}")]
    NetworkError(String),

    #[error("Serialization Error: {0}")]
    SerializationError(String),

    #[error("Authentication Error: {0}")]
    AuthenticationError(String),

    #[error("Rate limit exceeded: {0}")]
    RateLimitError(String),
}

impl AiProviderError {
    /// Maps a non-success HTTP status from the completion service to an error variant.
    pub fn from_status(status: u16, body: String) -> Self {
        match status {
            401 | 403 => Self::AuthenticationError(body),
            429 => Self::RateLimitError(body),
            _ => Self::ApiError(format!("HTTP {}: {}", status, body)),
        }
    }
}
