use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenAIErrorBody {
    pub error: OpenAIErrorDetail,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenAIErrorDetail {
    pub message: String,
    #[serde(rename = "type", default)]
    pub error_type: Option<String>,
}

impl OpenAIErrorBody {
    /// Pulls `error.message` out of an error response, falling back to the raw body.
    pub fn describe(raw: &str) -> String {
        match serde_json::from_str::<OpenAIErrorBody>(raw) {
            Ok(body) => match body.error.error_type {
                Some(error_type) => format!("{}: {}", error_type, body.error.message),
                None => body.error.message,
            },
            Err(_) => raw.to_string(),
        }
    }
}
