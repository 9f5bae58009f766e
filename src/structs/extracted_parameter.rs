use serde::{Deserialize, Serialize};
use crate::config::constants::NOT_FOUND_SENTINEL;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExtractedParameter {
    pub name: String,
    #[serde(rename = "type")]
    pub param_type: String,
    pub default_value: String,
}

impl ExtractedParameter {
    pub fn new(name: String, param_type: String, default_value: Option<String>) -> Self {
        Self {
            name,
            param_type,
            default_value: default_value.unwrap_or_else(|| NOT_FOUND_SENTINEL.to_string()),
        }
    }

    pub fn has_default(&self) -> bool {
        self.default_value != NOT_FOUND_SENTINEL
    }
}
