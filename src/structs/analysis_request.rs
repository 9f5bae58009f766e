use serde::{Deserialize, Serialize};

/// Strategy source submitted for one analysis. Never blank.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AnalysisRequest {
    source_text: String,
}

impl AnalysisRequest {
    /// Returns `None` for empty or whitespace-only input.
    pub fn new(source_text: impl Into<String>) -> Option<Self> {
        let source_text = source_text.into();
        if source_text.trim().is_empty() {
            return None;
        }
        Some(Self { source_text })
    }

    pub fn source_text(&self) -> &str {
        &self.source_text
    }
}
