use serde::{Deserialize, Serialize};
use crate::enums::analysis_result::AnalysisResult;
use crate::services::markdown_renderer::render_markdown;
use crate::structs::extracted_parameter::ExtractedParameter;

/// What the page shows after an analysis. A failed analysis shows only its error.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum AnalysisView {
    Complete {
        analysis: String,
        analysis_html: String,
        parameters: Vec<ExtractedParameter>,
        tokens_used: u32,
        cost_estimate: f64,
        cost_display: String,
    },
    Failed {
        error: String,
    },
}

impl AnalysisView {
    pub fn from_outcome(result: AnalysisResult, parameters: Vec<ExtractedParameter>) -> Self {
        match result {
            AnalysisResult::Success { analysis, tokens_used, cost_estimate } => Self::Complete {
                analysis_html: render_markdown(&analysis),
                analysis,
                parameters,
                tokens_used,
                cost_estimate,
                cost_display: format_cost(cost_estimate),
            },
            AnalysisResult::Failure { error } => Self::Failed { error },
        }
    }
}

pub fn format_cost(cost: f64) -> String {
    format!("${:.4}", cost)
}
