use serde::{Deserialize, Serialize};

/// Outcome of one completion call: the explanation with its usage, or the error alone.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum AnalysisResult {
    Success {
        analysis: String,
        tokens_used: u32,
        cost_estimate: f64,
    },
    Failure {
        error: String,
    },
}

impl AnalysisResult {
    pub fn success(analysis: String, tokens_used: u32, cost_per_token: f64) -> Self {
        Self::Success {
            analysis,
            tokens_used,
            cost_estimate: f64::from(tokens_used) * cost_per_token,
        }
    }

    pub fn failure(error: impl ToString) -> Self {
        Self::Failure {
            error: error.to_string(),
        }
    }
}
