use std::sync::Arc;
use crate::enums::analysis_result::AnalysisResult;
use crate::helpers::prompt_generator;
use crate::services::parameter_extractor::ParameterExtractor;
use crate::structs::analysis_request::AnalysisRequest;
use crate::structs::analysis_view::AnalysisView;
use crate::structs::config::ai_config::AiConfig;
use crate::structs::extracted_parameter::ExtractedParameter;
use crate::traits::ai_provider::AiProvider;

pub struct StrategyExplainer {
    ai_provider: Arc<dyn AiProvider>,
    ai_config: AiConfig,
    extractor: ParameterExtractor,
}

impl StrategyExplainer {
    pub fn new(ai_provider: Arc<dyn AiProvider>, ai_config: AiConfig) -> Self {
        Self {
            ai_provider,
            ai_config,
            extractor: ParameterExtractor::default(),
        }
    }

    pub fn with_extractor(mut self, extractor: ParameterExtractor) -> Self {
        self.extractor = extractor;
        self
    }

    /// One completion call. Every provider failure becomes `AnalysisResult::Failure`;
    /// nothing is retried.
    pub async fn analyze_strategy(&self, request: &AnalysisRequest) -> AnalysisResult {
        let completion_request = prompt_generator::generate_request(request.source_text(), &self.ai_config);

        match self.ai_provider.chat(completion_request).await {
            Ok(completion) => {
                let result = AnalysisResult::success(
                    completion.text,
                    completion.total_tokens,
                    self.ai_config.cost_per_token,
                );
                if let AnalysisResult::Success { tokens_used, cost_estimate, .. } = &result {
                    log::info!("🧠 Analysis complete: {} tokens, ${:.4}", tokens_used, cost_estimate);
                }
                result
            }
            Err(e) => {
                log::error!("❌ Analysis failed: {}", e);
                AnalysisResult::failure(e)
            }
        }
    }

    pub fn extract_parameters(&self, request: &AnalysisRequest) -> Vec<ExtractedParameter> {
        self.extractor.extract_parameters(request.source_text())
    }

    /// Runs the completion call and the extraction side by side and shapes the view.
    pub async fn explain(&self, request: &AnalysisRequest) -> AnalysisView {
        let (result, parameters) = tokio::join!(
            self.analyze_strategy(request),
            async { self.extract_parameters(request) },
        );

        log::debug!(
            "⚙️ Extracted {} parameters ({} with defaults)",
            parameters.len(),
            parameters.iter().filter(|p| p.has_default()).count()
        );
        AnalysisView::from_outcome(result, parameters)
    }
}
